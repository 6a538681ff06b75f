use harbor::{
    constants::MAX_RATE_BPS,
    error::{ ErrorCode, HarborResult },
    interfaces::OracleClient,
    math::{ accrue_simple, safe_math::SafeMath },
    utils::validate_amount,
    validate,
};
use soroban_sdk::{ Address, Env, String };

use crate::{
    events::DirectStakeEvents,
    storage::{
        get_position,
        get_totals,
        get_user_validators,
        save_position,
        save_totals,
        utils::transfer_token,
        Config,
    },
};

/// Pays externally reported rewards out of the reserve. Principal is never touched.
pub fn pay(env: &Env, config: &Config, user: &Address, amount: i128) -> HarborResult<i128> {
    validate_amount(env, amount)?;

    let mut totals = get_totals(env);
    validate!(
        env,
        totals.reward_reserve >= amount,
        ErrorCode::InsufficientRewardReserve,
        "Reward {} exceeds reserve {}",
        amount,
        totals.reward_reserve
    )?;
    totals.reward_reserve = totals.reward_reserve.safe_sub(amount, env)?;
    save_totals(env, &totals);

    let now = env.ledger().timestamp();
    for validator_id in get_user_validators(env, user).iter() {
        if let Some(mut position) = get_position(env, user, &validator_id) {
            position.last_claim_initiated_at = now;
            save_position(env, user, &validator_id, &position);
        }
    }

    transfer_token(env, &config.stake_token, &env.current_contract_address(), user, amount);

    DirectStakeEvents::rewards_paid(env, user.clone(), amount);

    Ok(amount)
}

pub fn fund(env: &Env, config: &Config, funder: &Address, amount: i128) -> HarborResult<i128> {
    validate_amount(env, amount)?;

    transfer_token(env, &config.stake_token, funder, &env.current_contract_address(), amount);

    let mut totals = get_totals(env);
    totals.reward_reserve = totals.reward_reserve.safe_add(amount, env)?;
    save_totals(env, &totals);

    DirectStakeEvents::rewards_funded(env, funder.clone(), amount, totals.reward_reserve);

    Ok(totals.reward_reserve)
}

/// Time based APR estimate for display. Payouts only ever use reported figures.
pub fn estimate(env: &Env, config: &Config, user: &Address, validator_id: &String) -> HarborResult<i128> {
    let Some(position) = get_position(env, user, validator_id) else {
        return Ok(0);
    };

    let apr_bps = OracleClient::new(env, &config.oracle).get_current_apr();
    validate!(env, apr_bps <= MAX_RATE_BPS, ErrorCode::ImplausibleRate, "Oracle APR {} bps", apr_bps)?;
    let since = position.opened_at.max(position.last_claim_initiated_at);
    let elapsed = env.ledger().timestamp().saturating_sub(since);

    accrue_simple(env, position.amount, apr_bps, elapsed)
}
