use harbor::{ error::{ ErrorCode, HarborResult }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ log, Address, Env, Vec };

use crate::{
    events::DirectStakeEvents,
    storage::{
        get_emergency_intent,
        get_position,
        get_totals,
        get_user_validators,
        get_validator,
        remove_emergency_intent,
        remove_position,
        save_emergency_intent,
        save_totals,
        save_user_validators,
        save_validator,
        utils::transfer_token,
        Config,
    },
};

pub fn set_intent(env: &Env, user: &Address) -> HarborResult {
    validate!(
        env,
        !get_user_validators(env, user).is_empty(),
        ErrorCode::NoPosition,
        "Emergency withdrawal requested without any position"
    )?;

    let now = env.ledger().timestamp();
    save_emergency_intent(env, user, now);

    DirectStakeEvents::emergency_intent(env, user.clone(), now);

    Ok(())
}

/// Closes every position of `user` regardless of unbonding and pays out the aggregate.
///
/// Unstake requests already queued stay claimable on their own.
pub fn complete(env: &Env, config: &Config, user: &Address) -> HarborResult<i128> {
    validate!(env, get_emergency_intent(env, user).is_some(), ErrorCode::NoEmergencyIntent)?;

    let mut total: i128 = 0;

    for validator_id in get_user_validators(env, user).iter() {
        let Some(position) = get_position(env, user, &validator_id) else {
            continue;
        };

        if let Some(mut validator) = get_validator(env, &validator_id) {
            validator.total_delegated = validator.total_delegated.safe_sub(position.amount, env)?;
            validator.depositor_count = validator.depositor_count.safe_sub(1, env)?;
            save_validator(env, &validator);
        }

        total = total.safe_add(position.amount, env)?;
        remove_position(env, user, &validator_id);
    }

    save_user_validators(env, user, &Vec::new(env));
    remove_emergency_intent(env, user);

    let mut totals = get_totals(env);
    totals.total_principal = totals.total_principal.safe_sub(total, env)?;
    save_totals(env, &totals);

    if total > 0 {
        transfer_token(env, &config.stake_token, &env.current_contract_address(), user, total);
    } else {
        log!(env, "Emergency withdrawal closed positions holding no principal");
    }

    DirectStakeEvents::emergency_withdrawn(env, user.clone(), total);

    Ok(total)
}
