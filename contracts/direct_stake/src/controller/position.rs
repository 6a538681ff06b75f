use harbor::{
    constants::{ MAX_UNBONDING_PERIOD, MIN_MIGRATION_DELAY, MIN_UNBONDING_PERIOD },
    error::{ ErrorCode, HarborResult },
    interfaces::OracleClient,
    math::{ mul_div_floor, safe_math::SafeMath },
    types::{ Position, UnstakeRequest, ValidatorStatus },
    utils::{ validate_amount, validate_validator_ref },
    validate,
};
use soroban_sdk::{ log, Address, Env, String };

use crate::{
    controller::validator,
    events::DirectStakeEvents,
    storage::{
        get_position,
        get_totals,
        get_unstake_request,
        get_user_validators,
        get_validator,
        has_unstake_request,
        remove_position,
        save_position,
        save_totals,
        save_unstake_request,
        save_user_validators,
        save_validator,
        utils::transfer_token,
        Config,
    },
};

pub fn attach_user_validator(env: &Env, user: &Address, validator: &String) {
    let mut validators = get_user_validators(env, user);
    if !validators.contains(validator) {
        validators.push_back(validator.clone());
        save_user_validators(env, user, &validators);
    }
}

pub fn detach_user_validator(env: &Env, user: &Address, validator: &String) {
    let mut validators = get_user_validators(env, user);
    if let Some(index) = validators.first_index_of(validator) {
        validators.remove(index);
        save_user_validators(env, user, &validators);
    }
}

/// Sum of the active (not yet unbonding) principal of `user` across validators
pub fn user_principal(env: &Env, user: &Address) -> HarborResult<i128> {
    let mut principal: i128 = 0;
    for validator in get_user_validators(env, user).iter() {
        if let Some(position) = get_position(env, user, &validator) {
            principal = principal.safe_add(position.amount, env)?;
        }
    }
    Ok(principal)
}

pub fn stake(
    env: &Env,
    user: &Address,
    amount: i128,
    validator_id: &String,
    external_amount: i128
) -> HarborResult<Position> {
    validate_amount(env, amount)?;
    validate!(env, external_amount >= 0, ErrorCode::InvalidAmount)?;
    validate_validator_ref(env, validator_id)?;

    let mut validator = validator::load(env, validator_id)?;
    validate!(
        env,
        validator.status == ValidatorStatus::Enabled,
        ErrorCode::ValidatorNotEnabled,
        "Validator status {} does not accept stake",
        validator.status as u32
    )?;

    let mut position = match get_position(env, user, validator_id) {
        Some(position) => {
            validate!(env, !position.in_unstake, ErrorCode::UnstakeInProcess)?;
            position
        }
        None => {
            validator.depositor_count = validator.depositor_count.safe_add(1, env)?;
            attach_user_validator(env, user, validator_id);
            Position::new(env.ledger().timestamp())
        }
    };

    position.amount = position.amount.safe_add(amount, env)?;
    position.external_amount = position.external_amount.safe_add(external_amount, env)?;
    validator.total_delegated = validator.total_delegated.safe_add(amount, env)?;

    let mut totals = get_totals(env);
    totals.total_principal = totals.total_principal.safe_add(amount, env)?;

    save_position(env, user, validator_id, &position);
    save_validator(env, &validator);
    save_totals(env, &totals);

    DirectStakeEvents::staked(env, user.clone(), validator_id.clone(), amount, external_amount);

    Ok(position)
}

pub fn request_unstake(
    env: &Env,
    config: &Config,
    user: &Address,
    amount: i128,
    validator_id: &String,
    id: u128
) -> HarborResult<UnstakeRequest> {
    validate_amount(env, amount)?;
    validate!(env, !has_unstake_request(env, id), ErrorCode::DuplicateRequest)?;

    let mut position = get_position(env, user, validator_id).ok_or(ErrorCode::NoPosition)?;
    validate!(env, !position.in_unstake, ErrorCode::UnstakeInProcess)?;
    validate!(
        env,
        position.amount >= amount,
        ErrorCode::InsufficientPosition,
        "Unstake {} exceeds position {}",
        amount,
        position.amount
    )?;

    let now = env.ledger().timestamp();
    validate!(
        env,
        now >= position.opened_at.saturating_add(config.min_stake_duration),
        ErrorCode::IntervalNotElapsed,
        "Position opened at {} is younger than the minimum stake duration",
        position.opened_at
    )?;

    let unbonding_period = OracleClient::new(env, &config.oracle).get_unbonding_period();
    validate!(
        env,
        (MIN_UNBONDING_PERIOD..=MAX_UNBONDING_PERIOD).contains(&unbonding_period),
        ErrorCode::ImplausibleUnbondingPeriod,
        "Oracle unbonding period {} out of range",
        unbonding_period
    )?;
    let unlock_time = now.safe_add(unbonding_period, env)?;

    let external_released = mul_div_floor(env, position.external_amount, amount, position.amount)?;

    position.amount = position.amount.safe_sub(amount, env)?;
    position.external_amount = position.external_amount.safe_sub(external_released, env)?;
    position.in_unstake = true;
    position.unstake_initiated_at = now;
    position.pending_unstake_amount = amount;
    position.pending_unstake_id = Some(id);

    let mut validator = validator::load(env, validator_id)?;
    validator.total_delegated = validator.total_delegated.safe_sub(amount, env)?;

    let request = UnstakeRequest {
        id,
        owner: user.clone(),
        validator: validator_id.clone(),
        amount,
        requested_at: now,
        unlock_time,
        claimed: false,
    };

    save_position(env, user, validator_id, &position);
    save_validator(env, &validator);
    save_unstake_request(env, &request);

    DirectStakeEvents::unstake_requested(
        env,
        user.clone(),
        validator_id.clone(),
        id,
        amount,
        unlock_time
    );

    Ok(request)
}

pub fn claim_unstake(env: &Env, config: &Config, user: &Address, id: u128) -> HarborResult<i128> {
    let mut request = get_unstake_request(env, id).ok_or(ErrorCode::UnknownRequest)?;
    validate!(env, request.owner == *user, ErrorCode::RequestNotOwned)?;
    validate!(env, !request.claimed, ErrorCode::AlreadyClaimed)?;

    let now = env.ledger().timestamp();
    validate!(
        env,
        now >= request.unlock_time,
        ErrorCode::StillUnbonding,
        "Unstake unlocks at {}, now {}",
        request.unlock_time,
        now
    )?;

    request.claimed = true;
    save_unstake_request(env, &request);

    // the position may be gone (emergency withdrawal) or unbonding under a newer request
    let own_position = get_position(env, user, &request.validator).filter(
        |position| position.pending_unstake_id == Some(id)
    );
    if let Some(mut position) = own_position {
        position.in_unstake = false;
        position.unstake_initiated_at = 0;
        position.pending_unstake_amount = 0;
        position.pending_unstake_id = None;

        if position.is_empty() {
            close_position(env, user, &request.validator)?;
        } else {
            save_position(env, user, &request.validator, &position);
        }
    }

    let mut totals = get_totals(env);
    totals.total_principal = totals.total_principal.safe_sub(request.amount, env)?;
    save_totals(env, &totals);

    transfer_token(env, &config.stake_token, &env.current_contract_address(), user, request.amount);

    DirectStakeEvents::unstake_claimed(env, user.clone(), id, request.amount);

    Ok(request.amount)
}

/// Drops an emptied position and its depositor slot on the validator
fn close_position(env: &Env, user: &Address, validator_id: &String) -> HarborResult {
    remove_position(env, user, validator_id);
    detach_user_validator(env, user, validator_id);

    if let Some(mut validator) = get_validator(env, validator_id) {
        validator.depositor_count = validator.depositor_count.safe_sub(1, env)?;
        save_validator(env, &validator);
    }

    Ok(())
}

pub fn migrate(env: &Env, user: &Address, from: &String, to: &String) -> HarborResult<Position> {
    validate!(env, from != to, ErrorCode::SameValidator)?;

    let mut source = validator::load(env, from)?;
    validate!(env, source.status == ValidatorStatus::Deprecated, ErrorCode::ValidatorNotDeprecated)?;

    let mut target = validator::load(env, to)?;
    validate!(env, target.status == ValidatorStatus::Enabled, ErrorCode::ValidatorNotEnabled)?;

    let position = get_position(env, user, from).ok_or(ErrorCode::NoPosition)?;
    validate!(env, !position.in_unstake, ErrorCode::UnstakeInProcess)?;
    validate!(env, position.amount > 0, ErrorCode::NoPosition)?;

    let now = env.ledger().timestamp();
    validate!(
        env,
        now >= position.opened_at.saturating_add(MIN_MIGRATION_DELAY),
        ErrorCode::IntervalNotElapsed
    )?;

    let mut migrated = match get_position(env, user, to) {
        Some(existing) => {
            validate!(env, !existing.in_unstake, ErrorCode::UnstakeInProcess)?;
            existing
        }
        None => {
            target.depositor_count = target.depositor_count.safe_add(1, env)?;
            attach_user_validator(env, user, to);
            Position::new(now)
        }
    };

    migrated.amount = migrated.amount.safe_add(position.amount, env)?;
    migrated.external_amount = migrated.external_amount.safe_add(position.external_amount, env)?;
    migrated.opened_at = now;
    migrated.last_claim_initiated_at = migrated.last_claim_initiated_at.max(
        position.last_claim_initiated_at
    );

    source.total_delegated = source.total_delegated.safe_sub(position.amount, env)?;
    source.depositor_count = source.depositor_count.safe_sub(1, env)?;
    target.total_delegated = target.total_delegated.safe_add(position.amount, env)?;

    remove_position(env, user, from);
    detach_user_validator(env, user, from);
    save_position(env, user, to, &migrated);
    save_validator(env, &source);
    save_validator(env, &target);

    log!(env, "Migrated {} between validators", position.amount);

    DirectStakeEvents::migrated(env, user.clone(), from.clone(), to.clone(), position.amount);

    Ok(migrated)
}
