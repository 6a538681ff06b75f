use harbor::{
    access::{ self, Capability },
    constants::{ DEFAULT_MIN_CLAIM_INTERVAL, DEFAULT_REWARD_CEILING_BPS, MAX_REWARD_CEILING_BPS },
    error::{ ErrorCode, HarborResult },
    interfaces::{ OracleClient, StakeLedgerClient, VaultClient },
    math::{ apply_bps, safe_math::SafeMath },
    request_id::{ self, RequestId },
    types::{ Position, RequestStatus, RequestType, WithdrawOutcome },
    utils::{ bump_instance, validate_amount, validate_validator_ref, ReentrancyGuard },
    validate,
    validate_bps,
};
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    Address,
    Env,
    String,
    Symbol,
    Vec,
};

use crate::{
    events::RouterEvents,
    requests::{ fulfill, lookup_request, next_request_id, open_request, record_request },
    router::RequestLedgerTrait,
    storage::{
        get_config,
        get_freeze_window,
        get_last_reward_claim,
        get_state,
        get_unbonding_end,
        remove_unbonding_end,
        save_config,
        save_freeze_window,
        save_last_reward_claim,
        save_state,
        save_unbonding_end,
        utils::{ is_initialized, set_initialized, transfer_token },
        Config,
        CorrelationRecord,
        FreezeWindow,
        State,
    },
};

contractmeta!(
    key = "Description",
    val = "Request router and correlation ledger for relayed native asset staking"
);

#[contract]
pub struct RequestLedger;

fn require_active(env: &Env) -> HarborResult {
    bump_instance(env);
    validate!(env, !get_state(env).paused, ErrorCode::OperationPaused, "Router is paused")
}

fn require_unfrozen(env: &Env) -> HarborResult {
    let window = get_freeze_window(env);
    validate!(
        env,
        !window.is_frozen(env.ledger().timestamp()),
        ErrorCode::FreezeWindowActive,
        "Withdrawals are frozen until {}",
        window.ends_at()
    )
}

fn check_reward_ceiling(env: &Env, config: &Config, user: &Address, amount: i128) -> HarborResult {
    let principal = StakeLedgerClient::new(env, &config.direct_stake).get_user_principal(user);
    let ceiling = apply_bps(env, principal, config.reward_ceiling_bps)?;

    validate!(
        env,
        amount <= ceiling,
        ErrorCode::RewardExceedsCeiling,
        "Reported reward {} is above the ceiling {}",
        amount,
        ceiling
    )
}

/// Clears the reported figure first, then pays it from the ledger reserve
fn pay_out_rewards(env: &Env, config: &Config, user: &Address) -> HarborResult<i128> {
    let cleared = OracleClient::new(env, &config.oracle).clear_user_claimable_rewards(
        &env.current_contract_address(),
        user
    );
    let paid = StakeLedgerClient::new(env, &config.direct_stake).pay_rewards(user, &cleared);
    save_last_reward_claim(env, user, env.ledger().timestamp());

    Ok(paid)
}

fn claim_rewards(env: &Env, config: &Config, user: &Address) -> HarborResult<i128> {
    let now = env.ledger().timestamp();
    if let Some(last_claim) = get_last_reward_claim(env, user) {
        let next_claim = last_claim.safe_add(config.min_claim_interval, env)?;
        validate!(
            env,
            now >= next_claim,
            ErrorCode::IntervalNotElapsed,
            "Next reward claim possible at {}",
            next_claim
        )?;
    }

    let claimable = OracleClient::new(env, &config.oracle).get_user_claimable_rewards(user);
    validate!(env, claimable > 0, ErrorCode::NoRewards)?;
    check_reward_ceiling(env, config, user, claimable)?;

    let id = open_request(env, RequestType::ClaimRewards, user, claimable, None)?;
    let paid = pay_out_rewards(env, config, user)?;

    RouterEvents::rewards_claimed(env, user.clone(), Some(id), paid);

    Ok(paid)
}

/// Pays out the recorded unstake behind `id`. `owner` is checked when the caller is the user.
fn settle_unstake(env: &Env, config: &Config, owner: Option<&Address>, id: u128) -> HarborResult<i128> {
    let (_, record) = lookup_request(env, id).ok_or(ErrorCode::UnknownRequest)?;
    validate!(
        env,
        record.request_type == RequestType::Unstake,
        ErrorCode::WrongRequestType,
        "Request is of type {}",
        record.request_type as u32
    )?;
    if let Some(owner) = owner {
        validate!(env, record.requester == *owner, ErrorCode::RequestNotOwned)?;
    }

    let ledger = StakeLedgerClient::new(env, &config.direct_stake);
    let unlock_time = ledger.get_unstake_request(&id).map(|request| request.unlock_time);
    let amount = ledger.claim_unstake(&record.requester, &id);

    RouterEvents::unstake_claimed(env, record.requester.clone(), id, amount);

    // a newer unstake on the same validator owns the marker once it has been overwritten
    if let Some(validator) = record.validator {
        let end = get_unbonding_end(env, &record.requester, &validator);
        if end.is_some() && end == unlock_time {
            remove_unbonding_end(env, &record.requester, &validator);
            RouterEvents::validator_unbonding_ended(env, record.requester, validator);
        }
    }

    Ok(amount)
}

#[contractimpl]
impl RequestLedgerTrait for RequestLedger {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        direct_stake: Address,
        vault: Address,
        native_token: Address,
        native_symbol: Symbol,
        external_symbol: Symbol,
        freeze_duration: u64
    ) {
        if is_initialized(&env) {
            log!(&env, "Router: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(&env, Config {
            oracle,
            direct_stake,
            vault,
            native_token,
            native_symbol,
            external_symbol,
            reward_ceiling_bps: DEFAULT_REWARD_CEILING_BPS,
            min_claim_interval: DEFAULT_MIN_CLAIM_INTERVAL,
        });
        save_state(&env, &State::default());

        let launch_ts = env.ledger().timestamp();
        save_freeze_window(&env, &FreezeWindow::new(launch_ts, freeze_duration));

        access::grant(&env, Capability::Admin, &admin);

        RouterEvents::initialize(&env, admin, launch_ts, freeze_duration);
    }

    fn update_config(
        env: Env,
        admin: Address,
        reward_ceiling_bps: Option<u32>,
        min_claim_interval: Option<u64>
    ) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        let mut config = get_config(&env);

        if let Some(reward_ceiling_bps) = reward_ceiling_bps {
            validate_bps!(&env, reward_ceiling_bps, MAX_REWARD_CEILING_BPS)?;
            config.reward_ceiling_bps = reward_ceiling_bps;
        }
        if let Some(min_claim_interval) = min_claim_interval {
            config.min_claim_interval = min_claim_interval;
        }

        save_config(&env, config);

        Ok(())
    }

    fn grant_capability(
        env: Env,
        admin: Address,
        capability: Capability,
        holder: Address
    ) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        access::grant(&env, capability, &holder);
        Ok(())
    }

    fn revoke_capability(
        env: Env,
        admin: Address,
        capability: Capability,
        holder: Address
    ) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        access::revoke(&env, capability, &holder);
        Ok(())
    }

    fn freeze(env: Env, admin: Address) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        let mut window = get_freeze_window(&env);
        window.manual = true;
        save_freeze_window(&env, &window);

        RouterEvents::frozen(&env, admin);

        Ok(())
    }

    fn unfreeze(env: Env, admin: Address) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        let mut window = get_freeze_window(&env);
        window.manual = false;
        window.lapsed = true;
        save_freeze_window(&env, &window);

        RouterEvents::unfrozen(&env, env.ledger().timestamp());

        Ok(())
    }

    fn check_and_unfreeze(env: Env) -> bool {
        bump_instance(&env);

        let now = env.ledger().timestamp();
        let mut window = get_freeze_window(&env);
        if window.lapse_if_due(now) {
            save_freeze_window(&env, &window);
            RouterEvents::unfrozen(&env, now);
        }

        !window.is_frozen(now)
    }

    fn pause(env: Env, admin: Address) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        let mut state = get_state(&env);
        state.paused = true;
        save_state(&env, &state);

        RouterEvents::paused(&env, admin);

        Ok(())
    }

    fn unpause(env: Env, admin: Address) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        let mut state = get_state(&env);
        state.paused = false;
        save_state(&env, &state);

        RouterEvents::unpaused(&env, admin);

        Ok(())
    }

    // ################################################################
    //                          DIRECT STAKE
    // ################################################################

    fn stake_direct(
        env: Env,
        user: Address,
        amount: i128,
        validator: String
    ) -> Result<u128, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;

        validate_amount(&env, amount)?;
        validate_validator_ref(&env, &validator)?;

        if let Some(end) = get_unbonding_end(&env, &user, &validator) {
            validate!(
                &env,
                env.ledger().timestamp() >= end,
                ErrorCode::StillUnbonding,
                "Validator unbonding for this user ends at {}",
                end
            )?;
        }

        let config = get_config(&env);
        let oracle = OracleClient::new(&env, &config.oracle);
        validate!(
            &env,
            oracle.get_price_data(&config.native_symbol).is_usable(),
            ErrorCode::PriceUnavailable,
            "No usable price for the native asset"
        )?;
        let external_amount = oracle.convert(
            &amount,
            &config.native_symbol,
            &config.external_symbol
        );

        transfer_token(&env, &config.native_token, &user, &config.direct_stake, amount);
        StakeLedgerClient::new(&env, &config.direct_stake).stake(
            &user,
            &amount,
            &validator,
            &external_amount
        );

        let id = open_request(
            &env,
            RequestType::Stake,
            &user,
            amount,
            Some(validator.clone())
        )?;

        RouterEvents::staked(&env, user, id, amount, external_amount, Some(validator));

        Ok(id)
    }

    fn unstake_direct(
        env: Env,
        user: Address,
        amount: i128,
        validator: String
    ) -> Result<u128, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;
        require_unfrozen(&env)?;

        validate_amount(&env, amount)?;
        validate_validator_ref(&env, &validator)?;

        let config = get_config(&env);

        // reported rewards leave with the principal, the claim interval does not apply here
        let claimable = OracleClient::new(&env, &config.oracle).get_user_claimable_rewards(&user);
        if claimable > 0 {
            check_reward_ceiling(&env, &config, &user, claimable)?;
            let paid = pay_out_rewards(&env, &config, &user)?;
            RouterEvents::rewards_claimed(&env, user.clone(), None, paid);
        }

        let validator_ref = Some(validator.clone());
        let id = next_request_id(&env, RequestType::Unstake, &user, amount, &validator_ref)?;
        let request = StakeLedgerClient::new(&env, &config.direct_stake).request_unstake(
            &user,
            &amount,
            &validator,
            &id
        );

        save_unbonding_end(&env, &user, &validator, request.unlock_time);
        record_request(&env, id, RequestType::Unstake, &user, amount, validator_ref)?;

        RouterEvents::unstake_requested(
            &env,
            user.clone(),
            id,
            amount,
            validator.clone(),
            request.unlock_time
        );
        RouterEvents::validator_unbonding_started(&env, user, validator, request.unlock_time);

        Ok(id)
    }

    fn claim_unstake_direct(env: Env, user: Address, id: u128) -> Result<i128, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;

        settle_unstake(&env, &get_config(&env), Some(&user), id)
    }

    fn complete_unstake(env: Env, operator: Address, id: u128) -> Result<i128, ErrorCode> {
        access::require_capability(&env, &operator, Capability::Operator)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        bump_instance(&env);

        settle_unstake(&env, &get_config(&env), None, id)
    }

    fn claim_rewards_direct(env: Env, user: Address) -> Result<i128, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;

        claim_rewards(&env, &get_config(&env), &user)
    }

    fn complete_reward_claim(env: Env, operator: Address, user: Address) -> Result<i128, ErrorCode> {
        access::require_capability(&env, &operator, Capability::Operator)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        bump_instance(&env);

        claim_rewards(&env, &get_config(&env), &user)
    }

    fn request_emergency_withdraw(env: Env, user: Address) -> Result<(), ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        bump_instance(&env);

        let config = get_config(&env);
        StakeLedgerClient::new(&env, &config.direct_stake).set_emergency_intent(&user);

        RouterEvents::emergency_requested(&env, user, env.ledger().timestamp());

        Ok(())
    }

    fn complete_emergency_withdraw(
        env: Env,
        operator: Address,
        user: Address
    ) -> Result<i128, ErrorCode> {
        access::require_capability(&env, &operator, Capability::Operator)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        bump_instance(&env);

        let config = get_config(&env);
        let amount = StakeLedgerClient::new(&env, &config.direct_stake).complete_emergency_withdraw(
            &user
        );

        RouterEvents::emergency_withdrawn(&env, user, operator, amount);

        Ok(amount)
    }

    fn migrate_direct(
        env: Env,
        user: Address,
        from: String,
        to: String
    ) -> Result<Position, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;

        validate_validator_ref(&env, &from)?;
        validate_validator_ref(&env, &to)?;

        let config = get_config(&env);
        let position = StakeLedgerClient::new(&env, &config.direct_stake).migrate(&user, &from, &to);

        RouterEvents::migrated(&env, user, from, to, position.amount);

        Ok(position)
    }

    // ################################################################
    //                             VAULT
    // ################################################################

    fn stake_vault(env: Env, user: Address, amount: i128) -> Result<u128, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;

        validate_amount(&env, amount)?;

        let config = get_config(&env);
        let shares = VaultClient::new(&env, &config.vault).deposit(&user, &amount);

        let id = open_request(&env, RequestType::Stake, &user, amount, None)?;

        RouterEvents::staked(&env, user, id, amount, shares, None);

        Ok(id)
    }

    fn withdraw_vault(env: Env, user: Address, shares: i128) -> Result<WithdrawOutcome, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;
        require_unfrozen(&env)?;

        validate_amount(&env, shares)?;

        let config = get_config(&env);
        let id = next_request_id(&env, RequestType::Withdraw, &user, shares, &None)?;
        let outcome = VaultClient::new(&env, &config.vault).redeem(&user, &shares, &id);

        match &outcome {
            WithdrawOutcome::Immediate(assets) => {
                RouterEvents::withdrawn(&env, user, id, shares, *assets);
            }
            WithdrawOutcome::Queued(request) => {
                record_request(&env, id, RequestType::Withdraw, &user, request.amount, None)?;
                RouterEvents::withdrawal_requested(
                    &env,
                    user,
                    id,
                    shares,
                    request.amount,
                    request.unlock_time
                );
            }
        }

        Ok(outcome)
    }

    fn claim_withdrawal_vault(env: Env, user: Address, id: u128) -> Result<i128, ErrorCode> {
        user.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        require_active(&env)?;

        let (_, record) = lookup_request(&env, id).ok_or(ErrorCode::UnknownRequest)?;
        validate!(
            &env,
            record.request_type == RequestType::Withdraw,
            ErrorCode::WrongRequestType,
            "Request is of type {}",
            record.request_type as u32
        )?;
        validate!(&env, record.requester == user, ErrorCode::RequestNotOwned)?;

        let config = get_config(&env);
        let assets = VaultClient::new(&env, &config.vault).claim_withdrawal(&user, &id);

        RouterEvents::withdrawal_claimed(&env, user, id, assets);

        Ok(assets)
    }

    // ################################################################
    //                             RELAY
    // ################################################################

    fn fulfill_request(
        env: Env,
        fulfiller: Address,
        id: u128,
        status: RequestStatus,
        reason: String
    ) -> Result<CorrelationRecord, ErrorCode> {
        access::require_capability(&env, &fulfiller, Capability::Fulfiller)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        bump_instance(&env);

        let record = fulfill(&env, id, status, reason)?;

        RouterEvents::request_fulfilled(&env, id, record.status, record.reason.clone());

        Ok(record)
    }

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn get_request(env: Env, id: u128) -> Result<CorrelationRecord, ErrorCode> {
        lookup_request(&env, id)
            .map(|(_, record)| record)
            .ok_or(ErrorCode::UnknownRequest)
    }

    fn get_unbonding_end(env: Env, user: Address, validator: String) -> Option<u64> {
        get_unbonding_end(&env, &user, &validator)
    }

    fn get_user_validators(env: Env, user: Address) -> Vec<String> {
        let config = get_config(&env);
        StakeLedgerClient::new(&env, &config.direct_stake).get_user_validators(&user)
    }

    fn get_freeze_window(env: Env) -> FreezeWindow {
        get_freeze_window(&env)
    }

    fn is_frozen(env: Env) -> bool {
        get_freeze_window(&env).is_frozen(env.ledger().timestamp())
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_state(env: Env) -> State {
        get_state(&env)
    }

    fn decode_request_id(_env: Env, id: u128) -> Option<RequestId> {
        request_id::decode(id)
    }

    fn has_capability(env: Env, holder: Address, capability: Capability) -> bool {
        access::has_capability(&env, &holder, capability)
    }
}
