use harbor::{
    access::{ self, Capability },
    error::ErrorCode,
    types::{ Position, UnstakeRequest, Validator, ValidatorStatus },
    utils::{ bump_instance, ReentrancyGuard },
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
    Vec,
};

use crate::{
    controller::{ emergency, position, rewards, validator },
    events::DirectStakeEvents,
    ledger::DirectStakeLedgerTrait,
    storage::{
        get_config,
        get_emergency_intent,
        get_position,
        get_totals,
        get_unstake_request,
        get_user_validators,
        get_validator,
        get_validator_ids,
        save_config,
        utils::{ is_initialized, set_initialized },
        Config,
        Totals,
    },
};

contractmeta!(
    key = "Description",
    val = "Per validator staking positions with externally reported rewards"
);

#[contract]
pub struct DirectStakeLedger;

/// Position changes are only accepted from the configured router
fn require_router(env: &Env) -> Config {
    let config = get_config(env);
    config.router.require_auth();
    bump_instance(env);
    config
}

#[contractimpl]
impl DirectStakeLedgerTrait for DirectStakeLedger {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        router: Address,
        oracle: Address,
        stake_token: Address,
        min_stake_duration: u64
    ) {
        if is_initialized(&env) {
            log!(&env, "DirectStake: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(&env, Config {
            router: router.clone(),
            oracle,
            stake_token,
            min_stake_duration,
        });

        access::grant(&env, Capability::Admin, &admin);

        DirectStakeEvents::initialize(&env, admin, router);
    }

    fn update_config(
        env: Env,
        admin: Address,
        router: Option<Address>,
        oracle: Option<Address>,
        min_stake_duration: Option<u64>
    ) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        let mut config = get_config(&env);

        if let Some(router) = router {
            config.router = router;
        }
        if let Some(oracle) = oracle {
            config.oracle = oracle;
        }
        if let Some(min_stake_duration) = min_stake_duration {
            config.min_stake_duration = min_stake_duration;
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

    // ################################################################
    //                           VALIDATORS
    // ################################################################

    fn add_validator(env: Env, manager: Address, validator: String) -> Result<Validator, ErrorCode> {
        access::require_capability(&env, &manager, Capability::Manager)?;
        bump_instance(&env);

        let added = validator::add(&env, validator)?;

        DirectStakeEvents::validator_added(&env, added.id.clone());

        Ok(added)
    }

    fn set_validator_status(
        env: Env,
        manager: Address,
        validator: String,
        status: ValidatorStatus
    ) -> Result<Validator, ErrorCode> {
        access::require_capability(&env, &manager, Capability::Manager)?;
        bump_instance(&env);

        let updated = validator::set_status(&env, &validator, status)?;

        DirectStakeEvents::validator_status(&env, validator, status);

        Ok(updated)
    }

    fn deprecate_validator(
        env: Env,
        manager: Address,
        validator: String
    ) -> Result<Validator, ErrorCode> {
        Self::set_validator_status(env, manager, validator, ValidatorStatus::Deprecated)
    }

    // ################################################################
    //                             ROUTER
    // ################################################################

    fn stake(
        env: Env,
        user: Address,
        amount: i128,
        validator: String,
        external_amount: i128
    ) -> Result<Position, ErrorCode> {
        require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        position::stake(&env, &user, amount, &validator, external_amount)
    }

    fn request_unstake(
        env: Env,
        user: Address,
        amount: i128,
        validator: String,
        request_id: u128
    ) -> Result<UnstakeRequest, ErrorCode> {
        let config = require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        position::request_unstake(&env, &config, &user, amount, &validator, request_id)
    }

    fn claim_unstake(env: Env, user: Address, request_id: u128) -> Result<i128, ErrorCode> {
        let config = require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        position::claim_unstake(&env, &config, &user, request_id)
    }

    fn pay_rewards(env: Env, user: Address, amount: i128) -> Result<i128, ErrorCode> {
        let config = require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        rewards::pay(&env, &config, &user, amount)
    }

    fn set_emergency_intent(env: Env, user: Address) -> Result<(), ErrorCode> {
        require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        emergency::set_intent(&env, &user)
    }

    fn complete_emergency_withdraw(env: Env, user: Address) -> Result<i128, ErrorCode> {
        let config = require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        emergency::complete(&env, &config, &user)
    }

    fn migrate(env: Env, user: Address, from: String, to: String) -> Result<Position, ErrorCode> {
        require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        position::migrate(&env, &user, &from, &to)
    }

    // ################################################################
    //                            REWARDS
    // ################################################################

    fn fund_rewards(env: Env, funder: Address, amount: i128) -> Result<i128, ErrorCode> {
        funder.require_auth();
        bump_instance(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        rewards::fund(&env, &config, &funder, amount)
    }

    fn estimate_rewards(env: Env, user: Address, validator: String) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        rewards::estimate(&env, &config, &user, &validator)
    }

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn get_position(env: Env, user: Address, validator: String) -> Option<Position> {
        get_position(&env, &user, &validator)
    }

    fn get_validator(env: Env, validator: String) -> Option<Validator> {
        get_validator(&env, &validator)
    }

    fn get_validators(env: Env) -> Vec<String> {
        get_validator_ids(&env)
    }

    fn get_user_validators(env: Env, user: Address) -> Vec<String> {
        get_user_validators(&env, &user)
    }

    fn get_unstake_request(env: Env, request_id: u128) -> Option<UnstakeRequest> {
        get_unstake_request(&env, request_id)
    }

    fn get_user_principal(env: Env, user: Address) -> i128 {
        position::user_principal(&env, &user).unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn get_emergency_intent(env: Env, user: Address) -> Option<u64> {
        get_emergency_intent(&env, &user)
    }

    fn query_totals(env: Env) -> Totals {
        get_totals(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }
}
