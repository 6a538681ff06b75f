use harbor::{
    access::Capability,
    error::ErrorCode,
    types::{ Position, UnstakeRequest, Validator, ValidatorStatus },
};
use soroban_sdk::{ Address, Env, String, Vec };

use crate::storage::{ Config, Totals };

pub trait DirectStakeLedgerTrait {
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
    );

    fn update_config(
        env: Env,
        admin: Address,
        router: Option<Address>,
        oracle: Option<Address>,
        min_stake_duration: Option<u64>
    ) -> Result<(), ErrorCode>;

    fn grant_capability(
        env: Env,
        admin: Address,
        capability: Capability,
        holder: Address
    ) -> Result<(), ErrorCode>;

    fn revoke_capability(
        env: Env,
        admin: Address,
        capability: Capability,
        holder: Address
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                           VALIDATORS
    // ################################################################

    fn add_validator(env: Env, manager: Address, validator: String) -> Result<Validator, ErrorCode>;

    fn set_validator_status(
        env: Env,
        manager: Address,
        validator: String,
        status: ValidatorStatus
    ) -> Result<Validator, ErrorCode>;

    fn deprecate_validator(
        env: Env,
        manager: Address,
        validator: String
    ) -> Result<Validator, ErrorCode>;

    // ################################################################
    //                             ROUTER
    // ################################################################

    fn stake(
        env: Env,
        user: Address,
        amount: i128,
        validator: String,
        external_amount: i128
    ) -> Result<Position, ErrorCode>;

    fn request_unstake(
        env: Env,
        user: Address,
        amount: i128,
        validator: String,
        request_id: u128
    ) -> Result<UnstakeRequest, ErrorCode>;

    fn claim_unstake(env: Env, user: Address, request_id: u128) -> Result<i128, ErrorCode>;

    fn pay_rewards(env: Env, user: Address, amount: i128) -> Result<i128, ErrorCode>;

    fn set_emergency_intent(env: Env, user: Address) -> Result<(), ErrorCode>;

    fn complete_emergency_withdraw(env: Env, user: Address) -> Result<i128, ErrorCode>;

    fn migrate(env: Env, user: Address, from: String, to: String) -> Result<Position, ErrorCode>;

    // ################################################################
    //                            REWARDS
    // ################################################################

    fn fund_rewards(env: Env, funder: Address, amount: i128) -> Result<i128, ErrorCode>;

    fn estimate_rewards(env: Env, user: Address, validator: String) -> Result<i128, ErrorCode>;

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn get_position(env: Env, user: Address, validator: String) -> Option<Position>;

    fn get_validator(env: Env, validator: String) -> Option<Validator>;

    fn get_validators(env: Env) -> Vec<String>;

    fn get_user_validators(env: Env, user: Address) -> Vec<String>;

    fn get_unstake_request(env: Env, request_id: u128) -> Option<UnstakeRequest>;

    fn get_user_principal(env: Env, user: Address) -> i128;

    fn get_emergency_intent(env: Env, user: Address) -> Option<u64>;

    fn query_totals(env: Env) -> Totals;

    fn query_config(env: Env) -> Config;
}
