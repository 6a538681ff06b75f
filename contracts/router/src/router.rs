use harbor::{
    access::Capability,
    error::ErrorCode,
    request_id::RequestId,
    types::{ Position, RequestStatus, WithdrawOutcome },
};
use soroban_sdk::{ Address, Env, String, Symbol, Vec };

use crate::storage::{ Config, CorrelationRecord, FreezeWindow, State };

pub trait RequestLedgerTrait {
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
    );

    fn update_config(
        env: Env,
        admin: Address,
        reward_ceiling_bps: Option<u32>,
        min_claim_interval: Option<u64>
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

    fn freeze(env: Env, admin: Address) -> Result<(), ErrorCode>;

    fn unfreeze(env: Env, admin: Address) -> Result<(), ErrorCode>;

    /// Persists the end of the launch window once it has passed. Returns whether the
    /// router is unfrozen afterwards.
    fn check_and_unfreeze(env: Env) -> bool;

    fn pause(env: Env, admin: Address) -> Result<(), ErrorCode>;

    fn unpause(env: Env, admin: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                          DIRECT STAKE
    // ################################################################

    fn stake_direct(
        env: Env,
        user: Address,
        amount: i128,
        validator: String
    ) -> Result<u128, ErrorCode>;

    fn unstake_direct(
        env: Env,
        user: Address,
        amount: i128,
        validator: String
    ) -> Result<u128, ErrorCode>;

    fn claim_unstake_direct(env: Env, user: Address, id: u128) -> Result<i128, ErrorCode>;

    fn complete_unstake(env: Env, operator: Address, id: u128) -> Result<i128, ErrorCode>;

    fn claim_rewards_direct(env: Env, user: Address) -> Result<i128, ErrorCode>;

    fn complete_reward_claim(env: Env, operator: Address, user: Address) -> Result<i128, ErrorCode>;

    fn request_emergency_withdraw(env: Env, user: Address) -> Result<(), ErrorCode>;

    fn complete_emergency_withdraw(
        env: Env,
        operator: Address,
        user: Address
    ) -> Result<i128, ErrorCode>;

    fn migrate_direct(
        env: Env,
        user: Address,
        from: String,
        to: String
    ) -> Result<Position, ErrorCode>;

    // ################################################################
    //                             VAULT
    // ################################################################

    fn stake_vault(env: Env, user: Address, amount: i128) -> Result<u128, ErrorCode>;

    fn withdraw_vault(env: Env, user: Address, shares: i128) -> Result<WithdrawOutcome, ErrorCode>;

    fn claim_withdrawal_vault(env: Env, user: Address, id: u128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             RELAY
    // ################################################################

    fn fulfill_request(
        env: Env,
        fulfiller: Address,
        id: u128,
        status: RequestStatus,
        reason: String
    ) -> Result<CorrelationRecord, ErrorCode>;

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn get_request(env: Env, id: u128) -> Result<CorrelationRecord, ErrorCode>;

    fn get_unbonding_end(env: Env, user: Address, validator: String) -> Option<u64>;

    fn get_user_validators(env: Env, user: Address) -> Vec<String>;

    fn get_freeze_window(env: Env) -> FreezeWindow;

    fn is_frozen(env: Env) -> bool;

    fn query_config(env: Env) -> Config;

    fn query_state(env: Env) -> State;

    fn decode_request_id(env: Env, id: u128) -> Option<RequestId>;

    fn has_capability(env: Env, holder: Address, capability: Capability) -> bool;
}
