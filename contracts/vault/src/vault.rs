use harbor::{ access::Capability, error::ErrorCode, types::{ WithdrawOutcome, WithdrawalRequest } };
use soroban_sdk::{ Address, Env, String };

use crate::storage::{ Config, VaultState };

pub trait CompoundingVaultTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        router: Address,
        oracle: Address,
        asset: Address,
        liquidity_bps: u32,
        name: String,
        symbol: String
    );

    fn set_liquidity_bps(env: Env, admin: Address, liquidity_bps: u32) -> Result<(), ErrorCode>;

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
    //                             ROUTER
    // ################################################################

    fn deposit(env: Env, user: Address, assets: i128) -> Result<i128, ErrorCode>;

    fn redeem(
        env: Env,
        user: Address,
        shares: i128,
        request_id: u128
    ) -> Result<WithdrawOutcome, ErrorCode>;

    fn claim_withdrawal(env: Env, user: Address, request_id: u128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             YIELD
    // ################################################################

    fn sync(env: Env) -> Result<VaultState, ErrorCode>;

    fn compound(env: Env, operator: Address, amount: i128) -> Result<VaultState, ErrorCode>;

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn total_assets(env: Env) -> Result<i128, ErrorCode>;

    fn convert_to_shares(env: Env, assets: i128) -> Result<i128, ErrorCode>;

    fn convert_to_assets(env: Env, shares: i128) -> Result<i128, ErrorCode>;

    fn max_instant_redeem(env: Env) -> Result<i128, ErrorCode>;

    fn get_withdrawal_request(env: Env, request_id: u128) -> Option<WithdrawalRequest>;

    fn query_state(env: Env) -> VaultState;

    fn query_config(env: Env) -> Config;
}
