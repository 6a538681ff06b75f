use harbor::{ access::Capability, error::ErrorCode, types::PriceReading };
use soroban_sdk::{ Address, Env, Symbol };

use crate::storage::{ Config, PriceState };

pub trait PriceOracleGatewayTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(env: Env, admin: Address, freshness_threshold: u64, unbonding_period: u64);

    fn set_freshness_threshold(env: Env, admin: Address, seconds: u64) -> Result<(), ErrorCode>;

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
    //                            PRICES
    // ################################################################

    fn set_price(
        env: Env,
        updater: Address,
        symbol: Symbol,
        price: i128,
        timestamp: u64
    ) -> Result<(), ErrorCode>;

    fn set_fallback_price(
        env: Env,
        manager: Address,
        symbol: Symbol,
        price: i128
    ) -> Result<(), ErrorCode>;

    fn get_price(env: Env, symbol: Symbol) -> i128;

    fn get_price_data(env: Env, symbol: Symbol) -> PriceReading;

    fn convert(env: Env, amount: i128, from: Symbol, to: Symbol) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             RATES
    // ################################################################

    fn set_unbonding_period(env: Env, manager: Address, seconds: u64) -> Result<(), ErrorCode>;

    fn get_unbonding_period(env: Env) -> u64;

    fn set_apr(env: Env, manager: Address, bps: u32) -> Result<(), ErrorCode>;

    fn get_current_apr(env: Env) -> u32;

    fn set_apy(env: Env, manager: Address, bps: u32) -> Result<(), ErrorCode>;

    fn get_current_apy(env: Env) -> u32;

    // ################################################################
    //                            REWARDS
    // ################################################################

    fn set_user_claimable_rewards(
        env: Env,
        writer: Address,
        user: Address,
        amount: i128
    ) -> Result<(), ErrorCode>;

    fn add_user_claimable_rewards(
        env: Env,
        writer: Address,
        user: Address,
        amount: i128
    ) -> Result<i128, ErrorCode>;

    fn get_user_claimable_rewards(env: Env, user: Address) -> i128;

    fn clear_user_claimable_rewards(
        env: Env,
        sender: Address,
        user: Address
    ) -> Result<i128, ErrorCode>;

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn query_price_state(env: Env, symbol: Symbol) -> PriceState;

    fn has_capability(env: Env, holder: Address, capability: Capability) -> bool;
}
