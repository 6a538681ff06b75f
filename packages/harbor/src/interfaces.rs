//! Narrow client interfaces the contracts use to call each other.
//!
//! Only the functions actually invoked across contracts are listed here; each contract
//! crate declares its full surface in its own trait.

use soroban_sdk::{ contractclient, Address, Env, String, Symbol, Vec };

use crate::{
    error::ErrorCode,
    types::{ Position, PriceReading, UnstakeRequest, WithdrawOutcome },
};

#[contractclient(name = "OracleClient")]
pub trait OracleInterface {
    fn get_price_data(env: Env, symbol: Symbol) -> PriceReading;

    fn convert(env: Env, amount: i128, from: Symbol, to: Symbol) -> Result<i128, ErrorCode>;

    fn get_unbonding_period(env: Env) -> u64;

    fn get_current_apr(env: Env) -> u32;

    fn get_current_apy(env: Env) -> u32;

    fn get_user_claimable_rewards(env: Env, user: Address) -> i128;

    fn clear_user_claimable_rewards(
        env: Env,
        sender: Address,
        user: Address
    ) -> Result<i128, ErrorCode>;
}

#[contractclient(name = "StakeLedgerClient")]
pub trait StakeLedgerInterface {
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

    fn get_unstake_request(env: Env, request_id: u128) -> Option<UnstakeRequest>;

    fn pay_rewards(env: Env, user: Address, amount: i128) -> Result<i128, ErrorCode>;

    fn set_emergency_intent(env: Env, user: Address) -> Result<(), ErrorCode>;

    fn complete_emergency_withdraw(env: Env, user: Address) -> Result<i128, ErrorCode>;

    fn migrate(
        env: Env,
        user: Address,
        from: String,
        to: String
    ) -> Result<Position, ErrorCode>;

    fn get_user_principal(env: Env, user: Address) -> i128;

    fn get_user_validators(env: Env, user: Address) -> Vec<String>;
}

#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    fn deposit(env: Env, user: Address, assets: i128) -> Result<i128, ErrorCode>;

    fn redeem(
        env: Env,
        user: Address,
        shares: i128,
        request_id: u128
    ) -> Result<WithdrawOutcome, ErrorCode>;

    fn claim_withdrawal(env: Env, user: Address, request_id: u128) -> Result<i128, ErrorCode>;

    fn convert_to_assets(env: Env, shares: i128) -> Result<i128, ErrorCode>;
}
