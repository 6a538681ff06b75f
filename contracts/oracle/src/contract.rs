use harbor::{
    access::{ self, Capability },
    constants::{
        DEFAULT_FRESHNESS_THRESHOLD,
        MAX_RATE_BPS,
        MAX_UNBONDING_PERIOD,
        MIN_UNBONDING_PERIOD,
    },
    error::{ ErrorCode, HarborResult },
    math::safe_math::SafeMath,
    types::PriceReading,
    utils::{ bump_instance, ReentrancyGuard },
    validate,
};
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    symbol_short,
    Address,
    Env,
    Symbol,
};

use crate::{
    events::OracleEvents,
    gateway::PriceOracleGatewayTrait,
    price,
    storage::{
        get_claimable,
        get_config,
        get_price_state,
        save_claimable,
        save_config,
        save_price_state,
        utils::{ is_initialized, set_initialized },
        Config,
        PriceState,
    },
};

contractmeta!(
    key = "Description",
    val = "Price, rate and claimable reward gateway for relayed native asset staking"
);

#[contract]
pub struct PriceOracleGateway;

fn validate_unbonding_period(env: &Env, seconds: u64) -> HarborResult {
    validate!(
        env,
        (MIN_UNBONDING_PERIOD..=MAX_UNBONDING_PERIOD).contains(&seconds),
        ErrorCode::ImplausibleUnbondingPeriod,
        "Unbonding period {} out of range",
        seconds
    )
}

fn validate_rate(env: &Env, bps: u32) -> HarborResult {
    validate!(env, bps <= MAX_RATE_BPS, ErrorCode::ImplausibleRate, "Rate {} bps out of range", bps)
}

fn read_price(env: &Env, symbol: &Symbol) -> PriceReading {
    let config = get_config(env);
    let state = get_price_state(env, symbol);

    price::resolve(&state, env.ledger().timestamp(), config.freshness_threshold)
}

#[contractimpl]
impl PriceOracleGatewayTrait for PriceOracleGateway {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(env: Env, admin: Address, freshness_threshold: u64, unbonding_period: u64) {
        if is_initialized(&env) {
            log!(&env, "Oracle: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        if validate_unbonding_period(&env, unbonding_period).is_err() {
            panic_with_error!(&env, ErrorCode::ImplausibleUnbondingPeriod);
        }

        let freshness_threshold = if freshness_threshold == 0 {
            DEFAULT_FRESHNESS_THRESHOLD
        } else {
            freshness_threshold
        };

        set_initialized(&env);

        save_config(&env, Config {
            freshness_threshold,
            unbonding_period,
            apr_bps: 0,
            apy_bps: 0,
        });

        access::grant(&env, Capability::Admin, &admin);

        OracleEvents::initialize(&env, admin, freshness_threshold, unbonding_period);
    }

    fn set_freshness_threshold(env: Env, admin: Address, seconds: u64) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        validate!(&env, seconds > 0, ErrorCode::InvalidParameter)?;

        let mut config = get_config(&env);
        config.freshness_threshold = seconds;
        save_config(&env, config);

        OracleEvents::param_updated(&env, symbol_short!("freshness"), seconds);

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
    //                            PRICES
    // ################################################################

    fn set_price(
        env: Env,
        updater: Address,
        symbol: Symbol,
        price: i128,
        timestamp: u64
    ) -> Result<(), ErrorCode> {
        access::require_capability(&env, &updater, Capability::PriceUpdater)?;
        bump_instance(&env);

        validate!(&env, price > 0, ErrorCode::InvalidAmount, "Price {} must be positive", price)?;
        validate!(
            &env,
            timestamp <= env.ledger().timestamp(),
            ErrorCode::FutureTimestamp,
            "Price timestamp {} is ahead of the ledger",
            timestamp
        )?;

        let mut state = get_price_state(&env, &symbol);
        state.price = price;
        state.updated_at = timestamp;
        save_price_state(&env, &symbol, &state);

        OracleEvents::price_updated(&env, symbol, price, timestamp);

        Ok(())
    }

    fn set_fallback_price(
        env: Env,
        manager: Address,
        symbol: Symbol,
        price: i128
    ) -> Result<(), ErrorCode> {
        access::require_capability(&env, &manager, Capability::Manager)?;
        bump_instance(&env);

        // zero removes the fallback
        validate!(&env, price >= 0, ErrorCode::InvalidAmount)?;

        let mut state = get_price_state(&env, &symbol);
        state.fallback_price = price;
        save_price_state(&env, &symbol, &state);

        OracleEvents::fallback_updated(&env, symbol, price);

        Ok(())
    }

    fn get_price(env: Env, symbol: Symbol) -> i128 {
        read_price(&env, &symbol).price
    }

    fn get_price_data(env: Env, symbol: Symbol) -> PriceReading {
        read_price(&env, &symbol)
    }

    fn convert(env: Env, amount: i128, from: Symbol, to: Symbol) -> Result<i128, ErrorCode> {
        if amount == 0 {
            return Ok(0);
        }
        if from == to {
            return Ok(amount);
        }

        let from_price = read_price(&env, &from);
        let to_price = read_price(&env, &to);

        price::convert(&env, amount, &from_price, &to_price)
    }

    // ################################################################
    //                             RATES
    // ################################################################

    fn set_unbonding_period(env: Env, manager: Address, seconds: u64) -> Result<(), ErrorCode> {
        access::require_capability(&env, &manager, Capability::Manager)?;
        bump_instance(&env);

        validate_unbonding_period(&env, seconds)?;

        let mut config = get_config(&env);
        config.unbonding_period = seconds;
        save_config(&env, config);

        OracleEvents::param_updated(&env, symbol_short!("unbonding"), seconds);

        Ok(())
    }

    fn get_unbonding_period(env: Env) -> u64 {
        get_config(&env).unbonding_period
    }

    fn set_apr(env: Env, manager: Address, bps: u32) -> Result<(), ErrorCode> {
        access::require_capability(&env, &manager, Capability::Manager)?;
        bump_instance(&env);

        validate_rate(&env, bps)?;

        let mut config = get_config(&env);
        config.apr_bps = bps;
        save_config(&env, config);

        OracleEvents::param_updated(&env, symbol_short!("apr"), bps as u64);

        Ok(())
    }

    fn get_current_apr(env: Env) -> u32 {
        get_config(&env).apr_bps
    }

    fn set_apy(env: Env, manager: Address, bps: u32) -> Result<(), ErrorCode> {
        access::require_capability(&env, &manager, Capability::Manager)?;
        bump_instance(&env);

        validate_rate(&env, bps)?;

        let mut config = get_config(&env);
        config.apy_bps = bps;
        save_config(&env, config);

        OracleEvents::param_updated(&env, symbol_short!("apy"), bps as u64);

        Ok(())
    }

    fn get_current_apy(env: Env) -> u32 {
        get_config(&env).apy_bps
    }

    // ################################################################
    //                            REWARDS
    // ################################################################

    fn set_user_claimable_rewards(
        env: Env,
        writer: Address,
        user: Address,
        amount: i128
    ) -> Result<(), ErrorCode> {
        access::require_capability(&env, &writer, Capability::RewardWriter)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        validate!(&env, amount >= 0, ErrorCode::InvalidAmount)?;

        save_claimable(&env, &user, amount);

        OracleEvents::rewards_reported(&env, user, amount);

        Ok(())
    }

    fn add_user_claimable_rewards(
        env: Env,
        writer: Address,
        user: Address,
        amount: i128
    ) -> Result<i128, ErrorCode> {
        access::require_capability(&env, &writer, Capability::RewardWriter)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        validate!(&env, amount > 0, ErrorCode::InvalidAmount)?;

        let claimable = get_claimable(&env, &user).safe_add(amount, &env)?;
        save_claimable(&env, &user, claimable);

        OracleEvents::rewards_reported(&env, user, claimable);

        Ok(claimable)
    }

    fn get_user_claimable_rewards(env: Env, user: Address) -> i128 {
        get_claimable(&env, &user)
    }

    fn clear_user_claimable_rewards(
        env: Env,
        sender: Address,
        user: Address
    ) -> Result<i128, ErrorCode> {
        access::require_capability(&env, &sender, Capability::Operator)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        let cleared = get_claimable(&env, &user);
        save_claimable(&env, &user, 0);

        OracleEvents::rewards_cleared(&env, user, cleared);

        Ok(cleared)
    }

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_price_state(env: Env, symbol: Symbol) -> PriceState {
        get_price_state(&env, &symbol)
    }

    fn has_capability(env: Env, holder: Address, capability: Capability) -> bool {
        access::has_capability(&env, &holder, capability)
    }
}
