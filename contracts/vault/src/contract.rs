use harbor::{
    access::{ self, Capability },
    constants::{ MAX_BPS, MAX_RATE_BPS, MAX_UNBONDING_PERIOD, MIN_UNBONDING_PERIOD },
    error::{ ErrorCode, HarborResult },
    interfaces::OracleClient,
    math::safe_math::SafeMath,
    types::{ WithdrawOutcome, WithdrawalRequest },
    utils::{ bump_instance, validate_amount, ReentrancyGuard },
    validate,
    validate_bps,
};
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    token::TokenInterface,
    Address,
    Env,
    String,
};
use soroban_token_sdk::{ metadata::TokenMetadata, TokenUtils };

use crate::{
    allowance::{ read_allowance, spend_allowance, write_allowance },
    balance::{ read_balance, receive_balance, spend_balance },
    events::VaultEvents,
    math::Pool,
    storage::{
        get_config,
        get_state,
        get_withdrawal,
        has_withdrawal,
        save_config,
        save_state,
        save_withdrawal,
        utils::{ asset_balance, is_initialized, set_initialized, transfer_token },
        Config,
        VaultState,
    },
    vault::CompoundingVaultTrait,
};

contractmeta!(
    key = "Description",
    val = "Compounding staking vault whose shares are a SEP-41 token"
);

/// Shares use the precision of the native asset
const SHARE_DECIMALS: u32 = 7;

#[contract]
pub struct CompoundingVault;

fn require_router(env: &Env) -> Config {
    let config = get_config(env);
    config.router.require_auth();
    bump_instance(env);
    config
}

fn load_pool(env: &Env, config: &Config) -> HarborResult<(VaultState, Pool)> {
    let state = get_state(env);
    let apy_bps = OracleClient::new(env, &config.oracle).get_current_apy();
    validate!(env, apy_bps <= MAX_RATE_BPS, ErrorCode::ImplausibleRate, "Oracle APY {} bps", apy_bps)?;
    let physical = asset_balance(env, &config.asset);
    let pool = Pool::new(env, &state, physical, apy_bps, env.ledger().timestamp())?;

    Ok((state, pool))
}

/// Folds the implied accrual into `accrued_virtual` so it is never counted twice
fn sync_pool(env: &Env, config: &Config) -> HarborResult<(VaultState, Pool)> {
    let (mut state, mut pool) = load_pool(env, config)?;

    let now = env.ledger().timestamp();
    if state.last_sync == now {
        return Ok((state, pool));
    }

    state.accrued_virtual = state.accrued_virtual.safe_add(pool.implied, env)?;
    state.last_sync = now;
    save_state(env, &state);

    pool.accrued_virtual = state.accrued_virtual;
    pool.implied = 0;

    Ok((state, pool))
}

fn unwrap_or_panic<T>(env: &Env, result: HarborResult<T>) -> T {
    result.unwrap_or_else(|err| panic_with_error!(env, err))
}

#[contractimpl]
impl CompoundingVaultTrait for CompoundingVault {
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
    ) {
        if is_initialized(&env) {
            log!(&env, "Vault: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        if liquidity_bps > MAX_BPS {
            log!(&env, "Vault: Initialize: liquidity bps {} out of range", liquidity_bps);
            panic_with_error!(&env, ErrorCode::InvalidParameter);
        }

        set_initialized(&env);

        save_config(&env, Config {
            router,
            oracle,
            asset: asset.clone(),
            liquidity_bps,
        });

        save_state(&env, &VaultState {
            last_sync: env.ledger().timestamp(),
            ..VaultState::default()
        });

        TokenUtils::new(&env).metadata().set_metadata(
            &(TokenMetadata {
                decimal: SHARE_DECIMALS,
                name,
                symbol,
            })
        );

        access::grant(&env, Capability::Admin, &admin);

        VaultEvents::initialize(&env, admin, asset, liquidity_bps);
    }

    fn set_liquidity_bps(env: Env, admin: Address, liquidity_bps: u32) -> Result<(), ErrorCode> {
        access::require_capability(&env, &admin, Capability::Admin)?;
        bump_instance(&env);

        validate_bps!(&env, liquidity_bps, MAX_BPS)?;

        let mut config = get_config(&env);
        config.liquidity_bps = liquidity_bps;
        save_config(&env, config);

        VaultEvents::liquidity_updated(&env, liquidity_bps);

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
    //                             ROUTER
    // ################################################################

    fn deposit(env: Env, user: Address, assets: i128) -> Result<i128, ErrorCode> {
        let config = require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        validate_amount(&env, assets)?;

        let (mut state, pool) = sync_pool(&env, &config)?;
        let shares = pool.shares_for(&env, assets)?;
        validate!(&env, shares > 0, ErrorCode::InvalidAmount, "Deposit {} mints no shares", assets)?;

        transfer_token(&env, &config.asset, &user, &env.current_contract_address(), assets);

        receive_balance(&env, &user, shares)?;
        state.total_shares = state.total_shares.safe_add(shares, &env)?;
        save_state(&env, &state);

        TokenUtils::new(&env).events().mint(env.current_contract_address(), user.clone(), shares);
        VaultEvents::deposit(&env, user, assets, shares);

        Ok(shares)
    }

    fn redeem(
        env: Env,
        user: Address,
        shares: i128,
        request_id: u128
    ) -> Result<WithdrawOutcome, ErrorCode> {
        let config = require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        validate_amount(&env, shares)?;
        validate!(&env, !has_withdrawal(&env, request_id), ErrorCode::DuplicateRequest)?;

        let (mut state, pool) = sync_pool(&env, &config)?;
        let assets = pool.assets_for(&env, shares)?;
        validate!(&env, assets > 0, ErrorCode::InvalidAmount, "Shares {} redeem nothing", shares)?;
        let cap = pool.instant_cap(&env, config.liquidity_bps)?;

        spend_balance(&env, &user, shares)?;
        state.total_shares = state.total_shares.safe_sub(shares, &env)?;
        TokenUtils::new(&env).events().burn(user.clone(), shares);

        if assets <= cap {
            save_state(&env, &state);
            transfer_token(&env, &config.asset, &env.current_contract_address(), &user, assets);

            VaultEvents::withdrawn(&env, user, shares, assets);

            return Ok(WithdrawOutcome::Immediate(assets));
        }

        let unbonding_period = OracleClient::new(&env, &config.oracle).get_unbonding_period();
        validate!(
            &env,
            (MIN_UNBONDING_PERIOD..=MAX_UNBONDING_PERIOD).contains(&unbonding_period),
            ErrorCode::ImplausibleUnbondingPeriod,
            "Oracle unbonding period {} out of range",
            unbonding_period
        )?;
        let now = env.ledger().timestamp();

        let request = WithdrawalRequest {
            id: request_id,
            owner: user.clone(),
            amount: assets,
            shares,
            requested_at: now,
            unlock_time: now.safe_add(unbonding_period, &env)?,
            claimed: false,
        };

        state.reserved = state.reserved.safe_add(assets, &env)?;
        save_state(&env, &state);
        save_withdrawal(&env, &request);

        VaultEvents::withdrawal_requested(
            &env,
            user,
            request_id,
            shares,
            assets,
            request.unlock_time
        );

        Ok(WithdrawOutcome::Queued(request))
    }

    fn claim_withdrawal(env: Env, user: Address, request_id: u128) -> Result<i128, ErrorCode> {
        let config = require_router(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        let mut request = get_withdrawal(&env, request_id).ok_or(ErrorCode::UnknownRequest)?;
        validate!(&env, request.owner == user, ErrorCode::RequestNotOwned)?;
        validate!(&env, !request.claimed, ErrorCode::AlreadyClaimed)?;
        validate!(
            &env,
            env.ledger().timestamp() >= request.unlock_time,
            ErrorCode::StillUnbonding,
            "Withdrawal unlocks at {}",
            request.unlock_time
        )?;

        let physical = asset_balance(&env, &config.asset);
        validate!(
            &env,
            physical >= request.amount,
            ErrorCode::InsufficientLiquidity,
            "Vault holds {} of {} owed",
            physical,
            request.amount
        )?;

        request.claimed = true;
        save_withdrawal(&env, &request);

        let mut state = get_state(&env);
        state.reserved = state.reserved.safe_sub(request.amount, &env)?.max(0);
        save_state(&env, &state);

        transfer_token(&env, &config.asset, &env.current_contract_address(), &user, request.amount);

        VaultEvents::withdrawal_claimed(&env, user, request_id, request.amount);

        Ok(request.amount)
    }

    // ################################################################
    //                             YIELD
    // ################################################################

    fn sync(env: Env) -> Result<VaultState, ErrorCode> {
        bump_instance(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env);
        let (state, _) = sync_pool(&env, &config)?;

        Ok(state)
    }

    fn compound(env: Env, operator: Address, amount: i128) -> Result<VaultState, ErrorCode> {
        access::require_capability(&env, &operator, Capability::Operator)?;
        bump_instance(&env);
        let _guard = ReentrancyGuard::acquire(&env)?;

        validate!(&env, amount >= 0, ErrorCode::InvalidAmount)?;

        let config = get_config(&env);
        let (mut state, _) = sync_pool(&env, &config)?;

        let mut retired = 0;
        if amount > 0 {
            transfer_token(&env, &config.asset, &operator, &env.current_contract_address(), amount);

            // anything above the booked accrual raises the share price
            retired = amount.min(state.accrued_virtual);
            state.accrued_virtual = state.accrued_virtual.safe_sub(retired, &env)?;
            save_state(&env, &state);
        }

        VaultEvents::compounded(&env, operator, amount, retired);

        Ok(state)
    }

    // ################################################################
    //                            QUERIES
    // ################################################################

    fn total_assets(env: Env) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        let (_, pool) = load_pool(&env, &config)?;
        pool.total_assets(&env)
    }

    fn convert_to_shares(env: Env, assets: i128) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        let (_, pool) = load_pool(&env, &config)?;
        pool.shares_for(&env, assets)
    }

    fn convert_to_assets(env: Env, shares: i128) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        let (_, pool) = load_pool(&env, &config)?;
        pool.assets_for(&env, shares)
    }

    fn max_instant_redeem(env: Env) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        let (_, pool) = load_pool(&env, &config)?;
        pool.instant_cap(&env, config.liquidity_bps)
    }

    fn get_withdrawal_request(env: Env, request_id: u128) -> Option<WithdrawalRequest> {
        get_withdrawal(&env, request_id)
    }

    fn query_state(env: Env) -> VaultState {
        get_state(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }
}

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "negative amount is not allowed: {}", amount);
        panic_with_error!(env, ErrorCode::InvalidAmount);
    }
}

#[contractimpl]
impl TokenInterface for CompoundingVault {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        unwrap_or_panic(
            &env,
            write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger)
        );
        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        unwrap_or_panic(&env, receive_balance(&env, &to, amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        unwrap_or_panic(&env, spend_allowance(&env, from.clone(), spender, amount));
        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        unwrap_or_panic(&env, receive_balance(&env, &to, amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        unwrap_or_panic(&env, burn_shares(&env, &from, amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        unwrap_or_panic(&env, spend_allowance(&env, from.clone(), spender, amount));
        unwrap_or_panic(&env, burn_shares(&env, &from, amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}

/// Burned shares forfeit their claim on the pool
fn burn_shares(env: &Env, from: &Address, amount: i128) -> HarborResult {
    spend_balance(env, from, amount)?;

    let mut state = get_state(env);
    state.total_shares = state.total_shares.safe_sub(amount, env)?;
    save_state(env, &state);

    Ok(())
}
