use soroban_sdk::{ Address, Env, Symbol };

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when the vault is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[asset: Address, liquidity_bps: u32]`
    pub fn initialize(env: &Env, admin: Address, asset: Address, liquidity_bps: u32) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (asset, liquidity_bps));
    }

    /// Emitted when assets are pooled for shares
    ///
    /// - topics - `["deposit", user: Address]`
    /// - data - `[assets: i128, shares: i128]`
    pub fn deposit(env: &Env, user: Address, assets: i128, shares: i128) {
        let topics = (Symbol::new(env, "deposit"), user);
        env.events().publish(topics, (assets, shares));
    }

    /// Emitted when shares are redeemed within the liquidity cap
    ///
    /// - topics - `["withdrawn", user: Address]`
    /// - data - `[shares: i128, assets: i128]`
    pub fn withdrawn(env: &Env, user: Address, shares: i128, assets: i128) {
        let topics = (Symbol::new(env, "withdrawn"), user);
        env.events().publish(topics, (shares, assets));
    }

    /// Emitted when a redemption above the cap is queued
    ///
    /// - topics - `["withdrawal_requested", user: Address]`
    /// - data - `[id: u128, shares: i128, assets: i128, unlock_time: u64]`
    pub fn withdrawal_requested(
        env: &Env,
        user: Address,
        id: u128,
        shares: i128,
        assets: i128,
        unlock_time: u64
    ) {
        let topics = (Symbol::new(env, "withdrawal_requested"), user);
        env.events().publish(topics, (id, shares, assets, unlock_time));
    }

    /// Emitted when a queued withdrawal is paid out
    ///
    /// - topics - `["withdrawal_claimed", user: Address]`
    /// - data - `[id: u128, assets: i128]`
    pub fn withdrawal_claimed(env: &Env, user: Address, id: u128, assets: i128) {
        let topics = (Symbol::new(env, "withdrawal_claimed"), user);
        env.events().publish(topics, (id, assets));
    }

    /// Emitted when the relay delivers yield
    ///
    /// - topics - `["compounded", operator: Address]`
    /// - data - `[amount: i128, retired_virtual: i128]`
    pub fn compounded(env: &Env, operator: Address, amount: i128, retired_virtual: i128) {
        let topics = (Symbol::new(env, "compounded"), operator);
        env.events().publish(topics, (amount, retired_virtual));
    }

    /// Emitted when the immediate redemption cap changes
    ///
    /// - topics - `["liquidity_updated"]`
    /// - data - `[liquidity_bps: u32]`
    pub fn liquidity_updated(env: &Env, liquidity_bps: u32) {
        let topics = (Symbol::new(env, "liquidity_updated"),);
        env.events().publish(topics, liquidity_bps);
    }
}
