use harbor::types::RequestStatus;
use soroban_sdk::{ Address, Env, String, Symbol };

pub struct RouterEvents {}

impl RouterEvents {
    /// Emitted when the router is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[launch_ts: u64, freeze_duration: u64]`
    pub fn initialize(env: &Env, admin: Address, launch_ts: u64, freeze_duration: u64) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (launch_ts, freeze_duration));
    }

    /// Emitted when a user stakes, directly or into the vault. For the vault the second
    /// amount is the number of shares minted.
    ///
    /// - topics - `["staked", user: Address, id: u128]`
    /// - data - `[amount: i128, external_amount: i128, validator: Option<String>]`
    pub fn staked(
        env: &Env,
        user: Address,
        id: u128,
        amount: i128,
        external_amount: i128,
        validator: Option<String>
    ) {
        let topics = (Symbol::new(env, "staked"), user, id);
        env.events().publish(topics, (amount, external_amount, validator));
    }

    /// Emitted when a direct unstake is queued
    ///
    /// - topics - `["unstake_requested", user: Address, id: u128]`
    /// - data - `[amount: i128, validator: String, unlock_time: u64]`
    pub fn unstake_requested(
        env: &Env,
        user: Address,
        id: u128,
        amount: i128,
        validator: String,
        unlock_time: u64
    ) {
        let topics = (Symbol::new(env, "unstake_requested"), user, id);
        env.events().publish(topics, (amount, validator, unlock_time));
    }

    /// - topics - `["validator_unbonding_started", user: Address, validator: String]`
    /// - data - `[unbonding_end: u64]`
    pub fn validator_unbonding_started(env: &Env, user: Address, validator: String, end: u64) {
        let topics = (Symbol::new(env, "validator_unbonding_started"), user, validator);
        env.events().publish(topics, end);
    }

    /// Emitted when unbonded principal reaches the owner
    ///
    /// - topics - `["unstake_claimed", user: Address, id: u128]`
    /// - data - `[amount: i128]`
    pub fn unstake_claimed(env: &Env, user: Address, id: u128, amount: i128) {
        let topics = (Symbol::new(env, "unstake_claimed"), user, id);
        env.events().publish(topics, amount);
    }

    /// - topics - `["validator_unbonding_ended", user: Address, validator: String]`
    /// - data - ()
    pub fn validator_unbonding_ended(env: &Env, user: Address, validator: String) {
        let topics = (Symbol::new(env, "validator_unbonding_ended"), user, validator);
        env.events().publish(topics, ());
    }

    /// Emitted when a vault redemption is above the instant cap and gets queued
    ///
    /// - topics - `["withdrawal_requested", user: Address, id: u128]`
    /// - data - `[shares: i128, assets: i128, unlock_time: u64]`
    pub fn withdrawal_requested(
        env: &Env,
        user: Address,
        id: u128,
        shares: i128,
        assets: i128,
        unlock_time: u64
    ) {
        let topics = (Symbol::new(env, "withdrawal_requested"), user, id);
        env.events().publish(topics, (shares, assets, unlock_time));
    }

    /// Emitted when a vault redemption is paid in the same call
    ///
    /// - topics - `["withdrawn", user: Address, id: u128]`
    /// - data - `[shares: i128, assets: i128]`
    pub fn withdrawn(env: &Env, user: Address, id: u128, shares: i128, assets: i128) {
        let topics = (Symbol::new(env, "withdrawn"), user, id);
        env.events().publish(topics, (shares, assets));
    }

    /// - topics - `["withdrawal_claimed", user: Address, id: u128]`
    /// - data - `[assets: i128]`
    pub fn withdrawal_claimed(env: &Env, user: Address, id: u128, assets: i128) {
        let topics = (Symbol::new(env, "withdrawal_claimed"), user, id);
        env.events().publish(topics, assets);
    }

    /// Emitted when reported rewards are paid out of the reserve
    ///
    /// - topics - `["rewards_claimed", user: Address]`
    /// - data - `[id: Option<u128>, amount: i128]`
    pub fn rewards_claimed(env: &Env, user: Address, id: Option<u128>, amount: i128) {
        let topics = (Symbol::new(env, "rewards_claimed"), user);
        env.events().publish(topics, (id, amount));
    }

    /// Emitted when the relay settles a pending request
    ///
    /// - topics - `["request_fulfilled", id: u128]`
    /// - data - `[status: RequestStatus, reason: String]`
    pub fn request_fulfilled(env: &Env, id: u128, status: RequestStatus, reason: String) {
        let topics = (Symbol::new(env, "request_fulfilled"), id);
        env.events().publish(topics, (status, reason));
    }

    /// - topics - `["emergency_requested", user: Address]`
    /// - data - `[requested_at: u64]`
    pub fn emergency_requested(env: &Env, user: Address, requested_at: u64) {
        let topics = (Symbol::new(env, "emergency_requested"), user);
        env.events().publish(topics, requested_at);
    }

    /// - topics - `["emergency_withdrawn", user: Address]`
    /// - data - `[operator: Address, amount: i128]`
    pub fn emergency_withdrawn(env: &Env, user: Address, operator: Address, amount: i128) {
        let topics = (Symbol::new(env, "emergency_withdrawn"), user);
        env.events().publish(topics, (operator, amount));
    }

    /// - topics - `["migrated", user: Address]`
    /// - data - `[from: String, to: String, amount: i128]`
    pub fn migrated(env: &Env, user: Address, from: String, to: String, amount: i128) {
        let topics = (Symbol::new(env, "migrated"), user);
        env.events().publish(topics, (from, to, amount));
    }

    /// - topics - `["frozen", admin: Address]`
    /// - data - ()
    pub fn frozen(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "frozen"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when an admin lifts the freeze or the launch window lapses
    ///
    /// - topics - `["unfrozen"]`
    /// - data - `[at: u64]`
    pub fn unfrozen(env: &Env, at: u64) {
        let topics = (Symbol::new(env, "unfrozen"),);
        env.events().publish(topics, at);
    }

    /// - topics - `["paused", admin: Address]`
    /// - data - ()
    pub fn paused(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "paused"), admin);
        env.events().publish(topics, ());
    }

    /// - topics - `["unpaused", admin: Address]`
    /// - data - ()
    pub fn unpaused(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "unpaused"), admin);
        env.events().publish(topics, ());
    }
}
