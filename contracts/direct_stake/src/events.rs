use harbor::types::ValidatorStatus;
use soroban_sdk::{ Address, Env, String, Symbol };

pub struct DirectStakeEvents {}

impl DirectStakeEvents {
    /// Emitted when the ledger is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[router: Address]`
    pub fn initialize(env: &Env, admin: Address, router: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, router);
    }

    /// Emitted when a validator is registered
    ///
    /// - topics - `["validator_added", validator: String]`
    /// - data - ()
    pub fn validator_added(env: &Env, validator: String) {
        let topics = (Symbol::new(env, "validator_added"), validator);
        env.events().publish(topics, ());
    }

    /// Emitted when a validator changes status
    ///
    /// - topics - `["validator_status", validator: String]`
    /// - data - `[status: ValidatorStatus]`
    pub fn validator_status(env: &Env, validator: String, status: ValidatorStatus) {
        let topics = (Symbol::new(env, "validator_status"), validator);
        env.events().publish(topics, status);
    }

    /// Emitted when a position is created or extended
    ///
    /// - topics - `["staked", user: Address, validator: String]`
    /// - data - `[amount: i128, external_amount: i128]`
    pub fn staked(env: &Env, user: Address, validator: String, amount: i128, external_amount: i128) {
        let topics = (Symbol::new(env, "staked"), user, validator);
        env.events().publish(topics, (amount, external_amount));
    }

    /// Emitted when part of a position enters unbonding
    ///
    /// - topics - `["unstake_requested", user: Address, validator: String]`
    /// - data - `[id: u128, amount: i128, unlock_time: u64]`
    pub fn unstake_requested(
        env: &Env,
        user: Address,
        validator: String,
        id: u128,
        amount: i128,
        unlock_time: u64
    ) {
        let topics = (Symbol::new(env, "unstake_requested"), user, validator);
        env.events().publish(topics, (id, amount, unlock_time));
    }

    /// Emitted when unbonded principal is paid out
    ///
    /// - topics - `["unstake_claimed", user: Address]`
    /// - data - `[id: u128, amount: i128]`
    pub fn unstake_claimed(env: &Env, user: Address, id: u128, amount: i128) {
        let topics = (Symbol::new(env, "unstake_claimed"), user);
        env.events().publish(topics, (id, amount));
    }

    /// Emitted when reported rewards are paid from the reserve
    ///
    /// - topics - `["rewards_paid", user: Address]`
    /// - data - `[amount: i128]`
    pub fn rewards_paid(env: &Env, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "rewards_paid"), user);
        env.events().publish(topics, amount);
    }

    /// Emitted when the reward reserve is topped up
    ///
    /// - topics - `["rewards_funded", funder: Address]`
    /// - data - `[amount: i128, reserve: i128]`
    pub fn rewards_funded(env: &Env, funder: Address, amount: i128, reserve: i128) {
        let topics = (Symbol::new(env, "rewards_funded"), funder);
        env.events().publish(topics, (amount, reserve));
    }

    /// Emitted when a user flags an emergency withdrawal
    ///
    /// - topics - `["emergency_intent", user: Address]`
    /// - data - `[requested_at: u64]`
    pub fn emergency_intent(env: &Env, user: Address, requested_at: u64) {
        let topics = (Symbol::new(env, "emergency_intent"), user);
        env.events().publish(topics, requested_at);
    }

    /// Emitted when every position of a user is force-closed
    ///
    /// - topics - `["emergency_withdrawn", user: Address]`
    /// - data - `[amount: i128]`
    pub fn emergency_withdrawn(env: &Env, user: Address, amount: i128) {
        let topics = (Symbol::new(env, "emergency_withdrawn"), user);
        env.events().publish(topics, amount);
    }

    /// Emitted when a position moves off a deprecated validator
    ///
    /// - topics - `["migrated", user: Address]`
    /// - data - `[from: String, to: String, amount: i128]`
    pub fn migrated(env: &Env, user: Address, from: String, to: String, amount: i128) {
        let topics = (Symbol::new(env, "migrated"), user);
        env.events().publish(topics, (from, to, amount));
    }
}
