use soroban_sdk::{ Address, Env, Symbol };

pub struct OracleEvents {}

impl OracleEvents {
    /// Emitted when the gateway is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[freshness_threshold: u64, unbonding_period: u64]`
    pub fn initialize(env: &Env, admin: Address, freshness_threshold: u64, unbonding_period: u64) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (freshness_threshold, unbonding_period));
    }

    /// Emitted when a price updater pushes a primary price
    ///
    /// - topics - `["price_updated", symbol: Symbol]`
    /// - data - `[price: i128, timestamp: u64]`
    pub fn price_updated(env: &Env, symbol: Symbol, price: i128, timestamp: u64) {
        let topics = (Symbol::new(env, "price_updated"), symbol);
        env.events().publish(topics, (price, timestamp));
    }

    /// Emitted when a manager sets the fallback price of a symbol
    ///
    /// - topics - `["fallback_updated", symbol: Symbol]`
    /// - data - `[price: i128]`
    pub fn fallback_updated(env: &Env, symbol: Symbol, price: i128) {
        let topics = (Symbol::new(env, "fallback_updated"), symbol);
        env.events().publish(topics, price);
    }

    /// Emitted when a rate parameter changes (`apr`, `apy`, `unbonding`, `freshness`)
    ///
    /// - topics - `["param_updated", name: Symbol]`
    /// - data - `[value: u64]`
    pub fn param_updated(env: &Env, name: Symbol, value: u64) {
        let topics = (Symbol::new(env, "param_updated"), name);
        env.events().publish(topics, value);
    }

    /// Emitted when a reward writer reports claimable rewards for a user
    ///
    /// - topics - `["rewards_reported", user: Address]`
    /// - data - `[claimable: i128]`
    pub fn rewards_reported(env: &Env, user: Address, claimable: i128) {
        let topics = (Symbol::new(env, "rewards_reported"), user);
        env.events().publish(topics, claimable);
    }

    /// Emitted when a user's claimable rewards are cleared ahead of a payout
    ///
    /// - topics - `["rewards_cleared", user: Address]`
    /// - data - `[cleared: i128]`
    pub fn rewards_cleared(env: &Env, user: Address, cleared: i128) {
        let topics = (Symbol::new(env, "rewards_cleared"), user);
        env.events().publish(topics, cleared);
    }
}
