use harbor::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::ErrorCode,
};
use soroban_sdk::{ contracttype, panic_with_error, Address, Env, Symbol };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Price(Symbol),
    Claimable(Address),
    Initialized,
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Max age in seconds of a primary price before the fallback is used
    pub freshness_threshold: u64,
    pub unbonding_period: u64,
    pub apr_bps: u32,
    pub apy_bps: u32,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    let config = env.storage()
        .persistent()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::NotInitialized));

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    config
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceState {
    pub price: i128,
    pub updated_at: u64,
    /// Manually maintained, used once `price` goes stale
    pub fallback_price: i128,
}

pub fn get_price_state(env: &Env, symbol: &Symbol) -> PriceState {
    let key = DataKey::Price(symbol.clone());
    let state = env.storage().persistent().get::<_, PriceState>(&key);

    match state {
        Some(state) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            state
        }
        None => PriceState::default(),
    }
}

pub fn save_price_state(env: &Env, symbol: &Symbol, state: &PriceState) {
    let key = DataKey::Price(symbol.clone());
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################

pub fn get_claimable(env: &Env, user: &Address) -> i128 {
    let key = DataKey::Claimable(user.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    if amount > 0 {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    amount
}

pub fn save_claimable(env: &Env, user: &Address, amount: i128) {
    let key = DataKey::Claimable(user.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub mod utils {
    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().persistent().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().persistent().set(&DataKey::Initialized, &true);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Initialized, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}
