use harbor::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::ErrorCode,
    types::{ RequestStatus, RequestType },
};
use soroban_sdk::{ contracttype, panic_with_error, Address, Env, String, Symbol };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
    Initialized,
    FreezeWindow,
    /// correlation record by router sequence
    Request(u64),
    /// secondary index, external id -> sequence
    RequestIndex(u128),
    /// unbonding end per (user, validator)
    Unbonding(Address, String),
    LastRewardClaim(Address),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub oracle: Address,
    pub direct_stake: Address,
    pub vault: Address,
    pub native_token: Address,
    pub native_symbol: Symbol,
    pub external_symbol: Symbol,
    /// Largest reward claim as a share of the user's direct principal
    pub reward_ceiling_bps: u32,
    pub min_claim_interval: u64,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    bump(env, &DataKey::Config);
}

pub fn get_config(env: &Env) -> Config {
    let config = env.storage()
        .persistent()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::NotInitialized));
    bump(env, &DataKey::Config);

    config
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub paused: bool,
    /// Last issued sequence; ids start at 1
    pub sequence: u64,
}

pub fn get_state(env: &Env) -> State {
    let state = env.storage().persistent().get(&DataKey::State).unwrap_or_default();
    if env.storage().persistent().has(&DataKey::State) {
        bump(env, &DataKey::State);
    }
    state
}

pub fn save_state(env: &Env, state: &State) {
    env.storage().persistent().set(&DataKey::State, state);
    bump(env, &DataKey::State);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreezeWindow {
    pub launch_ts: u64,
    pub freeze_duration: u64,
    /// Set by an admin freeze, holds until `unfreeze`
    pub manual: bool,
    /// The automatic window has ended or was lifted early
    pub lapsed: bool,
}

pub fn get_freeze_window(env: &Env) -> FreezeWindow {
    let window = env.storage()
        .persistent()
        .get(&DataKey::FreezeWindow)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::NotInitialized));
    bump(env, &DataKey::FreezeWindow);

    window
}

pub fn save_freeze_window(env: &Env, window: &FreezeWindow) {
    env.storage().persistent().set(&DataKey::FreezeWindow, window);
    bump(env, &DataKey::FreezeWindow);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrelationRecord {
    pub id: u128,
    pub requester: Address,
    pub amount: i128,
    pub validator: Option<String>,
    pub created_at: u64,
    pub updated_at: u64,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub reason: String,
}

pub fn get_record(env: &Env, sequence: u64) -> Option<CorrelationRecord> {
    let key = DataKey::Request(sequence);
    let record = env.storage().persistent().get::<_, CorrelationRecord>(&key);
    if record.is_some() {
        bump(env, &key);
    }
    record
}

pub fn save_record(env: &Env, sequence: u64, record: &CorrelationRecord) {
    let key = DataKey::Request(sequence);
    env.storage().persistent().set(&key, record);
    bump(env, &key);
}

pub fn get_indexed_sequence(env: &Env, id: u128) -> Option<u64> {
    let key = DataKey::RequestIndex(id);
    let sequence = env.storage().persistent().get::<_, u64>(&key);
    if sequence.is_some() {
        bump(env, &key);
    }
    sequence
}

pub fn save_index(env: &Env, id: u128, sequence: u64) {
    let key = DataKey::RequestIndex(id);
    env.storage().persistent().set(&key, &sequence);
    bump(env, &key);
}

// ################################################################

pub fn get_unbonding_end(env: &Env, user: &Address, validator: &String) -> Option<u64> {
    let key = DataKey::Unbonding(user.clone(), validator.clone());
    let end = env.storage().persistent().get::<_, u64>(&key);
    if end.is_some() {
        bump(env, &key);
    }
    end
}

pub fn save_unbonding_end(env: &Env, user: &Address, validator: &String, end: u64) {
    let key = DataKey::Unbonding(user.clone(), validator.clone());
    env.storage().persistent().set(&key, &end);
    bump(env, &key);
}

pub fn remove_unbonding_end(env: &Env, user: &Address, validator: &String) {
    env.storage().persistent().remove(&DataKey::Unbonding(user.clone(), validator.clone()));
}

pub fn get_last_reward_claim(env: &Env, user: &Address) -> Option<u64> {
    env.storage().persistent().get(&DataKey::LastRewardClaim(user.clone()))
}

pub fn save_last_reward_claim(env: &Env, user: &Address, at: u64) {
    let key = DataKey::LastRewardClaim(user.clone());
    env.storage().persistent().set(&key, &at);
    bump(env, &key);
}

pub mod utils {
    use soroban_sdk::token;

    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().persistent().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().persistent().set(&DataKey::Initialized, &true);
        bump(env, &DataKey::Initialized);
    }

    pub fn transfer_token(env: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) {
        let token_client = token::Client::new(env, asset);
        token_client.transfer(from, to, &amount);
    }
}
