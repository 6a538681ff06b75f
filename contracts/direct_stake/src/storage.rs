use harbor::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::ErrorCode,
    types::{ Position, UnstakeRequest, Validator },
};
use soroban_sdk::{ contracttype, panic_with_error, Address, Env, String, Vec };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Totals,
    Initialized,
    Validator(String),
    Validators,
    Position(Address, String),
    UserValidators(Address),
    Unstake(u128),
    EmergencyIntent(Address),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The only caller allowed to move positions
    pub router: Address,
    pub oracle: Address,
    pub stake_token: Address,
    /// Seconds a position must stay open before it can be unstaked
    pub min_stake_duration: u64,
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
pub struct Totals {
    /// Delegated principal plus unclaimed unstake amounts
    pub total_principal: i128,
    /// Funded separately, the only source of reward payouts
    pub reward_reserve: i128,
}

pub fn get_totals(env: &Env) -> Totals {
    let totals = env.storage().persistent().get(&DataKey::Totals).unwrap_or_default();
    if env.storage().persistent().has(&DataKey::Totals) {
        bump(env, &DataKey::Totals);
    }
    totals
}

pub fn save_totals(env: &Env, totals: &Totals) {
    env.storage().persistent().set(&DataKey::Totals, totals);
    bump(env, &DataKey::Totals);
}

// ################################################################

pub fn get_validator(env: &Env, id: &String) -> Option<Validator> {
    let key = DataKey::Validator(id.clone());
    let validator = env.storage().persistent().get::<_, Validator>(&key);
    if validator.is_some() {
        bump(env, &key);
    }
    validator
}

pub fn save_validator(env: &Env, validator: &Validator) {
    let key = DataKey::Validator(validator.id.clone());
    env.storage().persistent().set(&key, validator);
    bump(env, &key);
}

pub fn get_validator_ids(env: &Env) -> Vec<String> {
    let ids = env.storage()
        .persistent()
        .get(&DataKey::Validators)
        .unwrap_or(Vec::new(env));
    if !ids.is_empty() {
        bump(env, &DataKey::Validators);
    }
    ids
}

pub fn save_validator_ids(env: &Env, ids: &Vec<String>) {
    env.storage().persistent().set(&DataKey::Validators, ids);
    bump(env, &DataKey::Validators);
}

// ################################################################

pub fn get_position(env: &Env, user: &Address, validator: &String) -> Option<Position> {
    let key = DataKey::Position(user.clone(), validator.clone());
    let position = env.storage().persistent().get::<_, Position>(&key);
    if position.is_some() {
        bump(env, &key);
    }
    position
}

pub fn save_position(env: &Env, user: &Address, validator: &String, position: &Position) {
    let key = DataKey::Position(user.clone(), validator.clone());
    env.storage().persistent().set(&key, position);
    bump(env, &key);
}

pub fn remove_position(env: &Env, user: &Address, validator: &String) {
    env.storage().persistent().remove(&DataKey::Position(user.clone(), validator.clone()));
}

pub fn get_user_validators(env: &Env, user: &Address) -> Vec<String> {
    let key = DataKey::UserValidators(user.clone());
    let validators = env.storage().persistent().get(&key).unwrap_or(Vec::new(env));
    if !validators.is_empty() {
        bump(env, &key);
    }
    validators
}

pub fn save_user_validators(env: &Env, user: &Address, validators: &Vec<String>) {
    let key = DataKey::UserValidators(user.clone());
    if validators.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, validators);
    bump(env, &key);
}

// ################################################################

pub fn get_unstake_request(env: &Env, id: u128) -> Option<UnstakeRequest> {
    let key = DataKey::Unstake(id);
    let request = env.storage().persistent().get::<_, UnstakeRequest>(&key);
    if request.is_some() {
        bump(env, &key);
    }
    request
}

pub fn has_unstake_request(env: &Env, id: u128) -> bool {
    env.storage().persistent().has(&DataKey::Unstake(id))
}

pub fn save_unstake_request(env: &Env, request: &UnstakeRequest) {
    let key = DataKey::Unstake(request.id);
    env.storage().persistent().set(&key, request);
    bump(env, &key);
}

// ################################################################

pub fn get_emergency_intent(env: &Env, user: &Address) -> Option<u64> {
    env.storage().persistent().get(&DataKey::EmergencyIntent(user.clone()))
}

pub fn save_emergency_intent(env: &Env, user: &Address, requested_at: u64) {
    let key = DataKey::EmergencyIntent(user.clone());
    env.storage().persistent().set(&key, &requested_at);
    bump(env, &key);
}

pub fn remove_emergency_intent(env: &Env, user: &Address) {
    env.storage().persistent().remove(&DataKey::EmergencyIntent(user.clone()));
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
