use harbor::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::ErrorCode,
    types::WithdrawalRequest,
};
use soroban_sdk::{ contracttype, panic_with_error, Address, Env };

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
    Initialized,
    Withdrawal(u128),
    Balance(Address),
    Allowance(AllowanceDataKey),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub router: Address,
    pub oracle: Address,
    /// The pooled asset, paid in and out of the vault
    pub asset: Address,
    /// Share of the free balance that may leave in a single immediate redemption
    pub liquidity_bps: u32,
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
pub struct VaultState {
    pub total_shares: i128,
    /// Assets owed to queued withdrawals, excluded from the pool
    pub reserved: i128,
    /// Yield booked from the rate but not yet delivered by the relay
    pub accrued_virtual: i128,
    pub last_sync: u64,
}

pub fn get_state(env: &Env) -> VaultState {
    let state = env.storage().persistent().get(&DataKey::State).unwrap_or_default();
    if env.storage().persistent().has(&DataKey::State) {
        bump(env, &DataKey::State);
    }
    state
}

pub fn save_state(env: &Env, state: &VaultState) {
    env.storage().persistent().set(&DataKey::State, state);
    bump(env, &DataKey::State);
}

// ################################################################

pub fn get_withdrawal(env: &Env, id: u128) -> Option<WithdrawalRequest> {
    let key = DataKey::Withdrawal(id);
    let request = env.storage().persistent().get::<_, WithdrawalRequest>(&key);
    if request.is_some() {
        bump(env, &key);
    }
    request
}

pub fn has_withdrawal(env: &Env, id: u128) -> bool {
    env.storage().persistent().has(&DataKey::Withdrawal(id))
}

pub fn save_withdrawal(env: &Env, request: &WithdrawalRequest) {
    let key = DataKey::Withdrawal(request.id);
    env.storage().persistent().set(&key, request);
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

    pub fn asset_balance(env: &Env, asset: &Address) -> i128 {
        token::Client::new(env, asset).balance(&env.current_contract_address())
    }
}
