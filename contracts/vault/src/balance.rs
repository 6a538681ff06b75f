use harbor::{
    constants::{ BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD },
    error::{ ErrorCode, HarborResult },
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::storage::DataKey;

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) -> HarborResult {
    let balance = read_balance(env, addr);
    write_balance(env, addr, balance.safe_add(amount, env)?);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) -> HarborResult {
    let balance = read_balance(env, addr);
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientShares,
        "Share balance {} below {}",
        balance,
        amount
    )?;
    write_balance(env, addr, balance - amount);
    Ok(())
}
