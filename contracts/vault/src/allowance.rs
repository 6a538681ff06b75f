use harbor::{ error::{ ErrorCode, HarborResult }, validate };
use soroban_sdk::{ Address, Env };

use crate::storage::{ AllowanceDataKey, AllowanceValue, DataKey };

pub fn read_allowance(env: &Env, from: Address, spender: Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    if let Some(allowance) = env.storage().temporary().get::<_, AllowanceValue>(&key) {
        if allowance.expiration_ledger < env.ledger().sequence() {
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            }
        } else {
            allowance
        }
    } else {
        AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        }
    }
}

pub fn write_allowance(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32
) -> HarborResult {
    validate!(
        env,
        amount == 0 || expiration_ledger >= env.ledger().sequence(),
        ErrorCode::InvalidParameter,
        "expiration_ledger {} is less than ledger seq when amount > 0",
        expiration_ledger
    )?;

    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };

    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - env.ledger().sequence();
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }

    Ok(())
}

pub fn spend_allowance(env: &Env, from: Address, spender: Address, amount: i128) -> HarborResult {
    let allowance = read_allowance(env, from.clone(), spender.clone());
    validate!(
        env,
        allowance.amount >= amount,
        ErrorCode::InsufficientShares,
        "Allowance {} below {}",
        allowance.amount,
        amount
    )?;
    if amount > 0 {
        write_allowance(env, from, spender, allowance.amount - amount, allowance.expiration_ledger)?;
    }
    Ok(())
}
