use soroban_sdk::{ symbol_short, Env, String, Symbol };

use crate::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_VALIDATOR_REF_LEN },
    error::{ ErrorCode, HarborResult },
};

const ENTERED: Symbol = symbol_short!("ENTERED");

/// Marks the current contract as executing a mutating entry point until dropped.
///
/// The host already refuses to re-enter a contract; the guard also catches a sibling
/// entry point reached through a callback within the same contract instance.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> HarborResult<Self> {
        validate!(
            env,
            !env.storage().instance().has(&ENTERED),
            ErrorCode::Reentrancy,
            "Nested call into a guarded entry point"
        )?;
        env.storage().instance().set(&ENTERED, &true);

        Ok(ReentrancyGuard { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&ENTERED);
    }
}

pub fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn validate_amount(env: &Env, amount: i128) -> HarborResult {
    validate!(env, amount > 0, ErrorCode::InvalidAmount, "Amount must be positive: {}", amount)
}

/// Validator references are 1..=64 characters of `[A-Za-z0-9_-]`.
pub fn validate_validator_ref(env: &Env, validator: &String) -> HarborResult {
    let len = validator.len();
    validate!(
        env,
        len > 0 && len <= MAX_VALIDATOR_REF_LEN,
        ErrorCode::MalformedValidator,
        "Validator reference length out of range: {}",
        len
    )?;

    let mut buf = [0u8; MAX_VALIDATOR_REF_LEN as usize];
    let slice = &mut buf[..len as usize];
    validator.copy_into_slice(slice);

    validate!(
        env,
        slice.iter().all(|c| c.is_ascii_alphanumeric() || *c == b'_' || *c == b'-'),
        ErrorCode::MalformedValidator,
        "Validator reference contains invalid characters"
    )
}
