//! Capability checks shared by every Harbor contract.
//!
//! Each contract keeps its own holder table; `Admin` implies every other capability.

use soroban_sdk::{ contracttype, Address, Env };

use crate::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::{ ErrorCode, HarborResult },
};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Capability {
    Admin = 0,
    /// validator registry, fallback prices, rate parameters
    Manager = 1,
    /// relay completions (emergency withdrawals, reward claims, compounding)
    Operator = 2,
    /// flips correlation records out of Pending
    Fulfiller = 3,
    PriceUpdater = 4,
    RewardWriter = 5,
}

#[contracttype]
#[derive(Clone)]
pub enum AccessKey {
    Holder(Capability, Address),
}

pub fn grant(env: &Env, capability: Capability, holder: &Address) {
    let key = AccessKey::Holder(capability, holder.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn revoke(env: &Env, capability: Capability, holder: &Address) {
    env.storage().persistent().remove(&AccessKey::Holder(capability, holder.clone()));
}

fn holds(env: &Env, capability: Capability, holder: &Address) -> bool {
    let key = AccessKey::Holder(capability, holder.clone());
    let held = env.storage().persistent().get::<_, bool>(&key).unwrap_or(false);
    if held {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    held
}

pub fn has_capability(env: &Env, holder: &Address, capability: Capability) -> bool {
    holds(env, capability, holder) || holds(env, Capability::Admin, holder)
}

/// Requires `holder` to have signed the invocation and to hold `capability`.
pub fn require_capability(env: &Env, holder: &Address, capability: Capability) -> HarborResult {
    holder.require_auth();

    validate!(
        env,
        has_capability(env, holder, capability),
        ErrorCode::NotAuthorized,
        "Missing capability {}",
        capability as u32
    )
}

#[cfg(test)]
mod test {
    use soroban_sdk::{ contract, testutils::Address as _, Address, Env };

    use super::*;

    #[contract]
    struct AccessHost;

    #[test]
    fn admin_implies_every_capability() {
        let env = Env::default();
        env.mock_all_auths();
        let host = env.register(AccessHost, ());
        let admin = Address::generate(&env);
        let operator = Address::generate(&env);

        env.as_contract(&host, || {
            grant(&env, Capability::Admin, &admin);
            grant(&env, Capability::Operator, &operator);

            assert!(has_capability(&env, &admin, Capability::Fulfiller));
            assert!(has_capability(&env, &operator, Capability::Operator));
            assert!(!has_capability(&env, &operator, Capability::Manager));
            assert_eq!(require_capability(&env, &operator, Capability::Operator), Ok(()));
            assert_eq!(
                require_capability(&env, &operator, Capability::Fulfiller),
                Err(ErrorCode::NotAuthorized)
            );
        });
    }

    #[test]
    fn revoked_capability_is_gone() {
        let env = Env::default();
        let host = env.register(AccessHost, ());
        let updater = Address::generate(&env);

        env.as_contract(&host, || {
            grant(&env, Capability::PriceUpdater, &updater);
            revoke(&env, Capability::PriceUpdater, &updater);
            assert!(!has_capability(&env, &updater, Capability::PriceUpdater));
        });
    }
}
