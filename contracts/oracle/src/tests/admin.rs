extern crate std;

use harbor::{
    access::Capability,
    constants::{ DEFAULT_UNBONDING_PERIOD, ONE_DAY },
    error::ErrorCode,
};
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address, Env };

use super::setup::{ deploy_oracle_contract, holder_with, ONE_HOUR };
use crate::storage::Config;

#[test]
fn initialize_oracle_contract() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let oracle = deploy_oracle_contract(&env, admin.clone(), None);

    assert_eq!(oracle.query_config(), Config {
        freshness_threshold: ONE_HOUR,
        unbonding_period: DEFAULT_UNBONDING_PERIOD,
        apr_bps: 0,
        apy_bps: 0,
    });
    assert!(oracle.has_capability(&admin, &Capability::Admin));
    // admin implies every other capability
    assert!(oracle.has_capability(&admin, &Capability::PriceUpdater));
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initializing_twice_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let oracle = deploy_oracle_contract(&env, admin.clone(), None);

    oracle.initialize(&admin, &ONE_HOUR, &DEFAULT_UNBONDING_PERIOD);
}

#[test]
fn rates_are_bounded_at_write_time() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let oracle = deploy_oracle_contract(&env, admin.clone(), None);
    let manager = holder_with(&env, &oracle, &admin, Capability::Manager);

    oracle.set_apr(&manager, &1_200);
    oracle.set_apy(&manager, &900);
    oracle.set_unbonding_period(&manager, &(14 * ONE_DAY));

    assert_eq!(oracle.get_current_apr(), 1_200);
    assert_eq!(oracle.get_current_apy(), 900);
    assert_eq!(oracle.get_unbonding_period(), 14 * ONE_DAY);

    assert_eq!(oracle.try_set_apr(&manager, &5_001), Err(Ok(ErrorCode::ImplausibleRate)));
    assert_eq!(oracle.try_set_apy(&manager, &10_000), Err(Ok(ErrorCode::ImplausibleRate)));
    assert_eq!(
        oracle.try_set_unbonding_period(&manager, &0),
        Err(Ok(ErrorCode::ImplausibleUnbondingPeriod))
    );
    assert_eq!(
        oracle.try_set_unbonding_period(&manager, &(91 * ONE_DAY)),
        Err(Ok(ErrorCode::ImplausibleUnbondingPeriod))
    );

    assert_eq!(oracle.get_current_apr(), 1_200);
}

#[test]
fn revoked_capability_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let oracle = deploy_oracle_contract(&env, admin.clone(), None);
    let manager = holder_with(&env, &oracle, &admin, Capability::Manager);

    oracle.revoke_capability(&admin, &Capability::Manager, &manager);

    assert!(!oracle.has_capability(&manager, &Capability::Manager));
    assert_eq!(oracle.try_set_apr(&manager, &100), Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(
        oracle.try_grant_capability(&manager, &Capability::Admin, &manager),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}
