use harbor::{
    access::Capability,
    constants::{ DEFAULT_MIN_CLAIM_INTERVAL, DEFAULT_REWARD_CEILING_BPS },
    error::ErrorCode,
    types::RequestStatus,
};
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address, String };

use crate::storage::State;

use super::setup::{ Setup, EXTERNAL, NATIVE, VALIDATOR_A, VALIDATOR_B };

#[test]
fn initialize_stores_defaults() {
    let setup = Setup::new(None);

    let config = setup.router.query_config();
    assert_eq!(config.oracle, setup.oracle.address);
    assert_eq!(config.direct_stake, setup.ledger.address);
    assert_eq!(config.vault, setup.vault.address);
    assert_eq!(config.native_token, setup.token.address);
    assert_eq!(config.native_symbol, NATIVE);
    assert_eq!(config.external_symbol, EXTERNAL);
    assert_eq!(config.reward_ceiling_bps, DEFAULT_REWARD_CEILING_BPS);
    assert_eq!(config.min_claim_interval, DEFAULT_MIN_CLAIM_INTERVAL);

    assert_eq!(setup.router.query_state(), State { paused: false, sequence: 0 });
    assert!(setup.router.has_capability(&setup.admin, &Capability::Fulfiller));
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initialize_twice_is_rejected() {
    let setup = Setup::new(None);

    setup.router.initialize(
        &setup.admin,
        &setup.oracle.address,
        &setup.ledger.address,
        &setup.vault.address,
        &setup.token.address,
        &NATIVE,
        &EXTERNAL,
        &0
    );
}

#[test]
fn pause_blocks_user_paths() {
    let setup = Setup::new(None);
    let user = setup.funded_user(300);
    let validator = setup.validator(VALIDATOR_A);
    let id = setup.router.stake_direct(&user, &100, &validator);
    setup.router.stake_vault(&user, &100);

    setup.router.pause(&setup.admin);
    assert!(setup.router.query_state().paused);

    assert_eq!(
        setup.router.try_stake_direct(&user, &10, &validator),
        Err(Ok(ErrorCode::OperationPaused))
    );
    assert_eq!(
        setup.router.try_unstake_direct(&user, &10, &validator),
        Err(Ok(ErrorCode::OperationPaused))
    );
    assert_eq!(setup.router.try_stake_vault(&user, &10), Err(Ok(ErrorCode::OperationPaused)));
    assert_eq!(setup.router.try_withdraw_vault(&user, &10), Err(Ok(ErrorCode::OperationPaused)));
    assert_eq!(
        setup.router.try_claim_rewards_direct(&user),
        Err(Ok(ErrorCode::OperationPaused))
    );
    assert_eq!(
        setup.router.try_migrate_direct(&user, &validator, &setup.validator(VALIDATOR_B)),
        Err(Ok(ErrorCode::OperationPaused))
    );

    // privileged paths stay open
    setup.router.fulfill_request(
        &setup.fulfiller,
        &id,
        &RequestStatus::Fulfilled,
        &String::from_str(&setup.env, "")
    );
    setup.router.request_emergency_withdraw(&user);
    assert_eq!(setup.router.complete_emergency_withdraw(&setup.operator, &user), 100);

    setup.router.unpause(&setup.admin);
    setup.router.stake_vault(&user, &10);
}

#[test]
fn only_admin_pauses() {
    let setup = Setup::new(None);
    let stranger = Address::generate(&setup.env);

    assert_eq!(setup.router.try_pause(&stranger), Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(setup.router.try_unpause(&stranger), Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(
        setup.router.try_update_config(&stranger, &Some(100), &None),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}

#[test]
fn capabilities_can_be_revoked() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let id = setup.router.stake_vault(&user, &100);

    assert!(setup.router.has_capability(&setup.fulfiller, &Capability::Fulfiller));
    setup.router.revoke_capability(&setup.admin, &Capability::Fulfiller, &setup.fulfiller);
    assert!(!setup.router.has_capability(&setup.fulfiller, &Capability::Fulfiller));

    assert_eq!(
        setup.router.try_fulfill_request(
            &setup.fulfiller,
            &id,
            &RequestStatus::Fulfilled,
            &String::from_str(&setup.env, "")
        ),
        Err(Ok(ErrorCode::NotAuthorized))
    );

    setup.router.update_config(&setup.admin, &None, &Some(3_600));
    assert_eq!(setup.router.query_config().min_claim_interval, 3_600);
}
