use harbor::{
    constants::DEFAULT_UNBONDING_PERIOD,
    error::ErrorCode,
    types::{ RequestStatus, RequestType },
};
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address, String };

use super::setup::{ Setup, EXTERNAL, EXTERNAL_PRICE, NATIVE, START, VALIDATOR_A, VALIDATOR_B };

#[test]
fn stake_unstake_and_claim_after_unbonding() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);

    let stake_id = setup.router.stake_direct(&user, &100, &validator);

    assert_eq!(setup.balance(&user), 0);
    assert_eq!(setup.balance(&setup.ledger.address), 100);

    let position = setup.ledger.get_position(&user, &validator).unwrap();
    assert_eq!(position.amount, 100);
    // 100 native at 0.1 external each
    assert_eq!(position.external_amount, 10);

    let record = setup.router.get_request(&stake_id);
    assert_eq!(record.request_type, RequestType::Stake);
    assert_eq!(record.status, RequestStatus::Pending);
    assert_eq!(record.requester, user);
    assert_eq!(record.amount, 100);
    assert_eq!(record.validator, Some(validator.clone()));

    let unstake_id = setup.router.unstake_direct(&user, &40, &validator);
    let unlock_time = START + DEFAULT_UNBONDING_PERIOD;

    assert_eq!(setup.router.get_unbonding_end(&user, &validator), Some(unlock_time));
    assert_eq!(setup.router.get_request(&unstake_id).request_type, RequestType::Unstake);

    let position = setup.ledger.get_position(&user, &validator).unwrap();
    assert_eq!(position.amount, 60);
    assert!(position.in_unstake);

    setup.advance(DEFAULT_UNBONDING_PERIOD);

    assert_eq!(setup.router.claim_unstake_direct(&user, &unstake_id), 40);
    assert_eq!(setup.balance(&user), 40);
    assert_eq!(setup.router.get_unbonding_end(&user, &validator), None);
    assert!(!setup.ledger.get_position(&user, &validator).unwrap().in_unstake);
}

#[test]
#[should_panic(expected = "Error(Contract, #23)")]
fn second_unstake_while_unbonding_is_rejected() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);

    setup.router.stake_direct(&user, &100, &validator);
    setup.router.unstake_direct(&user, &40, &validator);

    setup.router.unstake_direct(&user, &10, &validator);
}

#[test]
#[should_panic(expected = "Error(Contract, #21)")]
fn claim_before_unlock_is_rejected() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);

    setup.router.stake_direct(&user, &100, &validator);
    let id = setup.router.unstake_direct(&user, &40, &validator);

    setup.advance(DEFAULT_UNBONDING_PERIOD - 1);
    setup.router.claim_unstake_direct(&user, &id);
}

#[test]
#[should_panic(expected = "Error(Contract, #32)")]
fn unstake_is_claimed_only_once() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);

    setup.router.stake_direct(&user, &100, &validator);
    let id = setup.router.unstake_direct(&user, &40, &validator);

    setup.advance(DEFAULT_UNBONDING_PERIOD);
    setup.router.claim_unstake_direct(&user, &id);
    setup.router.claim_unstake_direct(&user, &id);
}

#[test]
fn restake_waits_for_the_unbonding_marker() {
    let setup = Setup::new(None);
    let user = setup.funded_user(150);
    let validator = setup.validator(VALIDATOR_A);

    setup.router.stake_direct(&user, &100, &validator);
    let id = setup.router.unstake_direct(&user, &40, &validator);

    assert_eq!(
        setup.router.try_stake_direct(&user, &50, &validator),
        Err(Ok(ErrorCode::StillUnbonding))
    );

    // another validator is unaffected
    setup.router.stake_direct(&user, &10, &setup.validator(VALIDATOR_B));

    setup.advance(DEFAULT_UNBONDING_PERIOD);
    setup.refresh_prices();
    setup.router.claim_unstake_direct(&user, &id);

    setup.router.stake_direct(&user, &40, &validator);
    assert_eq!(setup.ledger.get_position(&user, &validator).unwrap().amount, 100);
}

#[test]
fn stake_input_validation() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);

    assert_eq!(
        setup.router.try_stake_direct(&user, &0, &validator),
        Err(Ok(ErrorCode::InvalidAmount))
    );
    assert_eq!(
        setup.router.try_stake_direct(&user, &-5, &validator),
        Err(Ok(ErrorCode::InvalidAmount))
    );
    assert_eq!(
        setup.router.try_stake_direct(&user, &10, &String::from_str(&setup.env, "not a ref!")),
        Err(Ok(ErrorCode::MalformedValidator))
    );
    assert_eq!(
        setup.router.try_stake_direct(&user, &10, &String::from_str(&setup.env, "")),
        Err(Ok(ErrorCode::MalformedValidator))
    );
    assert_eq!(setup.router.query_state().sequence, 0);
}

#[test]
fn stake_needs_a_usable_native_price() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);

    setup.advance(2 * 3_600);

    assert_eq!(
        setup.router.try_stake_direct(&user, &100, &validator),
        Err(Ok(ErrorCode::PriceUnavailable))
    );

    // manually maintained fallbacks keep staking open
    setup.oracle.set_fallback_price(&setup.admin, &NATIVE, &2_000_000);
    setup.oracle.set_fallback_price(&setup.admin, &EXTERNAL, &EXTERNAL_PRICE);
    setup.router.stake_direct(&user, &100, &validator);

    let position = setup.ledger.get_position(&user, &validator).unwrap();
    assert_eq!(position.amount, 100);
    assert_eq!(position.external_amount, 20);
}

#[test]
fn record_ownership_and_type_are_checked() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let other = Address::generate(&setup.env);
    let validator = setup.validator(VALIDATOR_A);

    let stake_id = setup.router.stake_direct(&user, &100, &validator);
    let unstake_id = setup.router.unstake_direct(&user, &40, &validator);
    setup.advance(DEFAULT_UNBONDING_PERIOD);

    assert_eq!(
        setup.router.try_claim_unstake_direct(&other, &unstake_id),
        Err(Ok(ErrorCode::RequestNotOwned))
    );
    assert_eq!(
        setup.router.try_claim_unstake_direct(&user, &stake_id),
        Err(Ok(ErrorCode::WrongRequestType))
    );
    assert_eq!(
        setup.router.try_claim_unstake_direct(&user, &(unstake_id + 1_000)),
        Err(Ok(ErrorCode::UnknownRequest))
    );
}

#[test]
fn operator_completes_unstake_for_the_owner() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let stranger = Address::generate(&setup.env);
    let validator = setup.validator(VALIDATOR_A);

    setup.router.stake_direct(&user, &100, &validator);
    let id = setup.router.unstake_direct(&user, &25, &validator);
    setup.advance(DEFAULT_UNBONDING_PERIOD);

    assert_eq!(
        setup.router.try_complete_unstake(&stranger, &id),
        Err(Ok(ErrorCode::NotAuthorized))
    );

    assert_eq!(setup.router.complete_unstake(&setup.operator, &id), 25);
    assert_eq!(setup.balance(&user), 25);
    assert_eq!(setup.balance(&setup.operator), 0);
    assert_eq!(setup.router.get_unbonding_end(&user, &validator), None);
}

#[test]
fn emergency_withdrawal_returns_all_positions() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);

    setup.router.stake_direct(&user, &60, &setup.validator(VALIDATOR_A));
    setup.router.stake_direct(&user, &40, &setup.validator(VALIDATOR_B));
    assert_eq!(setup.router.get_user_validators(&user).len(), 2);

    setup.router.request_emergency_withdraw(&user);

    assert_eq!(setup.router.complete_emergency_withdraw(&setup.operator, &user), 100);
    assert_eq!(setup.balance(&user), 100);
    assert_eq!(setup.router.get_user_validators(&user), vec![&setup.env]);
}

#[test]
fn stale_unstake_claim_keeps_the_newer_unbonding_marker() {
    let setup = Setup::new(None);
    let user = setup.funded_user(150);
    let validator = setup.validator(VALIDATOR_A);

    setup.router.stake_direct(&user, &100, &validator);
    let stale_id = setup.router.unstake_direct(&user, &40, &validator);

    setup.router.request_emergency_withdraw(&user);
    setup.router.complete_emergency_withdraw(&setup.operator, &user);

    setup.advance(DEFAULT_UNBONDING_PERIOD);
    setup.refresh_prices();

    setup.router.stake_direct(&user, &50, &validator);
    let fresh_id = setup.router.unstake_direct(&user, &10, &validator);
    let fresh_end = setup.env.ledger().timestamp() + DEFAULT_UNBONDING_PERIOD;

    assert_eq!(setup.router.claim_unstake_direct(&user, &stale_id), 40);

    assert_eq!(setup.router.get_unbonding_end(&user, &validator), Some(fresh_end));
    assert!(setup.ledger.get_position(&user, &validator).unwrap().in_unstake);
    assert_eq!(
        setup.router.try_stake_direct(&user, &10, &validator),
        Err(Ok(ErrorCode::StillUnbonding))
    );

    setup.advance(DEFAULT_UNBONDING_PERIOD);
    setup.refresh_prices();
    assert_eq!(setup.router.claim_unstake_direct(&user, &fresh_id), 10);
    assert_eq!(setup.router.get_unbonding_end(&user, &validator), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #37)")]
fn emergency_completion_needs_intent() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);

    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));
    setup.router.complete_emergency_withdraw(&setup.operator, &user);
}

#[test]
fn migration_off_a_deprecated_validator() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let from = setup.validator(VALIDATOR_A);
    let to = setup.validator(VALIDATOR_B);

    setup.router.stake_direct(&user, &100, &from);
    setup.ledger.deprecate_validator(&setup.admin, &from);
    setup.advance(1);

    let position = setup.router.migrate_direct(&user, &from, &to);

    assert_eq!(position.amount, 100);
    assert_eq!(setup.ledger.get_position(&user, &from), None);
    assert_eq!(setup.router.get_user_validators(&user), vec![&setup.env, to.clone()]);
    assert_eq!(setup.ledger.get_validator(&to).unwrap().total_delegated, 100);
}
