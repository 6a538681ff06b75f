use harbor::{ constants::ONE_DAY, error::ErrorCode };
use pretty_assertions::assert_eq;

use super::setup::{ Setup, VALIDATOR_A };

#[test]
fn claim_pays_reported_rewards_from_reserve() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));
    setup.fund_reward_reserve(50);
    setup.report_rewards(&user, 20);

    assert_eq!(setup.router.claim_rewards_direct(&user), 20);

    assert_eq!(setup.balance(&user), 20);
    assert_eq!(setup.oracle.get_user_claimable_rewards(&user), 0);
    assert_eq!(setup.ledger.query_totals().reward_reserve, 30);
    // principal is untouched
    assert_eq!(setup.ledger.query_totals().total_principal, 100);
    assert_eq!(setup.router.query_state().sequence, 2);
}

#[test]
fn reward_above_ceiling_is_rejected() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));
    setup.fund_reward_reserve(100);

    // 25% of a 100 principal
    setup.report_rewards(&user, 26);
    assert_eq!(
        setup.router.try_claim_rewards_direct(&user),
        Err(Ok(ErrorCode::RewardExceedsCeiling))
    );
    assert_eq!(setup.oracle.get_user_claimable_rewards(&user), 26);

    setup.report_rewards(&user, 25);
    assert_eq!(setup.router.claim_rewards_direct(&user), 25);
}

#[test]
fn lowered_ceiling_applies_to_next_claim() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));
    setup.fund_reward_reserve(100);
    setup.report_rewards(&user, 10);

    setup.router.update_config(&setup.admin, &Some(500), &None);
    assert_eq!(setup.router.query_config().reward_ceiling_bps, 500);

    assert_eq!(
        setup.router.try_claim_rewards_direct(&user),
        Err(Ok(ErrorCode::RewardExceedsCeiling))
    );

    assert_eq!(
        setup.router.try_update_config(&setup.admin, &Some(2_501), &None),
        Err(Ok(ErrorCode::InvalidParameter))
    );
}

#[test]
fn claims_respect_minimum_interval() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));
    setup.fund_reward_reserve(100);

    setup.report_rewards(&user, 10);
    setup.router.claim_rewards_direct(&user);

    setup.report_rewards(&user, 10);
    assert_eq!(
        setup.router.try_claim_rewards_direct(&user),
        Err(Ok(ErrorCode::IntervalNotElapsed))
    );

    setup.advance(ONE_DAY);
    assert_eq!(setup.router.claim_rewards_direct(&user), 10);
    assert_eq!(setup.balance(&user), 20);
}

#[test]
fn nothing_to_claim() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));

    assert_eq!(setup.router.try_claim_rewards_direct(&user), Err(Ok(ErrorCode::NoRewards)));
}

#[test]
fn unstake_settles_reported_rewards_first() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);
    setup.router.stake_direct(&user, &100, &validator);
    setup.fund_reward_reserve(50);

    setup.report_rewards(&user, 5);
    setup.router.claim_rewards_direct(&user);

    // inside the claim interval, the unstake still pays out
    setup.report_rewards(&user, 15);
    setup.router.unstake_direct(&user, &40, &validator);

    assert_eq!(setup.balance(&user), 20);
    assert_eq!(setup.oracle.get_user_claimable_rewards(&user), 0);
    assert_eq!(setup.ledger.query_totals().reward_reserve, 30);
}

#[test]
fn unstake_is_rejected_when_reward_breaks_ceiling() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);
    setup.router.stake_direct(&user, &100, &validator);
    setup.fund_reward_reserve(100);
    setup.report_rewards(&user, 60);

    assert_eq!(
        setup.router.try_unstake_direct(&user, &40, &validator),
        Err(Ok(ErrorCode::RewardExceedsCeiling))
    );
    assert_eq!(setup.ledger.get_position(&user, &validator).unwrap().amount, 100);
}

#[test]
fn operator_completes_reward_claim() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));
    setup.fund_reward_reserve(50);
    setup.report_rewards(&user, 12);

    assert_eq!(
        setup.router.try_complete_reward_claim(&user, &user),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(setup.router.complete_reward_claim(&setup.operator, &user), 12);
    assert_eq!(setup.balance(&user), 12);
}

#[test]
#[should_panic(expected = "Error(Contract, #41)")]
fn reserve_must_cover_the_reward() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_direct(&user, &100, &setup.validator(VALIDATOR_A));
    setup.report_rewards(&user, 10);

    setup.router.claim_rewards_direct(&user);
}
