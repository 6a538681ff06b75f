use harbor::{
    constants::DEFAULT_UNBONDING_PERIOD,
    error::ErrorCode,
    request_id::RequestId,
    types::{ RequestStatus, RequestType, WithdrawOutcome },
};
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::{ Address as _, Events }, Address, IntoVal, Symbol };

use super::setup::Setup;

#[test]
fn stake_vault_mints_shares_and_records_request() {
    let setup = Setup::new(None);
    let user = setup.funded_user(1_000);

    let id = setup.router.stake_vault(&user, &1_000);

    assert_eq!(setup.vault.balance(&user), 1_000);
    assert_eq!(setup.balance(&setup.vault.address), 1_000);

    let record = setup.router.get_request(&id);
    assert_eq!(record.request_type, RequestType::Stake);
    assert_eq!(record.validator, None);
    assert_eq!(record.status, RequestStatus::Pending);
}

#[test]
fn withdraw_is_immediate_within_cap_and_queued_above_it() {
    let setup = Setup::new(None);
    let user = setup.funded_user(1_000);
    setup.router.stake_vault(&user, &1_000);

    // half of 1000 free assets can leave at once
    let outcome = setup.router.withdraw_vault(&user, &300);
    assert_eq!(outcome, WithdrawOutcome::Immediate(300));
    assert_eq!(setup.balance(&user), 300);

    let sequence_after_immediate = setup.router.query_state().sequence;

    // cap is now 350
    let request = match setup.router.withdraw_vault(&user, &500) {
        WithdrawOutcome::Queued(request) => request,
        other => panic!("expected a queued withdrawal, got {:?}", other),
    };
    assert_eq!(request.amount, 500);
    assert_eq!(request.unlock_time, super::setup::START + DEFAULT_UNBONDING_PERIOD);
    assert_eq!(setup.vault.balance(&user), 200);
    assert_eq!(setup.router.query_state().sequence, sequence_after_immediate + 1);

    let record = setup.router.get_request(&request.id);
    assert_eq!(record.request_type, RequestType::Withdraw);
    assert_eq!(record.amount, 500);

    assert_eq!(
        setup.router.try_claim_withdrawal_vault(&Address::generate(&setup.env), &request.id),
        Err(Ok(ErrorCode::RequestNotOwned))
    );

    setup.advance(DEFAULT_UNBONDING_PERIOD);
    assert_eq!(setup.router.claim_withdrawal_vault(&user, &request.id), 500);
    assert_eq!(setup.balance(&user), 800);
}

#[test]
fn immediate_withdrawal_event_carries_its_request_id() {
    let setup = Setup::new(None);
    let user = setup.funded_user(1_000);
    setup.router.stake_vault(&user, &1_000);

    let outcome = setup.router.withdraw_vault(&user, &300);
    assert_eq!(outcome, WithdrawOutcome::Immediate(300));

    let (contract, topics, data) = setup.env.events().all().last().unwrap();
    assert_eq!(contract, setup.router.address);

    let name: Symbol = topics.get(0).unwrap().into_val(&setup.env);
    let owner: Address = topics.get(1).unwrap().into_val(&setup.env);
    let id: u128 = topics.get(2).unwrap().into_val(&setup.env);
    let amounts: (i128, i128) = data.into_val(&setup.env);
    assert_eq!(name, Symbol::new(&setup.env, "withdrawn"));
    assert_eq!(owner, user);
    assert_eq!(amounts, (300, 300));

    let Some(RequestId::Structured(structured)) = setup.router.decode_request_id(&id) else {
        panic!("expected a structured id");
    };
    assert_eq!(structured.request_type, RequestType::Withdraw);
    assert_eq!(structured.sequence, setup.router.query_state().sequence);

    // paid on the spot, so nothing is left to look up
    assert_eq!(setup.router.try_get_request(&id), Err(Ok(ErrorCode::UnknownRequest)));
}

#[test]
#[should_panic(expected = "Error(Contract, #21)")]
fn queued_withdrawal_waits_for_unlock() {
    let setup = Setup::new(None);
    let user = setup.funded_user(1_000);
    setup.router.stake_vault(&user, &1_000);

    let outcome = setup.router.withdraw_vault(&user, &800);
    let WithdrawOutcome::Queued(request) = outcome else {
        panic!("expected a queued withdrawal");
    };

    setup.router.claim_withdrawal_vault(&user, &request.id);
}

#[test]
fn vault_claim_rejects_direct_requests() {
    let setup = Setup::new(None);
    let user = setup.funded_user(1_000);

    let id = setup.router.stake_vault(&user, &1_000);

    assert_eq!(
        setup.router.try_claim_withdrawal_vault(&user, &id),
        Err(Ok(ErrorCode::WrongRequestType))
    );
}

#[test]
fn withdraw_rejects_empty_amount() {
    let setup = Setup::new(None);
    let user = setup.funded_user(1_000);
    setup.router.stake_vault(&user, &1_000);

    assert_eq!(setup.router.try_withdraw_vault(&user, &0), Err(Ok(ErrorCode::InvalidAmount)));
}
