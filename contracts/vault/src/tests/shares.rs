extern crate std;

use harbor::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::String;

use super::setup::Setup;

#[test]
fn share_token_metadata() {
    let setup = Setup::new(5_000);

    assert_eq!(setup.vault.name(), String::from_str(&setup.env, "Harbor Staked XLM"));
    assert_eq!(setup.vault.symbol(), String::from_str(&setup.env, "hXLM"));
    assert_eq!(setup.vault.decimals(), 7);
}

#[test]
fn shares_transfer_between_holders() {
    let setup = Setup::new(5_000);
    let alice = setup.user();
    let bob = setup.user();
    let carol = setup.user();

    setup.deposit(&alice, 1_000);

    setup.vault.transfer(&alice, &bob, &400);
    assert_eq!(setup.vault.balance(&alice), 600);
    assert_eq!(setup.vault.balance(&bob), 400);

    setup.vault.approve(&bob, &carol, &100, &1_000);
    assert_eq!(setup.vault.allowance(&bob, &carol), 100);

    setup.vault.transfer_from(&carol, &bob, &carol, &60);
    assert_eq!(setup.vault.balance(&carol), 60);
    assert_eq!(setup.vault.allowance(&bob, &carol), 40);

    // transfers never change the pool
    assert_eq!(setup.vault.query_state().total_shares, 1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #39)")]
fn transfer_beyond_balance_fails() {
    let setup = Setup::new(5_000);
    let alice = setup.user();
    let bob = setup.user();

    setup.deposit(&alice, 100);
    setup.vault.transfer(&alice, &bob, &101);
}

#[test]
fn burning_shares_forfeits_assets() {
    let setup = Setup::new(5_000);
    let alice = setup.user();
    let bob = setup.user();

    setup.deposit(&alice, 500);
    setup.deposit(&bob, 500);

    setup.vault.burn(&alice, &500);

    assert_eq!(setup.vault.query_state().total_shares, 500);
    assert_eq!(setup.vault.convert_to_assets(&500), 1_000);
    assert_eq!(
        setup.vault.try_redeem(&alice, &1, &1),
        Err(Ok(ErrorCode::InsufficientShares))
    );
}
