use harbor::{ constants::ONE_WEEK, error::ErrorCode };
use pretty_assertions::assert_eq;

use crate::storage::FreezeWindow;

use super::setup::{ Setup, START, VALIDATOR_A };

#[test]
fn launch_window_blocks_unstake_but_not_stake() {
    let setup = Setup::new(ONE_WEEK);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);

    assert!(setup.router.is_frozen());
    setup.router.stake_direct(&user, &100, &validator);

    assert_eq!(
        setup.router.try_unstake_direct(&user, &40, &validator),
        Err(Ok(ErrorCode::FreezeWindowActive))
    );

    setup.advance(ONE_WEEK - 1);
    assert!(setup.router.is_frozen());

    setup.advance(1);
    assert!(!setup.router.is_frozen());
    setup.router.unstake_direct(&user, &40, &validator);
}

#[test]
fn check_and_unfreeze_persists_the_lapse() {
    let setup = Setup::new(ONE_WEEK);

    assert_eq!(
        setup.router.get_freeze_window(),
        FreezeWindow {
            launch_ts: START,
            freeze_duration: ONE_WEEK,
            manual: false,
            lapsed: false,
        }
    );

    assert!(!setup.router.check_and_unfreeze());
    assert!(!setup.router.get_freeze_window().lapsed);

    setup.advance(ONE_WEEK);
    assert!(setup.router.check_and_unfreeze());
    assert!(setup.router.get_freeze_window().lapsed);
    assert!(setup.router.check_and_unfreeze());
}

#[test]
fn manual_freeze_holds_until_lifted() {
    let setup = Setup::new(None);
    let user = setup.funded_user(100);
    setup.router.stake_vault(&user, &100);

    assert!(!setup.router.is_frozen());
    setup.router.freeze(&setup.admin);
    assert!(setup.router.is_frozen());

    setup.advance(4 * ONE_WEEK);
    assert!(!setup.router.check_and_unfreeze());
    assert_eq!(
        setup.router.try_withdraw_vault(&user, &10),
        Err(Ok(ErrorCode::FreezeWindowActive))
    );

    setup.router.unfreeze(&setup.admin);
    assert!(!setup.router.is_frozen());
    setup.router.withdraw_vault(&user, &10);
}

#[test]
fn admin_can_lift_the_launch_window_early() {
    let setup = Setup::new(ONE_WEEK);
    let user = setup.funded_user(100);
    let validator = setup.validator(VALIDATOR_A);
    setup.router.stake_direct(&user, &100, &validator);

    setup.router.unfreeze(&setup.admin);

    assert!(!setup.router.is_frozen());
    setup.router.unstake_direct(&user, &40, &validator);
}

#[test]
fn only_admin_controls_the_freeze() {
    let setup = Setup::new(None);

    assert_eq!(
        setup.router.try_freeze(&setup.operator),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        setup.router.try_unfreeze(&setup.operator),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}
