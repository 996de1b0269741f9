#[path = "../common/mod.rs"]
mod common;

use libntag::operations::PasswordChangeState;
use libntag::test_support::SimulatedTag;
use libntag::types::{Credentials, Pack, Password};
use libntag::Error;

fn new_credentials() -> Credentials {
    Credentials::new(Password::new([0x98, 0x76, 0x54, 0x32]), Pack::new([0xCC, 0x00]))
}

#[test]
fn change_password_on_ntag213() -> anyhow::Result<()> {
    let (sim, mut tag) = common::helpers::identified(SimulatedTag::ntag213(&common::fixtures::UID));
    tag.change_password(Credentials::DEFAULT, new_credentials())?;

    assert_eq!(sim.borrow().credentials(), new_credentials());
    assert!(sim.borrow().is_authenticated());
    // PWD at page 43, PACK at page 44
    assert!(sim.borrow().log.contains(&vec![0xA2, 43, 0x98, 0x76, 0x54, 0x32]));
    assert!(sim.borrow().log.contains(&vec![0xA2, 44, 0xCC, 0x00, 0x00, 0x00]));

    assert_eq!(tag.authenticate(&new_credentials())?, Pack::new([0xCC, 0x00]));
    assert!(tag.authenticate(&Credentials::DEFAULT).is_err());
    Ok(())
}

#[test]
fn stepwise_change_reports_each_state() {
    let (_sim, mut tag) = common::helpers::identified(SimulatedTag::mf0ul11(&common::fixtures::UID));
    let mut change = tag
        .password_change(Credentials::DEFAULT, new_credentials())
        .unwrap();
    let mut seen = vec![change.state()];
    while !change.state().is_complete() {
        seen.push(tag.step_password_change(&mut change).unwrap());
    }
    assert_eq!(
        seen,
        vec![
            PasswordChangeState::Pending,
            PasswordChangeState::AuthenticatedOld,
            PasswordChangeState::PasswordWritten,
            PasswordChangeState::PackWritten,
            PasswordChangeState::AuthenticatedNew,
        ]
    );
}

#[test]
fn tag_lost_after_password_write_leaves_no_rollback() {
    // identify, authenticate, write PWD; the PACK write never arrives
    let sim = SimulatedTag::ntag213(&common::fixtures::UID).fail_after(3);
    let (sim, mut tag) = common::helpers::identified(sim);

    match tag.change_password(Credentials::DEFAULT, new_credentials()) {
        Err(Error::PasswordChange { reached, source }) => {
            assert_eq!(reached, PasswordChangeState::PasswordWritten);
            assert!(source.is_retryable());
        }
        other => panic!("expected PasswordChange error, got {:?}", other),
    }
    let live = sim.borrow().credentials();
    assert_eq!(live.password, new_credentials().password);
    assert_eq!(live.pack, Pack::DEFAULT);
}

#[test]
fn wrong_old_password_changes_nothing() {
    let sim = SimulatedTag::ntag213(&common::fixtures::UID).with_credentials(new_credentials());
    let (sim, mut tag) = common::helpers::identified(sim);
    let err = tag
        .change_password(Credentials::DEFAULT, Credentials::DEFAULT)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::PasswordChange {
            reached: PasswordChangeState::Pending,
            ..
        }
    ));
    assert_eq!(sim.borrow().credentials(), new_credentials());
}
