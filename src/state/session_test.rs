use super::*;
use crate::net::types::Role;

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@apsit.edu.in".to_owned(),
        role,
        title: None,
        company: None,
        branch: None,
        graduation_year: None,
        skills: Vec::new(),
        profile_image_url: None,
    }
}

fn restored_pair(role: Role) -> Option<(String, Identity)> {
    Some(("tok-abc".to_owned(), identity(role)))
}

// =============================================================
// Boot reconciliation
// =============================================================

#[test]
fn new_session_is_initializing_and_empty() {
    let session = Session::new();
    assert_eq!(session.phase, SessionPhase::Initializing);
    assert!(session.credential.is_none());
    assert!(session.identity.is_none());
}

#[test]
fn boot_with_empty_store_resolves_unauthenticated() {
    let mut session = Session::new();
    session.resolve_boot(None);
    assert_eq!(session.phase, SessionPhase::Unauthenticated);
    assert!(!session.is_authenticated());
}

#[test]
fn boot_with_stored_pair_resolves_authenticated() {
    let mut session = Session::new();
    session.resolve_boot(restored_pair(Role::Student));
    assert_eq!(session.phase, SessionPhase::Authenticated);
    assert_eq!(session.credential.as_deref(), Some("tok-abc"));
    assert_eq!(session.identity.unwrap().role, Role::Student);
}

#[test]
fn boot_always_leaves_initializing() {
    for restored in [None, restored_pair(Role::Alumni)] {
        let mut session = Session::new();
        session.resolve_boot(restored);
        assert_ne!(session.phase, SessionPhase::Initializing);
    }
}

#[test]
fn resolve_boot_is_a_no_op_once_resolved() {
    let mut session = Session::new();
    session.resolve_boot(None);
    // A stale second reconciliation must not resurrect a session.
    session.resolve_boot(restored_pair(Role::Admin));
    assert_eq!(session.phase, SessionPhase::Unauthenticated);
    assert!(session.credential.is_none());
}

#[test]
fn resolve_boot_never_runs_after_login() {
    let mut session = Session::new();
    session.resolve_boot(None);
    session.apply_login("tok-new".to_owned(), identity(Role::Admin));
    session.resolve_boot(None);
    assert_eq!(session.phase, SessionPhase::Authenticated);
    assert_eq!(session.credential.as_deref(), Some("tok-new"));
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn apply_login_enters_authenticated_with_both_halves() {
    let mut session = Session::new();
    session.resolve_boot(None);
    session.apply_login("tok-1".to_owned(), identity(Role::Admin));
    assert!(session.is_authenticated());
    assert!(session.credential.is_some());
    assert!(session.identity.is_some());
}

#[test]
fn second_login_overwrites_the_single_slot() {
    let mut session = Session::new();
    session.resolve_boot(None);
    session.apply_login("tok-1".to_owned(), identity(Role::Student));
    session.apply_login("tok-2".to_owned(), identity(Role::Alumni));
    assert_eq!(session.credential.as_deref(), Some("tok-2"));
    assert_eq!(session.identity.unwrap().role, Role::Alumni);
}

#[test]
fn apply_logout_clears_everything() {
    let mut session = Session::new();
    session.resolve_boot(restored_pair(Role::Admin));
    session.apply_logout();
    assert_eq!(session.phase, SessionPhase::Unauthenticated);
    assert!(session.credential.is_none());
    assert!(session.identity.is_none());
}

#[test]
fn phase_authenticated_iff_credential_and_identity_present() {
    let mut session = Session::new();
    session.resolve_boot(restored_pair(Role::Student));
    assert_eq!(
        session.is_authenticated(),
        session.credential.is_some() && session.identity.is_some()
    );
    session.apply_logout();
    assert_eq!(
        session.is_authenticated(),
        session.credential.is_some() && session.identity.is_some()
    );
}

// =============================================================
// Handle wiring
// =============================================================

#[test]
fn handle_logout_is_synchronous_and_unconditional() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.set();
    let signal = RwSignal::new(Session {
        identity: Some(identity(Role::Alumni)),
        credential: Some("tok".to_owned()),
        phase: SessionPhase::Authenticated,
    });
    let handle = SessionHandle::new(signal);
    handle.logout();
    assert_eq!(handle.phase(), SessionPhase::Unauthenticated);
    assert!(handle.identity().is_none());
    // Idempotent: logging out twice stays logged out.
    handle.logout();
    assert_eq!(handle.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn handle_snapshot_reflects_signal_state() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.set();
    let signal = RwSignal::new(Session::new());
    let handle = SessionHandle::new(signal);
    assert_eq!(handle.snapshot().phase, SessionPhase::Initializing);
    signal.update(|session| session.resolve_boot(None));
    assert_eq!(handle.snapshot().phase, SessionPhase::Unauthenticated);
}
