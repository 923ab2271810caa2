//! Session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for "who is logged in". Boot reconciliation
//! with the credential store runs before the router is constructed, so no
//! guard ever evaluates against an unresolved default. All mutations go
//! through [`SessionHandle`]; guards, the sidebar, and feature pages are
//! read-only observers of the context signal.
//!
//! The only exits from `Authenticated` are explicit `logout` calls. A
//! credential rejected by the server mid-session is surfaced to the page
//! that made the call, not translated into a phase change here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::identity::AuthError;
use crate::net::types::Identity;
use crate::util::credential_store;

/// Where the session is in its lifecycle.
///
/// `Initializing` exists only between process start and boot reconciliation;
/// it is never re-entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated,
}

/// The client's current belief about credential, identity, and phase.
///
/// Invariant: `phase == Authenticated` iff both `credential` and `identity`
/// are present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub credential: Option<String>,
    pub phase: SessionPhase,
}

impl Session {
    /// Fresh unresolved session, as it exists before boot reconciliation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session at application boot.
    ///
    /// In the browser the credential store is read synchronously and the
    /// phase resolves immediately; the persisted pair is trusted without a
    /// server round-trip, and a since-revoked credential surfaces on the
    /// first authenticated call. Server-side rendering has no storage, so
    /// the session stays `Initializing` until hydration re-runs this.
    pub fn boot() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let mut session = Self::new();
            session.resolve_boot(credential_store::load());
            session
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new()
        }
    }

    /// Resolve `Initializing` from the persisted store contents.
    ///
    /// A no-op once the session has resolved: the phase never re-enters
    /// `Initializing`, so reconciliation cannot run twice.
    pub fn resolve_boot(&mut self, restored: Option<(String, Identity)>) {
        if self.phase != SessionPhase::Initializing {
            return;
        }
        match restored {
            Some((credential, identity)) => {
                self.credential = Some(credential);
                self.identity = Some(identity);
                self.phase = SessionPhase::Authenticated;
            }
            None => self.phase = SessionPhase::Unauthenticated,
        }
    }

    /// Enter `Authenticated` with a freshly issued pair.
    pub fn apply_login(&mut self, credential: String, identity: Identity) {
        self.credential = Some(credential);
        self.identity = Some(identity);
        self.phase = SessionPhase::Authenticated;
    }

    /// Drop to `Unauthenticated`, discarding credential and identity.
    pub fn apply_logout(&mut self) {
        self.credential = None;
        self.identity = None;
        self.phase = SessionPhase::Unauthenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }
}

/// Handle to the context session signal; the sanctioned way any page or
/// component reads or changes session state.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    signal: RwSignal<Session>,
}

impl SessionHandle {
    pub fn new(signal: RwSignal<Session>) -> Self {
        Self { signal }
    }

    /// Current session snapshot. Reactive when called inside a tracking
    /// scope, which is how guards re-evaluate on login/logout.
    pub fn snapshot(&self) -> Session {
        self.signal.get()
    }

    pub fn phase(&self) -> SessionPhase {
        self.signal.with(|session| session.phase)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.signal.with(|session| session.identity.clone())
    }

    /// Exchange an email + password for a session at the identity service.
    ///
    /// On success the credential store and the in-memory session update in
    /// the same turn, so the very next stamped request carries the new
    /// credential. On failure both are left untouched and the raw error
    /// propagates to the caller for presentation.
    ///
    /// Concurrent calls are not serialized; whichever response lands last
    /// wins the single session slot. The login page's busy flag is what
    /// prevents double submission.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] from the identity service unchanged.
    pub async fn login(self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let (credential, identity) = crate::net::identity::login(email, password).await?;
        credential_store::save(&credential, &identity);
        self.signal
            .update(|session| session.apply_login(credential, identity.clone()));
        Ok(identity)
    }

    /// Clear the session everywhere: in-memory state, credential store, and
    /// therefore the stamping value of the next outbound request. Purely
    /// local; the server keeps no session to invalidate. Always succeeds.
    pub fn logout(self) {
        credential_store::clear();
        self.signal.update(Session::apply_logout);
    }
}

/// Create the session signal, run boot reconciliation, and provide it as
/// context. Called exactly once, from `App`, before the router exists.
pub fn provide_session() -> SessionHandle {
    let signal = RwSignal::new(Session::boot());
    provide_context(signal);
    SessionHandle::new(signal)
}

/// Access the session provided by `App`.
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_session() -> SessionHandle {
    SessionHandle::new(expect_context::<RwSignal<Session>>())
}
