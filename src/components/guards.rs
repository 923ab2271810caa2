//! Route guards deciding, per navigation, whether a screen may render.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards are pure readers of the session signal and re-evaluate on
//! every route change. While the session is still reconciling they render
//! nothing at all, so a protected tree can never flash for a visitor who
//! turns out to be logged out. Authorization failures are handled here,
//! client-side, before any request is made.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::session::{Session, SessionPhase, use_session};

/// Where unauthenticated visitors are sent. The original navigation is
/// discarded, not replayed after login.
pub const LOGIN_ROUTE: &str = "/login";

/// Where authenticated-but-unauthorized visitors are sent. Deliberately not
/// the login route; the visitor has a session, just not this screen.
pub const DEFAULT_LANDING_ROUTE: &str = "/home";

/// What a guard does with the requested route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still reconciling; render nothing, keep the navigation.
    Wait,
    /// No session; redirect to the login route.
    RedirectLogin,
    /// Authenticated but the role does not match; redirect to the landing
    /// route.
    RedirectHome,
    /// Render the protected payload.
    Render,
}

/// Decision for routes that only require a session.
pub fn authentication_outcome(session: &Session) -> GuardOutcome {
    match session.phase {
        SessionPhase::Initializing => GuardOutcome::Wait,
        SessionPhase::Unauthenticated => GuardOutcome::RedirectLogin,
        SessionPhase::Authenticated => GuardOutcome::Render,
    }
}

/// Decision for routes that additionally require an exact role.
///
/// No hierarchies: an admin is not a student, a student is not an alumnus.
pub fn role_outcome(session: &Session, required: Role) -> GuardOutcome {
    match authentication_outcome(session) {
        GuardOutcome::Render => match &session.identity {
            Some(identity) if identity.role == required => GuardOutcome::Render,
            _ => GuardOutcome::RedirectHome,
        },
        unresolved => unresolved,
    }
}

fn guarded_view(outcome: GuardOutcome, children: &ChildrenFn) -> AnyView {
    match outcome {
        GuardOutcome::Wait => ().into_any(),
        GuardOutcome::RedirectLogin => view! { <Redirect path=LOGIN_ROUTE/> }.into_any(),
        GuardOutcome::RedirectHome => view! { <Redirect path=DEFAULT_LANDING_ROUTE/> }.into_any(),
        GuardOutcome::Render => children(),
    }
}

/// Wrapper that renders its payload only for authenticated sessions.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || guarded_view(authentication_outcome(&session.snapshot()), &children)
}

/// Wrapper that renders its payload only for one exact role.
#[component]
pub fn RoleRoute(required: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || guarded_view(role_outcome(&session.snapshot(), required), &children)
}
