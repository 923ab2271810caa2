//! Role-conditional navigation sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely derived from the session signal; the sidebar keeps no identity
//! copy of its own. Link visibility is a fixed ordered table of role-set
//! predicates, so what each role can see is data, not scattered
//! conditionals.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guards::{DEFAULT_LANDING_ROUTE, LOGIN_ROUTE};
use crate::net::types::Role;
use crate::state::session::use_session;

/// One sidebar link: label, target route, and the roles that may see it.
pub struct NavEntry {
    pub label: &'static str,
    pub to: &'static str,
    pub roles: &'static [Role],
}

const MEMBER: &[Role] = &[Role::Student, Role::Alumni];
const ALUMNI_ONLY: &[Role] = &[Role::Alumni];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// The fixed link table, in render order: member directory links, alumni
/// posting links, then the admin section (admins also get the job and
/// event directories, listed after their own tools).
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Home", to: "/home", roles: MEMBER },
    NavEntry { label: "Profile", to: "/profile", roles: MEMBER },
    NavEntry { label: "Network", to: "/network", roles: MEMBER },
    NavEntry { label: "Connections", to: "/connections", roles: MEMBER },
    NavEntry { label: "Job Board", to: "/jobs", roles: MEMBER },
    NavEntry { label: "Events", to: "/events", roles: MEMBER },
    NavEntry { label: "Post Job", to: "/post-job", roles: ALUMNI_ONLY },
    NavEntry { label: "Create Event", to: "/create-event", roles: ALUMNI_ONLY },
    NavEntry { label: "Stats", to: "/admin/dashboard", roles: ADMIN_ONLY },
    NavEntry { label: "Verify Users", to: "/admin/verification", roles: ADMIN_ONLY },
    NavEntry { label: "View Users", to: "/admin/users", roles: ADMIN_ONLY },
    NavEntry { label: "Job Board", to: "/jobs", roles: ADMIN_ONLY },
    NavEntry { label: "Events", to: "/events", roles: ADMIN_ONLY },
];

/// The links a role may see, in table order.
pub fn visible_links(role: Role) -> Vec<&'static NavEntry> {
    NAV_ENTRIES
        .iter()
        .filter(|entry| entry.roles.contains(&role))
        .collect()
}

/// Where the header logo points: admins go to their dashboard, members to
/// the landing page.
pub fn header_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Student | Role::Alumni => DEFAULT_LANDING_ROUTE,
    }
}

/// Application sidebar with role-gated links and the logout action.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__header">
                <a
                    class="sidebar__brand"
                    href=move || session.identity().map_or(DEFAULT_LANDING_ROUTE, |i| header_route(i.role))
                >
                    "Alumnet"
                </a>
            </div>
            <div class="sidebar__links">
                {move || {
                    session
                        .identity()
                        .map(|identity| {
                            visible_links(identity.role)
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <a class="sidebar__link" href=entry.to>
                                            {entry.label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>
            <div class="sidebar__footer">
                <button class="sidebar__link sidebar__link--logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
