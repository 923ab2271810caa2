//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::guards::{ProtectedRoute, RoleRoute};
use crate::components::sidebar::Sidebar;
use crate::net::types::Role;
use crate::pages::admin::{AdminDashboardPage, AdminUserListPage, AdminVerificationPage};
use crate::pages::connections::ConnectionsPage;
use crate::pages::create_event::CreateEventPage;
use crate::pages::events::EventsPage;
use crate::pages::home::HomePage;
use crate::pages::jobs::JobBoardPage;
use crate::pages::login::LoginPage;
use crate::pages::network::NetworkPage;
use crate::pages::post_job::PostJobPage;
use crate::pages::profile::ProfilePage;
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Reconciles the session with the credential store before the router is
/// constructed, so every guard evaluates against a resolved phase, then
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/alumnet.css"/>
        <Title text="Alumnet"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=MemberShell>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("network") view=NetworkPage/>
                    <Route path=StaticSegment("connections") view=ConnectionsPage/>
                    <Route path=StaticSegment("jobs") view=JobBoardPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route
                        path=StaticSegment("post-job")
                        view=|| {
                            view! {
                                <RoleRoute required=Role::Alumni>
                                    <PostJobPage/>
                                </RoleRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("create-event")
                        view=|| {
                            view! {
                                <RoleRoute required=Role::Alumni>
                                    <CreateEventPage/>
                                </RoleRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <RoleRoute required=Role::Admin>
                                    <AdminDashboardPage/>
                                </RoleRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("verification"))
                        view=|| {
                            view! {
                                <RoleRoute required=Role::Admin>
                                    <AdminVerificationPage/>
                                </RoleRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| {
                            view! {
                                <RoleRoute required=Role::Admin>
                                    <AdminUserListPage/>
                                </RoleRoute>
                            }
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Authenticated layout: sidebar plus routed content, wrapped in the
/// authentication guard so the whole tree stays blank for visitors without
/// a session.
#[component]
fn MemberShell() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="app-layout">
                <Sidebar/>
                <main class="app-layout__content">
                    <Outlet/>
                </main>
            </div>
        </ProtectedRoute>
    }
}
