//! Landing page for authenticated members.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Welcome hero derived from the session identity.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let first_name = move || {
        session
            .identity()
            .map(|identity| identity.name)
            .unwrap_or_default()
    };

    view! {
        <section class="page home-page">
            <h1 class="home-page__hero">"Welcome, " <span>{first_name}</span> "!"</h1>
            <p class="home-page__tagline">
                "Find mentors, job openings, and events across the Alumnet community."
            </p>
            <div class="home-page__cards">
                <a class="home-page__card" href="/network">
                    <h2>"Network"</h2>
                    <p>"Browse the member directory and connect."</p>
                </a>
                <a class="home-page__card" href="/jobs">
                    <h2>"Job Board"</h2>
                    <p>"Openings posted by alumni."</p>
                </a>
                <a class="home-page__card" href="/events">
                    <h2>"Events"</h2>
                    <p>"Reunions, talks, and networking sessions."</p>
                </a>
            </div>
        </section>
    }
}
