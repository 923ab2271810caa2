//! The viewer's own profile screen.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Profile;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = LocalResource::new(|| api::get_json::<Profile>("/profile/me"));

    view! {
        <section class="page profile-page">
            <h1>"Profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(me) => {
                                view! {
                                    <div class="profile-page__card">
                                        <h2>{me.name.clone()}</h2>
                                        <p class="profile-page__role">{me.role.label()}</p>
                                        <p>{me.title.clone().unwrap_or_default()}</p>
                                        <p>{me.branch.clone().unwrap_or_default()}</p>
                                        <p>{me.location.clone().unwrap_or_default()}</p>
                                        <p class="profile-page__about">
                                            {me.about.clone().unwrap_or_default()}
                                        </p>
                                        <p class="profile-page__skills">{me.skills.join(", ")}</p>
                                        <p class="profile-page__connections">
                                            {format!("{} connections", me.connection_count)}
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="page__error">{format!("Could not load profile: {e}")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
