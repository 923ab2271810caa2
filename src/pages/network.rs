//! Member directory screen.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::DirectoryMember;

#[component]
pub fn NetworkPage() -> impl IntoView {
    let members = LocalResource::new(|| api::get_json::<Vec<DirectoryMember>>("/users"));

    view! {
        <section class="page network-page">
            <h1>"Network"</h1>
            <Suspense fallback=move || view! { <p>"Loading members..."</p> }>
                {move || {
                    members
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="network-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|member| {
                                                view! {
                                                    <div class="member-card">
                                                        <h3>{member.name.clone()}</h3>
                                                        <p class="member-card__role">
                                                            {member.role.label()}
                                                        </p>
                                                        <p>
                                                            {member
                                                                .branch
                                                                .clone()
                                                                .unwrap_or_else(|| "Branch not specified".to_owned())}
                                                        </p>
                                                        <p>{member.company.clone().unwrap_or_default()}</p>
                                                        <p class="member-card__status">
                                                            {member.connection_status.clone().unwrap_or_default()}
                                                        </p>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="page__error">{format!("Could not load members: {e}")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
