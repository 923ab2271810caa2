//! Accepted connections and pending incoming requests.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::DirectoryMember;

fn member_list(title: &'static str, list: Vec<DirectoryMember>) -> AnyView {
    view! {
        <div class="connections-page__section">
            <h2>{title}</h2>
            {if list.is_empty() {
                view! { <p class="connections-page__empty">"Nothing here yet."</p> }.into_any()
            } else {
                list.into_iter()
                    .map(|member| {
                        view! {
                            <div class="connection-card">
                                <h3>{member.name.clone()}</h3>
                                <p>{member.title.clone().unwrap_or_default()}</p>
                                <p>{member.branch.clone().unwrap_or_default()}</p>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
    .into_any()
}

#[component]
pub fn ConnectionsPage() -> impl IntoView {
    let connections =
        LocalResource::new(|| api::get_json::<Vec<DirectoryMember>>("/connections/my-connections"));
    let pending =
        LocalResource::new(|| api::get_json::<Vec<DirectoryMember>>("/connections/requests/pending"));

    view! {
        <section class="page connections-page">
            <h1>"Connections"</h1>
            <Suspense fallback=move || view! { <p>"Loading connections..."</p> }>
                {move || {
                    connections
                        .get()
                        .map(|result| match result {
                            Ok(list) => member_list("My connections", list),
                            Err(e) => {
                                view! {
                                    <p class="page__error">
                                        {format!("Could not load connections: {e}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
                {move || {
                    pending
                        .get()
                        .map(|result| match result {
                            Ok(list) => member_list("Pending requests", list),
                            Err(e) => {
                                view! {
                                    <p class="page__error">
                                        {format!("Could not load pending requests: {e}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
