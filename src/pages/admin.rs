//! Admin screens: aggregate stats, the alumni verification queue, and the
//! member list. All three routes sit behind the admin role guard.

use leptos::prelude::*;

use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiMessage;
use crate::net::types::{AdminStats, Identity, VerificationRequest};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = LocalResource::new(|| api::get_json::<AdminStats>("/admin/stats"));

    view! {
        <section class="page admin-dashboard-page">
            <h1>"Stats"</h1>
            <Suspense fallback=move || view! { <p>"Loading dashboard statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(counts) => {
                                view! {
                                    <div class="admin-dashboard-page__tiles">
                                        <StatTile label="Members" value=counts.total_users/>
                                        <StatTile label="Students" value=counts.total_students/>
                                        <StatTile label="Alumni" value=counts.total_alumni/>
                                        <StatTile label="Jobs" value=counts.total_jobs/>
                                        <StatTile label="Events" value=counts.total_events/>
                                        <StatTile
                                            label="Pending verifications"
                                            value=counts.pending_verifications
                                        />
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="page__error">
                                        {format!("Could not load statistics: {e}")}
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

#[component]
fn StatTile(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}

#[component]
pub fn AdminVerificationPage() -> impl IntoView {
    let pending =
        LocalResource::new(|| api::get_json::<Vec<VerificationRequest>>("/verification/admin/pending"));
    let message = RwSignal::new(String::new());

    let on_review = move |request_id: String, approved: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = serde_json::json!({ "approved": approved });
            match api::post_json_unit(&format!("/verification/admin/review/{request_id}"), &payload)
                .await
            {
                Ok(()) => {
                    message.set(if approved {
                        "Request approved.".to_owned()
                    } else {
                        "Request rejected.".to_owned()
                    });
                    pending.refetch();
                }
                Err(e) => message.set(format!("Review failed: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request_id, approved);
    };

    view! {
        <section class="page admin-verification-page">
            <h1>"Verify Users"</h1>
            <Show when=move || !message.get().is_empty()>
                <p class="admin-verification-page__message">{move || message.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading pending requests..."</p> }>
                {move || {
                    pending
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    return view! {
                                        <p class="admin-verification-page__empty">
                                            "No pending verification requests."
                                        </p>
                                    }
                                        .into_any();
                                }
                                view! {
                                    <div class="admin-verification-page__list">
                                        {list
                                            .into_iter()
                                            .map(|request| {
                                                let approve_id = request.id.clone();
                                                let reject_id = request.id.clone();
                                                view! {
                                                    <div class="verification-card">
                                                        <h3>{request.user_name.clone()}</h3>
                                                        <p>{request.user_email.clone()}</p>
                                                        <a
                                                            href=request.document_url.clone()
                                                            target="_blank"
                                                            rel="noreferrer"
                                                        >
                                                            "View document"
                                                        </a>
                                                        <div class="verification-card__actions">
                                                            <button on:click=move |_| on_review(
                                                                approve_id.clone(),
                                                                true,
                                                            )>"Approve"</button>
                                                            <button on:click=move |_| on_review(
                                                                reject_id.clone(),
                                                                false,
                                                            )>"Reject"</button>
                                                        </div>
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

#[component]
pub fn AdminUserListPage() -> impl IntoView {
    let members = LocalResource::new(|| api::get_json::<Vec<Identity>>("/admin/users"));
    let message = RwSignal::new(String::new());

    let on_delete = move |member_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_json::<ApiMessage>(&format!("/admin/users/{member_id}")).await {
                Ok(reply) => {
                    message.set(reply.message);
                    members.refetch();
                }
                Err(e) => message.set(format!("Could not delete member: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = member_id;
    };

    view! {
        <section class="page admin-users-page">
            <h1>"View Users"</h1>
            <Show when=move || !message.get().is_empty()>
                <p class="admin-users-page__message">{move || message.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading members..."</p> }>
                {move || {
                    members
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="admin-users-page__list">
                                        {list
                                            .into_iter()
                                            .map(|member| {
                                                let member_id = member.id.clone();
                                                view! {
                                                    <div class="admin-user-card">
                                                        <h3>
                                                            {format!(
                                                                "{} ({})",
                                                                member.name,
                                                                member.role.label(),
                                                            )}
                                                        </h3>
                                                        <p>{member.email.clone()}</p>
                                                        <p>{member.title.clone().unwrap_or_default()}</p>
                                                        <p>{member.company.clone().unwrap_or_default()}</p>
                                                        <p>{member.branch.clone().unwrap_or_default()}</p>
                                                        <p>
                                                            {member
                                                                .graduation_year
                                                                .map(|year| year.to_string())
                                                                .unwrap_or_default()}
                                                        </p>
                                                        <p>{member.skills.join(", ")}</p>
                                                        <button
                                                            class="admin-user-card__delete"
                                                            on:click=move |_| on_delete(member_id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
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
