//! Community events screen with a register action.

use leptos::prelude::*;

use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiMessage;
use crate::net::types::{CommunityEvent, Role};
use crate::state::session::use_session;

#[component]
pub fn EventsPage() -> impl IntoView {
    let session = use_session();
    let events = LocalResource::new(|| api::get_json::<Vec<CommunityEvent>>("/events"));
    let message = RwSignal::new(String::new());

    let is_admin = move || session.identity().is_some_and(|i| i.role == Role::Admin);

    let on_register = move |event_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::post_empty::<ApiMessage>(&format!("/events/{event_id}/register")).await {
                Ok(reply) => {
                    message.set(reply.message);
                    events.refetch();
                }
                Err(e) => message.set(format!("Could not register: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = event_id;
    };

    view! {
        <section class="page events-page">
            <h1>"Events"</h1>
            <Show when=move || !message.get().is_empty()>
                <p class="events-page__message">{move || message.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="events-page__list">
                                        {list
                                            .into_iter()
                                            .map(|event| {
                                                let id = event.id.clone();
                                                let registered = event.is_registered_by_current_user;
                                                let register_label =
                                                    if registered { "Registered" } else { "Register" };
                                                view! {
                                                    <article class="event-card">
                                                        <h3>{event.title.clone()}</h3>
                                                        <p class="event-card__when">
                                                            {event.date.clone()}
                                                            " "
                                                            {event.time.clone().unwrap_or_default()}
                                                        </p>
                                                        <p>{event.location.clone().unwrap_or_default()}</p>
                                                        <p>{event.description.clone()}</p>
                                                        <Show when=move || !is_admin()>
                                                            {
                                                                let id = id.clone();
                                                                view! {
                                                                    <button
                                                                        class="event-card__register"
                                                                        disabled=registered
                                                                        on:click=move |_| on_register(id.clone())
                                                                    >
                                                                        {register_label}
                                                                    </button>
                                                                }
                                                            }
                                                        </Show>
                                                    </article>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="page__error">{format!("Could not load events: {e}")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
