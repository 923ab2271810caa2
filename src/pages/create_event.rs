//! Event creation form, reachable by alumni only.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[component]
pub fn CreateEventPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let event_type = RwSignal::new(String::new());
    let max_attendees = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if title.get().trim().is_empty()
            || description.get().trim().is_empty()
            || date.get().trim().is_empty()
        {
            error.set("Title, description, and date are required.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        let payload = serde_json::json!({
            "title": title.get().trim(),
            "description": description.get().trim(),
            "date": date.get().trim(),
            "time": time.get().trim(),
            "location": location.get().trim(),
            "type": event_type.get().trim(),
            "maxAttendees": max_attendees.get().trim().parse::<i32>().ok(),
        });

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_json_unit("/events", &payload).await {
                    Ok(()) => navigate("/events", NavigateOptions::default()),
                    Err(e) => {
                        error.set(format!("Could not create event: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            busy.set(false);
        }
    };

    view! {
        <section class="page create-event-page">
            <h1>"Create an Event"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Event title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="form__input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="time"
                    prop:value=move || time.get()
                    on:input=move |ev| time.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="Event type"
                    prop:value=move || event_type.get()
                    on:input=move |ev| event_type.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="number"
                    placeholder="Max attendees"
                    prop:value=move || max_attendees.get()
                    on:input=move |ev| max_attendees.set(event_target_value(&ev))
                />
                <button class="form__submit" type="submit" disabled=move || busy.get()>
                    "Create Event"
                </button>
            </form>
        </section>
    }
}
