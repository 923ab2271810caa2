//! Job posting form, reachable by alumni only.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[component]
pub fn PostJobPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let job_type = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
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
            || company.get().trim().is_empty()
            || description.get().trim().is_empty()
        {
            error.set("Title, company, and description are required.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        let payload = serde_json::json!({
            "title": title.get().trim(),
            "company": company.get().trim(),
            "location": location.get().trim(),
            "type": job_type.get().trim(),
            "salary": salary.get().trim(),
            "description": description.get().trim(),
            "requirements": requirements.get().trim(),
            "applicationDeadline": deadline.get().trim(),
        });

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_json_unit("/jobs", &payload).await {
                    Ok(()) => navigate("/jobs", NavigateOptions::default()),
                    Err(e) => {
                        error.set(format!("Could not post job: {e}"));
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
        <section class="page post-job-page">
            <h1>"Post a Job"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Job title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="Company"
                    prop:value=move || company.get()
                    on:input=move |ev| company.set(event_target_value(&ev))
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
                    placeholder="Employment type"
                    prop:value=move || job_type.get()
                    on:input=move |ev| job_type.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="Salary range"
                    prop:value=move || salary.get()
                    on:input=move |ev| salary.set(event_target_value(&ev))
                />
                <textarea
                    class="form__input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <textarea
                    class="form__input"
                    placeholder="Requirements"
                    prop:value=move || requirements.get()
                    on:input=move |ev| requirements.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="form__input"
                    type="date"
                    placeholder="Application deadline"
                    prop:value=move || deadline.get()
                    on:input=move |ev| deadline.set(event_target_value(&ev))
                />
                <button class="form__submit" type="submit" disabled=move || busy.get()>
                    "Post Job"
                </button>
            </form>
        </section>
    }
}
