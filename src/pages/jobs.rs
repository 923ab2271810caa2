//! Job board screen.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::JobPosting;

#[component]
pub fn JobBoardPage() -> impl IntoView {
    let jobs = LocalResource::new(|| api::get_json::<Vec<JobPosting>>("/jobs"));

    view! {
        <section class="page jobs-page">
            <h1>"Job Board"</h1>
            <Suspense fallback=move || view! { <p>"Loading jobs..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="jobs-page__list">
                                        {list
                                            .into_iter()
                                            .map(|job| {
                                                view! {
                                                    <article class="job-card">
                                                        <h3>{job.title.clone()}</h3>
                                                        <p class="job-card__company">
                                                            {job.company.clone()}
                                                            {job
                                                                .location
                                                                .clone()
                                                                .map(|loc| format!(", {loc}"))
                                                                .unwrap_or_default()}
                                                        </p>
                                                        <p class="job-card__meta">
                                                            {job.job_type.clone().unwrap_or_default()}
                                                            " "
                                                            {job.salary.clone().unwrap_or_default()}
                                                        </p>
                                                        <p>{job.description.clone()}</p>
                                                        <p class="job-card__footer">
                                                            {job
                                                                .posted_by_name
                                                                .clone()
                                                                .map(|name| format!("Posted by {name}"))
                                                                .unwrap_or_default()}
                                                        </p>
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
                                    <p class="page__error">{format!("Could not load jobs: {e}")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
