//! Recruit Frontend App
//!
//! Application shell: resolves the current page from the URL and renders
//! the matching page fragment. Row data comes from the JSON block the
//! server embeds in each page.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::de::DeserializeOwned;

use crate::components::{
    ApplyForm, CvList, InterviewScheduler, Pagination, RecruiterTable, SalarySlider, VerifyActions,
};
use crate::dom;
use crate::format;
use crate::models::{ApplicationRow, CvPageData, JobDetailData, RecruiterPageData, ReviewPageData};
use crate::route::{self, Page};
use crate::store::{ReviewState, ReviewStateStoreFields};

/// Id of the JSON block the server renders into each page.
const PAGE_DATA_ID: &str = "page-data";

/// Embedded page data, or the empty default when the block is absent or
/// malformed.
fn page_data<T: Default + DeserializeOwned>() -> T {
    match dom::embedded_json::<T>(PAGE_DATA_ID) {
        Ok(Some(data)) => data,
        Ok(None) => T::default(),
        Err(err) => {
            web_sys::console::warn_1(&format!("page data: {err}").into());
            T::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let path = dom::current_path().unwrap_or_else(|err| {
        web_sys::console::warn_1(&format!("location: {err}").into());
        String::from("/")
    });

    match route::page_for_path(&path) {
        Page::JobDetail(job_id) => view! { <JobDetailPage job_id=job_id /> }.into_any(),
        Page::PostJob => view! { <PostJobPage /> }.into_any(),
        Page::Applications => view! { <ApplicationsPage /> }.into_any(),
        Page::Recruiters => view! { <RecruitersPage /> }.into_any(),
        Page::Cvs => view! { <CvPage /> }.into_any(),
        // Pages without an interactive fragment render nothing.
        Page::Unknown => view! { <main class="container"></main> }.into_any(),
    }
}

#[component]
fn JobDetailPage(job_id: u32) -> impl IntoView {
    let data: JobDetailData = page_data();
    let salary = format::salary_range_label(data.job.salary_min, data.job.salary_max);

    view! {
        <main class="container">
            <h1>{data.job.title.clone()}</h1>
            <p class="text-muted">{salary}</p>
            <ApplyForm job_id=job_id cvs=data.cvs />
        </main>
    }
}

#[component]
fn PostJobPage() -> impl IntoView {
    view! {
        <main class="container">
            <h1>"Post a job"</h1>
            // The posting form itself submits server-side; only the salary
            // readout is live.
            <form method="post">
                <input type="text" name="title" placeholder="Job title" class="form-control" />
                <textarea name="description" class="form-control" placeholder="Description"></textarea>
                <SalarySlider min=0 max=2_000_000 />
                <button type="submit" class="btn btn-primary">"Post"</button>
            </form>
        </main>
    }
}

#[component]
fn ApplicationsPage() -> impl IntoView {
    let data: ReviewPageData = page_data();
    let current = dom::current_page().unwrap_or(1);
    let store = Store::new(ReviewState {
        applications: data.applications,
    });
    provide_context(store);

    view! {
        <main class="container">
            <h1>"Applications"</h1>
            <table class="table align-middle">
                <thead>
                    <tr>
                        <th>"Applicant"</th>
                        <th>"Job"</th>
                        <th>"Status"</th>
                        <th>"Interview"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.applications().get()
                        key=|row| row.id
                        children=move |row| view! { <ApplicationItem application=row /> }
                    />
                </tbody>
            </table>
            <Pagination pages=data.pages current=current />
        </main>
    }
}

#[component]
fn ApplicationItem(application: ApplicationRow) -> impl IntoView {
    let applicant = application.applicant.clone();
    let job_title = application.job_title.clone();
    let apply_id = application.id;

    view! {
        <tr>
            <td>{applicant}</td>
            <td>{job_title}</td>
            <td><VerifyActions application=application /></td>
            <td><InterviewScheduler apply_id=apply_id /></td>
        </tr>
    }
}

#[component]
fn RecruitersPage() -> impl IntoView {
    let data: RecruiterPageData = page_data();
    let current = dom::current_page().unwrap_or(1);

    view! {
        <main class="container">
            <h1>"Verified recruiter"</h1>
            <RecruiterTable recruiters=data.recruiters />
            <Pagination pages=data.pages current=current />
        </main>
    }
}

#[component]
fn CvPage() -> impl IntoView {
    let data: CvPageData = page_data();

    view! {
        <main class="container">
            <h1>"Your CVs"</h1>
            <CvList cvs=data.cvs />
        </main>
    }
}
