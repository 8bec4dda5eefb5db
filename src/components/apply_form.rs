//! Job Application Form
//!
//! Submits the apply form and reports validation errors inline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApplyFields};
use crate::dom;
use crate::models::CvEntry;

const APPLY_FAILED: &str = "Đã xảy ra lỗi khi nộp đơn.";
const SERVER_UNREACHABLE: &str = "Không thể kết nối đến server.";

#[component]
pub fn ApplyForm(job_id: u32, cvs: Vec<CvEntry>) -> impl IntoView {
    let (cover_letter, set_cover_letter) = signal(String::new());
    let (cv, set_cv) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = ApplyFields {
            cover_letter: cover_letter.get(),
            cv: cv.get(),
        };

        spawn_local(async move {
            match api::submit_application(job_id, &fields).await {
                Ok((200, body)) => {
                    dom::alert(
                        body.message
                            .as_deref()
                            .unwrap_or("You have successfully applied."),
                    );
                    dom::navigate("/applications");
                }
                Ok((_, body)) => {
                    set_error.set(body.message.unwrap_or_else(|| APPLY_FAILED.to_string()));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("apply: {err}").into());
                    set_error.set(SERVER_UNREACHABLE.to_string());
                }
            }
        });
    };

    view! {
        <form id="applyForm" class="apply-form" on:submit=on_submit>
            <textarea
                name="coverLetter"
                class="form-control"
                placeholder="Cover letter"
                prop:value=move || cover_letter.get()
                on:input=move |ev| set_cover_letter.set(event_target_value(&ev))
            ></textarea>
            <select
                name="cv"
                class="form-select"
                on:change=move |ev| set_cv.set(event_target_value(&ev))
            >
                <option value="">"Choose a CV"</option>
                {cvs.into_iter().map(|entry| view! {
                    <option value=entry.id.to_string()>{entry.name}</option>
                }).collect_view()}
            </select>
            <div id="error-apply" class="text-danger">{move || error.get()}</div>
            <button type="submit" class="btn btn-primary">"Apply"</button>
        </form>
    }
}
