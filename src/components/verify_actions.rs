//! Application Verification Actions
//!
//! Status badge plus the decision modal for one application row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dom;
use crate::models::{ApplicationRow, Decision};
use crate::store::{store_set_status, use_review_store, ReviewStateStoreFields};

const VERIFY_FAILED: &str = "Đã xảy ra lỗi khi xác nhận.";

#[component]
pub fn VerifyActions(application: ApplicationRow) -> impl IntoView {
    let store = use_review_store();
    let apply_id = application.id;
    let (open, set_open) = signal(false);
    let (message, set_message) = signal(String::new());

    // Badge tracks the row's status in the store.
    let status = Memo::new(move |_| {
        store
            .applications()
            .read()
            .iter()
            .find(|row| row.id == apply_id)
            .map(|row| row.status)
            .unwrap_or_default()
    });

    let decide = move |decision: Decision| {
        spawn_local(async move {
            match api::verify_application(apply_id, decision).await {
                Ok(body) => {
                    let text = body.message.unwrap_or_default();
                    set_message.set(text.clone());
                    dom::alert(&text);
                    set_open.set(false);
                    store_set_status(&store, apply_id, decision.status());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("verify apply: {err}").into());
                    set_message.set(VERIFY_FAILED.to_string());
                }
            }
        });
    };

    view! {
        <span id=format!("status-{apply_id}") class=move || status.get().badge_class()>
            {move || status.get().badge_text()}
        </span>
        <button
            type="button"
            class="btn btn-sm btn-outline-primary"
            on:click=move |_| set_open.set(true)
        >
            "Review"
        </button>
        <div
            class="modal"
            id=format!("modal{apply_id}")
            style:display=move || if open.get() { "block" } else { "none" }
        >
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">"Review application"</h5>
                        <button
                            type="button"
                            class="btn-close"
                            on:click=move |_| set_open.set(false)
                        ></button>
                    </div>
                    <div class="modal-body">
                        <p>{application.cover_letter.clone()}</p>
                        <div id=format!("message-verified-apply-{apply_id}") class="text-info">
                            {move || message.get()}
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| decide(Decision::Confirm)
                        >
                            "Confirm"
                        </button>
                        <button
                            type="button"
                            class="btn btn-danger"
                            on:click=move |_| decide(Decision::Reject)
                        >
                            "Reject"
                        </button>
                        <button
                            type="button"
                            class="btn btn-success"
                            on:click=move |_| decide(Decision::Accept)
                        >
                            "Accept"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
