//! CV List
//!
//! CV manager rows, each with a hidden inline update form.

use leptos::prelude::*;

use crate::models::CvEntry;

#[component]
pub fn CvList(cvs: Vec<CvEntry>) -> impl IntoView {
    view! {
        <table class="table">
            <tbody>
                {cvs.into_iter().map(|cv| view! { <CvItem cv=cv /> }).collect_view()}
            </tbody>
        </table>
    }
}

/// One CV row plus its update row. "Update" reveals the form, "Cancel"
/// hides it; both are idempotent.
#[component]
fn CvItem(cv: CvEntry) -> impl IntoView {
    let (editing, set_editing) = signal(false);

    view! {
        <tr>
            <td>{cv.name.clone()}</td>
            <td>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-primary update-cv-btn"
                    on:click=move |_| set_editing.set(true)
                >
                    "Update"
                </button>
            </td>
        </tr>
        <tr
            id=format!("update-form-{}", cv.id)
            style:display=move || if editing.get() { "table-row" } else { "none" }
        >
            <td colspan="2">
                <input type="text" name="name" class="form-control" prop:value=cv.name.clone() />
                <button
                    type="button"
                    class="btn btn-sm btn-secondary cancel-update-btn"
                    on:click=move |_| set_editing.set(false)
                >
                    "Cancel"
                </button>
            </td>
        </tr>
    }
}
