//! Recruiter Administration Table
//!
//! Admin actions granting or revoking a recruiter's verified permission.
//! Both actions reload the page once the server has answered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dom;
use crate::models::RecruiterRow;

#[component]
pub fn RecruiterTable(recruiters: Vec<RecruiterRow>) -> impl IntoView {
    view! {
        <table class="table align-middle">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Company"</th>
                    <th>"Verified"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {recruiters.into_iter().map(|r| view! { <RecruiterItem recruiter=r /> }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn RecruiterItem(recruiter: RecruiterRow) -> impl IntoView {
    let user_id = recruiter.id;

    let verify = move |_| {
        spawn_local(async move {
            let body = match api::verify_recruiter(user_id).await {
                Ok(body) => body,
                Err(err) => {
                    web_sys::console::error_1(&format!("verify recruiter: {err}").into());
                    return;
                }
            };
            if body.status == Some(200) {
                dom::alert("Verified successful");
            } else {
                dom::alert("Verified failed");
            }
            dom::reload();
        });
    };

    let cancel = move |_| {
        if !dom::confirm("Are you sure you want to cancel this employer's permission?") {
            return;
        }
        spawn_local(async move {
            let body = match api::cancel_recruiter(user_id).await {
                Ok(body) => body,
                Err(err) => {
                    web_sys::console::error_1(&format!("cancel recruiter: {err}").into());
                    return;
                }
            };
            if body.status == Some(200) {
                dom::alert("Cancel successful");
            } else {
                dom::alert("Cancel Failed");
            }
            dom::reload();
        });
    };

    view! {
        <tr>
            <td>{recruiter.username.clone()}</td>
            <td>{recruiter.company.clone().unwrap_or_default()}</td>
            <td>{if recruiter.verified { "Yes" } else { "No" }}</td>
            <td>
                {if recruiter.verified {
                    view! {
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-danger"
                            on:click=cancel
                        >
                            "Cancel permission"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-success"
                            on:click=verify
                        >
                            "Verify"
                        </button>
                    }.into_any()
                }}
            </td>
        </tr>
    }
}
