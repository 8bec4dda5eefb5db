//! Interview Scheduler
//!
//! Creates a meeting link for an application at a chosen datetime. The
//! busy guard restores the trigger button and loading indicator on every
//! exit path of the request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dom;

/// Disables the button and shows the loading indicator for as long as it
/// lives; restores both when dropped.
struct BusyGuard {
    disabled: WriteSignal<bool>,
    loading: WriteSignal<bool>,
}

impl BusyGuard {
    fn engage(disabled: WriteSignal<bool>, loading: WriteSignal<bool>) -> Self {
        disabled.set(true);
        loading.set(true);
        Self { disabled, loading }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let _ = self.disabled.try_set(false);
        let _ = self.loading.try_set(false);
    }
}

#[component]
pub fn InterviewScheduler(apply_id: u32) -> impl IntoView {
    let (date, set_date) = signal(String::new());
    let (disabled, set_disabled) = signal(false);
    let (loading, set_loading) = signal(false);

    let schedule = move |_| {
        let value = date.get();
        if value.is_empty() {
            dom::alert("Vui lòng chọn ngày giờ!");
            return;
        }
        if !dom::confirm(&format!("Bạn chắc chắn muốn tạo lịch vào {value}")) {
            return;
        }

        spawn_local(async move {
            let _busy = BusyGuard::engage(set_disabled, set_loading);
            match api::create_interview_link(apply_id, &value).await {
                Ok(body) if body.status == Some(201) => dom::alert("Tạo lịch thành công!"),
                Ok(_) => dom::alert("Tạo lịch thất bại!"),
                Err(err) => dom::alert(&format!("Xảy ra lỗi: {err}")),
            }
            dom::reload();
        });
    };

    view! {
        <input
            type="datetime-local"
            id=format!("datetime_interview_{apply_id}")
            class="form-control"
            prop:value=move || date.get()
            on:input=move |ev| set_date.set(event_target_value(&ev))
        />
        <button
            type="button"
            id=format!("button_create_{apply_id}")
            class="btn btn-sm btn-primary"
            prop:disabled=move || disabled.get()
            on:click=schedule
        >
            "Create interview"
        </button>
        <span
            id=format!("loading_{apply_id}")
            style:display=move || if loading.get() { "inline" } else { "none" }
        >
            "Đang tạo lịch..."
        </span>
    }
}
