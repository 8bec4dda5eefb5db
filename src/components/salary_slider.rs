//! Salary Range Display
//!
//! Live currency readout for the salary slider on the posting form.

use leptos::prelude::*;

use crate::format;

#[component]
pub fn SalarySlider(min: u64, max: u64) -> impl IntoView {
    let (value, set_value) = signal(min);

    view! {
        <input
            type="range"
            id="salaryRange"
            name="salary"
            min=min.to_string()
            max=max.to_string()
            prop:value=move || value.get().to_string()
            on:input=move |ev| {
                set_value.set(event_target_value(&ev).parse().unwrap_or(min));
            }
        />
        <span id="salaryText">
            {move || format::salary_range_label(value.get(), max)}
        </span>
    }
}
