//! Pagination Tab Bar
//!
//! Marks the tab matching the `page` query parameter active.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    /// Number of pages the server rendered for this listing
    pages: u32,
    /// Active page taken from the `page` query parameter
    current: u32,
) -> impl IntoView {
    view! {
        <ul class="pagination">
            {(1..=pages).map(|n| {
                let item_class = if n == current { "page-item active" } else { "page-item" };
                view! {
                    <li class=item_class id=format!("page{n}")>
                        <a class="page-link" href=format!("?page={n}")>{n}</a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
