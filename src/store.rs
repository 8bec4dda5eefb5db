//! Review Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ApplicationRow, ApplicationStatus};

/// State of the applications review page
#[derive(Clone, Debug, Default, Store)]
pub struct ReviewState {
    /// Applications listed on the current page
    pub applications: Vec<ApplicationRow>,
}

/// Type alias for the store
pub type ReviewStore = Store<ReviewState>;

/// Get the review store from context
pub fn use_review_store() -> ReviewStore {
    expect_context::<ReviewStore>()
}

/// Update an application's status in the store by ID
pub fn store_set_status(store: &ReviewStore, apply_id: u32, status: ApplicationStatus) {
    store
        .applications()
        .write()
        .iter_mut()
        .find(|row| row.id == apply_id)
        .map(|row| row.status = status);
}
