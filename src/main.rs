#![allow(warnings)]
//! Recruit Frontend Entry Point

mod api;
mod app;
mod components;
mod dom;
mod format;
mod models;
mod route;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
