//! Browser Capability Accessors
//!
//! Typed wrappers over the window APIs the handlers touch. A missing
//! browser global or rejected call surfaces as a `DomError` instead of a
//! panic.

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window object")]
    NoWindow,
    #[error("no document object")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("malformed page data: {0}")]
    Data(String),
}

fn js(err: JsValue) -> DomError {
    DomError::Js(format!("{err:?}"))
}

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Pathname of the current location.
pub fn current_path() -> Result<String, DomError> {
    window()?.location().pathname().map_err(js)
}

/// `page` query parameter of the current location, default 1.
pub fn current_page() -> Result<u32, DomError> {
    let search = window()?.location().search().map_err(js)?;
    Ok(crate::route::page_param(&search))
}

/// Deserialize the JSON block the server embeds in the page, if present.
pub fn embedded_json<T: DeserializeOwned>(id: &str) -> Result<Option<T>, DomError> {
    let Some(el) = document()?.get_element_by_id(id) else {
        return Ok(None);
    };
    let text = el.text_content().unwrap_or_default();
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| DomError::Data(e.to_string()))
}

/// Blocking alert dialog. Failures are logged, not propagated.
pub fn alert(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(js));
    if let Err(err) = shown {
        web_sys::console::error_1(&format!("alert: {err}").into());
    }
}

/// Blocking confirmation dialog. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    match window().and_then(|w| w.confirm_with_message(message).map_err(js)) {
        Ok(choice) => choice,
        Err(err) => {
            web_sys::console::error_1(&format!("confirm: {err}").into());
            false
        }
    }
}

/// Reload the current page.
pub fn reload() {
    let done = window().and_then(|w| w.location().reload().map_err(js));
    if let Err(err) = done {
        web_sys::console::error_1(&format!("reload: {err}").into());
    }
}

/// Navigate to another page.
pub fn navigate(href: &str) {
    let done = window().and_then(|w| w.location().set_href(href).map_err(js));
    if let Err(err) = done {
        web_sys::console::error_1(&format!("navigate: {err}").into());
    }
}
