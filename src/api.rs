//! Server API Wrappers
//!
//! HTTP bindings to the recruitment endpoints. Form bodies are sent as
//! `URLSearchParams` so the browser applies the urlencoded content type
//! itself, matching what the server-rendered forms submit.

use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use crate::models::{ActionResult, Decision};

const API_PREFIX: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

fn js_err(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

fn form() -> Result<UrlSearchParams, ApiError> {
    UrlSearchParams::new().map_err(js_err)
}

// ========================
// Endpoint Paths
// ========================

fn apply_path(job_id: u32) -> String {
    format!("{API_PREFIX}/apply/{job_id}")
}

fn verified_apply_path(apply_id: u32) -> String {
    format!("{API_PREFIX}/verified-apply/{apply_id}")
}

fn verified_recruiter_path(user_id: u32) -> String {
    format!("{API_PREFIX}/verified-recruiter/{user_id}")
}

fn cancel_recruiter_path(user_id: u32) -> String {
    format!("{API_PREFIX}/cancel-recruiter/{user_id}")
}

fn create_link_path(apply_id: u32) -> String {
    format!("{API_PREFIX}/{apply_id}/create_link")
}

// ========================
// Application Endpoints
// ========================

/// Fields of the job application form.
#[derive(Debug, Clone)]
pub struct ApplyFields {
    pub cover_letter: String,
    pub cv: String,
}

/// Submit a job application. Returns the HTTP status alongside the body;
/// the caller branches on the status.
pub async fn submit_application(
    job_id: u32,
    fields: &ApplyFields,
) -> Result<(u16, ActionResult), ApiError> {
    let params = form()?;
    params.append("coverLetter", &fields.cover_letter);
    params.append("cv", &fields.cv);

    let response = Request::post(&apply_path(job_id))
        .body(params)?
        .send()
        .await?;
    let status = response.status();
    let body = response.json::<ActionResult>().await?;
    Ok((status, body))
}

/// Submit a verification decision for an application. The `med` field
/// carries the decision; the server answers with a display message.
pub async fn verify_application(
    apply_id: u32,
    decision: Decision,
) -> Result<ActionResult, ApiError> {
    let params = form()?;
    params.append("med", decision.as_str());

    let response = Request::post(&verified_apply_path(apply_id))
        .body(params)?
        .send()
        .await?;
    Ok(response.json().await?)
}

// ========================
// Recruiter Endpoints
// ========================
//
// Both answer HTTP 200 with the outcome in the body-level `status` field.

pub async fn verify_recruiter(user_id: u32) -> Result<ActionResult, ApiError> {
    let response = Request::post(&verified_recruiter_path(user_id))
        .send()
        .await?;
    Ok(response.json().await?)
}

pub async fn cancel_recruiter(user_id: u32) -> Result<ActionResult, ApiError> {
    let response = Request::post(&cancel_recruiter_path(user_id))
        .send()
        .await?;
    Ok(response.json().await?)
}

// ========================
// Interview Endpoint
// ========================

/// Create an interview meeting link for the chosen datetime. Body-level
/// `status` 201 means newly created; 200 means a link already existed.
pub async fn create_interview_link(
    apply_id: u32,
    date: &str,
) -> Result<ActionResult, ApiError> {
    let params = form()?;
    params.append("date", date);

    let response = Request::post(&create_link_path(apply_id))
        .body(params)?
        .send()
        .await?;
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(apply_path(42), "/api/apply/42");
        assert_eq!(verified_apply_path(7), "/api/verified-apply/7");
        assert_eq!(verified_recruiter_path(3), "/api/verified-recruiter/3");
        assert_eq!(cancel_recruiter_path(3), "/api/cancel-recruiter/3");
        assert_eq!(create_link_path(9), "/api/9/create_link");
    }
}
