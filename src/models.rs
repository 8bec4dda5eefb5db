//! Frontend Models
//!
//! Data structures matching the server's JSON contract.

use serde::{Deserialize, Serialize};

/// JSON body returned by the action endpoints.
///
/// Every endpoint answers with some subset of these fields; the ones it
/// does not produce stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionResult {
    pub message: Option<String>,
    pub status: Option<u16>,
    pub link: Option<String>,
}

/// Verification decision sent to the server in the `med` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Reject,
    Accept,
}

impl Decision {
    /// Exact string the server expects in the `med` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Confirm => "Confirm",
            Decision::Reject => "Reject",
            Decision::Accept => "Accept",
        }
    }

    /// Application state the server moves to for this decision.
    pub fn status(self) -> ApplicationStatus {
        match self {
            Decision::Confirm => ApplicationStatus::Confirmed,
            Decision::Reject => ApplicationStatus::Rejected,
            Decision::Accept => ApplicationStatus::Accepted,
        }
    }
}

/// Application states mirrored from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Pending,
    Confirmed,
    Rejected,
    Accepted,
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Pending
    }
}

impl ApplicationStatus {
    /// Text shown in the status badge.
    pub fn badge_text(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Status: Pending",
            ApplicationStatus::Confirmed => "Status: Confirmed",
            ApplicationStatus::Rejected => "Status: Rejected",
            ApplicationStatus::Accepted => "Status: Accepted",
        }
    }

    /// Full class list of the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "badge mb-2 p-2 bg-secondary",
            ApplicationStatus::Confirmed => "badge mb-2 p-2 bg-primary",
            ApplicationStatus::Rejected => "badge mb-2 p-2 bg-danger",
            ApplicationStatus::Accepted => "badge mb-2 p-2 bg-success",
        }
    }
}

/// One row of the recruiter's application review table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRow {
    pub id: u32,
    pub applicant: String,
    pub job_title: String,
    pub cover_letter: String,
    #[serde(default)]
    pub status: ApplicationStatus,
}

/// One row of the admin's recruiter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruiterRow {
    pub id: u32,
    pub username: String,
    pub company: Option<String>,
    pub verified: bool,
}

/// A CV the job seeker can attach to an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvEntry {
    pub id: u32,
    pub name: String,
}

/// Job fields shown on the detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: u32,
    pub title: String,
    pub salary_min: u64,
    pub salary_max: u64,
}

// ========================
// Embedded Page Data
// ========================
//
// The server renders one `<script type="application/json" id="page-data">`
// block per page; these are its shapes.

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobDetailData {
    pub job: JobSummary,
    #[serde(default)]
    pub cvs: Vec<CvEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewPageData {
    #[serde(default)]
    pub applications: Vec<ApplicationRow>,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecruiterPageData {
    #[serde(default)]
    pub recruiters: Vec<RecruiterRow>,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CvPageData {
    #[serde(default)]
    pub cvs: Vec<CvEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_wire_strings() {
        assert_eq!(Decision::Confirm.as_str(), "Confirm");
        assert_eq!(Decision::Reject.as_str(), "Reject");
        assert_eq!(Decision::Accept.as_str(), "Accept");
    }

    #[test]
    fn test_decision_maps_to_single_status() {
        // Each decision selects exactly one badge, no fallthrough.
        assert_eq!(Decision::Confirm.status().badge_text(), "Status: Confirmed");
        assert_eq!(Decision::Reject.status().badge_text(), "Status: Rejected");
        assert_eq!(Decision::Accept.status().badge_text(), "Status: Accepted");
    }

    #[test]
    fn test_badge_class_keeps_base_classes() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Confirmed,
            ApplicationStatus::Rejected,
            ApplicationStatus::Accepted,
        ] {
            assert!(status.badge_class().starts_with("badge mb-2 p-2"));
        }
    }

    #[test]
    fn test_action_result_partial_bodies() {
        let apply: ActionResult =
            serde_json::from_str(r#"{"message": "You have already applied"}"#).unwrap();
        assert_eq!(apply.message.as_deref(), Some("You have already applied"));
        assert_eq!(apply.status, None);

        let recruiter: ActionResult = serde_json::from_str(r#"{"status": 200}"#).unwrap();
        assert_eq!(recruiter.status, Some(200));
        assert_eq!(recruiter.message, None);

        let link: ActionResult =
            serde_json::from_str(r#"{"link": "https://meet.example/abc", "status": 201}"#).unwrap();
        assert_eq!(link.status, Some(201));
        assert_eq!(link.link.as_deref(), Some("https://meet.example/abc"));
    }

    #[test]
    fn test_application_status_wire_format() {
        let row: ApplicationRow = serde_json::from_str(
            r#"{"id": 7, "applicant": "an", "job_title": "Backend dev", "cover_letter": "hi", "status": "PENDING"}"#,
        )
        .unwrap();
        assert_eq!(row.status, ApplicationStatus::Pending);

        // Status omitted defaults to pending.
        let row: ApplicationRow = serde_json::from_str(
            r#"{"id": 8, "applicant": "binh", "job_title": "QA", "cover_letter": ""}"#,
        )
        .unwrap();
        assert_eq!(row.status, ApplicationStatus::Pending);
    }
}
