//! Job applications
//!
//! Submitted from the public careers page, reviewed from the admin career
//! screen. The status field walks the hiring pipeline and only ever takes
//! the five declared values.

use crate::core::field::FieldValue;
use crate::core::record::{Faceted, Searchable};
use crate::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Hiring pipeline state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    /// Every value the status field can take, in pipeline order
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown application status: '{s}'"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Title of the position applied for
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub resume_name: String,
    pub resume_size: u64,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<Uuid>,
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    /// Build a freshly submitted application; submissions always enter
    /// the pipeline as pending.
    pub fn submit(draft: ApplicationDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            position: draft.position,
            message: draft.message,
            resume_name: draft.resume_name,
            resume_size: draft.resume_size,
            status: ApplicationStatus::Pending,
            job_id: draft.job_id,
            submitted_at: Utc::now(),
        }
    }
}

impl_record!(Application, "application", "applications", submitted_at);

impl Searchable for Application {
    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email", "position"]
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "position" => self.position.as_str().into(),
            "message" => self.message.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

impl Faceted for Application {
    fn facet_names() -> &'static [&'static str] {
        &["status"]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

/// Fields supplied when submitting an application
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ApplicationDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,

    #[serde(default)]
    pub message: Option<String>,

    #[validate(length(min = 1, message = "Resume is required"))]
    pub resume_name: String,

    #[serde(default)]
    pub resume_size: u64,

    #[serde(default)]
    pub job_id: Option<Uuid>,
}

/// Partial update for an application; the admin screen only ever moves
/// the status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationUpdate {
    pub status: Option<ApplicationStatus>,
}

impl ApplicationUpdate {
    pub fn apply_to(&self, application: &Application) -> Application {
        let mut updated = application.clone();
        if let Some(status) = self.status {
            updated.status = status;
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, position: &str) -> ApplicationDraft {
        ApplicationDraft {
            name: name.to_string(),
            email: email.to_string(),
            position: position.to_string(),
            resume_name: "resume.pdf".to_string(),
            resume_size: 245_760,
            ..Default::default()
        }
    }

    #[test]
    fn test_submissions_start_pending() {
        let app = Application::submit(draft("John Doe", "john@example.com", "Engineer"));
        assert_eq!(app.status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in ApplicationStatus::ALL {
            assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
        }
        assert!("archived".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ApplicationStatus::Shortlisted).unwrap();
        assert_eq!(json, "\"shortlisted\"");
    }

    #[test]
    fn test_search_covers_name_email_position() {
        let app = Application::submit(draft("Jane Smith", "jane@example.com", "Product Manager"));
        assert!(app.matches_term("jane"));
        assert!(app.matches_term("example.com"));
        assert!(app.matches_term("product"));
        assert!(!app.matches_term("designer"));
    }

    #[test]
    fn test_status_facet() {
        let mut app = Application::submit(draft("A", "a@b.co", "X"));
        assert_eq!(app.facet_value("status").as_deref(), Some("pending"));
        app.status = ApplicationStatus::Hired;
        assert_eq!(app.facet_value("status").as_deref(), Some("hired"));
    }

    #[test]
    fn test_update_moves_status_only() {
        let app = Application::submit(draft("John", "john@example.com", "Engineer"));
        let update = ApplicationUpdate {
            status: Some(ApplicationStatus::Reviewed),
        };
        let updated = update.apply_to(&app);
        assert_eq!(updated.status, ApplicationStatus::Reviewed);
        assert_eq!(updated.email, app.email);
    }

    #[test]
    fn test_draft_rejects_bad_email() {
        let errors = draft("John", "not-an-email", "Engineer").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
