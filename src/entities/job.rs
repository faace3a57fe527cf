//! Job postings
//!
//! Jobs appear on the public careers page while active and are managed
//! from the admin career screen. The applications counter is maintained
//! by the apply endpoint.

use crate::core::field::FieldValue;
use crate::core::record::{Faceted, Searchable};
use crate::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Employment type, e.g. "Full-time", "Part-time", "Contract"
    pub employment_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    pub skills: Vec<String>,
    pub benefits: Vec<String>,
    pub is_active: bool,
    pub applications_count: u64,
    pub posted_at: DateTime<Utc>,
}

impl Job {
    /// Build a new posting from a validated draft. New jobs start active
    /// with no applications.
    pub fn create(draft: JobDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            department: draft.department,
            location: draft.location,
            employment_type: draft.employment_type,
            salary: draft.salary,
            description: draft.description,
            requirements: draft.requirements,
            responsibilities: draft.responsibilities,
            skills: draft.skills,
            benefits: draft.benefits,
            is_active: true,
            applications_count: 0,
            posted_at: Utc::now(),
        }
    }
}

impl_record!(Job, "job", "jobs", posted_at);

impl Searchable for Job {
    fn searchable_fields() -> &'static [&'static str] {
        &["title", "department", "location", "skills"]
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "title" => self.title.as_str().into(),
            "department" => self.department.as_str().into(),
            "location" => self.location.as_str().into(),
            "salary" => self.salary.as_str().into(),
            "skills" => self.skills.clone().into(),
            "benefits" => self.benefits.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

impl Faceted for Job {
    fn facet_names() -> &'static [&'static str] {
        &["department", "location", "type", "active"]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "department" => Some(self.department.clone()),
            "location" => Some(self.location.clone()),
            "type" => Some(self.employment_type.clone()),
            "active" => Some(if self.is_active { "active" } else { "inactive" }.to_string()),
            _ => None,
        }
    }
}

/// Editable fields of a job posting
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JobDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Employment type is required"))]
    pub employment_type: String,

    #[serde(default)]
    pub salary: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub requirements: String,

    #[serde(default)]
    pub responsibilities: String,

    /// Structured entry instead of free-form prompts: skills arrive as a
    /// list of non-empty strings
    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub benefits: Vec<String>,
}

impl From<&Job> for JobDraft {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            employment_type: job.employment_type.clone(),
            salary: job.salary.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            responsibilities: job.responsibilities.clone(),
            skills: job.skills.clone(),
            benefits: job.benefits.clone(),
        }
    }
}

/// Partial update for a job posting
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JobUpdate {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Department is required"))]
    pub department: Option<String>,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: Option<String>,

    #[validate(length(min = 1, message = "Employment type is required"))]
    pub employment_type: Option<String>,

    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub skills: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl JobUpdate {
    /// Produce the updated job, leaving absent fields untouched
    pub fn apply_to(&self, job: &Job) -> Job {
        let mut updated = job.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(department) = &self.department {
            updated.department = department.clone();
        }
        if let Some(location) = &self.location {
            updated.location = location.clone();
        }
        if let Some(employment_type) = &self.employment_type {
            updated.employment_type = employment_type.clone();
        }
        if let Some(salary) = &self.salary {
            updated.salary = salary.clone();
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        if let Some(requirements) = &self.requirements {
            updated.requirements = requirements.clone();
        }
        if let Some(responsibilities) = &self.responsibilities {
            updated.responsibilities = responsibilities.clone();
        }
        if let Some(skills) = &self.skills {
            updated.skills = skills.clone();
        }
        if let Some(benefits) = &self.benefits {
            updated.benefits = benefits.clone();
        }
        if let Some(is_active) = self.is_active {
            updated.is_active = is_active;
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, department: &str) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            department: department.to_string(),
            location: "Remote".to_string(),
            employment_type: "Full-time".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_new_jobs_start_active_with_zero_applications() {
        let job = Job::create(draft("Backend Engineer", "Engineering"));
        assert!(job.is_active);
        assert_eq!(job.applications_count, 0);
    }

    #[test]
    fn test_search_includes_skills() {
        let job = Job::create(draft("Backend Engineer", "Engineering"));
        assert!(job.matches_term("rust"));
        assert!(job.matches_term("engineer"));
        assert!(!job.matches_term("marketing"));
    }

    #[test]
    fn test_active_facet() {
        let mut job = Job::create(draft("Backend Engineer", "Engineering"));
        assert_eq!(job.facet_value("active").as_deref(), Some("active"));
        job.is_active = false;
        assert_eq!(job.facet_value("active").as_deref(), Some("inactive"));
    }

    #[test]
    fn test_update_toggles_active_only() {
        let job = Job::create(draft("Backend Engineer", "Engineering"));
        let update = JobUpdate {
            is_active: Some(false),
            ..Default::default()
        };

        let updated = update.apply_to(&job);
        assert!(!updated.is_active);
        assert_eq!(updated.title, job.title);
        assert_eq!(updated.applications_count, job.applications_count);
    }

    #[test]
    fn test_draft_requires_title_and_department() {
        let errors = draft("", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("department"));
    }
}
