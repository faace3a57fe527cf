//! Public contact/lead form
//!
//! The one write endpoint anonymous visitors get. Validation mirrors the
//! form: required identity fields, well-formed email and phone, and at
//! least one product requirement. Accepted submissions land in the
//! messages collection as unread mail.

use crate::core::field::FieldFormat;
use crate::entities::message::MessageDraft;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// A submission of the public contact form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    #[validate(custom(function = validate_phone))]
    pub phone: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "At least one product requirement is required"))]
    pub requirements: Vec<String>,
}

impl ContactRequest {
    /// Fold the submission into an inbox message draft
    pub fn into_message(self) -> MessageDraft {
        let mut body = format!(
            "Company: {}\nCountry: {}\nPhone: {}\n\nRequirements:\n",
            self.company, self.country, self.phone
        );
        for requirement in &self.requirements {
            body.push_str("- ");
            body.push_str(requirement);
            body.push('\n');
        }

        MessageDraft {
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            subject: format!("Product inquiry from {}", self.company),
            body,
        }
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if FieldFormat::Phone.is_valid(phone) {
        Ok(())
    } else {
        let mut error = ValidationError::new("phone");
        error.message = Some("Please enter a valid phone number".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            first_name: "Dana".to_string(),
            last_name: "Lee".to_string(),
            company: "Acme Manufacturing".to_string(),
            country: "Germany".to_string(),
            phone: "+49 151 1234 5678".to_string(),
            email: "dana.lee@acme.example".to_string(),
            requirements: vec!["Pressure sensors".to_string(), "Controllers".to_string()],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let req = ContactRequest {
            first_name: String::new(),
            company: String::new(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("company"));
    }

    #[test]
    fn test_malformed_email_and_phone() {
        let req = ContactRequest {
            email: "not-an-email".to_string(),
            phone: "abc".to_string(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_empty_requirements_rejected() {
        let req = ContactRequest {
            requirements: vec![],
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("requirements"));
    }

    #[test]
    fn test_into_message_carries_everything() {
        let draft = request().into_message();
        assert_eq!(draft.name, "Dana Lee");
        assert_eq!(draft.subject, "Product inquiry from Acme Manufacturing");
        assert!(draft.body.contains("Germany"));
        assert!(draft.body.contains("- Pressure sensors"));
        assert!(draft.body.contains("- Controllers"));
    }
}
