//! Polymorphic field values and format validators
//!
//! `FieldValue` is the dynamic view the query engine uses to look at a
//! record's fields without knowing the concrete type. `FieldFormat` holds
//! the regex-backed format checks shared by payload validation.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    /// A list of short strings (skills, benefits, requirements)
    Tags(Vec<String>),
    Null,
}

impl FieldValue {
    /// Get the value as text if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive substring match against the textual content of the
    /// value. `needle` must already be lowercased by the caller.
    ///
    /// Only text and tag values participate in free-text search; numeric,
    /// boolean and timestamp fields never match a search term.
    pub fn contains_ci(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle),
            FieldValue::Tags(tags) => tags.iter().any(|t| t.to_lowercase().contains(needle)),
            _ => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(s: Option<String>) -> Self {
        s.map_or(FieldValue::Null, FieldValue::Text)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(tags: Vec<String>) -> Self {
        FieldValue::Tags(tags)
    }
}

/// Field format validators for automatic validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Phone,
    Url,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string against this format
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Phone => Self::is_valid_phone(value),
            FieldFormat::Url => Self::is_valid_url(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PHONE_REGEX.get_or_init(|| {
            // At least 8 digits, max 15 (E.164 standard)
            Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap()
        });
        // Separators commonly typed into phone fields are stripped first
        let cleaned: String = phone
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        regex.is_match(&cleaned)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ci_text() {
        let v = FieldValue::from("Senior Software Engineer");
        assert!(v.contains_ci("software"));
        assert!(v.contains_ci("engineer"));
        assert!(!v.contains_ci("manager"));
    }

    #[test]
    fn test_contains_ci_tags() {
        let v = FieldValue::from(vec!["Rust".to_string(), "PostgreSQL".to_string()]);
        assert!(v.contains_ci("postgres"));
        assert!(!v.contains_ci("python"));
    }

    #[test]
    fn test_contains_ci_non_text_never_matches() {
        assert!(!FieldValue::Integer(42).contains_ci("42"));
        assert!(!FieldValue::Boolean(true).contains_ci("true"));
        assert!(!FieldValue::Null.contains_ci(""));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
        assert_eq!(
            FieldValue::from(Some("x".to_string())),
            FieldValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_email_format() {
        assert!(FieldFormat::Email.is_valid("user@example.com"));
        assert!(!FieldFormat::Email.is_valid("not-an-email"));
        assert!(!FieldFormat::Email.is_valid("user@no-tld"));
    }

    #[test]
    fn test_phone_format_accepts_separators() {
        assert!(FieldFormat::Phone.is_valid("+1 (555) 123-4567"));
        assert!(FieldFormat::Phone.is_valid("15551234567"));
        assert!(!FieldFormat::Phone.is_valid("abc"));
        assert!(!FieldFormat::Phone.is_valid("123"));
    }

    #[test]
    fn test_url_format() {
        assert!(FieldFormat::Url.is_valid("https://example.com/logo.png"));
        assert!(!FieldFormat::Url.is_valid("ftp://example.com"));
    }

    #[test]
    fn test_custom_format() {
        let format = FieldFormat::Custom(Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());
        assert!(format.is_valid("#228be6"));
        assert!(!format.is_valid("blue"));
    }
}
