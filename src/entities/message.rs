//! Contact messages (the admin inbox)
//!
//! Messages arrive through the public contact endpoint and are managed
//! from the admin messages screen: search, read/unread filter, bulk
//! mark/delete, CSV export.

use crate::core::field::FieldValue;
use crate::core::record::{Faceted, Searchable};
use crate::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Record a newly received message; new mail is unread.
    pub fn receive(draft: MessageDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            body: draft.body,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// The read/unread facet value
    pub fn read_state(&self) -> &'static str {
        if self.read { "read" } else { "unread" }
    }
}

impl_record!(Message, "message", "messages", created_at);

impl Searchable for Message {
    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email", "subject", "body"]
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "subject" => self.subject.as_str().into(),
            "body" => self.body.as_str().into(),
            _ => FieldValue::Null,
        }
    }
}

impl Faceted for Message {
    fn facet_names() -> &'static [&'static str] {
        &["status"]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "status" => Some(self.read_state().to_string()),
            _ => None,
        }
    }
}

/// Fields of an incoming message
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MessageDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[serde(default)]
    pub body: String,
}

/// Partial update for a message; only the read flag is editable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageUpdate {
    pub read: Option<bool>,
}

impl MessageUpdate {
    pub fn apply_to(&self, message: &Message) -> Message {
        let mut updated = message.clone();
        if let Some(read) = self.read {
            updated.read = read;
        }
        updated
    }
}

/// Action applied to a set of selected messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    MarkRead,
    MarkUnread,
    Delete,
}

/// Render messages as CSV, one row per message, header first.
///
/// Fields are always quoted; embedded quotes are doubled per RFC 4180.
pub fn export_csv(messages: &[Message]) -> String {
    let header = ["id", "name", "email", "subject", "body", "created_at", "read"];
    let mut out = header.join(",");
    out.push('\n');

    for message in messages {
        let row = [
            message.id.to_string(),
            message.name.clone(),
            message.email.clone(),
            message.subject.clone(),
            message.body.clone(),
            message.created_at.to_rfc3339(),
            message.read.to_string(),
        ];
        let quoted: Vec<String> = row.iter().map(|field| csv_quote(field)).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }

    out
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, subject: &str, body: &str) -> Message {
        Message::receive(MessageDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: subject.to_string(),
            body: body.to_string(),
        })
    }

    #[test]
    fn test_new_messages_are_unread() {
        let m = message("Alice", "Hello", "Hi there");
        assert!(!m.read);
        assert_eq!(m.read_state(), "unread");
        assert_eq!(m.facet_value("status").as_deref(), Some("unread"));
    }

    #[test]
    fn test_search_covers_body() {
        let m = message("Alice", "Pricing", "Could you quote 200 units?");
        assert!(m.matches_term("200 units"));
        assert!(m.matches_term("pricing"));
        assert!(!m.matches_term("shipping"));
    }

    #[test]
    fn test_update_flips_read_flag() {
        let m = message("Alice", "Hello", "Hi");
        let updated = MessageUpdate { read: Some(true) }.apply_to(&m);
        assert!(updated.read);
        assert_eq!(updated.facet_value("status").as_deref(), Some("read"));
    }

    #[test]
    fn test_bulk_action_parses_snake_case() {
        let action: BulkAction = serde_json::from_str("\"mark_read\"").unwrap();
        assert_eq!(action, BulkAction::MarkRead);
        let action: BulkAction = serde_json::from_str("\"delete\"").unwrap();
        assert_eq!(action, BulkAction::Delete);
        assert!(serde_json::from_str::<BulkAction>("\"archive\"").is_err());
    }

    #[test]
    fn test_csv_export_header_and_rows() {
        let rows = vec![message("Alice", "Hello", "Hi"), message("Bob", "Quote", "Bulk order")];
        let csv = export_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,name,email,subject,body,created_at,read");
        assert!(lines[1].contains("\"Alice\""));
        assert!(lines[2].contains("\"Bulk order\""));
    }

    #[test]
    fn test_csv_export_escapes_quotes_and_commas() {
        let m = message("Carol", "Re: \"urgent\" order", "First, second");
        let csv = export_csv(&[m]);
        assert!(csv.contains("\"Re: \"\"urgent\"\" order\""));
        assert!(csv.contains("\"First, second\""));
    }

    #[test]
    fn test_csv_export_empty_is_header_only() {
        let csv = export_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
