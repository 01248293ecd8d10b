//! Domain DTOs for the users API.
//!
//! # Design
//! These types mirror the backend's JSON schema but are defined
//! independently of the mock-server crate; the integration tests catch
//! schema drift between the two. `createdAt` keeps its wire spelling via
//! a serde rename and is omitted from output when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted user record as returned by the API.
///
/// `id` and `created_at` are always server-assigned; the client never
/// fabricates either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The editable field set of a user: the payload for both create and
/// update. The backend replaces both fields on update, so no partial
/// patch type is needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_created_at_as_camel_case() {
        let user = User {
            id: Uuid::nil(),
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            created_at: Some("2024-01-01T00:00:00Z".parse().unwrap()),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["email"], "a@b.com");
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-01-01"));
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn user_omits_missing_created_at() {
        let user = User {
            id: Uuid::nil(),
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            created_at: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn user_roundtrips_through_json() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Roundtrip".to_string(),
            email: "r@t.io".to_string(),
            created_at: Some("2024-06-15T12:30:00Z".parse().unwrap()),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn user_deserializes_without_created_at() {
        let user: User = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","name":"Ann","email":"a@b.com"}"#,
        )
        .unwrap();
        assert!(user.created_at.is_none());
    }

    #[test]
    fn draft_serializes_name_and_email_only() {
        let draft = UserDraft::new("Ann", "a@b.com");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ann", "email": "a@b.com"}));
    }
}
