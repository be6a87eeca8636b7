//! Frontend Models
//!
//! Data structures matching the diagnosis backend's wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The locally persisted record identifying the authenticated user.
///
/// `id` is the key used for history lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Credentials submitted to `/login`. Transient, never persisted.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body of `POST /login`.
///
/// The backend omits `success` on the happy path, so a missing field
/// counts as success.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// One past diagnosis result returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub image_name: String,
    /// Base64-encoded JPEG bytes; absent entries render a text placeholder.
    #[serde(default)]
    pub image_data: Option<String>,
    pub is_coloboma: bool,
    /// Percentage in 0-100. The backend sends it as a numeric string.
    #[serde(deserialize_with = "confidence_from_wire")]
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

/// Response body of `GET /history/{userId}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

fn default_true() -> bool {
    true
}

/// Accepts `"87"`, `87` and `87.5` alike; the bar-width math needs a number.
fn confidence_from_wire<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Number(n) => Ok(n),
        Wire::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("bad confidence {:?}: {}", s, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            id: "42".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn login_response_without_success_field_is_success() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"name":"Jane Doe","id":"42"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resp.id.as_deref(), Some("42"));
    }

    #[test]
    fn login_response_failure_carries_message() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid password"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Invalid password"));
    }

    #[test]
    fn history_entry_confidence_parses_from_string() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"imageName":"a.jpg","isColoboma":true,"confidence":"87","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(entry.is_coloboma);
        assert_eq!(entry.confidence, 87.0);
        assert_eq!(entry.image_data, None);
    }

    #[test]
    fn history_entry_confidence_parses_from_number() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"imageName":"a.jpg","isColoboma":false,"confidence":87.5,"createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.confidence, 87.5);
    }

    #[test]
    fn history_entry_rejects_unparseable_confidence() {
        let result = serde_json::from_str::<HistoryEntry>(
            r#"{"imageName":"a.jpg","isColoboma":false,"confidence":"high","createdAt":"2024-01-01T00:00:00Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn history_response_without_list_is_empty() {
        let resp: HistoryResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.history.is_empty());
    }
}
