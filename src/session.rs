//! Persisted Session
//!
//! Explicit load/save/clear lifecycle for the `localStorage` session record.
//! The in-memory copy lives in the global store (`crate::store`); this module
//! only owns the persistence boundary.

use crate::models::Session;

/// localStorage key holding the JSON-serialized session.
const STORAGE_KEY: &str = "user";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the persisted session, if any. A missing or malformed record
/// degrades to `None` (the logged-out path), never an error.
pub fn load() -> Option<Session> {
    let raw = storage()?.get_item(STORAGE_KEY).ok()??;
    parse(&raw)
}

/// Persist the session after a successful login.
pub fn save(session: &Session) -> Result<(), String> {
    let json = serde_json::to_string(session).map_err(|e| e.to_string())?;
    storage()
        .ok_or_else(|| "localStorage not available".to_string())?
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| format!("{:?}", e))
}

/// Remove the persisted session on logout.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

fn parse(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_stored_session() {
        let session =
            parse(r#"{"id":"42","name":"Jane Doe","email":"jane@example.com"}"#).unwrap();
        assert_eq!(session.id, "42");
        assert_eq!(session.email, "jane@example.com");
    }

    #[test]
    fn parse_treats_garbage_as_logged_out() {
        assert!(parse("not json").is_none());
        assert!(parse(r#"{"id":42}"#).is_none());
    }
}
