//! # Instagram Webhook Schemas
//!
//! Data structures for the payloads Instagram delivers to the webhook
//! receiver. Payloads are logged and discarded, so the schemas stay lenient:
//! every field defaults instead of failing the whole request, and the
//! `entry` field is kept opaque until the handler checks its shape.

use serde::{Deserialize, Serialize};

/// Root webhook payload from Instagram
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// The object type, typically "instagram"
    #[serde(default)]
    pub object: String,
    /// The entries, expected to be an array but not guaranteed to be one
    #[serde(default)]
    pub entry: serde_json::Value,
}

/// A single webhook entry, carrying either field changes or messaging events
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Entry {
    /// Account ID the entry belongs to
    #[serde(default)]
    pub id: String,
    /// Unix timestamp of the entry
    #[serde(default)]
    pub time: i64,
    /// Direct-message events (ignored by the relay)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging: Option<Vec<MessagingEvent>>,
    /// Field-change notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<Change>>,
}

/// Field-change notification with an upstream-defined opaque value
#[derive(Debug, Deserialize, Serialize)]
pub struct Change {
    /// The field that changed (e.g., "comments", "mentions")
    #[serde(default)]
    pub field: String,
    /// The change data; shape varies per field
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Direct-message event
#[derive(Debug, Deserialize, Serialize)]
pub struct MessagingEvent {
    /// Sender of the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<EventParty>,
    /// Recipient of the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<EventParty>,
    /// Unix timestamp in milliseconds
    #[serde(default)]
    pub timestamp: i64,
    /// Message content, when the event carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<IncomingMessage>,
}

/// Party reference in a messaging event
#[derive(Debug, Deserialize, Serialize)]
pub struct EventParty {
    /// Instagram-scoped user ID
    pub id: String,
}

/// Message content of a direct-message event
#[derive(Debug, Deserialize, Serialize)]
pub struct IncomingMessage {
    /// Message ID
    #[serde(default)]
    pub mid: String,
    /// Text body, absent for media-only messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_entry_deserialization() {
        let json = r#"{
            "object": "instagram",
            "entry": [{
                "id": "17841400000000000",
                "time": 1700000000,
                "changes": [{"field": "comments", "value": {"a": 1}}]
            }]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.object, "instagram");

        let entries = payload.entry.as_array().unwrap();
        let entry: Entry = serde_json::from_value(entries[0].clone()).unwrap();
        let changes = entry.changes.unwrap();
        assert_eq!(changes[0].field, "comments");
        assert_eq!(changes[0].value, serde_json::json!({"a": 1}));
        assert!(entry.messaging.is_none());
    }

    #[test]
    fn test_messaging_entry_deserialization() {
        let json = r#"{
            "id": "17841400000000000",
            "time": 1700000000,
            "messaging": [{
                "sender": {"id": "111"},
                "recipient": {"id": "222"},
                "timestamp": 1700000000123,
                "message": {"mid": "mid.abc", "text": "hello"}
            }]
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        let messaging = entry.messaging.unwrap();
        assert_eq!(messaging[0].sender.as_ref().unwrap().id, "111");
        assert_eq!(messaging[0].message.as_ref().unwrap().text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_non_array_entry_still_parses() {
        let payload: WebhookPayload =
            serde_json::from_str(r#"{"object": "instagram", "entry": "oops"}"#).unwrap();
        assert!(payload.entry.as_array().is_none());
    }
}
