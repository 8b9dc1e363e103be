//! # Instagram Webhook Handler
//!
//! Processing for incoming webhook payloads. The relay only observes:
//! field changes are logged one by one, direct-message events are
//! deliberately ignored, and anything unrecognized is logged as unhandled.

use super::schemas::{Change, Entry, WebhookPayload};
use log::{info, warn};

/// Deserializes the payload's `entry` field into typed entries.
///
/// Returns `None` when `entry` is not an array; an element that is not an
/// object becomes a default entry and is later reported as unhandled.
pub fn parse_entries(payload: &WebhookPayload) -> Option<Vec<Entry>> {
    let raw_entries = payload.entry.as_array()?;

    Some(
        raw_entries
            .iter()
            .map(|raw| serde_json::from_value(raw.clone()).unwrap_or_default())
            .collect(),
    )
}

/// Collects every field change across all entries
pub fn collect_changes(entries: &[Entry]) -> Vec<&Change> {
    entries
        .iter()
        .filter_map(|entry| entry.changes.as_ref())
        .flatten()
        .collect()
}

/// Main webhook processor
///
/// Logs the full payload, then walks the entries: `changes` are logged per
/// field, `messaging` events are skipped, anything else is unhandled.
/// Never fails; a malformed `entry` shape only produces a warning.
pub fn process_webhook(payload: &WebhookPayload) {
    info!(
        "Received webhook payload: {}",
        serde_json::to_string_pretty(payload).unwrap_or_default()
    );

    let Some(entries) = parse_entries(payload) else {
        warn!("Unexpected payload structure");
        return;
    };

    for entry in &entries {
        if let Some(changes) = &entry.changes {
            for change in changes {
                info!("Received {} update: {}", change.field, change.value);
            }
        } else if entry.messaging.is_some() {
            // Direct-message events are acknowledged but not acted on
        } else {
            warn!(
                "Unhandled entry type: {}",
                serde_json::to_string(entry).unwrap_or_default()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_from(json: &str) -> WebhookPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_entries_with_changes() {
        let payload = payload_from(
            r#"{"entry":[{"changes":[{"field":"f","value":{"a":1}}]}]}"#,
        );

        let entries = parse_entries(&payload).unwrap();
        assert_eq!(entries.len(), 1);

        let changes = collect_changes(&entries);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "f");
        assert_eq!(changes[0].value, serde_json::json!({"a": 1}));
    }

    #[test]
    fn test_parse_entries_non_array() {
        let payload = payload_from(r#"{"object":"instagram","entry":{"id":"1"}}"#);
        assert!(parse_entries(&payload).is_none());
    }

    #[test]
    fn test_messaging_entries_carry_no_changes() {
        let payload = payload_from(
            r#"{"entry":[{"messaging":[{"sender":{"id":"1"},"recipient":{"id":"2"},
                "timestamp":1,"message":{"mid":"m","text":"hi"}}]}]}"#,
        );

        let entries = parse_entries(&payload).unwrap();
        assert!(collect_changes(&entries).is_empty());
        assert!(entries[0].messaging.is_some());
    }

    #[test]
    fn test_process_webhook_tolerates_junk_entries() {
        // Must not panic on non-object elements
        process_webhook(&payload_from(r#"{"entry":[42,"junk",{}]}"#));
        process_webhook(&payload_from(r#"{"entry":false}"#));
    }
}
