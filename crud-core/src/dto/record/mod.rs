//! Record DTOs for the HTTP API

use serde::{Deserialize, Serialize};

/// Body of a create or update request
///
/// Any `id` sent by the caller is not part of this type and is dropped on
/// deserialization. Omitted fields default to `null` / `0`, so an update
/// always overwrites all three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_id_is_ignored() {
        let payload: RecordPayload =
            serde_json::from_str(r#"{"id":42,"name":"Alice","age":30,"city":"Paris"}"#).unwrap();

        assert_eq!(
            payload,
            RecordPayload {
                name: Some("Alice".to_string()),
                age: 30,
                city: Some("Paris".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let payload: RecordPayload = serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();

        assert_eq!(payload.name.as_deref(), Some("Alice"));
        assert_eq!(payload.age, 0);
        assert_eq!(payload.city, None);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<RecordPayload>(r#"{"age":"thirty"}"#);
        assert!(result.is_err());
    }
}
