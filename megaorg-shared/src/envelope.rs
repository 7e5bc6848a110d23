/// API response envelope
///
/// Every successful response from the backend wraps its payload as
/// `{ "success": bool, "data": <record | records>, "message": string? }`.
/// Collection endpoints carry an array in `data`; user create/update carry
/// an array whose first element is the affected record.

use serde::{Deserialize, Serialize};

/// The `{success, data, message?}` wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server considers the operation successful
    pub success: bool,

    /// The wrapped payload
    pub data: T,

    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body shape used by failing responses: `{ "message": string? }`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    /// Optional human-readable message for the notification layer
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_deserializes_collection() {
        let raw = json!({
            "success": true,
            "data": [1, 2, 3]
        });

        let envelope: Envelope<Vec<i64>> = serde_json::from_value(raw).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_envelope_keeps_message() {
        let raw = json!({
            "success": false,
            "data": serde_json::Value::Null,
            "message": "El usuario ya existe"
        });

        let envelope: Envelope<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("El usuario ya existe"));
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.message.is_none());
    }
}
