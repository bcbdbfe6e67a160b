//! The uniform JSON body returned for every request

use serde::{Deserialize, Serialize};

/// Response envelope: `{"status", "data", "message", "statusCode"}`.
///
/// `status` is true only for successful responses, and `status_code` always
/// mirrors the transport-level HTTP status. `data` is serialized as `null`
/// when absent rather than being omitted.
///
/// # Example
/// ```
/// use movies_lambda_sdk::ResponseEnvelope;
///
/// let envelope = ResponseEnvelope::new(200, true, "getMovies works", None::<()>);
/// assert_eq!(
///     serde_json::to_string(&envelope).unwrap(),
///     r#"{"status":true,"data":null,"message":"getMovies works","statusCode":200}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T = serde_json::Value> {
    /// Whether the operation succeeded
    pub status: bool,

    /// Optional payload
    pub data: Option<T>,

    /// Human-readable message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

impl<T> ResponseEnvelope<T> {
    /// Create an envelope whose `status_code` mirrors the transport status.
    pub fn new(status_code: u16, success: bool, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: success,
            data,
            message: message.into(),
            status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_field_order_and_null_data() {
        let envelope = ResponseEnvelope::new(404, false, "movieId query param missing", None::<()>);
        let text = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            text,
            r#"{"status":false,"data":null,"message":"movieId query param missing","statusCode":404}"#
        );
    }

    #[test]
    fn test_envelope_with_payload() {
        let envelope = ResponseEnvelope::new(200, true, "ok", Some(json!({"title": "Heat"})));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"]["title"], "Heat");
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["status"], true);
    }

    #[test]
    fn test_envelope_parses_back_as_value() {
        let parsed: ResponseEnvelope =
            serde_json::from_str(r#"{"status":true,"data":null,"message":"Year: 1999","statusCode":200}"#)
                .unwrap();
        assert!(parsed.status);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.message, "Year: 1999");
        assert_eq!(parsed.status_code, 200);
    }
}
