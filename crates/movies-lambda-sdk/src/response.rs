//! HTTP Response representation for handlers

use serde::Serialize;
use std::collections::HashMap;

use crate::envelope::ResponseEnvelope;

const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

/// Represents an outgoing HTTP response.
///
/// # Quick Reference
///
/// | Method | Status | Use Case |
/// |--------|--------|----------|
/// | `envelope(code, success, msg, data)` | `code` | Every API response |
/// | `json(code, body)` | `code` | Arbitrary JSON body |
/// | `text(code, body)` | `code` | Plain text body |
///
/// Hosting adapters copy `status`, `headers` and `body` onto their own
/// response type unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Response body
    pub body: String,
}

impl Response {
    /// Create a new response with the given status code and an empty body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    /// Build the standard envelope response.
    ///
    /// If the envelope cannot be serialized, the response is a 500 whose body
    /// is the serializer's error text as plain text, so the caller always
    /// receives a body.
    ///
    /// # Example
    /// ```
    /// use movies_lambda_sdk::Response;
    ///
    /// let res = Response::envelope(200, true, "Year: 1999", None::<()>);
    /// assert_eq!(res.status, 200);
    /// assert!(res.body.contains(r#""message":"Year: 1999""#));
    /// ```
    pub fn envelope<T: Serialize>(
        status_code: u16,
        success: bool,
        message: impl Into<String>,
        data: Option<T>,
    ) -> Self {
        Self::json(status_code, ResponseEnvelope::new(status_code, success, message, data))
    }

    /// Create a JSON response with a custom status code.
    ///
    /// Falls back to a plain text 500 carrying the error text when `body`
    /// fails to serialize.
    pub fn json<T: Serialize>(status: u16, body: T) -> Self {
        match serde_json::to_string(&body) {
            Ok(text) => Self::new(status).with_header(CONTENT_TYPE, JSON).with_body(text),
            Err(e) => {
                tracing::error!(status, error = %e, "Failed to serialize response body");
                Self::text(500, e.to_string())
            }
        }
    }

    /// Create a plain text response.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status).with_header(CONTENT_TYPE, TEXT).with_body(body)
    }

    /// Add a header to the response (builder pattern).
    ///
    /// # Example
    /// ```ignore
    /// Response::envelope(200, true, "getMovies works", None::<()>)
    ///     .with_header("Cache-Control", "max-age=60")
    /// ```
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("payload cannot be encoded"))
        }
    }

    #[test]
    fn test_envelope_success() {
        let res = Response::envelope(200, true, "getMovies works", None::<()>);
        assert_eq!(res.status, 200);
        assert_eq!(res.headers.get("Content-Type").map(String::as_str), Some("application/json"));

        let envelope: ResponseEnvelope = serde_json::from_str(&res.body).unwrap();
        assert_eq!(envelope, ResponseEnvelope::new(200, true, "getMovies works", None));
    }

    #[test]
    fn test_envelope_status_mirrors_transport() {
        let res = Response::envelope(500, false, "Wrong path provided", None::<()>);
        assert_eq!(res.status, 500);

        let envelope: ResponseEnvelope = serde_json::from_str(&res.body).unwrap();
        assert_eq!(envelope.status_code, res.status);
        assert!(!envelope.status);
    }

    #[test]
    fn test_serialization_failure_falls_back_to_plain_text() {
        let res = Response::envelope(200, true, "getMovies works", Some(Unserializable));
        assert_eq!(res.status, 500);
        assert_eq!(res.body, "payload cannot be encoded");
        assert_eq!(
            res.headers.get("Content-Type").map(String::as_str),
            Some("text/plain; charset=utf-8")
        );
        assert!(serde_json::from_str::<serde_json::Value>(&res.body).is_err());
    }

    #[test]
    fn test_builder_headers() {
        let res = Response::text(200, "OK").with_header("Cache-Control", "no-store");
        assert_eq!(res.body, "OK");
        assert_eq!(res.headers.len(), 2);
    }
}
