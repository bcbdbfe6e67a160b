//! HTTP Request representation for handlers

use std::collections::HashMap;

use crate::error::HandlerError;

/// Represents an incoming request after the hosting adapter has extracted
/// what routing needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method (GET, POST, ...). Routing ignores it.
    pub method: String,

    /// Logical resource path (e.g. "/api/movies/summary")
    pub path: String,

    /// Query parameters
    pub query: HashMap<String, String>,

    /// Request ID for tracing
    pub request_id: String,
}

impl Request {
    /// Create a GET request for a resource path with no query parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Add a query parameter (builder pattern).
    ///
    /// # Example
    /// ```ignore
    /// let req = Request::new("/api/movies").with_query("year", "1999");
    /// ```
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Get a query parameter as a string slice.
    ///
    /// A parameter that is present with an empty value returns `Some("")`,
    /// which is distinct from an absent parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Get a query parameter, or fail with `HandlerError::NotFound` carrying
    /// `message` when it is absent.
    ///
    /// # Example
    /// ```ignore
    /// let movie_id = req.require_query_param("movieId", "movieId query param missing")?;
    /// ```
    pub fn require_query_param(&self, key: &str, message: &str) -> Result<&str, HandlerError> {
        self.query_param(key)
            .ok_or_else(|| HandlerError::NotFound(message.to_string()))
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: HashMap::new(),
            request_id: String::new(),
        }
    }
}
