//! Movies Lambda SDK - request, response and envelope types
//!
//! Handlers take a [`Request`] and return a [`Response`] (or a
//! [`HandlerError`], which converts into one). Every response body is a
//! [`ResponseEnvelope`] serialized to JSON.

pub mod envelope;
pub mod error;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for movies API handlers
    pub use crate::envelope::ResponseEnvelope;
    pub use crate::error::HandlerError;
    pub use crate::request::Request;
    pub use crate::response::Response;
}

// Re-export key types at crate root
pub use envelope::ResponseEnvelope;
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;
