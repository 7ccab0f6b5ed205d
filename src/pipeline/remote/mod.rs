//! Identification through a hosted vision model.
//!
//! Every failure ends up as an error [`Pill`](crate::models::Pill) at the
//! [`RemoteIdentifier::identify`] boundary; inner layers return
//! [`RemoteError`].

pub mod identifier;
pub mod parser;
pub mod prompt;
pub mod retry;
pub mod transport;
pub mod types;

pub use identifier::*;
pub use retry::BackoffPolicy;
pub use transport::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("API key format is invalid")]
    MalformedApiKey,

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Vision API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Could not reach vision API: {0}")]
    Network(String),

    #[error("Unexpected reply: {0}")]
    MalformedReply(String),

    #[error("Cannot read image: {0}")]
    ImageRead(String),
}

impl RemoteError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
