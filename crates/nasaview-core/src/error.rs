//! Unified error type for nasaview.
//!
//! Every fetch boundary classifies its failure into one of three kinds:
//! the request never completed ([`Error::Network`]), the API answered with
//! something unusable ([`Error::Upstream`]), or the answer was well-formed
//! but empty ([`Error::NotFound`]).

use std::fmt;

/// Unified error type covering all failure modes in nasaview.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested entity could not be found, or resolved to nothing usable.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "asset").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// The request failed before a response arrived (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status or a body that did not parse.
    #[error("Upstream error{}: {message}", status_suffix(.status))]
    Upstream {
        /// HTTP status code, when the failure was a non-2xx response.
        status: Option<u16>,
        /// Human-readable error description.
        message: String,
    },

    /// Configuration failed validation.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Upstream`] with an HTTP status.
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Error::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Upstream`] caused by a bad body.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::Upstream {
            status: None,
            message: message.into(),
        }
    }

    /// Whether this error means "nothing to show" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" [{s}]")).unwrap_or_default()
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
