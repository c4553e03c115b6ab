//! Success-or-error wrapper returned by every tool call

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, TravelBlogError};

/// Result of a tool call: either the full payload or a single error message
///
/// Serializes untagged, so a success is the bare payload and a failure is
/// `{"error": "...", "kind": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Failure { error: String, kind: ErrorKind },
    Success(T),
}

impl<T> Envelope<T> {
    pub fn failure(err: &TravelBlogError) -> Self {
        Envelope::Failure {
            error: err.to_string(),
            kind: err.kind(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// The payload, if this is a success
    pub fn success(self) -> Option<T> {
        match self {
            Envelope::Success(value) => Some(value),
            Envelope::Failure { .. } => None,
        }
    }

    /// The error message, if this is a failure
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure { error, .. } => Some(error),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl<T> From<crate::Result<T>> for Envelope<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => Envelope::Success(value),
            Err(err) => Envelope::failure(&err),
        }
    }
}
