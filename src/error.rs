//! Error types and handling for `TravelBlog`

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the `TravelBlog` library
#[derive(Error, Debug)]
pub enum TravelBlogError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required tool argument was absent
    #[error("{message}")]
    MissingInput { message: String },

    /// A tool argument was present but malformed
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A search returned no candidates
    #[error("No information found for {query}")]
    NoMatch { query: String },

    /// Network failure or non-success HTTP status
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Provider response did not match the expected schema
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Review category outside of hotel, restaurant, attraction
    #[error("Unsupported review type: {category}")]
    UnsupportedCategory { category: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Serializable classification of a [`TravelBlogError`], carried in failure envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Config,
    MissingInput,
    InvalidInput,
    NoMatch,
    Transport,
    Decode,
    UnsupportedCategory,
    Io,
}

impl TravelBlogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new missing-input error
    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput {
            message: message.into(),
        }
    }

    /// Create a new invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new no-match error for a search term
    pub fn no_match<S: Into<String>>(query: S) -> Self {
        Self::NoMatch {
            query: query.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new unsupported-category error
    pub fn unsupported_category<S: Into<String>>(category: S) -> Self {
        Self::UnsupportedCategory {
            category: category.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TravelBlogError::Config { .. } => ErrorKind::Config,
            TravelBlogError::MissingInput { .. } => ErrorKind::MissingInput,
            TravelBlogError::InvalidInput { .. } => ErrorKind::InvalidInput,
            TravelBlogError::NoMatch { .. } => ErrorKind::NoMatch,
            TravelBlogError::Transport { .. } => ErrorKind::Transport,
            TravelBlogError::Decode { .. } => ErrorKind::Decode,
            TravelBlogError::UnsupportedCategory { .. } => ErrorKind::UnsupportedCategory,
            TravelBlogError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelBlogError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TravelBlogError::Transport { .. } => {
                "Unable to reach the travel data provider. Please check the server URL and your connection."
                    .to_string()
            }
            TravelBlogError::Decode { .. } => {
                "The travel data provider returned an unexpected response.".to_string()
            }
            TravelBlogError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for TravelBlogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TravelBlogError::decode(err.to_string())
        } else {
            TravelBlogError::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TravelBlogError {
    fn from(err: serde_json::Error) -> Self {
        TravelBlogError::decode(err.to_string())
    }
}
