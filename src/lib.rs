//! `TravelBlog` - travel data tools for agent-written travel blogs
//!
//! This library provides clients for two travel data providers, the tool
//! adapters a research agent calls, and the sequential stage pipeline the
//! researcher, writer and editor roles plug into.

pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod telemetry;
pub mod tools;

// Re-export core types for public API
pub use config::{ProviderKind, TravelBlogConfig};
pub use envelope::Envelope;
pub use error::{ErrorKind, TravelBlogError};
pub use models::{Location, Review, ReviewCategory, Venue, VenueKind};
pub use pipeline::{Pipeline, ResearchStage, Stage};
pub use providers::{ContentGeoClient, TravelProvider, TripAdvisorClient};
pub use tools::{Tool, ToolRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelBlogError>;
