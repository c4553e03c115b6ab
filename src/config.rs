//! Configuration management for `TravelBlog`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelBlogError;
use crate::models::Coordinates;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Legacy environment variable carrying the TripAdvisor API key
pub const API_KEY_ENV: &str = "TRIPADVISOR_API_KEY";
/// Legacy environment variable carrying the provider server URL
pub const SERVER_URL_ENV: &str = "MCP_SERVER_URL";

/// Which travel data backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Tripadvisor,
    Contentgeo,
}

/// Root configuration structure for `TravelBlog`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelBlogConfig {
    /// Selected provider
    pub provider: ProviderKind,
    /// TripAdvisor API configuration
    pub tripadvisor: TripAdvisorConfig,
    /// ContentGeo server configuration
    pub contentgeo: ContentGeoConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// TripAdvisor API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TripAdvisorConfig {
    /// API key sent in the key header; required when this provider is selected
    pub api_key: Option<String>,
    /// Base URL of the TripAdvisor-style server
    pub base_url: String,
    /// Value of the host header
    pub host: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// ContentGeo server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentGeoConfig {
    /// Base URL of the ContentGeo server
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Latitude used as the centre of landmark searches
    pub search_latitude: f64,
    /// Longitude used as the centre of landmark searches
    pub search_longitude: f64,
    /// Optional radius for geo object queries, in kilometers
    pub distance_km: Option<f64>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File the finished blog post is written to
    pub path: PathBuf,
}

// Default value functions
fn default_tripadvisor_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_tripadvisor_host() -> String {
    "tripadvisor16.p.rapidapi.com".to_string()
}

fn default_contentgeo_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("kyiv_blog.md")
}

impl Default for TripAdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_tripadvisor_base_url(),
            host: default_tripadvisor_host(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ContentGeoConfig {
    fn default() -> Self {
        Self {
            base_url: default_contentgeo_base_url(),
            timeout_seconds: default_timeout(),
            // Kyiv
            search_latitude: 50.411_365_8,
            search_longitude: 30.511_354_5,
            distance_km: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl ContentGeoConfig {
    #[must_use]
    pub fn search_center(&self) -> Coordinates {
        Coordinates::new(self.search_latitude, self.search_longitude)
    }
}

impl TravelBlogConfig {
    /// Load configuration from file and environment variables, letting
    /// `provider` override the configured one
    pub fn load_with_provider(
        config_path: Option<PathBuf>,
        provider: Option<ProviderKind>,
    ) -> Result<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVELBLOG_TRIPADVISOR__API_KEY, TRAVELBLOG_PROVIDER, ...
        builder = builder.add_source(
            Environment::with_prefix("TRAVELBLOG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelBlogConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if let Some(provider) = provider {
            config.provider = provider;
        }
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelblog").join("config.toml"))
    }

    /// Apply the plain `TRIPADVISOR_API_KEY` / `MCP_SERVER_URL` variables
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // `TRIPADVISOR_API_KEY=` in a .env counts as unset
        if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
            self.tripadvisor.api_key = Some(key);
        }
        if let Some(url) = lookup(SERVER_URL_ENV) {
            match self.provider {
                ProviderKind::Tripadvisor => self.tripadvisor.base_url = url,
                ProviderKind::Contentgeo => self.contentgeo.base_url = url,
            }
        }
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.tripadvisor.base_url.is_empty() {
            self.tripadvisor.base_url = default_tripadvisor_base_url();
        }
        if self.tripadvisor.host.is_empty() {
            self.tripadvisor.host = default_tripadvisor_host();
        }
        if self.tripadvisor.timeout_seconds == 0 {
            self.tripadvisor.timeout_seconds = default_timeout();
        }
        if self.contentgeo.base_url.is_empty() {
            self.contentgeo.base_url = default_contentgeo_base_url();
        }
        if self.contentgeo.timeout_seconds == 0 {
            self.contentgeo.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.output.path.as_os_str().is_empty() {
            self.output.path = default_output_path();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials. Only the selected provider's are checked.
    pub fn validate_api_keys(&self) -> Result<()> {
        if self.provider != ProviderKind::Tripadvisor {
            return Ok(());
        }
        match &self.tripadvisor.api_key {
            Some(api_key) if api_key.trim().is_empty() => Err(TravelBlogError::config(
                "TripAdvisor API key cannot be empty if provided. Either remove it or provide a valid key.",
            )
            .into()),
            None => Err(TravelBlogError::config(format!(
                "Missing TripAdvisor API key. Set {API_KEY_ENV} or tripadvisor.api_key."
            ))
            .into()),
            Some(_) => Ok(()),
        }
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.tripadvisor.timeout_seconds > 300 || self.contentgeo.timeout_seconds > 300 {
            return Err(TravelBlogError::config("Provider timeout cannot exceed 300 seconds").into());
        }

        if !(-90.0..=90.0).contains(&self.contentgeo.search_latitude)
            || !(-180.0..=180.0).contains(&self.contentgeo.search_longitude)
        {
            return Err(TravelBlogError::config(
                "ContentGeo search centre must be valid latitude/longitude",
            )
            .into());
        }

        if let Some(distance) = self.contentgeo.distance_km {
            if distance <= 0.0 {
                return Err(
                    TravelBlogError::config("ContentGeo distance must be positive").into(),
                );
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelBlogError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelBlogError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("TripAdvisor", &self.tripadvisor.base_url),
            ("ContentGeo", &self.contentgeo.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TravelBlogError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
