// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Default Google Places web service base URL
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup and pass it explicitly
/// to handlers and services; nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Places API Key (None when unset or blank)
    pub google_places_api_key: Option<String>,

    /// Base URL of the Places web service
    pub google_places_base_url: String,

    /// Directory holding index.html and the /static assets
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_places_api_key: env::var("GOOGLE_PLACES_API_KEY")
                .ok()
                .and_then(non_blank),

            google_places_base_url: env::var("GOOGLE_PLACES_BASE_URL")
                .ok()
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string()),

            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }

    /// Whether a usable Places API key is present
    pub fn api_key_configured(&self) -> bool {
        self.google_places_api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    /// A missing API key is not fatal: /health reports it and /attractions
    /// answers with a configuration error.
    pub fn validate(&self) -> Result<(), String> {
        if !self.google_places_base_url.starts_with("http://")
            && !self.google_places_base_url.starts_with("https://")
        {
            return Err(format!(
                "GOOGLE_PLACES_BASE_URL must be an http(s) URL, got '{}'",
                self.google_places_base_url
            ));
        }

        if !self.api_key_configured() {
            log::warn!("GOOGLE_PLACES_API_KEY not configured - /attractions will fail");
        }

        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
