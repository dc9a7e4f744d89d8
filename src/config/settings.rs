//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_DATABASE_URL};

/// Security settings consumed by the web layer's CORS and transport-security
/// enforcement. This crate holds the values; it never enforces them.
#[derive(Clone, Debug)]
pub struct SecuritySettings {
    /// Origin the web layer should allow for cross-origin requests
    pub allowed_origin: String,
    /// Whether the web layer should redirect plain HTTP to HTTPS
    pub enforce_https: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            enforce_https: false,
        }
    }
}

/// Application configuration, loaded once at startup and read-only afterwards.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub security: SecuritySettings,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("security", &self.security)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when a variable is unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            security: SecuritySettings {
                allowed_origin: env::var("ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
                enforce_https: env::var("ENFORCE_HTTPS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(false),
            },
        }
    }
}
