//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREDASH_EXPORT_PATH` - NDJSON export of the content store
//! - `STOREDASH_ADMIN_EMAIL` - Administrator login email
//! - `STOREDASH_ADMIN_PASSWORD` - Administrator login password
//!
//! ## Optional
//! - `STOREDASH_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREDASH_PORT` - Listen port (default: 3001)
//! - `STOREDASH_LOG_FORMAT` - `text` or `json` (default: text)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path to the content store export
    pub export_path: PathBuf,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Log output format
    pub log_format: LogFormat,
    /// The single administrator account
    pub credentials: AdminCredentials,
}

/// Administrator login credentials.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: SecretString,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Whether `password` equals the configured password.
    #[must_use]
    pub fn password_matches(&self, password: &str) -> bool {
        self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(lookup);

        let export_path = PathBuf::from(env.required("STOREDASH_EXPORT_PATH")?);
        let host = env
            .or_default("STOREDASH_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREDASH_HOST".to_string(), e.to_string()))?;
        let port = env
            .or_default("STOREDASH_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREDASH_PORT".to_string(), e.to_string()))?;
        let log_format = match env.or_default("STOREDASH_LOG_FORMAT", "text").as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "STOREDASH_LOG_FORMAT".to_string(),
                    format!("expected `text` or `json`, got `{other}`"),
                ));
            }
        };
        let credentials = AdminCredentials {
            email: env.required("STOREDASH_ADMIN_EMAIL")?,
            password: SecretString::from(env.required("STOREDASH_ADMIN_PASSWORD")?),
        };

        Ok(Self {
            export_path,
            host,
            port,
            log_format,
            credentials,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get a required variable. Empty values count as missing.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        (self.0)(key)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        (self.0)(key).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("STOREDASH_EXPORT_PATH", "data/export.ndjson"),
        ("STOREDASH_ADMIN_EMAIL", "admin@example.com"),
        ("STOREDASH_ADMIN_PASSWORD", "hunter2"),
    ];

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup(REQUIRED)).unwrap();
        assert_eq!(config.export_path, PathBuf::from("data/export.ndjson"));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.credentials.email, "admin@example.com");
        assert!(config.credentials.password_matches("hunter2"));
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("STOREDASH_HOST", "0.0.0.0"),
            ("STOREDASH_PORT", "8080"),
            ("STOREDASH_LOG_FORMAT", "json"),
        ]);
        let config = DashboardConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_credentials() {
        let err = DashboardConfig::from_lookup(lookup(&REQUIRED[..2])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "STOREDASH_ADMIN_PASSWORD"));
    }

    #[test]
    fn test_blank_required_value_is_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = ("STOREDASH_ADMIN_EMAIL", "  ");
        let err = DashboardConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "STOREDASH_ADMIN_EMAIL"));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STOREDASH_PORT", "not-a-port"));
        let err = DashboardConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "STOREDASH_PORT"));
    }

    #[test]
    fn test_invalid_log_format() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STOREDASH_LOG_FORMAT", "xml"));
        assert!(DashboardConfig::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = AdminCredentials::new("admin@example.com", "hunter2");
        let debug_output = format!("{credentials:?}");
        assert!(debug_output.contains("admin@example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2"));
    }
}
