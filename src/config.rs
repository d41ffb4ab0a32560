//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `API_PORT` (optional): HTTP server port, defaults to 3000
/// - `DB_HOST` (required): PostgreSQL host
/// - `DB_PORT` (required): PostgreSQL port
/// - `DB_DATABASE` (required): database name
/// - `DB_USER` (required): database user
/// - `DB_PASSWORD` (required): database password
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub api_port: u16,

    pub db_host: String,
    pub db_port: u16,
    pub db_database: String,
    pub db_user: String,
    pub db_password: String,
}

/// Default port if API_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DB_HOST)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: db_host -> DB_HOST
        envy::from_env::<Config>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_vars() -> Vec<(String, String)> {
        vec![
            ("DB_HOST".to_string(), "localhost".to_string()),
            ("DB_PORT".to_string(), "5432".to_string()),
            ("DB_DATABASE".to_string(), "skyvex".to_string()),
            ("DB_USER".to_string(), "skyvex".to_string()),
            ("DB_PASSWORD".to_string(), "secret".to_string()),
        ]
    }

    #[test]
    fn api_port_defaults_to_3000() {
        let config = envy::from_iter::<_, Config>(required_vars()).unwrap();
        assert_eq!(config.api_port, 3000);
    }

    #[test]
    fn api_port_can_be_overridden() {
        let mut vars = required_vars();
        vars.push(("API_PORT".to_string(), "8080".to_string()));

        let config = envy::from_iter::<_, Config>(vars).unwrap();
        assert_eq!(config.api_port, 8080);
    }

    #[test]
    fn missing_database_settings_fail_to_load() {
        let mut vars = required_vars();
        vars.retain(|(key, _)| key != "DB_PASSWORD");

        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
