//! Configuration loading from the environment.

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable that must be a port number was not one.
    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },

    /// A variable that must be an http(s) URL did not parse as one.
    #[error("{var} is not a valid http(s) URL: {value:?}")]
    InvalidUrl { var: &'static str, value: String },

    /// The CORS origin cannot be used as a header value.
    #[error("CORS_ORIGIN is not a valid origin: {0:?}")]
    InvalidOrigin(String),
}

/// Load and validate the relay configuration from environment variables.
///
/// Unset variables fall back to defaults; set-but-invalid values are
/// startup errors. Missing upstream credentials are not errors here: the
/// affected routes answer 500 until they are configured.
pub fn load_from_env() -> Result<RelayConfig, ConfigError> {
    let mut config = RelayConfig::default();

    if let Some(port) = non_empty_var("PORT") {
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidPort {
            var: "PORT",
            value: port.clone(),
        })?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    if let Some(origin) = non_empty_var("CORS_ORIGIN") {
        HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?;
        config.cors.allowed_origin = origin;
    }

    config.jira.base_url = checked_url("JIRA_BASE_URL")?;
    config.jira.email = non_empty_var("JIRA_EMAIL");
    config.jira.api_token = non_empty_var("JIRA_API_TOKEN");

    config.generator.api_base = checked_url("GENERATOR_API_BASE")?;
    config.generator.api_key = non_empty_var("GENERATOR_API_KEY");
    config.generator.model = non_empty_var("GENERATOR_MODEL");

    Ok(config)
}

/// Read a variable, treating unset and blank as absent.
fn non_empty_var(var: &'static str) -> Option<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Read a variable that, when present, must parse as an http(s) URL.
fn checked_url(var: &'static str) -> Result<Option<String>, ConfigError> {
    let Some(value) = non_empty_var(var) else {
        return Ok(None);
    };
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(value)),
        _ => Err(ConfigError::InvalidUrl { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ConfigError::InvalidPort {
            var: "PORT",
            value: "eighty".into(),
        };
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = ConfigError::InvalidUrl {
            var: "JIRA_BASE_URL",
            value: "not a url".into(),
        };
        assert!(err.to_string().contains("JIRA_BASE_URL"));
    }
}
