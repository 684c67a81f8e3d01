//! Configuration types for axum-helpers.
//!
//! These structs implement the `FromEnv` trait from `core_config`, following
//! the same pattern as `ServerConfig`.

use core_config::{ConfigError, FromEnv, env_required};

/// Environment variable holding the shared API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Shared-secret API key configuration.
///
/// Loaded from environment variables:
/// - `API_KEY` (required) - must be non-empty
///
/// # Example
///
/// ```ignore
/// use axum_helpers::ApiKeyConfig;
/// use core_config::FromEnv;
///
/// // From environment variables
/// let config = ApiKeyConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = ApiKeyConfig::new("local-dev-key");
/// ```
#[derive(Clone)]
pub struct ApiKeyConfig {
    /// The key every protected request must present
    pub key: String,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_required(API_KEY_ENV)?;

        if key.is_empty() {
            return Err(ConfigError::ParseError {
                key: API_KEY_ENV.to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self { key })
    }
}
