//! Authentication module.
//!
//! This module provides:
//! - Shared-secret API key configuration loaded from the environment
//! - Middleware that rejects requests lacking a valid `x-api-key` header
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyAuth, ApiKeyConfig, api_key_auth_middleware};
//! use core_config::FromEnv;
//!
//! let config = ApiKeyConfig::from_env()?;
//! let auth = ApiKeyAuth::new(&config);
//!
//! let protected = Router::new()
//!     .route("/api/protected", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, api_key_auth_middleware));
//! ```

pub mod api_key;
pub mod config;

pub use api_key::{API_KEY_HEADER, ApiKeyAuth, UNAUTHORIZED_MESSAGE, api_key_auth_middleware};
pub use config::ApiKeyConfig;
