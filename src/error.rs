// Centralized error handling using thiserror for type-safe error management
//
// Design Decision: Unified error type, no translation of client failures
//
// Network errors, timeouts and malformed bodies all surface as the reqwest
// error that produced them. Nothing in the crate catches them; callers see
// exactly what the HTTP layer reported.

use thiserror::Error;

/// Main error type for pokedex
///
/// Error Handling Strategy:
/// - HTTP errors: Automatically converted via #[from] ReqwestError variant
/// - Serde errors: Automatically converted via #[from] SerdeError variant
/// - Configuration errors: ConfigError / EnvError with a descriptive message
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Configuration value present but invalid
    ///
    /// Raised while resolving settings, e.g. a REQUEST_TIMEOUT that is
    /// not a positive number of seconds.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Environment variable could not be read
    #[error("Environment error: {0}")]
    EnvError(String),

    /// HTTP request failed
    ///
    /// Covers connection failures, timeouts and bodies that are not JSON.
    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Type alias for Result with PokedexError
pub type Result<T> = std::result::Result<T, PokedexError>;
