//! Core error types for habitforge-core.
//!
//! This module defines the error hierarchy using thiserror. Persistence
//! corruption is deliberately NOT represented here: a missing or malformed
//! value in the store decodes to its fallback default instead of failing
//! the operation (see `storage::store::load_or`).

use thiserror::Error;

/// Core error type for habitforge-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence boundary errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Lookup of a habit id that is not in the collection
    #[error("No habit with id '{id}'")]
    HabitNotFound { id: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors at the key-value persistence boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Writing a value failed
    #[error("Failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Removing a value failed
    #[error("Failed to remove key '{key}': {message}")]
    RemoveFailed { key: String, message: String },

    /// A value could not be encoded to JSON
    #[error("Failed to encode value for key '{key}': {source}")]
    EncodeFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A configured achievement code is not in the catalog
    #[error("Unknown achievement code: {0}")]
    UnknownAchievementCode(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
