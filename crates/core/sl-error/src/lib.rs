//! Error types for Sluice.
//!
//! This crate provides:
//! - [`SlError`] - Top-level error enum for all enrichment-stage errors
//! - [`EnrichError`] - Domain-specific errors for path, pattern, and
//!   serializer construction and application
//! - [`Result`] - Result alias used throughout the workspace
//!
//! All variants here are construction-time or serializer-level failures.
//! Per-event abandonment (invalid JSON, missing path, non-scalar value) is
//! deliberately *not* an error: the enricher models it as an explicit
//! success/abandon outcome so that no failure can escape past the
//! interceptor boundary.

use thiserror::Error;

/// Top-level error type for Sluice.
#[derive(Error, Debug)]
pub enum SlError {
    /// Enrichment errors (path parsing, pattern parsing, serializers)
    #[error("Enrich error: {0}")]
    Enrich(#[from] EnrichError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Enrichment-related errors.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// Path expression failed to parse
    #[error("Invalid path expression: {0}")]
    InvalidPath(String),

    /// Date/time pattern failed to validate
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Serializer type identifier not present in the registry
    #[error("Unknown serializer type: {0}")]
    UnknownSerializer(String),

    /// Required configuration key absent or empty
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Serializer rejected an input value
    #[error("Serialize failed: {0}")]
    Serialize(String),
}

/// Result type alias using SlError.
pub type Result<T> = std::result::Result<T, SlError>;
