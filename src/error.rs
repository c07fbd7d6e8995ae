//! Error types for the label-sheet library

use thiserror::Error;

/// Result type alias using LayoutError
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur when building layout inputs
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Page size and margins leave no printable area
    #[error("Invalid sheet geometry: {0}")]
    GeometryError(String),

    /// Non-positive or non-finite label dimensions
    #[error("Invalid dimensions: {0}")]
    DimensionError(String),
}
