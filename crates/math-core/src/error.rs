//! Error types for numeric services
//!
//! Provides a unified error type for all math-services crates.

use crate::element::ElementType;
use thiserror::Error;

/// Core error type for numeric service operations
#[derive(Error, Debug)]
pub enum Error {
    /// No specialized kernel exists for the requested element type
    #[error("Unsupported element type {element} for {operation}")]
    UnsupportedType {
        element: ElementType,
        operation: &'static str,
    },

    /// Input buffers differ in length where a matching length is required
    #[error("Argument length mismatch in {context}: expected {expected}, got {actual}")]
    ArgumentLengthMismatch {
        expected: usize,
        actual: usize,
        context: &'static str,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A zero-copy reinterpretation of a buffer failed
    #[error("Cast error: {0}")]
    Cast(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an element type without a kernel
    pub fn unsupported(element: ElementType, operation: &'static str) -> Self {
        Self::UnsupportedType { element, operation }
    }

    /// Create an error for buffers of differing length
    pub fn length_mismatch(expected: usize, actual: usize, context: &'static str) -> Self {
        Self::ArgumentLengthMismatch {
            expected,
            actual,
            context,
        }
    }

    /// Create an error for an inverted sampling range
    pub fn invalid_bounds<T: std::fmt::Debug>(min: T, max: T) -> Self {
        Self::InvalidParameter(format!("lower bound {min:?} exceeds upper bound {max:?}"))
    }
}

impl From<bytemuck::PodCastError> for Error {
    fn from(err: bytemuck::PodCastError) -> Self {
        Self::Cast(format!("{err:?}"))
    }
}
