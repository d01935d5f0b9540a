//! Errors raised by value-type operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MathError {
    #[error("Index {index} is out of range for {dimension} components")]
    IndexOutOfRange { index: i128, dimension: usize },

    #[error("Invalid format: {reason}")]
    Format { reason: String },

    #[error("No input was given to parse")]
    NullInput,

    #[error("Attempted to divide by zero")]
    DivideByZero,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid swizzle pattern `{pattern}`")]
    InvalidSwizzle { pattern: String },
}

impl MathError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    pub(crate) fn index_out_of_range<I: num_traits::PrimInt>(index: I, dimension: usize) -> Self {
        Self::IndexOutOfRange {
            // Primitive integers always fit in 128 bits except for the top
            // half of `u128`, which is out of range anyway
            index: index.to_i128().unwrap_or(i128::MAX),
            dimension,
        }
    }
}

/// Validates `index` against `dimension` and returns it as a `usize`.
pub(crate) fn checked_index<I: num_traits::PrimInt>(index: I, dimension: usize) -> Result<usize> {
    match index.to_usize() {
        Some(index) if index < dimension => Ok(index),
        _ => Err(MathError::index_out_of_range(index, dimension)),
    }
}
