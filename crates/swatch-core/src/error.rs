//! Error types for color construction and adjustment.
//!
//! Every fallible operation in this crate validates its arguments eagerly and
//! reports the first offending one. A failed constructor produces no value.

use thiserror::Error;

/// Color operation error.
///
/// - [`OutOfRange`](ColorError::OutOfRange) - a numeric argument left its domain
/// - [`Format`](ColorError::Format) - a hex string did not reduce to 3 or 6 digits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A numeric argument fell outside its documented domain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_core::{ColorError, ColorValue};
    ///
    /// let err = ColorValue::from_rgb(-10, 300, 100).unwrap_err();
    /// assert!(matches!(err, ColorError::OutOfRange { name: "red", .. }));
    /// assert_eq!(err.to_string(), "red must be between 0 and 255, got -10");
    /// ```
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Parameter name (`red`, `hue`, `amount`, ...).
        name: &'static str,
        /// Value that was rejected.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Hex string did not contain exactly 3 or 6 hex digits.
    #[error("hex color must have 3 or 6 hex digits, found {digits}")]
    Format {
        /// Number of hex digits left after stripping other characters.
        digits: usize,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
