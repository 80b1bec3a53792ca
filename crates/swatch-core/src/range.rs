//! Argument domains and boundary validation.

use tracing::debug;

use crate::{ColorError, ColorResult};

/// Inclusive numeric domain of a color argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

/// Hue in degrees. 360 is accepted and normalized to 0 on storage.
pub const HUE: Domain = Domain { min: 0.0, max: 360.0 };

/// Saturation, lightness, value and adjustment amounts.
pub const PERCENT: Domain = Domain { min: 0.0, max: 100.0 };

/// 8-bit RGB channel.
pub const CHANNEL: Domain = Domain { min: 0.0, max: 255.0 };

impl Domain {
    /// Returns `value` unchanged if it is finite and inside the domain.
    pub fn check(self, name: &'static str, value: f64) -> ColorResult<f64> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(value)
        } else {
            debug!(name, value, min = self.min, max = self.max, "argument out of range");
            Err(ColorError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Integer flavour of [`check`](Self::check) for RGB channels.
    pub fn check_int(self, name: &'static str, value: i32) -> ColorResult<f64> {
        self.check(name, f64::from(value))
    }
}
