//! # swatch-core
//!
//! Color value with HSL as its canonical form and conversions to and from
//! RGB, HSV and hexadecimal notation, plus lightness and saturation
//! adjustments.
//!
//! - [`ColorValue`] - the color itself; constructors, adjustments and views
//! - [`convert`] - the raw RGB/HSL/HSV conversion math
//! - [`hex`] - `#RRGGBB` / `#RGB` decoding and encoding
//! - [`range`] - argument domains and validation
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_core::ColorValue;
//!
//! let blue = ColorValue::from_hex("#1E90FF")?;
//! assert_eq!(blue.to_hsl(), [210, 100, 56]);
//! assert_eq!(blue.to_rgb_string(), "rgb(30, 144, 255)");
//!
//! let darker = blue.darken(10.0)?;
//! assert_eq!(darker.to_hex(), "#0182FF");
//! # Ok::<(), swatch_core::ColorError>(())
//! ```
//!
//! # Conversion Paths
//!
//! ```text
//! from_hex --> hex::decode --+
//! from_rgb ------------------+--> rgb_to_hsl --+
//! from_hsv --> hsv_to_rgb ---+                 +--> ColorValue { h, s, l }
//! from_hsl ------------------------------------+
//!
//! ColorValue --> to_hsl
//!            --> hsl_to_rgb --> to_rgb, to_hex
//!            --> hsl_to_hsv --> to_hsv
//! ```
//!
//! `from_hsv` goes through RGB, so an HSV round trip may differ
//! from a direct formula by rounding.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`ColorValue`]; deserialized
//!   values are validated like [`ColorValue::from_hsl`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod value;
pub mod convert;
pub mod hex;
pub mod range;

pub use error::{ColorError, ColorResult};
pub use value::ColorValue;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{ColorError, ColorResult, ColorValue};
}
