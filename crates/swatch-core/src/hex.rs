//! Hexadecimal color notation.
//!
//! Decoding is lenient about decoration and strict about digits: every
//! character that is not a hex digit is dropped (`#`, whitespace, `0x`-style
//! noise), and what remains must be exactly 3 or 6 digits.
//!
//! - `#RRGGBB` / `RRGGBB` - one byte per channel
//! - `#RGB` / `RGB` - shorthand, each digit doubled (`F` -> `FF`)
//!
//! Encoding always produces `#RRGGBB` in uppercase.

use crate::{ColorError, ColorResult};

/// Decodes a hex color string into 8-bit channels.
///
/// # Errors
///
/// [`ColorError::Format`] if the string does not contain exactly 3 or 6 hex
/// digits after stripping other characters.
///
/// # Example
///
/// ```rust
/// use swatch_core::hex;
///
/// assert_eq!(hex::decode("#1E90FF").unwrap(), [30, 144, 255]);
/// assert_eq!(hex::decode("abc").unwrap(), [0xAA, 0xBB, 0xCC]);
/// assert!(hex::decode("#12").is_err());
/// ```
pub fn decode(s: &str) -> ColorResult<[u8; 3]> {
    // to_digit(16) only yields values < 16, so the narrowing is lossless
    let digits: Vec<u8> = s.chars().filter_map(|c| c.to_digit(16)).map(|d| d as u8).collect();

    match digits.as_slice() {
        &[r, g, b] => Ok([r * 17, g * 17, b * 17]),
        &[r1, r0, g1, g0, b1, b0] => Ok([(r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0]),
        other => Err(ColorError::Format { digits: other.len() }),
    }
}

/// Encodes 8-bit channels as `#RRGGBB` (uppercase).
///
/// # Example
///
/// ```rust
/// use swatch_core::hex;
///
/// assert_eq!(hex::encode([30, 144, 255]), "#1E90FF");
/// ```
pub fn encode(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
