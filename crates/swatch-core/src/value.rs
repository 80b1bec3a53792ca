//! The HSL-canonical color value.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::convert::{hsl_to_hsv, hsl_to_rgb, hsv_to_rgb, normalize_hue, rgb_to_hsl};
use crate::range::{CHANNEL, HUE, PERCENT};
use crate::{hex, ColorError, ColorResult};

/// A color stored as hue, saturation and lightness.
///
/// HSL is the only stored form. RGB, HSV and hex are views computed on
/// demand by the `to_*` methods and never cached.
///
/// | Field | Unit | Stored range |
/// |-------|------|--------------|
/// | hue | degrees | `[0, 360)` |
/// | saturation | percent | `[0, 100]` |
/// | lightness | percent | `[0, 100]` |
///
/// Adjustments take `self` by value and return a new color, so they chain:
///
/// ```rust
/// use swatch_core::ColorValue;
///
/// let c = ColorValue::from_hex("#1E90FF")?.darken(10.0)?.saturate(5.0)?;
/// assert_eq!(c.to_hex(), "#0182FF");
/// # Ok::<(), swatch_core::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HslFields"))]
pub struct ColorValue {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl ColorValue {
    /// Black, `hsl(0, 0, 0)`. Same as [`Default`].
    pub const fn black() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            lightness: 0.0,
        }
    }

    /// Creates a color from 8-bit RGB channels.
    ///
    /// Channels are taken as `i32` so that out-of-range input is reported
    /// instead of wrapping.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] naming the first channel outside `0..=255`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_core::ColorValue;
    ///
    /// let c = ColorValue::from_rgb(30, 144, 255)?;
    /// assert_eq!(c.to_hsl(), [210, 100, 56]);
    /// # Ok::<(), swatch_core::ColorError>(())
    /// ```
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> ColorResult<Self> {
        let r = CHANNEL.check_int("red", red)?;
        let g = CHANNEL.check_int("green", green)?;
        let b = CHANNEL.check_int("blue", blue)?;
        trace!(red, green, blue, "from_rgb");
        Ok(Self::from_rgb_255([r, g, b]))
    }

    /// Creates a color from a hex string (`#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`).
    ///
    /// Case-insensitive. Characters that are not hex digits are ignored.
    ///
    /// # Errors
    ///
    /// [`ColorError::Format`] unless exactly 3 or 6 hex digits remain.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let rgb = hex::decode(hex)?;
        trace!(hex, ?rgb, "from_hex");
        Ok(Self::from(rgb))
    }

    /// Creates a color from HSV (degrees, percent, percent).
    ///
    /// The HSV triple is converted to RGB and then through the same RGB to
    /// HSL path as [`from_rgb`](Self::from_rgb). The RGB intermediate is not
    /// rounded, but the result is still re-derived via RGB rather than by a
    /// direct HSV to HSL formula.
    ///
    /// A hue of 360 is the same as 0 (red).
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if hue is outside `0..=360` or saturation
    /// or value is outside `0..=100`.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> ColorResult<Self> {
        let h = HUE.check("hue", hue)?;
        let s = PERCENT.check("saturation", saturation)?;
        let v = PERCENT.check("value", value)?;
        trace!(hue, saturation, value, "from_hsv");
        Ok(Self::from_rgb_255(hsv_to_rgb([h, s, v])))
    }

    /// Creates a color from HSL (degrees, percent, percent).
    ///
    /// Stored as given, except that a hue of 360 is stored as 0.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if hue is outside `0..=360` or saturation
    /// or lightness is outside `0..=100`.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> ColorResult<Self> {
        let hue = normalize_hue(HUE.check("hue", hue)?);
        let saturation = PERCENT.check("saturation", saturation)?;
        let lightness = PERCENT.check("lightness", lightness)?;
        trace!(hue, saturation, lightness, "from_hsl");
        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// RGB on the 0..255 scale (unrounded) into canonical HSL.
    fn from_rgb_255(rgb: [f64; 3]) -> Self {
        let [hue, saturation, lightness] =
            rgb_to_hsl([rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0]);
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue in degrees, unrounded.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation in percent, unrounded.
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Lightness in percent, unrounded.
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    // ------------------------------------------------------------------------
    // Adjustments
    // ------------------------------------------------------------------------

    /// Moves lightness toward 100 by `amount` percent of the remaining headroom.
    ///
    /// `lightness += (100 - lightness) * amount / 100`. An amount of 100
    /// yields exactly 100; 0 is a no-op. Hue is never touched.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if `amount` is outside `0..=100`.
    pub fn lighten(self, amount: f64) -> ColorResult<Self> {
        let amount = PERCENT.check("amount", amount)?;
        trace!(amount, lightness = self.lightness, "lighten");
        Ok(Self {
            lightness: raise(self.lightness, amount),
            ..self
        })
    }

    /// Moves lightness toward 0 by `amount` percent of its current value.
    ///
    /// `lightness -= lightness * amount / 100`.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if `amount` is outside `0..=100`.
    pub fn darken(self, amount: f64) -> ColorResult<Self> {
        let amount = PERCENT.check("amount", amount)?;
        trace!(amount, lightness = self.lightness, "darken");
        Ok(Self {
            lightness: lower(self.lightness, amount),
            ..self
        })
    }

    /// Moves saturation toward 100, same rule as [`lighten`](Self::lighten).
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if `amount` is outside `0..=100`.
    pub fn saturate(self, amount: f64) -> ColorResult<Self> {
        let amount = PERCENT.check("amount", amount)?;
        trace!(amount, saturation = self.saturation, "saturate");
        Ok(Self {
            saturation: raise(self.saturation, amount),
            ..self
        })
    }

    /// Moves saturation toward 0, same rule as [`darken`](Self::darken).
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if `amount` is outside `0..=100`.
    pub fn desaturate(self, amount: f64) -> ColorResult<Self> {
        let amount = PERCENT.check("amount", amount)?;
        trace!(amount, saturation = self.saturation, "desaturate");
        Ok(Self {
            saturation: lower(self.saturation, amount),
            ..self
        })
    }

    // ------------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------------

    /// HSL rounded to integers: `[hue, saturation, lightness]`.
    ///
    /// A stored hue in `[359.5, 360)` rounds to 360 and is reported as 0.
    pub fn to_hsl(&self) -> [u16; 3] {
        [
            round_hue(self.hue),
            round_u16(self.saturation),
            round_u16(self.lightness),
        ]
    }

    /// CSS-style `hsl(h, s, l)`.
    pub fn to_hsl_string(&self) -> String {
        let [h, s, l] = self.to_hsl();
        format!("hsl({h}, {s}, {l})")
    }

    /// RGB channels rounded to `0..=255`.
    pub fn to_rgb(&self) -> [u8; 3] {
        hsl_to_rgb([self.hue, self.saturation, self.lightness])
            .map(|c| c.round().clamp(0.0, 255.0) as u8)
    }

    /// CSS-style `rgb(r, g, b)`.
    pub fn to_rgb_string(&self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("rgb({r}, {g}, {b})")
    }

    /// HSV rounded to integers: `[hue, saturation, value]`.
    ///
    /// Hue is reported in `0..360` like [`to_hsl`](Self::to_hsl).
    pub fn to_hsv(&self) -> [u16; 3] {
        let [h, s, v] = hsl_to_hsv([self.hue, self.saturation, self.lightness]);
        [round_hue(h), round_u16(s), round_u16(v)]
    }

    /// `hsv(h, s, v)`.
    pub fn to_hsv_string(&self) -> String {
        let [h, s, v] = self.to_hsv();
        format!("hsv({h}, {s}, {v})")
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_rgb())
    }

    /// Identical to [`to_hex`](Self::to_hex).
    pub fn to_hex_string(&self) -> String {
        self.to_hex()
    }
}

#[inline]
fn raise(field: f64, amount: f64) -> f64 {
    field + (100.0 - field) * (amount / 100.0)
}

#[inline]
fn lower(field: f64, amount: f64) -> f64 {
    field - field * (amount / 100.0)
}

#[inline]
fn round_u16(v: f64) -> u16 {
    v.round().clamp(0.0, f64::from(u16::MAX)) as u16
}

#[inline]
fn round_hue(h: f64) -> u16 {
    round_u16(h) % 360
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::black()
    }
}

impl From<[u8; 3]> for ColorValue {
    /// Infallible RGB construction; a `u8` channel is always in range.
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb_255(rgb.map(f64::from))
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    /// Parses hex notation, see [`ColorValue::from_hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ColorValue {
    /// Formats as `hsl(h, s, l)`, the canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, l] = self.to_hsl();
        write!(f, "hsl({h}, {s}, {l})")
    }
}

/// Wire shape for deserialization; validated through [`ColorValue::from_hsl`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HslFields {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<HslFields> for ColorValue {
    type Error = ColorError;

    fn try_from(f: HslFields) -> ColorResult<Self> {
        Self::from_hsl(f.hue, f.saturation, f.lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dodger_blue() -> ColorValue {
        ColorValue::from_hex("#1E90FF").unwrap()
    }

    #[test]
    fn test_black_is_default() {
        assert_eq!(ColorValue::black(), ColorValue::default());
        assert_eq!(ColorValue::black().to_hsl(), [0, 0, 0]);
        assert_eq!(ColorValue::black().to_hex(), "#000000");
    }

    #[test]
    fn test_from_hsl_stores_unchanged() {
        let c = ColorValue::from_hsl(200.4, 80.25, 39.5).unwrap();
        assert_eq!(c.hue(), 200.4);
        assert_eq!(c.saturation(), 80.25);
        assert_eq!(c.lightness(), 39.5);
    }

    #[test]
    fn test_from_hsl_wraps_360() {
        let c = ColorValue::from_hsl(360.0, 100.0, 50.0).unwrap();
        assert_eq!(c.hue(), 0.0);
        assert_eq!(c.to_rgb(), [255, 0, 0]);
    }

    #[test]
    fn test_hue_views_stay_below_360() {
        let c = ColorValue::from_hsl(359.7, 100.0, 50.0).unwrap();
        assert_eq!(c.hue(), 359.7);
        assert_eq!(c.to_hsl(), [0, 100, 50]);
        assert_eq!(c.to_hsl_string(), "hsl(0, 100, 50)");
        assert_eq!(c.to_hsv(), [0, 100, 100]);

        let c = ColorValue::from_hsl(359.4, 100.0, 50.0).unwrap();
        assert_eq!(c.to_hsl()[0], 359);
    }

    #[test]
    fn test_from_hsv_360_is_red() {
        let c = ColorValue::from_hsv(360.0, 100.0, 100.0).unwrap();
        assert_eq!(c.to_rgb(), [255, 0, 0]);
        assert_eq!(c.to_hex(), "#FF0000");
    }

    #[test]
    fn test_from_u8_matches_from_rgb() {
        let a = ColorValue::from([30, 144, 255]);
        let b = ColorValue::from_rgb(30, 144, 255).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_constructor_errors_name_parameter() {
        let cases: [(ColorResult<ColorValue>, &str); 6] = [
            (ColorValue::from_rgb(0, 256, 0), "green"),
            (ColorValue::from_rgb(0, 0, -1), "blue"),
            (ColorValue::from_hsl(10.0, 101.0, 0.0), "saturation"),
            (ColorValue::from_hsl(10.0, 50.0, -5.0), "lightness"),
            (ColorValue::from_hsv(361.0, 50.0, 50.0), "hue"),
            (ColorValue::from_hsv(10.0, 50.0, f64::NAN), "value"),
        ];
        for (result, expected) in cases {
            match result {
                Err(ColorError::OutOfRange { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected OutOfRange({expected}), got {:?}", other),
            }
        }
    }

    #[test]
    fn test_adjust_bounds() {
        let c = ColorValue::from_hsl(120.0, 40.0, 30.0).unwrap();

        assert_eq!(c.lighten(100.0).unwrap().lightness(), 100.0);
        assert_eq!(c.darken(100.0).unwrap().lightness(), 0.0);
        assert_eq!(c.saturate(100.0).unwrap().saturation(), 100.0);
        assert_eq!(c.desaturate(100.0).unwrap().saturation(), 0.0);

        assert_eq!(c.lighten(0.0).unwrap(), c);
        assert_eq!(c.darken(0.0).unwrap(), c);
        assert_eq!(c.saturate(0.0).unwrap(), c);
        assert_eq!(c.desaturate(0.0).unwrap(), c);
    }

    #[test]
    fn test_adjust_is_proportional() {
        let c = ColorValue::from_hsl(120.0, 40.0, 30.0).unwrap();

        assert_abs_diff_eq!(c.lighten(50.0).unwrap().lightness(), 65.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.darken(50.0).unwrap().lightness(), 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.saturate(50.0).unwrap().saturation(), 70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.desaturate(50.0).unwrap().saturation(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_adjust_keeps_hue_and_other_field() {
        let c = ColorValue::from_hsl(275.5, 40.0, 30.0).unwrap();

        let lighter = c.lighten(25.0).unwrap();
        assert_eq!(lighter.hue(), 275.5);
        assert_eq!(lighter.saturation(), 40.0);

        let duller = c.desaturate(25.0).unwrap();
        assert_eq!(duller.hue(), 275.5);
        assert_eq!(duller.lightness(), 30.0);
    }

    #[test]
    fn test_adjust_rejects_bad_amount() {
        let c = dodger_blue();
        for amount in [-0.1, 100.1, f64::NAN] {
            assert!(c.lighten(amount).is_err());
            assert!(c.darken(amount).is_err());
            assert!(c.saturate(amount).is_err());
            assert!(c.desaturate(amount).is_err());
        }
        match c.darken(150.0) {
            Err(ColorError::OutOfRange { name, .. }) => assert_eq!(name, "amount"),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_adjust_leaves_original_untouched() {
        let c = dodger_blue();
        let _ = c.darken(40.0).unwrap();
        assert_eq!(c.to_hex(), "#1E90FF");
    }

    #[test]
    fn test_chaining() {
        let c = dodger_blue()
            .darken(10.0)
            .and_then(|c| c.saturate(5.0))
            .and_then(|c| c.lighten(0.0))
            .unwrap();
        assert_eq!(c.to_hex(), "#0182FF");
    }

    #[test]
    fn test_string_views() {
        let c = ColorValue::from_hsl(200.0, 80.0, 40.0).unwrap();
        assert_eq!(c.to_hsl_string(), "hsl(200, 80, 40)");
        assert_eq!(c.to_string(), "hsl(200, 80, 40)");
        assert_eq!(c.to_rgb_string(), "rgb(20, 129, 184)");
        assert_eq!(c.to_hex_string(), c.to_hex());
    }

    #[test]
    fn test_from_str() {
        let c: ColorValue = "1e90ff".parse().unwrap();
        assert_eq!(c, dodger_blue());
        assert!("#12".parse::<ColorValue>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_validation() {
        let c = ColorValue::from_hsl(210.0, 100.0, 56.0).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"hue":210.0,"saturation":100.0,"lightness":56.0}"#);

        let back: ColorValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let bad = serde_json::from_str::<ColorValue>(r#"{"hue":10.0,"saturation":120.0,"lightness":5.0}"#);
        assert!(bad.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_rgb_derived() {
        let mut failures = Vec::new();
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let c = ColorValue::from_rgb(r, g, b).unwrap();
                    let json = serde_json::to_string(&c).unwrap();
                    match serde_json::from_str::<ColorValue>(&json) {
                        Ok(back) => {
                            assert_abs_diff_eq!(back.hue(), c.hue(), epsilon = 1e-9);
                            assert_abs_diff_eq!(back.saturation(), c.saturation(), epsilon = 1e-9);
                            assert_abs_diff_eq!(back.lightness(), c.lightness(), epsilon = 1e-9);
                        }
                        Err(e) => failures.push(format!("rgb({r}, {g}, {b}) {json}: {e}")),
                    }
                }
            }
        }
        assert!(failures.is_empty(), "{} failures, first: {}", failures.len(), failures[0]);

        // saturation of rgb(0, 0, 10) overshoots 100 before clamping
        let c = ColorValue::from_rgb(0, 0, 10).unwrap();
        let back: ColorValue = serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(back.saturation(), 100.0);
        assert_eq!(back.to_hex(), "#00000A");
    }
}
