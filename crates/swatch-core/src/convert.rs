//! Conversion math between RGB, HSL and HSV.
//!
//! These functions operate on plain `f64` triples and perform no validation;
//! [`ColorValue`](crate::ColorValue) checks its inputs before calling them.
//!
//! # Scales
//!
//! | Model | Component | Scale |
//! |-------|-----------|-------|
//! | RGB | r, g, b | `[0, 1]` in, `[0, 255]` out (unrounded) |
//! | HSL | h | degrees `[0, 360)` |
//! | HSL | s, l | percent `[0, 100]` |
//! | HSV | h | degrees `[0, 360]` |
//! | HSV | s, v | percent `[0, 100]` |
//!
//! Operation order matters here: several canonical fixtures sit exactly on a
//! rounding boundary, so the formulas are kept in the order documented on
//! each function.

/// Wraps a hue into `[0, 360)`.
///
/// # Example
///
/// ```rust
/// use swatch_core::convert::normalize_hue;
///
/// assert_eq!(normalize_hue(360.0), 0.0);
/// assert_eq!(normalize_hue(-30.0), 330.0);
/// ```
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// RGB (unit range) to HSL (degrees, percent, percent).
///
/// # Formula
///
/// ```text
/// l = (max + min) / 2
/// delta == 0: h = 0, s = 0          (achromatic)
/// s = delta / (1 - |2l - 1|)
/// max == r:  h = 60 * ((g - b) / delta  mod_euclid 6)
/// max == g:  h = 60 * ((b - r) / delta + 2)
/// max == b:  h = 60 * ((r - g) / delta + 4)
/// ```
///
/// Saturation and lightness are clamped to `[0, 100]`; the division above
/// can overshoot 100 by an ulp for saturated colors such as `rgb(0, 0, 10)`.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return [0.0, 0.0, l * 100.0];
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    [normalize_hue(h), (s * 100.0).clamp(0.0, 100.0), (l * 100.0).clamp(0.0, 100.0)]
}

/// HSL to RGB on the 0..255 scale, unrounded.
///
/// # Formula
///
/// ```text
/// c = (1 - |2l - 1|) * s
/// x = c * (1 - |(h / 60) mod 2 - 1|)
/// m = l - c / 2
/// (r', g', b') chosen by 60 degree sector
/// rgb = (rgb' + m) * 255
/// ```
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let h = hsl[0];
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

/// HSV to RGB on the 0..255 scale, unrounded.
///
/// Standard sector decomposition. The sector position is wrapped into
/// `[0, 6)`, so `h == 360` is treated as `h == 0`.
///
/// ```text
/// H = (h / 360 * 6) mod 6,  i = floor(H),  f = H - i
/// M = v(1 - s),  N = v(1 - s f),  K = v(1 - s(1 - f))
/// ```
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let h = hsv[0] / 360.0;
    let s = hsv[1] / 100.0;
    let v = hsv[2] / 100.0;

    let sector_pos = (h * 6.0).rem_euclid(6.0);
    let sector = sector_pos.floor();
    let f = sector_pos - sector;

    let m = v * (1.0 - s);
    let n = v * (1.0 - s * f);
    let k = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, k, m),
        1 => (n, v, m),
        2 => (m, v, k),
        3 => (m, n, v),
        4 => (k, m, v),
        _ => (v, m, n),
    };

    [r * 255.0, g * 255.0, b * 255.0]
}

/// HSL to HSV (degrees, percent, percent), closed form.
///
/// ```text
/// v   = l + s * min(l, 1 - l)
/// s_v = v == 0 ? 0 : 2 * (1 - l / v)
/// ```
pub fn hsl_to_hsv(hsl: [f64; 3]) -> [f64; 3] {
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    let v = l + s * l.min(1.0 - l);
    let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    [hsl[0], sv * 100.0, v * 100.0]
}
