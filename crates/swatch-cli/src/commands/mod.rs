//! CLI command implementations

pub mod adjust;
pub mod convert;
pub mod info;

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use swatch_core::ColorValue;
use tracing::debug;

use crate::{ColorInput, Model};

/// Builds a color from the command-line input.
pub fn load_color(input: &ColorInput) -> Result<ColorValue> {
    debug!(from = ?input.from, values = ?input.values, "load_color");

    match input.from {
        Model::Hex => {
            let [hex] = input.values.as_slice() else {
                bail!("hex input takes exactly one value, got {}", input.values.len());
            };
            ColorValue::from_hex(hex).with_context(|| format!("Invalid hex color: {hex}"))
        }
        Model::Rgb => {
            let [r, g, b] = components::<i32>(&input.values, "rgb")?;
            ColorValue::from_rgb(r, g, b).context("Invalid RGB color")
        }
        Model::Hsl => {
            let [h, s, l] = components::<f64>(&input.values, "hsl")?;
            ColorValue::from_hsl(h, s, l).context("Invalid HSL color")
        }
        Model::Hsv => {
            let [h, s, v] = components::<f64>(&input.values, "hsv")?;
            ColorValue::from_hsv(h, s, v).context("Invalid HSV color")
        }
    }
}

/// Splits `values` on commas and whitespace and parses exactly three numbers.
fn components<T>(values: &[String], model: &str) -> Result<[T; 3]>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let tokens: Vec<&str> = values
        .iter()
        .flat_map(|v| v.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|t| !t.is_empty())
        .collect();

    let &[a, b, c] = tokens.as_slice() else {
        bail!("{model} input takes three numbers, got {}", tokens.len());
    };

    let parse = |t: &str| t.parse::<T>().with_context(|| format!("Not a number: {t}"));
    Ok([parse(a)?, parse(b)?, parse(c)?])
}

/// Renders a color in the requested notation.
pub fn render(color: &ColorValue, model: Model) -> String {
    match model {
        Model::Hex => color.to_hex_string(),
        Model::Rgb => color.to_rgb_string(),
        Model::Hsl => color.to_hsl_string(),
        Model::Hsv => color.to_hsv_string(),
    }
}
