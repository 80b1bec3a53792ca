//! Info command
//!
//! Shows one color in every notation, as text or JSON.

use std::io::Write;

use crate::InfoArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use swatch_core::ColorValue;
use tracing::{info, trace};

/// Every view of a color, as emitted by `--json`.
#[derive(Debug, Serialize)]
struct ColorReport {
    hex: String,
    rgb: [u8; 3],
    hsl: [u16; 3],
    hsv: [u16; 3],
    /// Unrounded canonical value
    canonical: ColorValue,
}

impl From<ColorValue> for ColorReport {
    fn from(color: ColorValue) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_rgb(),
            hsl: color.to_hsl(),
            hsv: color.to_hsv(),
            canonical: color,
        }
    }
}

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    trace!(json = args.json, "info::run");

    let color = super::load_color(&args.input)?;
    info!(%color, "Loaded color");

    write_report(&mut std::io::stdout().lock(), &color, args.json)?;

    if verbose > 0 {
        eprintln!(
            "Exact: h={:.4} s={:.4} l={:.4}",
            color.hue(),
            color.saturation(),
            color.lightness()
        );
    }

    Ok(())
}

/// Writes the report that goes to stdout: every view as text, or JSON.
fn write_report(out: &mut impl Write, color: &ColorValue, json: bool) -> Result<()> {
    if json {
        let report = ColorReport::from(*color);
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    writeln!(out, "Hex: {}", color.to_hex_string())?;
    writeln!(out, "RGB: {}", color.to_rgb_string())?;
    writeln!(out, "HSL: {}", color.to_hsl_string())?;
    writeln!(out, "HSV: {}", color.to_hsv_string())?;
    Ok(())
}
