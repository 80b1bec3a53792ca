//! Adjust command
//!
//! Applies lighten/darken/saturate/desaturate steps in command-line order.

use std::fmt;
use std::str::FromStr;

use crate::AdjustArgs;
use anyhow::{Context, Result};
use swatch_core::{ColorResult, ColorValue};
use tracing::{debug, info, trace};

/// One adjustment step, parsed from `name=amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Lighten(f64),
    Darken(f64),
    Saturate(f64),
    Desaturate(f64),
}

impl Adjustment {
    /// Applies this step to `color`.
    pub fn apply(self, color: ColorValue) -> ColorResult<ColorValue> {
        match self {
            Self::Lighten(amount) => color.lighten(amount),
            Self::Darken(amount) => color.darken(amount),
            Self::Saturate(amount) => color.saturate(amount),
            Self::Desaturate(amount) => color.desaturate(amount),
        }
    }
}

impl FromStr for Adjustment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("expected name=amount, got '{s}'"))?;
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|e| format!("invalid amount '{}': {e}", amount.trim()))?;

        match name.trim().to_lowercase().as_str() {
            "lighten" => Ok(Self::Lighten(amount)),
            "darken" => Ok(Self::Darken(amount)),
            "saturate" => Ok(Self::Saturate(amount)),
            "desaturate" => Ok(Self::Desaturate(amount)),
            other => Err(format!(
                "unknown adjustment '{other}' (expected lighten, darken, saturate, desaturate)"
            )),
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lighten(a) => write!(f, "lighten({a})"),
            Self::Darken(a) => write!(f, "darken({a})"),
            Self::Saturate(a) => write!(f, "saturate({a})"),
            Self::Desaturate(a) => write!(f, "desaturate({a})"),
        }
    }
}

pub fn run(args: AdjustArgs, verbose: u8) -> Result<()> {
    trace!(ops = args.ops.len(), to = ?args.to, "adjust::run");

    let mut color = super::load_color(&args.input)?;
    info!(ops = args.ops.len(), "Applying adjustments");

    for op in &args.ops {
        color = op.apply(color).with_context(|| format!("Failed to apply {op}"))?;
        debug!(%op, %color, "adjusted");
        if verbose > 0 {
            eprintln!("  {op} -> {}", super::render(&color, args.to));
        }
    }

    println!("{}", super::render(&color, args.to));
    Ok(())
}
