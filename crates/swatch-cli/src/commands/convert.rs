//! Convert command
//!
//! Reads a color in one notation and prints it in another.

use crate::ConvertArgs;
use anyhow::Result;
use tracing::{info, trace};

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(from = ?args.input.from, to = ?args.to, "convert::run");

    let color = super::load_color(&args.input)?;
    let output = super::render(&color, args.to);

    info!(from = ?args.input.from, to = ?args.to, %output, "Converted");

    if verbose > 0 {
        eprintln!("Canonical: {color}");
    }
    println!("{output}");

    Ok(())
}
