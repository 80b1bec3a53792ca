//! swatch - Color conversion and adjustment CLI
//!
//! Thin command-line surface over `swatch-core`.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::adjust::Adjustment;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Color conversion and adjustment CLI")]
#[command(long_about = "
Converts colors between hex, RGB, HSL and HSV notation and applies
lightness/saturation adjustments.

Examples:
  swatch convert '#1E90FF' --to hsl               # hsl(210, 100, 56)
  swatch convert --from rgb 30 144 255 --to hex   # #1E90FF
  swatch convert --from hsv 210,88,100            # hsl(210, 100, 56)
  swatch adjust '#1E90FF' --op darken=10          # #0182FF
  swatch adjust 1e90ff --op lighten=10 --op desaturate=5 --to rgb
  swatch info --from hsl 200 80 40 --json

Logging goes to stderr. RUST_LOG overrides the level chosen by -v.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color to another notation
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Lighten, darken, saturate or desaturate a color
    #[command(visible_alias = "a")]
    Adjust(AdjustArgs),

    /// Show a color in every notation
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// Color notation, used for both input and output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Model {
    /// `#RRGGBB` or `#RGB`
    Hex,
    /// Red, green, blue (0-255)
    Rgb,
    /// Hue (0-360), saturation, lightness (0-100)
    Hsl,
    /// Hue (0-360), saturation, value (0-100)
    Hsv,
}

/// Color given on the command line.
#[derive(Args)]
struct ColorInput {
    /// Input notation
    #[arg(short, long, value_enum, default_value = "hex")]
    from: Model,

    /// Color components: one hex string, or three numbers (space or comma separated)
    #[arg(required = true, num_args = 1..=3, allow_negative_numbers = true)]
    values: Vec<String>,
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    input: ColorInput,

    /// Output notation
    #[arg(short, long, value_enum, default_value = "hsl")]
    to: Model,
}

#[derive(Args)]
struct AdjustArgs {
    #[command(flatten)]
    input: ColorInput,

    /// Adjustment as name=amount (lighten, darken, saturate, desaturate; amount 0-100).
    /// Repeatable, applied in the order given.
    #[arg(short = 'p', long = "op", required = true)]
    ops: Vec<Adjustment>,

    /// Output notation
    #[arg(short, long, value_enum, default_value = "hex")]
    to: Model,
}

#[derive(Args)]
struct InfoArgs {
    #[command(flatten)]
    input: ColorInput,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "swatch=warn",
        1 => "swatch=info",
        2 => "swatch=debug",
        _ => "swatch=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Adjust(args) => commands::adjust::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
