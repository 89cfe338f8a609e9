//! swatch - HDR color swatch generator
//!
//! Converts OKLCH brand colors into PQ-encoded BT.2020 AVIF images.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Generate HDR (PQ BT.2020) color swatches")]
#[command(long_about = "
Converts perceptual OKLCH colors into PQ-encoded BT.2020 pixel values and
encodes them as 10-bit AVIF images tagged CICP 9/16/9.

Examples:
  swatch generate                          # every palette color plus the logo
  swatch generate brand-500-red white      # selected colors
  swatch generate 'brand-*-blue' -o out    # glob filter, custom output dir
  swatch inspect brand-500-red             # pipeline trace, nothing encoded
  swatch list                              # palette table
  swatch --palette colors.yaml list
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long = "jobs", global = true, default_value = "0")]
    threads: usize,

    /// Palette YAML file (default: built-in brand palette)
    #[arg(long, global = true)]
    palette: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode swatch images (like the asset build step)
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Print the color pipeline trace without encoding
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// List palette colors
    #[command(visible_alias = "l")]
    List(ListArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Color names or glob patterns; `logo` selects the logo (default: all)
    names: Vec<String>,

    /// Output directory
    #[arg(short, long, default_value = "assets/hdr")]
    output_dir: PathBuf,

    /// Source logo (WebP or PNG with alpha)
    #[arg(long, default_value = "assets/logo.webp")]
    logo: PathBuf,

    /// Swatch size in pixels
    #[arg(short, long, default_value = "8")]
    size: u32,

    /// Output bit depth: 8, 10 or 12
    #[arg(short = 'd', long, default_value = "10")]
    bit_depth: u8,

    /// Encoder quality for swatches (0-100)
    #[arg(short, long, default_value = "100")]
    quality: u8,

    /// Encoder quality for the logo (0-100)
    #[arg(long, default_value = "90")]
    logo_quality: u8,

    /// HDR boost of the logo white
    #[arg(long, default_value = "2.5")]
    logo_boost: f64,

    /// Encoder executable
    #[arg(long, default_value = "avifenc")]
    encoder: PathBuf,

    /// Encoder timeout in seconds
    #[arg(long, default_value = "60")]
    timeout: u64,

    /// Directory for encoder staging files (default: system temp)
    #[arg(long)]
    temp_dir: Option<PathBuf>,
}

#[derive(Args)]
struct InspectArgs {
    /// Color names or glob patterns (default: all)
    names: Vec<String>,

    /// Bit depth for the pixel column: 8, 10 or 12
    #[arg(short = 'd', long, default_value = "10")]
    bit_depth: u8,

    /// HDR boost used for `logo`
    #[arg(long, default_value = "2.5")]
    logo_boost: f64,
}

#[derive(Args)]
struct ListArgs {
    /// Print the palette as YAML instead of a table
    #[arg(long)]
    yaml: bool,
}

/// Installs the tracing subscriber. The returned guard flushes the log file
/// on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default = match verbose {
        0 => "swatch=info",
        1 => "swatch=debug",
        _ => "swatch=trace",
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().without_time().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let palette = commands::load_palette(cli.palette.as_deref())?;

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &palette),
        Commands::Inspect(args) => commands::inspect::run(args, &palette),
        Commands::List(args) => commands::list::run(args, &palette),
    }
}
