//! Generate command

use crate::GenerateArgs;
use anyhow::{Result, bail};
use std::time::Duration;
use swatch_core::Palette;
use swatch_io::{AvifEnc, Generator, GeneratorConfig};
use tracing::{debug, trace};

pub fn run(args: GenerateArgs, palette: &Palette) -> Result<()> {
    trace!(names = ?args.names, "generate::run");

    let config = GeneratorConfig {
        output_dir: args.output_dir,
        logo_path: args.logo,
        size: args.size,
        depth: super::bit_depth(args.bit_depth)?,
        quality: args.quality.min(100),
        logo_quality: args.logo_quality.min(100),
        logo_boost: args.logo_boost,
        timeout: Duration::from_secs(args.timeout),
    };
    // Reject a bad logo boost before anything is encoded
    config.logo_color()?;

    let mut encoder = AvifEnc::with_program(args.encoder);
    if let Some(dir) = args.temp_dir {
        encoder = encoder.with_staging_root(dir);
    }
    debug!("Encoder: {}", encoder.program().display());

    let report = Generator::new(palette, &config, &encoder).run(&args.names)?;

    let total: u64 = report.outcomes.iter().map(|o| o.bytes).sum();
    debug!("Wrote {}", super::format_size(total));

    if report.requested == 0 {
        bail!("Nothing to generate");
    }
    if !report.failures.is_empty() {
        let names: Vec<&str> = report.failures.iter().map(|f| f.name.as_str()).collect();
        bail!("{} image(s) failed: {}", names.len(), names.join(", "));
    }
    Ok(())
}
