//! Inspect command - prints the color pipeline trace without encoding

use crate::InspectArgs;
use anyhow::{Result, bail};
use swatch_color::math::Vec3;
use swatch_color::{HdrColor, SDR_WHITE_NITS, evaluate, sdr_white_signal};
use swatch_core::{BitDepth, ColorSpec, Palette};
use swatch_io::batch::{ImageRequest, select};
use tracing::{trace, warn};

fn fmt_vec(v: Vec3) -> String {
    format!("({:.6}, {:.6}, {:.6})", v.x, v.y, v.z)
}

fn print_trace(name: &str, spec: &ColorSpec, hdr: &HdrColor, depth: BitDepth) {
    let (l, c, h) = spec.oklch();
    println!("{}", name);
    println!("  OKLCH:          L={:.4} C={:.4} h={:.2} boost={}", l, c, h, spec.boost());
    println!("  XYZ:            {}", fmt_vec(hdr.xyz));
    println!("  sRGB:           {}", fmt_vec(hdr.srgb));
    println!("  Linear BT.2020: {}", fmt_vec(hdr.linear));
    println!("  Target nits:    ({:.1}, {:.1}, {:.1})", hdr.nits.x, hdr.nits.y, hdr.nits.z);
    println!("  PQ signal:      {}", fmt_vec(hdr.signal));
    println!("  {}-bit pixels:  {}", depth.bits(), hdr.pixels(depth));

    let peak = hdr.signal.max_element();
    let rel = if hdr.exceeds_sdr_white() { "exceeds" } else { "below" };
    println!(
        "  Peak PQ {:.4} {} SDR white PQ {:.4} ({} nits)",
        peak,
        rel,
        sdr_white_signal(),
        SDR_WHITE_NITS
    );
}

pub fn run(args: InspectArgs, palette: &Palette) -> Result<()> {
    trace!(names = ?args.names, "inspect::run");

    let depth = super::bit_depth(args.bit_depth)?;
    let selection = select(palette, &args.names);
    for name in &selection.unknown {
        warn!("Unknown color: {}", name);
    }
    if selection.requests.is_empty() {
        bail!("Nothing to inspect");
    }

    for (i, req) in selection.requests.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let spec = match req {
            ImageRequest::Color { spec, .. } => *spec,
            ImageRequest::Logo => ColorSpec::white(args.logo_boost)?,
        };
        print_trace(req.name(), &spec, &evaluate(&spec), depth);
    }
    Ok(())
}
