//! List command

use crate::ListArgs;
use anyhow::Result;
use swatch_color::evaluate;
use swatch_core::{BitDepth, Palette};

pub fn run(args: ListArgs, palette: &Palette) -> Result<()> {
    if args.yaml {
        print!("{}", palette.to_yaml()?);
        return Ok(());
    }

    let width = palette.names().map(str::len).max().unwrap_or(4).max(4);
    println!(
        "{:<width$}  {:>6}  {:>6}  {:>7}  {:>5}  10-bit",
        "NAME", "L", "C", "h", "boost"
    );
    for (name, spec) in palette.iter() {
        let (l, c, h) = spec.oklch();
        let px = evaluate(spec).pixels(BitDepth::U10);
        println!(
            "{:<width$}  {:>6.4}  {:>6.4}  {:>7.2}  {:>5.2}  {}",
            name,
            l,
            c,
            h,
            spec.boost(),
            px
        );
    }
    println!("{} colors", palette.len());
    Ok(())
}
