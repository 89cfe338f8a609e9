//! 16-bit PNG staging for the external encoder.
//!
//! Rasters are written as 16-bit RGB or RGBA. Color samples are widened from
//! the raster depth by bit replication ([`BitDepth::expand_to_u16`]), which
//! the encoder's own down-conversion inverts exactly. Alpha is widened by
//! 257, also exact.
//!
//! No gamma, sRGB or ICC chunk is written: the encoder is told the
//! colorimetry explicitly and ignores embedded profiles.
//!
//! [`BitDepth::expand_to_u16`]: swatch_core::BitDepth::expand_to_u16

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use swatch_core::Raster;

use crate::{IoError, IoResult};

/// Writes a raster to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    write_to(BufWriter::new(file), raster)
}

/// Writes a raster as PNG to any writer.
pub fn write_to<W: Write>(writer: W, raster: &Raster) -> IoResult<()> {
    let color_type = if raster.has_alpha() {
        png::ColorType::Rgba
    } else {
        png::ColorType::Rgb
    };

    let mut encoder = png::Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Sixteen);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&interleave_be16(raster))
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}

/// Big-endian 16-bit samples, RGB or RGBA interleaved.
fn interleave_be16(raster: &Raster) -> Vec<u8> {
    let depth = raster.depth();
    let channels = raster.channels() as usize;
    let pixels = raster.width() as usize * raster.height() as usize;
    let mut out = Vec::with_capacity(pixels * channels * 2);

    let rgb = raster.rgb().chunks_exact(3);
    match raster.alpha() {
        Some(alpha) => {
            for (px, &a) in rgb.zip(alpha) {
                for &v in px {
                    out.extend_from_slice(&depth.expand_to_u16(v).to_be_bytes());
                }
                out.extend_from_slice(&(a as u16 * 257).to_be_bytes());
            }
        }
        None => {
            for px in rgb {
                for &v in px {
                    out.extend_from_slice(&depth.expand_to_u16(v).to_be_bytes());
                }
            }
        }
    }
    out
}
