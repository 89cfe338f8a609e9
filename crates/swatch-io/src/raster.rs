//! Raster assembly: solid swatches and the HDR logo.

use swatch_color::PixelTriple;
use swatch_core::{Colorimetry, Raster};

use crate::IoResult;
use crate::source::SourceImage;

/// A `size x size` raster with every pixel set to `pixel`, tagged BT.2100
/// PQ at the pixel's depth.
pub fn solid_fill(pixel: PixelTriple, size: u32) -> IoResult<Raster> {
    let colorimetry = Colorimetry::hdr10(pixel.depth());
    Ok(Raster::filled(size, size, pixel.to_array(), colorimetry)?)
}

/// The logo raster: the red code value of `white` broadcast to every color
/// sample, with the source alpha plane copied unchanged.
pub fn composite_logo(source: &SourceImage, white: PixelTriple) -> IoResult<Raster> {
    let value = white.r();
    let count = source.width as usize * source.height as usize;
    let rgb = vec![value; count * 3];
    let colorimetry = Colorimetry::hdr10(white.depth());
    Ok(Raster::from_data(
        source.width,
        source.height,
        rgb,
        Some(source.alpha.clone()),
        colorimetry,
    )?)
}
