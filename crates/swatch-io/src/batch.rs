//! Batch generation of HDR swatch images.
//!
//! A batch resolves a list of requested names against the palette, builds
//! one raster per image, hands it to the [`Encoder`] and writes
//! `<output_dir>/<name>.<ext>`. Images are independent: they run in
//! parallel on the rayon pool, and a failure of one image never stops the
//! others. Results are reported in request order.

use std::path::{Path, PathBuf};

use glob::Pattern;
use rayon::prelude::*;
use swatch_color::{HdrColor, PixelTriple, evaluate};
use swatch_core::{BitDepth, ColorSpec, LOGO_NAME, Palette};
use tracing::{debug, error, info, trace, warn};

use crate::config::GeneratorConfig;
use crate::encoder::Encoder;
use crate::{IoError, IoResult, raster, source};

/// One image to generate.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRequest {
    /// Solid swatch of a palette color.
    Color {
        /// Palette name.
        name: String,
        /// Color to fill with.
        spec: ColorSpec,
    },
    /// The HDR logo.
    Logo,
}

impl ImageRequest {
    /// Output name (file stem).
    pub fn name(&self) -> &str {
        match self {
            Self::Color { name, .. } => name,
            Self::Logo => LOGO_NAME,
        }
    }
}

/// Requested names resolved against a palette.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Images to generate, in request order, without duplicates.
    pub requests: Vec<ImageRequest>,
    /// Names and patterns that matched nothing.
    pub unknown: Vec<String>,
}

impl Selection {
    /// Number of requested entries, unknown ones included.
    pub fn requested(&self) -> usize {
        self.requests.len() + self.unknown.len()
    }
}

fn push_unique(sel: &mut Selection, req: ImageRequest) {
    if !sel.requests.iter().any(|r| r.name() == req.name()) {
        sel.requests.push(req);
    }
}

fn is_glob(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Resolves `filters` against `palette`.
///
/// An empty filter list selects every palette color followed by the logo.
/// Entries may be exact names, [`LOGO_NAME`], or glob patterns
/// (`brand-*-red`). Anything that resolves to nothing lands in
/// [`Selection::unknown`].
pub fn select(palette: &Palette, filters: &[String]) -> Selection {
    let mut sel = Selection::default();

    if filters.is_empty() {
        sel.requests = palette
            .iter()
            .map(|(name, spec)| ImageRequest::Color {
                name: name.to_string(),
                spec: *spec,
            })
            .collect();
        sel.requests.push(ImageRequest::Logo);
        return sel;
    }

    for filter in filters {
        if filter == LOGO_NAME {
            push_unique(&mut sel, ImageRequest::Logo);
        } else if let Some(spec) = palette.get(filter) {
            push_unique(&mut sel, ImageRequest::Color {
                name: filter.clone(),
                spec: *spec,
            });
        } else if is_glob(filter) {
            let pattern = match Pattern::new(filter) {
                Ok(p) => p,
                Err(e) => {
                    warn!("Invalid pattern {}: {}", filter, e);
                    sel.unknown.push(filter.clone());
                    continue;
                }
            };
            let mut matched = false;
            for (name, spec) in palette.iter().filter(|(n, _)| pattern.matches(n)) {
                matched = true;
                push_unique(&mut sel, ImageRequest::Color {
                    name: name.to_string(),
                    spec: *spec,
                });
            }
            if pattern.matches(LOGO_NAME) {
                matched = true;
                push_unique(&mut sel, ImageRequest::Logo);
            }
            if !matched {
                sel.unknown.push(filter.clone());
            }
        } else {
            sel.unknown.push(filter.clone());
        }
    }
    sel
}

/// Per-image numbers kept for the report.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageDetail {
    /// Solid swatch.
    Color {
        /// Full pipeline trace.
        hdr: HdrColor,
        /// Code values written.
        pixels: PixelTriple,
    },
    /// Logo composite.
    Logo {
        /// Source logo path.
        source: PathBuf,
        /// Source width.
        width: u32,
        /// Source height.
        height: u32,
        /// Trace of the logo white.
        hdr: HdrColor,
        /// Code value broadcast to every color sample.
        value: u16,
        /// Depth of `value`.
        depth: BitDepth,
    },
}

/// A successfully written image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOutcome {
    /// Image name.
    pub name: String,
    /// File written.
    pub path: PathBuf,
    /// Encoded size in bytes.
    pub bytes: u64,
    /// Numbers for the report.
    pub detail: ImageDetail,
}

/// An image that could not be generated.
#[derive(Debug)]
pub struct ImageFailure {
    /// Image name.
    pub name: String,
    /// What went wrong.
    pub error: IoError,
}

/// Result of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Directory images were written to.
    pub output_dir: PathBuf,
    /// Requested entries, unknown ones included.
    pub requested: usize,
    /// Written images, in request order.
    pub outcomes: Vec<ImageOutcome>,
    /// Failed images, in request order.
    pub failures: Vec<ImageFailure>,
    /// Entries that matched nothing.
    pub unknown: Vec<String>,
}

impl BatchReport {
    /// Number of images written.
    pub fn succeeded(&self) -> usize {
        self.outcomes.len()
    }

    /// True if something was requested and no image failed.
    pub fn is_success(&self) -> bool {
        self.requested > 0 && self.failures.is_empty()
    }

    /// `Done: <success>/<requested> images in <dir>`.
    pub fn summary(&self) -> String {
        format!(
            "Done: {}/{} images in {}",
            self.succeeded(),
            self.requested,
            self.output_dir.display()
        )
    }
}

/// Generates swatch images with one palette, one config and one encoder.
pub struct Generator<'a> {
    palette: &'a Palette,
    config: &'a GeneratorConfig,
    encoder: &'a dyn Encoder,
}

impl<'a> Generator<'a> {
    /// Creates a generator.
    pub fn new(palette: &'a Palette, config: &'a GeneratorConfig, encoder: &'a dyn Encoder) -> Self {
        Self {
            palette,
            config,
            encoder,
        }
    }

    /// Resolves `filters` and generates every selected image.
    ///
    /// # Errors
    ///
    /// Only when the output directory cannot be created. Per-image failures
    /// are collected in the report.
    pub fn run(&self, filters: &[String]) -> IoResult<BatchReport> {
        let selection = select(self.palette, filters);
        self.run_selection(selection)
    }

    /// Generates an already resolved selection.
    pub fn run_selection(&self, selection: Selection) -> IoResult<BatchReport> {
        trace!(
            requests = selection.requests.len(),
            unknown = selection.unknown.len(),
            "batch::run"
        );
        for name in &selection.unknown {
            warn!("Unknown color: {}", name);
        }

        std::fs::create_dir_all(&self.config.output_dir)?;
        info!(
            images = selection.requests.len(),
            encoder = self.encoder.name(),
            depth = %self.config.depth,
            "Generating HDR images in {}",
            self.config.output_dir.display()
        );

        let results: Vec<IoResult<ImageOutcome>> = selection
            .requests
            .par_iter()
            .map(|req| self.generate(req))
            .collect();

        let mut report = BatchReport {
            output_dir: self.config.output_dir.clone(),
            requested: selection.requested(),
            outcomes: Vec::new(),
            failures: Vec::new(),
            unknown: selection.unknown,
        };

        for (req, result) in selection.requests.iter().zip(results) {
            match result {
                Ok(outcome) => {
                    log_outcome(&outcome);
                    report.outcomes.push(outcome);
                }
                Err(e) => {
                    error!("{}: {}", req.name(), e);
                    report.failures.push(ImageFailure {
                        name: req.name().to_string(),
                        error: e,
                    });
                }
            }
        }

        info!("{}", report.summary());
        Ok(report)
    }

    /// Generates one image and writes it to the output directory.
    pub fn generate(&self, req: &ImageRequest) -> IoResult<ImageOutcome> {
        match req {
            ImageRequest::Color { name, spec } => self.generate_color(name, spec),
            ImageRequest::Logo => self.generate_logo(),
        }
    }

    fn generate_color(&self, name: &str, spec: &ColorSpec) -> IoResult<ImageOutcome> {
        debug!(name, "generating swatch");
        let hdr = evaluate(spec);
        let pixels = hdr.pixels(self.config.depth);
        let raster = raster::solid_fill(pixels, self.config.size)?;

        let bytes = self.encoder.encode(&raster, &self.config.fill_settings())?;
        let path = self.write_output(name, &bytes)?;

        Ok(ImageOutcome {
            name: name.to_string(),
            path,
            bytes: bytes.len() as u64,
            detail: ImageDetail::Color { hdr, pixels },
        })
    }

    fn generate_logo(&self) -> IoResult<ImageOutcome> {
        debug!("generating logo from {}", self.config.logo_path.display());
        let src = source::read(&self.config.logo_path)?;

        let hdr = evaluate(&self.config.logo_color()?);
        let white = hdr.pixels(self.config.depth);
        let raster = raster::composite_logo(&src, white)?;

        let bytes = self.encoder.encode(&raster, &self.config.logo_settings())?;
        let path = self.write_output(LOGO_NAME, &bytes)?;

        Ok(ImageOutcome {
            name: LOGO_NAME.to_string(),
            path,
            bytes: bytes.len() as u64,
            detail: ImageDetail::Logo {
                source: self.config.logo_path.clone(),
                width: src.width,
                height: src.height,
                hdr,
                value: white.r(),
                depth: white.depth(),
            },
        })
    }

    fn write_output(&self, name: &str, bytes: &[u8]) -> IoResult<PathBuf> {
        let path = self.config.output_path(name, self.encoder.extension());
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

const CHANNELS: [&str; 3] = ["R", "G", "B"];

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn log_outcome(o: &ImageOutcome) {
    info!("Created {} ({} bytes)", file_name(&o.path), o.bytes);
    match &o.detail {
        ImageDetail::Color { hdr, pixels } => {
            let (l, n, s) = (hdr.linear, hdr.nits, hdr.signal);
            let dominant = hdr.dominant_channel();
            info!("  Linear BT.2020 : [{:.4}, {:.4}, {:.4}]", l.x, l.y, l.z);
            info!(
                "  Target nits    : R={:.0}  G={:.0}  B={:.0}  (boost {}x)",
                n.x, n.y, n.z, hdr.boost
            );
            info!("  PQ signal      : [{:.4}, {:.4}, {:.4}]", s.x, s.y, s.z);
            info!(
                "  SDR white PQ   : {:.4} <- {} channel {} SDR white",
                swatch_color::sdr_white_signal(),
                CHANNELS[dominant],
                if hdr.exceeds_sdr_white() { "exceeds" } else { "below" }
            );
            debug!("  Pixel          : {} ({})", pixels, pixels.depth());
        }
        ImageDetail::Logo {
            source,
            width,
            height,
            hdr,
            value,
            depth,
        } => {
            info!("  Source         : {} ({}x{})", file_name(source), width, height);
            info!("  Target nits    : {:.0} (boost {}x)", hdr.nits.x, hdr.boost);
            info!("  PQ white pixel : {} / {}", value, depth.max_value());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sel: &Selection) -> Vec<&str> {
        sel.requests.iter().map(|r| r.name()).collect()
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_selection() {
        let p = Palette::builtin();
        let sel = select(&p, &[]);
        assert_eq!(sel.requests.len(), p.len() + 1);
        assert_eq!(sel.requests.last(), Some(&ImageRequest::Logo));
        assert!(sel.unknown.is_empty());
        assert_eq!(sel.requested(), 8);
    }

    #[test]
    fn test_exact_and_unknown() {
        let sel = select(&Palette::builtin(), &strings(&["brand-999-green", "white"]));
        assert_eq!(names(&sel), ["white"]);
        assert_eq!(sel.unknown, ["brand-999-green"]);
        assert_eq!(sel.requested(), 2);
    }

    #[test]
    fn test_glob() {
        let sel = select(&Palette::builtin(), &strings(&["brand-*-red", "logo"]));
        assert_eq!(
            names(&sel),
            ["brand-400-red", "brand-500-red", "brand-600-red", "logo"]
        );
    }

    #[test]
    fn test_glob_matching_nothing_is_unknown() {
        let sel = select(&Palette::builtin(), &strings(&["brand-*-green", "[bad"]));
        assert!(sel.requests.is_empty());
        assert_eq!(sel.unknown, ["brand-*-green", "[bad"]);
    }

    #[test]
    fn test_duplicates_collapsed() {
        let sel = select(&Palette::builtin(), &strings(&["white", "w*", "white"]));
        assert_eq!(names(&sel), ["white"]);
    }

    #[test]
    fn test_summary() {
        let report = BatchReport {
            output_dir: PathBuf::from("assets/hdr"),
            requested: 2,
            outcomes: Vec::new(),
            failures: Vec::new(),
            unknown: strings(&["x"]),
        };
        assert_eq!(report.summary(), "Done: 0/2 images in assets/hdr");
        assert!(report.is_success());
    }
}
