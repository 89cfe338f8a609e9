//! External image encoder.
//!
//! The [`Encoder`] trait turns a [`Raster`] into encoded file bytes with the
//! raster's colorimetry embedded. [`AvifEnc`] drives the `avifenc` command
//! line tool; tests substitute an in-process fake.
//!
//! # avifenc invocation
//!
//! ```text
//! avifenc --cicp 9/16/9 -r full -d 10 -y 444 -q 100 --ignore-icc in.png out.avif
//! ```
//!
//! The raster is staged as a 16-bit PNG in a per-call temporary directory
//! which is removed whether or not the encoder succeeds.

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use swatch_core::Raster;
use tracing::{debug, trace, warn};

use crate::EncoderError;
use crate::png;

/// Default wall-clock limit for one encoder run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Per-image encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    /// Quality, 0-100 (100 = lossless where supported).
    pub quality: u8,
    /// Maximum time the encoder may run before it is killed.
    pub timeout: Duration,
}

impl EncodeSettings {
    /// Settings with the given quality and the default timeout.
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.min(100),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self::with_quality(100)
    }
}

/// Encodes rasters to an image file format.
pub trait Encoder: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// File extension of the produced format, without the dot.
    fn extension(&self) -> &str {
        "avif"
    }

    /// Encodes `raster`, returning the file bytes.
    fn encode(&self, raster: &Raster, settings: &EncodeSettings) -> Result<Vec<u8>, EncoderError>;
}

/// `avifenc` subprocess backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvifEnc {
    program: PathBuf,
    staging_root: Option<PathBuf>,
}

impl AvifEnc {
    /// Uses `avifenc` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("avifenc")
    }

    /// Uses a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            staging_root: None,
        }
    }

    /// Stages temporary files under `root` instead of the system temp dir.
    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = Some(root.into());
        self
    }

    /// Executable this backend runs.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for one invocation.
    pub fn args(raster: &Raster, settings: &EncodeSettings, input: &Path, output: &Path) -> Vec<OsString> {
        let c = raster.colorimetry();
        let range = if c.cicp.full_range { "full" } else { "limited" };
        let mut args: Vec<OsString> = [
            "--cicp".to_string(),
            c.cicp.to_string(),
            "-r".to_string(),
            range.to_string(),
            "-d".to_string(),
            c.depth.bits().to_string(),
            "-y".to_string(),
            c.chroma.as_str().to_string(),
            "-q".to_string(),
            settings.quality.to_string(),
            "--ignore-icc".to_string(),
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(input.as_os_str().to_owned());
        args.push(output.as_os_str().to_owned());
        args
    }
}

impl Default for AvifEnc {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for AvifEnc {
    fn name(&self) -> &str {
        "avifenc"
    }

    fn encode(&self, raster: &Raster, settings: &EncodeSettings) -> Result<Vec<u8>, EncoderError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("swatch-");
        let tmp = match &self.staging_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        let input = tmp.path().join("in.png");
        let output = tmp.path().join("out.avif");

        png::write(&input, raster).map_err(|e| {
            EncoderError::Io(std::io::Error::other(format!("staging PNG: {}", e)))
        })?;

        let args = Self::args(raster, settings, &input, &output);
        debug!("{} {:?}", self.program.display(), args);

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| EncoderError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // Drain stderr off-thread so a chatty encoder cannot block on a full pipe
        let stderr_reader = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = pipe.read_to_end(&mut buf);
                buf
            })
        });

        let deadline = Instant::now() + settings.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                warn!("{} exceeded {:?}, killing", self.name(), settings.timeout);
                let _ = child.kill();
                let _ = child.wait();
                return Err(EncoderError::Timeout(settings.timeout));
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stderr = stderr_reader
            .and_then(|h| h.join().ok())
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default();

        if !status.success() {
            return Err(EncoderError::Failed {
                status: status.to_string(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            trace!("{} stderr: {}", self.name(), stderr.trim_end());
        }

        Ok(std::fs::read(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::{BitDepth, Colorimetry};

    fn raster(depth: BitDepth) -> Raster {
        Raster::filled(8, 8, [1, 2, 3], Colorimetry::hdr10(depth)).unwrap()
    }

    #[test]
    fn test_args_hdr10() {
        let args = AvifEnc::args(
            &raster(BitDepth::U10),
            &EncodeSettings::with_quality(90),
            Path::new("in.png"),
            Path::new("out.avif"),
        );
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            [
                "--cicp", "9/16/9", "-r", "full", "-d", "10", "-y", "444", "-q", "90",
                "--ignore-icc", "in.png", "out.avif"
            ]
        );
    }

    #[test]
    fn test_args_follow_depth() {
        let args = AvifEnc::args(
            &raster(BitDepth::U12),
            &EncodeSettings::default(),
            Path::new("a"),
            Path::new("b"),
        );
        let pos = args.iter().position(|a| a == "-d").unwrap();
        assert_eq!(args[pos + 1], "12");
    }

    #[test]
    fn test_quality_capped() {
        assert_eq!(EncodeSettings::with_quality(250).quality, 100);
        assert_eq!(EncodeSettings::default().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let enc = AvifEnc::with_program("/nonexistent/swatch-avifenc");
        let err = enc
            .encode(&raster(BitDepth::U10), &EncodeSettings::default())
            .unwrap_err();
        assert!(matches!(err, EncoderError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_surfaces_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-avifenc");
        std::fs::write(&script, "#!/bin/sh\necho 'bad cicp' >&2\nexit 3\n").unwrap();
        make_executable(&script);

        let err = AvifEnc::with_program(&script)
            .encode(&raster(BitDepth::U10), &EncodeSettings::default())
            .unwrap_err();
        match err {
            EncoderError::Failed { stderr, .. } => assert_eq!(stderr, "bad cicp\n"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_child() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow-avifenc");
        std::fs::write(&script, "#!/bin/sh\nexec sleep 30\n").unwrap();
        make_executable(&script);

        let settings = EncodeSettings {
            quality: 100,
            timeout: Duration::from_millis(200),
        };
        let start = Instant::now();
        let err = AvifEnc::with_program(&script)
            .encode(&raster(BitDepth::U10), &settings)
            .unwrap_err();
        assert!(matches!(err, EncoderError::Timeout(_)));
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[cfg(unix)]
    #[test]
    fn test_success_reads_output() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("copy-avifenc");
        // Last two args are input and output
        std::fs::write(
            &script,
            "#!/bin/sh\nfor a; do prev=$cur; cur=$a; done\ncp \"$prev\" \"$cur\"\n",
        )
        .unwrap();
        make_executable(&script);

        let bytes = AvifEnc::with_program(&script)
            .encode(&raster(BitDepth::U10), &EncodeSettings::default())
            .unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[cfg(unix)]
    #[test]
    fn test_staging_dir_removed() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok-avifenc");
        std::fs::write(&ok, "#!/bin/sh\nfor a; do cur=$a; done\necho x > \"$cur\"\n").unwrap();
        make_executable(&ok);
        let bad = dir.path().join("bad-avifenc");
        std::fs::write(&bad, "#!/bin/sh\nexit 1\n").unwrap();
        make_executable(&bad);

        let staging = dir.path().join("staging");
        std::fs::create_dir(&staging).unwrap();
        let is_empty = || std::fs::read_dir(&staging).unwrap().next().is_none();

        let bytes = AvifEnc::with_program(&ok)
            .with_staging_root(&staging)
            .encode(&raster(BitDepth::U10), &EncodeSettings::default())
            .unwrap();
        assert_eq!(bytes, b"x\n");
        assert!(is_empty());

        let err = AvifEnc::with_program(&bad)
            .with_staging_root(&staging)
            .encode(&raster(BitDepth::U10), &EncodeSettings::default())
            .unwrap_err();
        assert!(matches!(err, EncoderError::Failed { .. }));
        assert!(is_empty());

        let settings = EncodeSettings {
            quality: 100,
            timeout: Duration::from_millis(100),
        };
        let slow = dir.path().join("slow-avifenc");
        std::fs::write(&slow, "#!/bin/sh\nexec sleep 30\n").unwrap();
        make_executable(&slow);
        let err = AvifEnc::with_program(&slow)
            .with_staging_root(&staging)
            .encode(&raster(BitDepth::U10), &settings)
            .unwrap_err();
        assert!(matches!(err, EncoderError::Timeout(_)));
        assert!(is_empty());
    }

    #[test]
    fn test_missing_staging_root_is_io_error() {
        let err = AvifEnc::new()
            .with_staging_root("/nonexistent/swatch-staging")
            .encode(&raster(BitDepth::U10), &EncodeSettings::default())
            .unwrap_err();
        assert!(matches!(err, EncoderError::Io(_)));
    }

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
