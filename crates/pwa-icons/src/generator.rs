//! Per-size generation loop.
//!
//! The source is loaded once; each size is then rendered and written on its
//! own. A failing size is recorded in the [`GenerationReport`] and the loop
//! moves on, so one bad size never prevents the others from being produced.

use std::fmt;
use std::path::{Path, PathBuf};

use resvg::usvg::Tree;

use crate::error::{IconError, Result};
use crate::knight::render_knight_png;
use crate::render::{load_svg, render_png};
use crate::sizes::{output_file_name, PWA_ICON_SIZES, SOURCE_FILE_NAME};

/// Where the artwork comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// An SVG document on disk.
    Svg(PathBuf),
    /// The built-in knight drawing; needs no input file.
    BuiltinKnight,
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg(path) => write!(f, "{}", path.display()),
            Self::BuiltinKnight => f.write_str("built-in knight"),
        }
    }
}

/// Loaded artwork, ready to be rendered at any size.
enum Artwork {
    Svg(Tree),
    Knight,
}

impl Artwork {
    fn load(source: &IconSource) -> Result<Self> {
        match source {
            IconSource::Svg(path) => load_svg(path).map(Self::Svg),
            IconSource::BuiltinKnight => Ok(Self::Knight),
        }
    }

    fn render(&self, size: u32) -> Result<Vec<u8>> {
        match self {
            Self::Svg(tree) => render_png(tree, size),
            Self::Knight => render_knight_png(size),
        }
    }
}

/// What to render and where to put it.
#[derive(Debug, Clone)]
pub struct IconJob {
    /// Artwork to rasterize.
    pub source: IconSource,
    /// Directory receiving the PNG files. Created if absent.
    pub out_dir: PathBuf,
    /// Edge lengths to render, in order.
    pub sizes: Vec<u32>,
}

impl IconJob {
    /// Job rendering the SVG at `source` into `out_dir` at the standard PWA sizes.
    pub fn new(source: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self::with_source(IconSource::Svg(source.into()), out_dir)
    }

    /// Job drawing the built-in knight into `out_dir`.
    pub fn builtin(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_source(IconSource::BuiltinKnight, out_dir)
    }

    fn with_source(source: IconSource, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            out_dir: out_dir.into(),
            sizes: PWA_ICON_SIZES.to_vec(),
        }
    }

    /// Job reading `dir/icon.svg` and writing next to it.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(SOURCE_FILE_NAME), dir)
    }

    /// Replace the size list.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Destination path for `size`.
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.out_dir.join(output_file_name(size))
    }
}

/// A PNG written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Per-size progress notification.
#[derive(Debug)]
pub enum Progress<'a> {
    Generated(&'a GeneratedIcon),
    Failed { size: u32, error: &'a IconError },
}

/// Outcome of a run where the source could be loaded.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Sizes written, in attempt order.
    pub generated: Vec<GeneratedIcon>,
    /// Sizes that failed, in attempt order.
    pub failed: Vec<(u32, IconError)>,
}

impl GenerationReport {
    /// `true` when every requested size was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of sizes attempted.
    pub fn attempted(&self) -> usize {
        self.generated.len() + self.failed.len()
    }
}

/// Run `job`, calling `on_progress` once per size as it completes.
///
/// Returns `Err` only when nothing can be attempted: the SVG source is
/// missing or unparsable, or the output directory cannot be created. In that case no
/// file is written.
pub fn generate<F>(job: &IconJob, mut on_progress: F) -> Result<GenerationReport>
where
    F: FnMut(Progress<'_>),
{
    let artwork = Artwork::load(&job.source)?;

    std::fs::create_dir_all(&job.out_dir).map_err(|e| IconError::io(&job.out_dir, e))?;

    tracing::debug!(
        source = %job.source,
        out_dir = %job.out_dir.display(),
        sizes = job.sizes.len(),
        "Generating icons"
    );

    let mut report = GenerationReport::default();

    for &size in &job.sizes {
        let path = job.output_path(size);
        let result = artwork.render(size).and_then(|png| {
            std::fs::write(&path, png).map_err(|e| IconError::io(&path, e))
        });

        match result {
            Ok(()) => {
                tracing::debug!(size, path = %path.display(), "Wrote icon");
                report.generated.push(GeneratedIcon { size, path });
                if let Some(icon) = report.generated.last() {
                    on_progress(Progress::Generated(icon));
                }
            }
            Err(error) => {
                tracing::debug!(size, error = %error, "Icon size failed");
                report.failed.push((size, error));
                if let Some((size, error)) = report.failed.last() {
                    on_progress(Progress::Failed {
                        size: *size,
                        error,
                    });
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::MAX_ICON_SIZE;

    const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512" width="512" height="512">
  <rect width="512" height="512" fill="#3fb959"/>
  <circle cx="280" cy="200" r="15" fill="#ffffff"/>
</svg>"##;

    fn icons_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SOURCE_FILE_NAME), ICON_SVG).unwrap();
        dir
    }

    #[test]
    fn generates_every_standard_size() {
        let dir = icons_dir();
        let job = IconJob::from_dir(dir.path());

        let report = generate(&job, |_| {}).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.generated.len(), PWA_ICON_SIZES.len());
        for size in PWA_ICON_SIZES {
            let img = image::open(job.output_path(size)).unwrap();
            assert_eq!((img.width(), img.height()), (size, size));
        }
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("icons");
        let job = IconJob::new(out.join(SOURCE_FILE_NAME), &out);

        let err = generate(&job, |_| panic!("no progress expected")).unwrap_err();

        assert!(err.is_fatal());
        assert!(!out.exists());
    }

    #[test]
    fn failed_size_does_not_stop_the_rest() {
        let dir = icons_dir();
        let job = IconJob::from_dir(dir.path()).with_sizes(vec![16, 0, 32]);

        let mut events = Vec::new();
        let report = generate(&job, |p| {
            events.push(match p {
                Progress::Generated(icon) => (icon.size, true),
                Progress::Failed { size, .. } => (size, false),
            })
        })
        .unwrap();

        assert_eq!(events, vec![(16, true), (0, false), (32, true)]);
        assert_eq!(report.attempted(), 3);
        assert!(!report.is_complete());
        assert!(job.output_path(16).exists());
        assert!(job.output_path(32).exists());
        assert!(!job.output_path(0).exists());
    }

    #[test]
    fn oversized_entry_is_skipped() {
        let dir = icons_dir();
        let job = IconJob::from_dir(dir.path()).with_sizes(vec![16, MAX_ICON_SIZE + 1, 32]);

        let report = generate(&job, |_| {}).unwrap();

        let written: Vec<u32> = report.generated.iter().map(|i| i.size).collect();
        assert_eq!(written, vec![16, 32]);
        assert_eq!(report.failed.len(), 1);
        assert!(matches!(
            report.failed[0],
            (s, IconError::InvalidSize { .. }) if s == MAX_ICON_SIZE + 1
        ));
        assert!(job.output_path(16).exists());
        assert!(job.output_path(32).exists());
        assert!(!job.output_path(MAX_ICON_SIZE + 1).exists());
    }

    #[test]
    fn builtin_source_needs_no_svg() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("icons");
        let job = IconJob::builtin(&out).with_sizes(vec![16, 192]);

        let report = generate(&job, |_| {}).unwrap();

        assert!(report.is_complete());
        let img = image::open(out.join("icon-192x192.png")).unwrap();
        assert_eq!((img.width(), img.height()), (192, 192));
        assert_eq!(job.source.to_string(), "built-in knight");
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = icons_dir();
        let out = dir.path().join("nested").join("icons");
        let job = IconJob::new(dir.path().join(SOURCE_FILE_NAME), &out).with_sizes(vec![48]);

        let report = generate(&job, |_| {}).unwrap();

        assert_eq!(
            report.generated,
            vec![GeneratedIcon {
                size: 48,
                path: out.join("icon-48x48.png"),
            }]
        );
    }
}
