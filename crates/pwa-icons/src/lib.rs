//! pwa-icons: rasterize one SVG icon into the PNG sizes a Progressive Web
//! App manifest expects.
//!
//! The crate is split into these layers:
//!
//! - [`sizes`]: the fixed size list and deterministic output naming
//! - [`render`]: SVG loading and single-size rasterization via `resvg`
//! - [`knight`]: the built-in fallback artwork, drawn with `tiny-skia` paths
//! - [`generator`]: the per-size loop that records failures and keeps going

pub mod error;
pub mod generator;
pub mod knight;
pub mod render;
pub mod sizes;

pub use error::{IconError, Result};
pub use generator::{generate, GeneratedIcon, GenerationReport, IconJob, IconSource, Progress};
pub use knight::render_knight_png;
pub use render::{load_svg, render_png};
pub use sizes::{output_file_name, MAX_ICON_SIZE, PWA_ICON_SIZES, SOURCE_FILE_NAME};
