//! SVG loading and rasterization.

use std::path::Path;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{IconError, Result};
use crate::sizes::MAX_ICON_SIZE;

/// Read and parse the SVG at `path`.
///
/// Relative references inside the document (linked images) resolve against
/// the directory holding the file.
pub fn load_svg(path: &Path) -> Result<Tree> {
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IconError::SourceMissing {
            path: path.to_path_buf(),
        },
        _ => IconError::io(path, e),
    })?;

    let mut options = Options::default();
    options.resources_dir = std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    Tree::from_data(&data, &options).map_err(|e| IconError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Allocate a transparent `size`x`size` canvas.
///
/// Sizes of zero or above [`MAX_ICON_SIZE`] are rejected before any
/// allocation happens.
pub(crate) fn new_canvas(size: u32) -> Result<Pixmap> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(IconError::InvalidSize { size });
    }
    Pixmap::new(size, size).ok_or(IconError::InvalidSize { size })
}

/// Render `tree` onto a transparent `size`x`size` canvas and encode it as PNG.
///
/// The drawing is scaled uniformly so its longer side fills the canvas and is
/// centered along the shorter one.
pub fn render_png(tree: &Tree, size: u32) -> Result<Vec<u8>> {
    let mut pixmap = new_canvas(size)?;

    let svg_size = tree.size();
    let edge = size as f32;
    let scale = (edge / svg_size.width()).min(edge / svg_size.height());
    let dx = (edge - svg_size.width() * scale) / 2.0;
    let dy = (edge - svg_size.height() * scale) / 2.0;
    let transform = Transform::from_scale(scale, scale).post_translate(dx, dy);

    resvg::render(tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| IconError::Encode(e.to_string()))
}
