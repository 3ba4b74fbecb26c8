//! Built-in knight icon, drawn without an SVG source.
//!
//! The artwork is laid out on a 512x512 design grid and scaled by
//! `size / 512`.

use resvg::tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Transform};

use crate::error::{IconError, Result};
use crate::render::new_canvas;

/// Background and eye color, `#3fb959`.
pub const KNIGHT_GREEN: [u8; 3] = [0x3f, 0xb9, 0x59];

const DESIGN_SIZE: f32 = 512.0;

/// Silhouette outline on the design grid, closed back onto the first point.
const OUTLINE: [(f32, f32); 35] = [
    (256.0, 100.0), (280.0, 120.0), (300.0, 150.0), (310.0, 180.0),
    (320.0, 220.0), (330.0, 260.0), (340.0, 300.0), (350.0, 340.0),
    (360.0, 380.0), (370.0, 420.0), (380.0, 460.0), (400.0, 480.0),
    (420.0, 490.0), (440.0, 495.0), (460.0, 498.0), (480.0, 500.0),
    (480.0, 512.0), (32.0, 512.0), (32.0, 500.0), (50.0, 498.0),
    (70.0, 495.0), (90.0, 490.0), (110.0, 480.0), (130.0, 460.0),
    (140.0, 420.0), (145.0, 380.0), (148.0, 340.0), (150.0, 300.0),
    (155.0, 260.0), (165.0, 220.0), (180.0, 180.0), (200.0, 150.0),
    (220.0, 130.0), (240.0, 115.0), (256.0, 100.0),
];

/// Eye center and radius on the design grid.
const EYE: (f32, f32, f32) = (280.0, 200.0, 15.0);

fn outline() -> Option<Path> {
    let (first, rest) = OUTLINE.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.0, first.1);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

/// Draw the knight on a `size`x`size` canvas and encode it as PNG.
pub fn render_knight_png(size: u32) -> Result<Vec<u8>> {
    let mut pixmap = new_canvas(size)?;
    let [r, g, b] = KNIGHT_GREEN;
    pixmap.fill(Color::from_rgba8(r, g, b, 0xff));

    let scale = size as f32 / DESIGN_SIZE;
    let transform = Transform::from_scale(scale, scale);

    let body = outline().ok_or_else(|| IconError::Draw("knight outline is empty".into()))?;
    let eye = PathBuilder::from_circle(EYE.0, EYE.1, EYE.2)
        .ok_or_else(|| IconError::Draw("knight eye has no area".into()))?;

    let mut paint = Paint::default();
    paint.anti_alias = true;

    paint.set_color_rgba8(0xff, 0xff, 0xff, 0xff);
    pixmap.fill_path(&body, &paint, FillRule::Winding, transform, None);

    paint.set_color_rgba8(r, g, b, 0xff);
    pixmap.fill_path(&eye, &paint, FillRule::Winding, transform, None);

    pixmap
        .encode_png()
        .map_err(|e| IconError::Encode(e.to_string()))
}
