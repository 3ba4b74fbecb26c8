//! Icon size list and output naming.

/// Edge lengths, in pixels, of the square icons a PWA manifest references.
pub const PWA_ICON_SIZES: [u32; 10] = [16, 32, 72, 96, 128, 144, 152, 192, 384, 512];

/// Largest edge length accepted, in pixels.
///
/// Keeps a single RGBA canvas at or below 256 MiB so a mistyped size fails that size
/// instead of exhausting memory.
pub const MAX_ICON_SIZE: u32 = 8192;

/// File name of the vector source inside the icons directory.
pub const SOURCE_FILE_NAME: &str = "icon.svg";

/// File name of the PNG rendered at `size`, e.g. `icon-192x192.png`.
pub fn output_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}
