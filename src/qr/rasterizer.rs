//! SVG rasterization
//!
//! Converts the cached vector markup into a fixed-size bitmap: parse with
//! usvg, render with resvg into a tiny-skia pixmap, demultiply to
//! straight-alpha RGBA. Single-shot per call, nothing is cached here.

use resvg::{tiny_skia, usvg};
use std::fmt;
use std::io::Cursor;

// ─────────────────────────────────────────────────────────────────────────────
// Rasterize Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Reasons rasterization can fail. All are recoverable; the caller reports
/// and the pipeline stays usable for the next attempt.
#[derive(Debug)]
pub enum RasterizeError {
    /// The markup failed to parse as SVG.
    Decode(String),
    /// The target pixel buffer could not be allocated.
    Canvas,
    /// PNG encoding of the finished bitmap failed.
    Encode(String),
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterizeError::Decode(msg) => write!(f, "SVG decode error: {}", msg),
            RasterizeError::Canvas => write!(f, "Could not allocate the target canvas"),
            RasterizeError::Encode(msg) => write!(f, "PNG encode error: {}", msg),
        }
    }
}

impl std::error::Error for RasterizeError {}

// ─────────────────────────────────────────────────────────────────────────────
// Bitmap
// ─────────────────────────────────────────────────────────────────────────────

/// A rasterized symbol: straight-alpha RGBA pixels plus dimensions.
#[derive(Debug, Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight-alpha RGBA bytes, row-major, 4 bytes per pixel.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Encode the bitmap as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, RasterizeError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .ok_or(RasterizeError::Canvas)?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| RasterizeError::Encode(e.to_string()))?;
        Ok(bytes)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rasterization
// ─────────────────────────────────────────────────────────────────────────────

/// Render the vector markup into a `size`×`size` bitmap.
///
/// The markup's own dimensions are ignored; it is scaled to fill the target
/// exactly, so the read-back dimensions always equal `size`.
pub fn rasterize(markup: &str, size: u32) -> Result<Bitmap, RasterizeError> {
    let tree = usvg::Tree::from_str(markup, &usvg::Options::default())
        .map_err(|e| RasterizeError::Decode(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(RasterizeError::Canvas)?;

    let view = tree.size();
    let transform =
        tiny_skia::Transform::from_scale(size as f32 / view.width(), size as f32 / view.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Ok(Bitmap {
        width: size,
        height: size,
        rgba,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{encode_svg, OptionSnapshot};

    const PNG_SIGNATURE: [u8; 4] = [0x89, b'P', b'N', b'G'];

    fn example_markup(background: &str) -> String {
        encode_svg(&OptionSnapshot {
            payload: "https://example.com".to_owned(),
            foreground: "#000000".to_owned(),
            background: background.to_owned(),
        })
        .expect("encoding a valid snapshot")
    }

    #[test]
    fn test_rasterize_matches_requested_size() {
        let markup = example_markup("#ffffff");
        let bitmap = rasterize(&markup, 250).unwrap();
        assert_eq!(bitmap.width(), 250);
        assert_eq!(bitmap.height(), 250);
        assert_eq!(bitmap.rgba().len(), 250 * 250 * 4);
    }

    #[test]
    fn test_rasterize_smallest_size() {
        let markup = example_markup("#ffffff");
        let bitmap = rasterize(&markup, 1).unwrap();
        assert_eq!(bitmap.width(), 1);
        assert_eq!(bitmap.rgba().len(), 4);
    }

    #[test]
    fn test_rasterize_rejects_malformed_markup() {
        let result = rasterize("this is not svg", 100);
        assert!(matches!(result, Err(RasterizeError::Decode(_))));
    }

    #[test]
    fn test_opaque_background_is_opaque() {
        let markup = example_markup("#ffffff");
        let bitmap = rasterize(&markup, 64).unwrap();
        // top-left corner lies in the quiet zone, filled with the background
        assert_eq!(&bitmap.rgba()[0..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_transparent_sentinel_yields_transparent_pixels() {
        let markup = example_markup("#00000000");
        let bitmap = rasterize(&markup, 64).unwrap();
        let alpha = bitmap.rgba()[3];
        assert_eq!(alpha, 0);
    }

    #[test]
    fn test_png_bytes_carry_signature() {
        let markup = example_markup("#ffffff");
        let bitmap = rasterize(&markup, 32).unwrap();
        let png = bitmap.to_png_bytes().unwrap();
        assert_eq!(&png[0..4], &PNG_SIGNATURE);
    }
}
