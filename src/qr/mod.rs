//! QR rendering pipeline for Quartz
//!
//! The pipeline has three parts, composed left to right:
//!
//! - `options.rs` - Render options and immutable snapshots handed to the encoder
//! - `generator.rs` - Encoder adapter and the regeneration pipeline that keeps
//!   the cached SVG markup current
//! - `rasterizer.rs` - SVG to bitmap conversion for PNG export and the preview
//!
//! The cached SVG markup is the only derived artifact; bitmaps are produced
//! on demand and never stored.

mod generator;
mod options;
mod rasterizer;

pub use generator::{encode_svg, EncodeError, GeneratorPipeline};
pub use options::{
    ColorValue, OptionSnapshot, QrOptions, MAX_SYMBOL_SIZE, MIN_SYMBOL_SIZE, TRANSPARENT,
};
pub use rasterizer::{rasterize, Bitmap, RasterizeError};
