//! Clipboard Operations for Symbol Export
//!
//! This module provides cross-platform clipboard functionality for copying
//! the rendered symbol using the arboard crate: SVG markup as text, bitmaps
//! as native clipboard images.

use crate::qr::Bitmap;
use arboard::{Clipboard, ImageData};
use std::borrow::Cow;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// Failed to access clipboard
    Access(String),
    /// Failed to set clipboard content
    Write(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Access(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::Write(msg) => write!(f, "Clipboard write error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::Write(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Copy SVG markup to the clipboard as text.
///
/// Vector editors and browsers paste the markup directly; there is no
/// dedicated SVG clipboard format across platforms.
pub fn copy_svg_markup(markup: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;

    clipboard
        .set_text(markup)
        .map_err(|e| ClipboardError::Write(e.to_string()))?;

    Ok(())
}

/// Copy a rasterized bitmap to the clipboard as a native image.
pub fn copy_bitmap(bitmap: &Bitmap) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;

    let image = ImageData {
        width: bitmap.width() as usize,
        height: bitmap.height() as usize,
        bytes: Cow::Borrowed(bitmap.rgba()),
    };

    clipboard
        .set_image(image)
        .map_err(|e| ClipboardError::Write(e.to_string()))?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
