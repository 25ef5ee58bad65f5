//! Render options for the QR symbol
//!
//! `QrOptions` is the live option model mutated by the form; `OptionSnapshot`
//! is the immutable view captured when a regeneration is kicked off, so a
//! symbol in flight is never affected by later edits.

// Allow dead code - the option model exposes symmetric get/set accessors
#![allow(dead_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest renderable symbol edge in pixels.
pub const MIN_SYMBOL_SIZE: u32 = 1;
/// Largest renderable symbol edge in pixels.
pub const MAX_SYMBOL_SIZE: u32 = 500;

/// The reserved fully-transparent color value.
///
/// The encoder accepts this like any other color string; the swatch renders
/// it as a "no fill" indicator instead of a solid tile.
pub const TRANSPARENT: &str = "#00000000";

// ─────────────────────────────────────────────────────────────────────────────
// Color Value
// ─────────────────────────────────────────────────────────────────────────────

/// A color parameter: free-form text plus a transparency toggle.
///
/// The text is passed to the encoder uninterpreted; validation happens at the
/// encoder boundary. While the toggle is on, the effective value is the
/// transparent sentinel regardless of the typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorValue {
    text: String,
    transparent: bool,
}

impl ColorValue {
    /// An opaque color with the given initial text.
    pub fn opaque(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            transparent: false,
        }
    }

    /// The typed text, which may differ from the effective value.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access to the typed text for the input widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Toggle transparency.
    ///
    /// Turning it off resets the text to an empty editable value; the
    /// previously typed color is not restored.
    pub fn set_transparent(&mut self, on: bool) {
        if self.transparent && !on {
            self.text.clear();
        }
        self.transparent = on;
    }

    /// The value handed to the encoder: the sentinel while transparent,
    /// otherwise the typed text.
    pub fn effective(&self) -> &str {
        if self.transparent {
            TRANSPARENT
        } else {
            &self.text
        }
    }

    /// Whether the swatch should show the "no fill" indicator.
    pub fn renders_transparent(&self) -> bool {
        let value = self.effective();
        value == TRANSPARENT || value == "#0000"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Option Model
// ─────────────────────────────────────────────────────────────────────────────

/// The live render options driving the pipeline.
///
/// Payload and color edits require a regeneration; size is a display/export
/// dimension applied at rasterize time and never re-encodes the symbol.
#[derive(Debug, Clone)]
pub struct QrOptions {
    payload: String,
    size: u32,
    foreground: ColorValue,
    background: ColorValue,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            payload: String::new(),
            size: 250,
            foreground: ColorValue::opaque("#000000"),
            background: ColorValue::opaque("#ffffff"),
        }
    }
}

impl QrOptions {
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn set_payload(&mut self, payload: impl Into<String>) {
        self.payload = payload.into();
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set the symbol edge in pixels, clamped to the allowed range.
    pub fn set_size(&mut self, px: u32) {
        self.size = px.clamp(MIN_SYMBOL_SIZE, MAX_SYMBOL_SIZE);
    }

    pub fn foreground(&self) -> &ColorValue {
        &self.foreground
    }

    pub fn foreground_mut(&mut self) -> &mut ColorValue {
        &mut self.foreground
    }

    pub fn background(&self) -> &ColorValue {
        &self.background
    }

    pub fn background_mut(&mut self) -> &mut ColorValue {
        &mut self.background
    }

    /// Capture the encoder-relevant fields as an immutable snapshot.
    ///
    /// Size is deliberately absent: it only matters at rasterize time.
    pub fn snapshot(&self) -> OptionSnapshot {
        OptionSnapshot {
            payload: self.payload.clone(),
            foreground: self.foreground.effective().to_owned(),
            background: self.background.effective().to_owned(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Option Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable view of the options at the moment a regeneration starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSnapshot {
    pub payload: String,
    /// Effective foreground color string
    pub foreground: String,
    /// Effective background color string
    pub background: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
