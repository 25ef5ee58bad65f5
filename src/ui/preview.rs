//! Live symbol preview
//!
//! Owns the preview texture. The cached artifact upstream is the SVG markup
//! alone; this pane rasterizes it on demand whenever the markup or the
//! requested size changes, and shows a placeholder tile until the first
//! symbol exists.

use crate::qr::{rasterize, MAX_SYMBOL_SIZE};
use eframe::egui;
use log::debug;
use std::hash::{Hash, Hasher};

/// Renders the current symbol (or a placeholder) from the cached markup.
pub struct PreviewPane {
    texture: Option<egui::TextureHandle>,
    /// (markup hash, size) the current texture was rendered for
    rendered_for: Option<(u64, u32)>,
}

impl PreviewPane {
    pub fn new() -> Self {
        Self {
            texture: None,
            rendered_for: None,
        }
    }

    /// Refresh the texture if the markup or size changed since the last upload.
    pub fn update(&mut self, ctx: &egui::Context, markup: &str, size: u32) {
        if markup.is_empty() {
            self.texture = None;
            self.rendered_for = None;
            return;
        }

        let key = (hash_markup(markup), size);
        if self.rendered_for == Some(key) {
            return;
        }

        match rasterize(markup, size) {
            Ok(bitmap) => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [bitmap.width() as usize, bitmap.height() as usize],
                    bitmap.rgba(),
                );
                self.texture =
                    Some(ctx.load_texture("qr-preview", image, egui::TextureOptions::NEAREST));
                self.rendered_for = Some(key);
            }
            Err(err) => {
                // keep the previous texture; the markup may be briefly unrenderable
                debug!("Preview rasterization failed: {}", err);
            }
        }
    }

    /// Draw the preview centered in a fixed-height region.
    ///
    /// The region is sized for the largest symbol so the form below it does
    /// not jump around as the size slider moves.
    pub fn show(&self, ui: &mut egui::Ui, size: u32) {
        let region_height = MAX_SYMBOL_SIZE as f32;
        let (region, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), region_height),
            egui::Sense::hover(),
        );

        let side = size as f32;
        let rect = egui::Rect::from_center_size(region.center(), egui::vec2(side, side));

        match &self.texture {
            Some(texture) => {
                egui::Image::new(texture).paint_at(ui, rect);
            }
            None => {
                // skeleton tile until the first symbol is generated
                ui.painter()
                    .rect_filled(rect, 6.0, ui.visuals().faint_bg_color);
            }
        }
    }
}

impl Default for PreviewPane {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_markup(markup: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    markup.hash(&mut hasher);
    hasher.finish()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable_and_discriminating() {
        let a = hash_markup("<svg>a</svg>");
        assert_eq!(a, hash_markup("<svg>a</svg>"));
        assert_ne!(a, hash_markup("<svg>b</svg>"));
    }

    // Texture updates need an egui::Context with a GPU-less backend; the
    // rasterization behind them is covered in qr::rasterizer.
}
