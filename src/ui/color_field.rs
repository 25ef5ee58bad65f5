//! Color input widget
//!
//! One row per color: bold label, free-form text field (disabled while the
//! color is transparent), a Transparent checkbox, and a swatch previewing
//! the effective value. A transparent color renders as a white tile crossed
//! by a red diagonal instead of a solid fill.

use crate::qr::ColorValue;
use eframe::egui;

/// Edge length of the preview swatch in points.
const SWATCH_SIZE: f32 = 24.0;

/// Draw one color control.
///
/// Returns `true` if the effective color changed this frame (typed text or
/// transparency toggle), in which case the caller should regenerate.
pub fn color_field(ui: &mut egui::Ui, label: &str, color: &mut ColorValue) -> bool {
    let before = color.effective().to_owned();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());

        let enabled = !color.is_transparent();
        let edit = egui::TextEdit::singleline(color.text_mut())
            .hint_text(label)
            .desired_width(110.0);
        ui.add_enabled(enabled, edit);

        let mut transparent = color.is_transparent();
        if ui.checkbox(&mut transparent, "Transparent").changed() {
            color.set_transparent(transparent);
        }

        draw_swatch(ui, color);
    });

    color.effective() != before
}

/// Paint the preview swatch for the current effective value.
fn draw_swatch(ui: &mut egui::Ui, color: &ColorValue) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
        egui::Sense::hover(),
    );
    let painter = ui.painter();

    if color.renders_transparent() {
        // "no color": white tile with a diagonal strike
        painter.rect_filled(rect, 4.0, egui::Color32::WHITE);
        painter.line_segment(
            [rect.left_bottom(), rect.right_top()],
            egui::Stroke::new(1.0, egui::Color32::RED),
        );
        painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
    } else if let Some(fill) = parse_swatch_color(color.effective()) {
        painter.rect_filled(rect, 4.0, fill);
        painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
    } else {
        // mid-edit or unparseable: outline only
        painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, egui::Color32::GRAY));
    }
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA` for the swatch preview.
///
/// This is display-only; the pipeline passes color text to the encoder
/// uninterpreted.
fn parse_swatch_color(value: &str) -> Option<egui::Color32> {
    let digits = value.strip_prefix('#')?;

    let expand = |c: char| {
        let n = c.to_digit(16)? as u8;
        Some(n << 4 | n)
    };

    let chars: Vec<char> = digits.chars().collect();
    let (r, g, b, a) = match chars.as_slice() {
        [r, g, b] => (expand(*r)?, expand(*g)?, expand(*b)?, 255),
        [r, g, b, a] => (expand(*r)?, expand(*g)?, expand(*b)?, expand(*a)?),
        _ if digits.is_ascii() && (digits.len() == 6 || digits.len() == 8) => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            let alpha = if digits.len() == 8 { byte(6)? } else { 255 };
            (byte(0)?, byte(2)?, byte(4)?, alpha)
        }
        _ => return None,
    };

    Some(egui::Color32::from_rgba_unmultiplied(r, g, b, a))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(
            parse_swatch_color("#336699"),
            Some(egui::Color32::from_rgba_unmultiplied(0x33, 0x66, 0x99, 255))
        );
        assert_eq!(
            parse_swatch_color("#00000000"),
            Some(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(
            parse_swatch_color("#fff"),
            Some(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 255))
        );
        assert_eq!(
            parse_swatch_color("#f00a"),
            Some(egui::Color32::from_rgba_unmultiplied(255, 0, 0, 0xaa))
        );
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(parse_swatch_color("336699"), None);
        assert_eq!(parse_swatch_color("#12345"), None);
        assert_eq!(parse_swatch_color("#zzz"), None);
        assert_eq!(parse_swatch_color("#"), None);
    }
}
