//! Export Coordination
//!
//! Maps an `ExportRequest` onto the pipeline: pick the representation
//! (cached markup directly, or a fresh rasterization for PNG), commit it to
//! the requested sink, and report what happened as an `ExportOutcome`.
//!
//! Outcome mapping is the notification contract: `Done` and `Failed` each
//! produce exactly one toast; `Cancelled` and `NothingToExport` produce none.

use crate::export::clipboard::{copy_bitmap, copy_svg_markup};
use crate::export::options::{ExportFormat, ExportRequest, ExportSink};
use crate::files::dialogs::save_export_dialog;
use crate::qr::{rasterize, Bitmap};
use log::{debug, info, warn};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Export Outcome
// ─────────────────────────────────────────────────────────────────────────────

/// Result of one export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The representation was committed to the sink. For file exports the
    /// written path is carried so the caller can remember the directory.
    Done {
        message: String,
        path: Option<PathBuf>,
    },
    /// The export failed; the message becomes an error notification.
    Failed(String),
    /// The user dismissed the save dialog; nothing was exported.
    Cancelled,
    /// Vector export requested before any symbol exists; silently skipped.
    NothingToExport,
}

// ─────────────────────────────────────────────────────────────────────────────
// Coordinator
// ─────────────────────────────────────────────────────────────────────────────

/// Execute a single export request against the current markup.
///
/// `size` is the rasterization edge for PNG; it is ignored for SVG exports.
pub fn execute(
    request: ExportRequest,
    markup: &str,
    size: u32,
    initial_dir: Option<&PathBuf>,
) -> ExportOutcome {
    debug!("Export requested: {}", request.action_label());

    match request.format {
        ExportFormat::Svg => {
            if markup.is_empty() {
                // No symbol yet; the vector path skips silently
                debug!("Skipping SVG export, no symbol yet");
                return ExportOutcome::NothingToExport;
            }
            commit_svg(request.sink, markup, initial_dir)
        }
        ExportFormat::Png => {
            if markup.is_empty() {
                return ExportOutcome::Failed("No QR code to export".to_owned());
            }
            let bitmap = match rasterize(markup, size) {
                Ok(bitmap) => bitmap,
                Err(err) => {
                    warn!("Rasterization failed: {}", err);
                    return ExportOutcome::Failed(format!("Failed to render PNG image: {}", err));
                }
            };
            commit_png(request.sink, &bitmap, initial_dir)
        }
    }
}

fn commit_svg(sink: ExportSink, markup: &str, initial_dir: Option<&PathBuf>) -> ExportOutcome {
    match sink {
        ExportSink::Clipboard => match copy_svg_markup(markup) {
            Ok(()) => {
                info!("Copied SVG markup to clipboard");
                ExportOutcome::Done {
                    message: "SVG image copied to clipboard".to_owned(),
                    path: None,
                }
            }
            Err(err) => {
                warn!("Failed to copy SVG to clipboard: {}", err);
                ExportOutcome::Failed(format!("Failed to copy SVG image: {}", err))
            }
        },
        ExportSink::File => write_file(ExportFormat::Svg, markup.as_bytes(), initial_dir),
    }
}

fn commit_png(sink: ExportSink, bitmap: &Bitmap, initial_dir: Option<&PathBuf>) -> ExportOutcome {
    match sink {
        ExportSink::Clipboard => match copy_bitmap(bitmap) {
            Ok(()) => {
                info!("Copied PNG image to clipboard");
                ExportOutcome::Done {
                    message: "PNG image copied to clipboard".to_owned(),
                    path: None,
                }
            }
            Err(err) => {
                warn!("Failed to copy PNG to clipboard: {}", err);
                ExportOutcome::Failed(format!("Failed to copy PNG image: {}", err))
            }
        },
        ExportSink::File => match bitmap.to_png_bytes() {
            Ok(bytes) => write_file(ExportFormat::Png, &bytes, initial_dir),
            Err(err) => {
                warn!("PNG encoding failed: {}", err);
                ExportOutcome::Failed(format!("Failed to encode PNG image: {}", err))
            }
        },
    }
}

/// Run the save dialog and write the bytes to the chosen path.
fn write_file(format: ExportFormat, bytes: &[u8], initial_dir: Option<&PathBuf>) -> ExportOutcome {
    let Some(path) = save_export_dialog(format, initial_dir) else {
        debug!("{} save dialog cancelled", format.label());
        return ExportOutcome::Cancelled;
    };

    match std::fs::write(&path, bytes) {
        Ok(()) => {
            info!("Exported {} to: {}", format.label(), path.display());
            ExportOutcome::Done {
                message: format!("Saved: {}", path.display()),
                path: Some(path),
            }
        }
        Err(err) => {
            warn!("Failed to write {} file: {}", format.label(), err);
            ExportOutcome::Failed(format!("Failed to save {} image: {}", format.label(), err))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Clipboard and dialog sinks need a display; these tests stay on the
    // paths that are decided before any sink is touched.

    #[test]
    fn test_svg_export_with_empty_markup_is_noop() {
        for sink in [ExportSink::Clipboard, ExportSink::File] {
            let outcome = execute(ExportRequest::new(ExportFormat::Svg, sink), "", 250, None);
            assert_eq!(outcome, ExportOutcome::NothingToExport);
        }
    }

    #[test]
    fn test_png_export_with_empty_markup_fails() {
        let outcome = execute(
            ExportRequest::new(ExportFormat::Png, ExportSink::Clipboard),
            "",
            250,
            None,
        );
        assert!(matches!(outcome, ExportOutcome::Failed(_)));
    }

    #[test]
    fn test_png_export_with_malformed_markup_fails() {
        let outcome = execute(
            ExportRequest::new(ExportFormat::Png, ExportSink::File),
            "not an svg document",
            250,
            None,
        );
        match outcome {
            ExportOutcome::Failed(message) => assert!(message.contains("PNG")),
            other => panic!("Expected Failed, got {:?}", other),
        }
    }
}
