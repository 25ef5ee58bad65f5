//! Native file dialog integration using the rfd crate
//!
//! This module provides the save dialog used by file exports, seeded with
//! the fixed export filename for the chosen format.

use crate::export::ExportFormat;
use rfd::FileDialog;
use std::path::PathBuf;

/// Opens a native save dialog for an exported symbol.
///
/// The filename defaults to the format's fixed export name (`qr-code.svg` /
/// `qr-code.png`). Returns `Some(PathBuf)` if a location was selected,
/// `None` if cancelled.
pub fn save_export_dialog(format: ExportFormat, initial_dir: Option<&PathBuf>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Save QR Code")
        .add_filter(format.filter_label(), &[format.extension()])
        .set_file_name(format.file_name());

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}
