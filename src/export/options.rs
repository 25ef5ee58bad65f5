//! Export Request Value Objects
//!
//! An export is described by a representation (`ExportFormat`) and a
//! destination (`ExportSink`). Requests are created per button press,
//! consumed immediately, and never stored.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Export Format
// ─────────────────────────────────────────────────────────────────────────────

/// The representation to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The cached vector markup, exported as-is
    #[default]
    Svg,
    /// A bitmap rasterized from the markup at the current size
    Png,
}

impl ExportFormat {
    /// Get the display label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "SVG",
            ExportFormat::Png => "PNG",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }

    /// Get the fixed default filename used when saving.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "qr-code.svg",
            ExportFormat::Png => "qr-code.png",
        }
    }

    /// Get the save dialog filter label for this format.
    pub fn filter_label(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "SVG Image",
            ExportFormat::Png => "PNG Image",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Sink
// ─────────────────────────────────────────────────────────────────────────────

/// The destination for an exported representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportSink {
    /// The system clipboard
    #[default]
    Clipboard,
    /// A file chosen through the platform save dialog
    File,
}

impl ExportSink {
    /// The verb shown on the matching action button.
    pub fn verb(&self) -> &'static str {
        match self {
            ExportSink::Clipboard => "Copy",
            ExportSink::File => "Save",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Request
// ─────────────────────────────────────────────────────────────────────────────

/// A single requested export: which representation goes to which sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub sink: ExportSink,
}

impl ExportRequest {
    pub fn new(format: ExportFormat, sink: ExportSink) -> Self {
        Self { format, sink }
    }

    /// Button/label text, e.g. "Copy SVG" or "Save PNG".
    pub fn action_label(&self) -> String {
        format!("{} {}", self.sink.verb(), self.format.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_labels() {
        assert_eq!(ExportFormat::Svg.label(), "SVG");
        assert_eq!(ExportFormat::Png.label(), "PNG");
    }

    #[test]
    fn test_fixed_file_names() {
        assert_eq!(ExportFormat::Svg.file_name(), "qr-code.svg");
        assert_eq!(ExportFormat::Png.file_name(), "qr-code.png");
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(
            ExportRequest::new(ExportFormat::Svg, ExportSink::Clipboard).action_label(),
            "Copy SVG"
        );
        assert_eq!(
            ExportRequest::new(ExportFormat::Png, ExportSink::File).action_label(),
            "Save PNG"
        );
    }

    #[test]
    fn test_request_serialization_parts() {
        let json = serde_json::to_string(&ExportFormat::Png).unwrap();
        assert_eq!(json, r#""png""#);
        let sink: ExportSink = serde_json::from_str(r#""file""#).unwrap();
        assert_eq!(sink, ExportSink::File);
    }
}
