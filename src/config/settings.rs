//! User settings and preferences for Quartz
//!
//! This module defines the `Settings` struct that holds the persisted
//! application shell state, with serde support for JSON persistence.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 760.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted application settings.
///
/// This struct is serialized to JSON and persisted to the user's config directory.
/// All fields have sensible defaults via the `Default` trait and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Window size and position
    pub window_size: WindowSize,

    /// Last directory used for saving an exported image
    pub last_export_directory: Option<PathBuf>,

    /// Whether to open exported files after saving them
    pub open_after_export: bool,
}

impl Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);

        // A remembered directory that no longer exists is just noise
        if let Some(dir) = &self.last_export_directory {
            if !dir.is_dir() {
                self.last_export_directory = None;
            }
        }
    }

    /// Parse settings from JSON and sanitize the result.
    pub fn from_json_sanitized(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_size() {
        let size = WindowSize::default();
        assert_eq!(size.width, 560.0);
        assert_eq!(size.height, 760.0);
        assert!(size.x.is_none());
        assert!(!size.maximized);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.last_export_directory.is_none());
        assert!(!settings.open_after_export);
    }

    #[test]
    fn test_settings_roundtrip() {
        let original = Settings {
            window_size: WindowSize {
                width: 640.0,
                height: 800.0,
                x: Some(20.0),
                y: Some(40.0),
                maximized: false,
            },
            last_export_directory: Some(PathBuf::from("/tmp")),
            open_after_export: true,
        };

        let json = serde_json::to_string_pretty(&original).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_sanitize_clamps_window_size() {
        let mut settings = Settings::default();
        settings.window_size.width = 10.0;
        settings.window_size.height = 50000.0;
        settings.sanitize();
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, Settings::MAX_WINDOW_SIZE);
    }

    #[test]
    fn test_sanitize_drops_missing_export_directory() {
        let mut settings = Settings {
            last_export_directory: Some(PathBuf::from("/definitely/not/a/real/dir")),
            ..Settings::default()
        };
        settings.sanitize();
        assert!(settings.last_export_directory.is_none());
    }

    #[test]
    fn test_from_json_sanitized() {
        let json = r#"{"window_size": {"width": 1.0, "height": 600.0}}"#;
        let settings = Settings::from_json_sanitized(json).unwrap();
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, 600.0);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"open_after_export": true, "future_feature": 7}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.open_after_export);
    }
}
