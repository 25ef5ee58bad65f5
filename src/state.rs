//! Application state management for Quartz
//!
//! This module defines the central `AppState` struct holding the live render
//! options, the persisted settings, and UI state (toast notifications).

use crate::config::{load_config, save_config_silent, Settings};
use crate::qr::QrOptions;

// ─────────────────────────────────────────────────────────────────────────────
// Toast Severity
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastSeverity {
    /// Routine confirmation (export committed)
    #[default]
    Info,
    /// Something went wrong and the user should know
    Error,
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// UI-related state flags.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporary toast message (shown in the status bar)
    pub toast_message: Option<String>,
    /// Severity of the current toast
    pub toast_severity: ToastSeverity,
    /// When the toast message should expire (as seconds since app start)
    pub toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state struct.
///
/// Holds the live render options (session-only, never persisted), the
/// persisted shell settings, and UI state.
#[derive(Debug)]
pub struct AppState {
    /// Current render options driving the pipeline
    pub options: QrOptions,
    /// Persisted settings (window state, export preferences)
    pub settings: Settings,
    /// UI-related state
    pub ui: UiState,
    /// Whether settings have been modified and need saving
    settings_dirty: bool,
}

impl AppState {
    /// Create the application state, loading settings from the config file.
    pub fn new() -> Self {
        Self {
            options: QrOptions::default(),
            settings: load_config(),
            ui: UiState::default(),
            settings_dirty: false,
        }
    }

    /// Mark settings as modified so they get persisted.
    pub fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Persist settings if they changed since the last save.
    ///
    /// Returns `true` if a save was attempted and succeeded.
    pub fn save_settings_if_dirty(&mut self) -> bool {
        if !self.settings_dirty {
            return false;
        }
        let saved = save_config_silent(&self.settings);
        if saved {
            self.settings_dirty = false;
        }
        saved
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toast Notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a temporary toast message (disappears after duration).
    ///
    /// `current_time` should be the current app time in seconds.
    /// `duration` is how long to show the message in seconds.
    pub fn show_toast(
        &mut self,
        message: impl Into<String>,
        severity: ToastSeverity,
        current_time: f64,
        duration: f64,
    ) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_severity = severity;
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Update toast state - clears expired toasts.
    ///
    /// Call this each frame with the current time.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
