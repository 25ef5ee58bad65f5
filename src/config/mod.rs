//! Configuration module for Quartz
//!
//! This module handles application settings (window state and export
//! preferences), including serialization/deserialization to/from JSON and
//! persistent storage to platform-specific directories. The QR render
//! options themselves are session-only and never persisted.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
