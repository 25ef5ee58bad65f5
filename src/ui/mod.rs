//! UI components for Quartz
//!
//! This module contains the form widgets and the preview pane.

mod color_field;
mod preview;

pub use color_field::color_field;
pub use preview::PreviewPane;
