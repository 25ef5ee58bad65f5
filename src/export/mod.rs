//! Symbol Export Module for Quartz
//!
//! This module provides the (SVG | PNG) × (clipboard | file) export matrix
//! for the rendered symbol.
//!
//! # Architecture
//!
//! - `options.rs` - Export request value objects (format × sink)
//! - `clipboard.rs` - Platform clipboard operations
//! - `coordinator.rs` - Representation lookup, sink commit, outcome mapping

pub mod clipboard;
pub mod coordinator;
pub mod options;

pub use coordinator::{execute, ExportOutcome};
pub use options::{ExportFormat, ExportRequest, ExportSink};
