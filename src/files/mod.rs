//! File system integration for Quartz

pub mod dialogs;
