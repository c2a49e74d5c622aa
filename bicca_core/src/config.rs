//! # Shell Configuration
//!
//! Compiled-in defaults for the main window. Nothing is read from disk or
//! the environment; every launch starts from [`ShellConfig::default`].

use serde::{Deserialize, Serialize};

/// Window title shown for a fresh, unsaved session
pub const DEFAULT_WINDOW_TITLE: &str = "<untitled draft> - BICCA Studio 1.0.0";

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Title bar text
    pub window_title: String,

    /// Initial window width in logical pixels
    pub window_width: f32,

    /// Initial window height in logical pixels
    pub window_height: f32,

    /// Fixed width of the Tutorials region of the split view
    pub tutorials_width: f32,

    /// Use the dark theme
    pub dark_mode: bool,

    /// `tracing` filter directive installed at startup (e.g. "info", "bicca_core=debug")
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            window_width: 1440.0,
            window_height: 1024.0,
            tutorials_width: 300.0,
            dark_mode: false,
            log_filter: "info".to_string(),
        }
    }
}
