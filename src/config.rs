//! Configuration for the batflow application
//!
//! Runtime settings for one editor run: where autosave data lives,
//! where saved and exported files go, and whether autosave starts
//! enabled. Held by the frontend and passed down explicitly; there is
//! no process-wide configuration state.

use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for autosave data; `None` selects the platform's
    /// user config directory
    pub data_dir: Option<PathBuf>,

    /// Directory saved and exported files are written into
    pub out_dir: PathBuf,

    /// Whether autosave starts enabled
    pub autosave: bool,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: None,
            out_dir: PathBuf::from("."),
            autosave: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
