//! Command-line interface definition and argument parsing
//!
//! This module uses clap to define and parse command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Command-line arguments for batflow
#[derive(Parser, Debug)]
#[command(
    name = "batflow",
    about = "Assemble Windows batch scripts from a catalog of command steps",
    version,
    author,
    long_about = "batflow is an interactive editor for building Windows batch scripts step by step, with a live preview, undo history, starter presets, autosave and JSON project files."
)]
pub struct Cli {
    /// Project JSON file to open in the editor
    pub project: Option<PathBuf>,

    /// Directory for autosave data (defaults to the user config directory)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory saved projects and exported scripts are written into
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Start with autosave enabled
    #[arg(long)]
    pub autosave: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for batflow
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the rendered script for a project file
    Render {
        /// Project JSON file to render
        project: PathBuf,
    },

    /// Write the .bat script for a project file into the output directory
    Export {
        /// Project JSON file to export
        project: PathBuf,
    },

    /// List the starter presets, or print one as a rendered script
    Preset {
        /// Preset key; lists all presets when omitted
        key: Option<String>,
    },

    /// List the command catalog
    Catalog,
}

/// Convert the Cli struct to the application's Config
pub fn cli_to_config(cli: &Cli) -> Config {
    let mut config = Config::new();
    config.data_dir = cli.data_dir.clone();
    config.out_dir = cli.out_dir.clone();
    config.autosave = cli.autosave;
    config
}
