//! batflow - Interactive Batch Script Builder
//!
//! This application provides a console interface for assembling
//! Windows batch scripts from a step catalog, supporting undo,
//! starter presets, autosave and JSON project files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use batflow::catalog::CATALOG;
use batflow::cli::{cli_to_config, Cli, Commands};
use batflow::config::Config;
use batflow::export::{self, DirectorySink};
use batflow::persist::ProjectDocument;
use batflow::presets::{preset, PRESET_KEYS};
use batflow::render::render_script;
use batflow::repl;
use batflow::workflow::WorkflowSession;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli_to_config(&cli);

    match &cli.command {
        Some(Commands::Render { project }) => render_project(project),
        Some(Commands::Export { project }) => export_project(project, &config),
        Some(Commands::Preset { key }) => show_preset(key.as_deref()),
        Some(Commands::Catalog) => {
            list_catalog();
            Ok(())
        }
        None => repl::run(&config, cli.project.as_deref()),
    }
}

/// Load a project file into a fresh editing session.
fn load_session(path: &Path) -> Result<WorkflowSession> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let doc = ProjectDocument::parse(&text)?;
    let mut session = WorkflowSession::new();
    session.replace_all(doc.steps, doc.name);
    Ok(session)
}

fn render_project(path: &Path) -> Result<()> {
    let session = load_session(path)?;
    print!("{}", render_script(session.steps()));
    Ok(())
}

fn export_project(path: &Path, config: &Config) -> Result<()> {
    let session = load_session(path)?;
    let mut sink = DirectorySink::new(&config.out_dir);
    let file_name = export::export_script(&session, &mut sink)?;
    println!("Exported {}", file_name);
    Ok(())
}

fn show_preset(key: Option<&str>) -> Result<()> {
    match key {
        Some(key) => match preset(key) {
            Some(found) => {
                print!("{}", render_script(&found.steps));
                Ok(())
            }
            None => bail!("unknown preset: {}", key),
        },
        None => {
            for key in PRESET_KEYS {
                println!("{}", key);
            }
            Ok(())
        }
    }
}

fn list_catalog() {
    for def in CATALOG {
        println!("{:<28}{:<13}{}", def.id.id(), def.label, def.desc);
    }
}
