//! Interactive console editor
//!
//! A line-oriented frontend around the editor controller: reads
//! commands from stdin, translates them into editor intents, and lets
//! the controller redraw the step list after every change.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::CATALOG;
use crate::config::Config;
use crate::constants::{FORMAT_BOLD, FORMAT_CYAN, FORMAT_GRAY, FORMAT_RESET, HELP_TEMPLATE};
use crate::editor::{Editor, EditorIntent};
use crate::export::{ClipboardSink, DirectorySink};
use crate::notify::ConsoleNotifier;
use crate::persist::FileStore;
use crate::presets::PRESET_KEYS;
use crate::render::render_script;
use crate::view::{RenderSurface, WorkflowView};

/// Prints the step list after every change.
struct ConsoleSurface;

impl RenderSurface for ConsoleSurface {
    fn present(&mut self, view: &WorkflowView) {
        let name = if view.name.is_empty() {
            "(unnamed)"
        } else {
            &view.name
        };
        println!();
        println!(
            "{}{}{}  ({} steps)",
            FORMAT_BOLD, name, FORMAT_RESET, view.step_count
        );
        for step in &view.steps {
            let label = if step.label.is_empty() {
                step.id.as_str()
            } else {
                step.label
            };
            println!(
                "  {:>2}  {:<12} {}{}{}",
                step.index, label, FORMAT_GRAY, step.line, FORMAT_RESET
            );
        }
    }
}

/// Prints the script between cut marks for manual copying; a plain
/// console has no portable system clipboard.
struct TerminalClipboard;

impl ClipboardSink for TerminalClipboard {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        println!("----8<----");
        print!("{}", text);
        println!("---->8----");
        Ok(())
    }
}

/// Run the interactive editor until the user quits.
pub fn run(config: &Config, project: Option<&Path>) -> Result<()> {
    let store = match &config.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::default_location(),
    };
    let mut editor = Editor::new(
        Box::new(ConsoleSurface),
        Box::new(ConsoleNotifier),
        Box::new(store),
        Box::new(DirectorySink::new(&config.out_dir)),
        Box::new(TerminalClipboard),
    );

    match project {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            editor.apply(EditorIntent::LoadProjectFile(text));
        }
        None => editor.present(),
    }
    editor.announce_autosave();
    if config.autosave {
        editor.apply(EditorIntent::ToggleAutosave(true));
    }
    println!("{}Type `help` for commands.{}", FORMAT_GRAY, FORMAT_RESET);

    let stdin = io::stdin();
    loop {
        print!("batflow> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !process_line(&mut editor, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Translate one input line into editor actions. Returns false when
/// the user asked to quit.
fn process_line(editor: &mut Editor, line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return true;
    }

    match parts[0] {
        "quit" | "exit" => return false,
        "help" => {
            println!("{}", HELP_TEMPLATE);
        }
        "show" => {
            editor.present();
            print_script(editor);
        }
        "commands" => {
            for def in CATALOG {
                println!(
                    "  {:<28}{:<13}{}{}{}",
                    def.id.id(),
                    def.label,
                    FORMAT_GRAY,
                    def.desc,
                    FORMAT_RESET
                );
            }
        }
        "add" if parts.len() >= 2 => {
            editor.apply(EditorIntent::AddStep(parts[1].to_string()));
        }
        "rm" if parts.len() >= 2 => {
            if let Some(index) = parse_index(parts[1]) {
                editor.apply(EditorIntent::RemoveStep(index));
            }
        }
        "mv" if parts.len() >= 3 => {
            if let (Some(from), Some(to)) = (parse_index(parts[1]), parse_index(parts[2])) {
                editor.apply(EditorIntent::MoveStep(from, to));
            }
        }
        "set" if parts.len() >= 4 => {
            if let Some(index) = parse_index(parts[1]) {
                let value = parts[3..].join(" ");
                editor.apply(EditorIntent::SetParam(index, parts[2].to_string(), value));
            }
        }
        // Bare `name` clears the project name again
        "name" => {
            editor.set_project_name(parts[1..].join(" "));
        }
        "undo" => editor.apply(EditorIntent::Undo),
        "clear" => editor.apply(EditorIntent::Clear),
        "preset" if parts.len() >= 2 => {
            editor.apply(EditorIntent::LoadPreset(parts[1].to_string()));
        }
        "preset" => {
            println!("Presets:");
            for key in PRESET_KEYS {
                println!("  {}", key);
            }
        }
        "load" if parts.len() >= 2 => match fs::read_to_string(parts[1]) {
            Ok(text) => editor.apply(EditorIntent::LoadProjectFile(text)),
            Err(e) => println!("Cannot read {}: {}", parts[1], e),
        },
        "save" => editor.apply(EditorIntent::SaveProjectFile),
        "export" => editor.apply(EditorIntent::ExportScriptFile),
        "copy" => editor.apply(EditorIntent::CopyScriptToClipboard),
        "autosave" if parts.len() >= 2 => {
            let enabled = match parts[1] {
                "on" | "true" | "1" => true,
                "off" | "false" | "0" => false,
                _ => {
                    println!("Invalid value for autosave: {}", parts[1]);
                    return true;
                }
            };
            editor.apply(EditorIntent::ToggleAutosave(enabled));
        }
        "restore" => editor.apply(EditorIntent::RestoreAutosave),
        "add" | "rm" | "mv" | "set" | "load" | "autosave" => {
            println!("Missing arguments for {} (see `help`)", parts[0]);
        }
        _ => {
            println!("Unknown command: {}", parts[0]);
        }
    }

    true
}

fn print_script(editor: &Editor) {
    println!();
    let script = render_script(editor.session().steps());
    for line in script.lines() {
        println!("  {}{}{}", FORMAT_CYAN, line, FORMAT_RESET);
    }
}

fn parse_index(raw: &str) -> Option<usize> {
    match raw.parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("Not a number: {}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportSink;
    use crate::notify::{Notice, NotificationSink};
    use crate::persist::MemoryStore;

    struct NullSurface;

    impl RenderSurface for NullSurface {
        fn present(&mut self, _view: &WorkflowView) {}
    }

    struct NullNotifier;

    impl NotificationSink for NullNotifier {
        fn notify(&mut self, _notice: Notice) {}
    }

    struct NullExport;

    impl ExportSink for NullExport {
        fn deliver(&mut self, _file_name: &str, _contents: &str) -> io::Result<()> {
            Ok(())
        }
    }

    struct NullClipboard;

    impl ClipboardSink for NullClipboard {
        fn copy(&mut self, _text: &str) -> io::Result<()> {
            Ok(())
        }
    }

    fn editor() -> Editor {
        Editor::new(
            Box::new(NullSurface),
            Box::new(NullNotifier),
            Box::new(MemoryStore::new()),
            Box::new(NullExport),
            Box::new(NullClipboard),
        )
    }

    #[test]
    fn test_quit_and_exit_stop_the_loop() {
        let mut ed = editor();
        assert!(!process_line(&mut ed, "quit"));
        assert!(!process_line(&mut ed, "exit"));
    }

    #[test]
    fn test_blank_and_unknown_lines_keep_running() {
        let mut ed = editor();
        assert!(process_line(&mut ed, ""));
        assert!(process_line(&mut ed, "   "));
        assert!(process_line(&mut ed, "frobnicate"));
        assert_eq!(ed.session().step_count(), 1);
    }

    #[test]
    fn test_add_and_remove_steps() {
        let mut ed = editor();
        assert!(process_line(&mut ed, "add echo"));
        assert_eq!(ed.session().step_count(), 2);
        assert!(process_line(&mut ed, "rm 1"));
        assert_eq!(ed.session().step_count(), 1);
    }

    #[test]
    fn test_bad_index_is_rejected_before_dispatch() {
        let mut ed = editor();
        process_line(&mut ed, "add echo");
        process_line(&mut ed, "rm x");
        assert_eq!(ed.session().step_count(), 2);
    }

    #[test]
    fn test_set_joins_the_value_words() {
        let mut ed = editor();
        process_line(&mut ed, "add echo");
        process_line(&mut ed, "set 1 text Hello there");
        assert_eq!(
            ed.session().steps()[1].params.get("text").map(String::as_str),
            Some("Hello there")
        );
    }

    #[test]
    fn test_name_sets_and_clears_the_project_name() {
        let mut ed = editor();
        process_line(&mut ed, "name My Tool");
        assert_eq!(ed.session().project_name(), "My Tool");
        process_line(&mut ed, "name");
        assert_eq!(ed.session().project_name(), "");
    }

    #[test]
    fn test_preset_key_loads_a_template() {
        let mut ed = editor();
        process_line(&mut ed, "preset hello-world");
        assert_eq!(ed.session().step_count(), 3);
    }

    #[test]
    fn test_autosave_values_mirror_switch_words() {
        let mut ed = editor();
        process_line(&mut ed, "autosave on");
        assert!(ed.autosave_enabled());
        process_line(&mut ed, "autosave off");
        assert!(!ed.autosave_enabled());
        process_line(&mut ed, "autosave sideways");
        assert!(!ed.autosave_enabled());
    }
}
