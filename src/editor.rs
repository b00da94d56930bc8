//! Editor controller
//!
//! Wires the workflow session to its collaborators: the rendering
//! surface, the notification sink, the autosave store, the export
//! sink and the clipboard. User intents come in through `apply`;
//! every state change flows back out as a fresh view payload plus a
//! notification where the outcome deserves one.

use crate::error::EditorError;
use crate::export::{self, ClipboardSink, ExportSink};
use crate::notify::{Notice, NotificationSink};
use crate::persist::{self, AutosaveStore};
use crate::presets;
use crate::view::{self, RenderSurface};
use crate::workflow::WorkflowSession;

/// User intents reported by a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Append a step of the given command id
    AddStep(String),
    /// Remove the step at an index
    RemoveStep(usize),
    /// Move a step from one index to another
    MoveStep(usize, usize),
    /// Set one parameter value on a step
    SetParam(usize, String, String),
    /// Revert the last structural change
    Undo,
    /// Reset to the one-step baseline
    Clear,
    /// Replace the workflow with a named preset
    LoadPreset(String),
    /// Replace the workflow with a parsed project document
    LoadProjectFile(String),
    /// Write the project JSON to the export sink
    SaveProjectFile,
    /// Write the rendered script to the export sink
    ExportScriptFile,
    /// Hand the rendered script to the clipboard sink
    CopyScriptToClipboard,
    /// Turn autosave on or off
    ToggleAutosave(bool),
    /// Replace the workflow with the autosaved state
    RestoreAutosave,
}

pub struct Editor {
    session: WorkflowSession,
    surface: Box<dyn RenderSurface>,
    notifier: Box<dyn NotificationSink>,
    store: Box<dyn AutosaveStore>,
    exports: Box<dyn ExportSink>,
    clipboard: Box<dyn ClipboardSink>,
    autosave_enabled: bool,
}

impl Editor {
    pub fn new(
        surface: Box<dyn RenderSurface>,
        notifier: Box<dyn NotificationSink>,
        store: Box<dyn AutosaveStore>,
        exports: Box<dyn ExportSink>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Editor {
            session: WorkflowSession::new(),
            surface,
            notifier,
            store,
            exports,
            clipboard,
            autosave_enabled: false,
        }
    }

    pub fn session(&self) -> &WorkflowSession {
        &self.session
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave_enabled
    }

    /// Apply one user intent.
    pub fn apply(&mut self, intent: EditorIntent) {
        match intent {
            EditorIntent::AddStep(id) => self.add_step(&id),
            EditorIntent::RemoveStep(index) => self.remove_step(index),
            EditorIntent::MoveStep(from, to) => self.move_step(from, to),
            EditorIntent::SetParam(index, key, value) => self.set_param(index, &key, &value),
            EditorIntent::Undo => self.undo(),
            EditorIntent::Clear => self.clear(),
            EditorIntent::LoadPreset(key) => self.load_preset(&key),
            EditorIntent::LoadProjectFile(text) => self.load_project(&text),
            EditorIntent::SaveProjectFile => self.save_project(),
            EditorIntent::ExportScriptFile => self.export_script(),
            EditorIntent::CopyScriptToClipboard => self.copy_script(),
            EditorIntent::ToggleAutosave(enabled) => self.toggle_autosave(enabled),
            EditorIntent::RestoreAutosave => self.restore_autosave(),
        }
    }

    /// Push the current state to the rendering surface.
    pub fn present(&mut self) {
        let view = view::build_view(&self.session);
        self.surface.present(&view);
    }

    /// Announce a pre-existing autosave at startup. The saved state
    /// is only applied when the user asks for it.
    pub fn announce_autosave(&mut self) {
        if persist::autosave_present(self.store.as_ref()) {
            self.notifier
                .notify(Notice::info("Autosave found. Restore to load it."));
        }
    }

    /// Set the project name and redraw. Name edits carry no
    /// notification and are not undoable.
    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.session.set_project_name(name);
        self.present();
    }

    /// Redraw and, when autosave is on, persist the working state.
    fn refresh(&mut self) {
        self.present();
        if self.autosave_enabled {
            persist::autosave_write(self.store.as_mut(), &self.session);
        }
    }

    fn report(&mut self, err: EditorError) {
        let notice = match &err {
            EditorError::ParseError(_) => Notice::error(err.to_string()),
            _ => Notice::warn(err.to_string()),
        };
        self.notifier.notify(notice);
    }

    fn add_step(&mut self, id: &str) {
        match self.session.add_step(id) {
            Ok(def) => {
                let label = def.label;
                self.refresh();
                self.notifier.notify(Notice::info(format!("{} added.", label)));
            }
            Err(err) => self.report(err),
        }
    }

    fn remove_step(&mut self, index: usize) {
        match self.session.remove_step(index) {
            Ok(removed) => {
                self.refresh();
                self.notifier
                    .notify(Notice::info(format!("Removed: {}", removed.command)));
            }
            Err(err) => self.report(err),
        }
    }

    fn move_step(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        match self.session.move_step(from, to) {
            Ok(()) => self.refresh(),
            Err(err) => self.report(err),
        }
    }

    fn set_param(&mut self, index: usize, key: &str, value: &str) {
        match self.session.set_param(index, key, value) {
            // Field edits redraw the preview but are never autosaved
            // on their own; the next structural change picks them up.
            Ok(()) => self.present(),
            Err(err) => self.report(err),
        }
    }

    fn undo(&mut self) {
        match self.session.undo() {
            Ok(()) => {
                self.refresh();
                self.notifier.notify(Notice::info("Undid last action."));
            }
            Err(EditorError::NothingToUndo) => {
                self.notifier.notify(Notice::info("Nothing to undo."));
            }
            Err(err) => self.report(err),
        }
    }

    fn clear(&mut self) {
        self.session.clear();
        self.refresh();
        self.notifier.notify(Notice::info("Workflow cleared"));
    }

    fn load_preset(&mut self, key: &str) {
        match presets::preset(key) {
            Some(preset) => {
                self.session.replace_all(preset.steps, preset.name);
                self.refresh();
                self.notifier
                    .notify(Notice::success(format!("Preset \"{}\" loaded", preset.name)));
            }
            None => {
                self.notifier.notify(Notice::info("Pick a preset first"));
            }
        }
    }

    fn load_project(&mut self, text: &str) {
        match persist::ProjectDocument::parse(text) {
            Ok(doc) => {
                self.session.replace_all(doc.steps, doc.name);
                self.refresh();
                self.notifier.notify(Notice::success("Project loaded"));
            }
            // Parse failures leave the in-memory workflow untouched
            Err(_) => {
                self.notifier.notify(Notice::error("Failed to load JSON"));
            }
        }
    }

    fn save_project(&mut self) {
        match export::save_project(&self.session, self.exports.as_mut()) {
            Ok(file_name) => {
                self.notifier
                    .notify(Notice::success(format!("Saved {}", file_name)));
            }
            Err(err) => {
                self.notifier
                    .notify(Notice::error(format!("Save failed: {}", err)));
            }
        }
    }

    fn export_script(&mut self) {
        match export::export_script(&self.session, self.exports.as_mut()) {
            Ok(file_name) => {
                self.notifier
                    .notify(Notice::success(format!("Exported {}", file_name)));
            }
            Err(err) => {
                self.notifier
                    .notify(Notice::error(format!("Export failed: {}", err)));
            }
        }
    }

    fn copy_script(&mut self) {
        let script = crate::render::render_script(self.session.steps());
        match self.clipboard.copy(&script) {
            Ok(()) => {
                self.notifier.notify(Notice::success("Copied to clipboard"));
            }
            Err(_) => {
                self.notifier.notify(Notice::error("Clipboard failed"));
            }
        }
    }

    fn toggle_autosave(&mut self, enabled: bool) {
        self.autosave_enabled = enabled;
        if enabled {
            persist::autosave_write(self.store.as_mut(), &self.session);
            self.notifier.notify(Notice::info("Autosave enabled"));
        } else {
            self.notifier.notify(Notice::info("Autosave disabled"));
        }
    }

    fn restore_autosave(&mut self) {
        match persist::autosave_read(self.store.as_ref()) {
            Some(doc) => {
                self.session.replace_all(doc.steps, doc.name);
                self.refresh();
                self.notifier.notify(Notice::info("Autosave restored"));
            }
            None => {
                self.notifier.notify(Notice::warn("No autosave found."));
            }
        }
    }
}
