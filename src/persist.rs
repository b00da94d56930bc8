//! Persistence adapter
//!
//! The portable project document shared by explicit save/load and the
//! autosave store, plus the store abstraction itself. Autosave is
//! advisory: write failures are swallowed and never surface to the
//! user, while explicit load failures are reported and leave the
//! in-memory workflow untouched.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::workflow::{Step, WorkflowSession};

/// Fixed key under which the autosave document is stored.
pub const AUTOSAVE_KEY: &str = "batflow_autosave_v1";

/// The wire format for projects. Explicit saves stamp `createdAt`,
/// autosaves stamp `savedAt`; the documents are otherwise identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub steps: Vec<Step>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl ProjectDocument {
    /// Document for an explicit save or export.
    pub fn for_save(session: &WorkflowSession) -> Self {
        ProjectDocument {
            name: session.project_name().to_string(),
            steps: session.steps().to_vec(),
            created_at: Some(timestamp()),
            saved_at: None,
        }
    }

    /// Document for the autosave store.
    pub fn for_autosave(session: &WorkflowSession) -> Self {
        ProjectDocument {
            name: session.project_name().to_string(),
            steps: session.steps().to_vec(),
            created_at: None,
            saved_at: Some(timestamp()),
        }
    }

    /// Parse a document from JSON text. Missing `name` and `steps`
    /// fall back to their defaults; anything structurally malformed
    /// is a `ParseError`.
    pub fn parse(text: &str) -> Result<Self, EditorError> {
        serde_json::from_str(text).map_err(|e| EditorError::ParseError(e.to_string()))
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Key-value store backing autosave.
pub trait AutosaveStore {
    /// Value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AutosaveStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keeping one file per key inside a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Store under the user's config directory, with a local fallback
    /// when the platform does not expose one.
    pub fn default_location() -> Self {
        match dirs::config_dir() {
            Some(config_dir) => FileStore::new(config_dir.join("batflow")),
            None => FileStore::new(PathBuf::from(".batflow")),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl AutosaveStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

/// Write the autosave document for the session. Failures are
/// swallowed here so a failing store can never break the edit that
/// triggered the save.
pub fn autosave_write(store: &mut dyn AutosaveStore, session: &WorkflowSession) {
    let doc = ProjectDocument::for_autosave(session);
    if let Ok(text) = serde_json::to_string(&doc) {
        let _ = store.write(AUTOSAVE_KEY, &text);
    }
}

/// Read back the autosave document, if one is present and parseable.
pub fn autosave_read(store: &dyn AutosaveStore) -> Option<ProjectDocument> {
    let text = store.read(AUTOSAVE_KEY)?;
    ProjectDocument::parse(&text).ok()
}

/// Whether the store holds any autosave entry at all. Used at startup
/// to announce availability without applying the saved state.
pub fn autosave_present(store: &dyn AutosaveStore) -> bool {
    store.read(AUTOSAVE_KEY).is_some()
}
