//! Workflow session
//!
//! Owns the ordered step sequence, the project name, and the undo
//! history. All mutation happens through the methods here. Every
//! structural edit re-enforces the leading echo-suppression invariant
//! and then records a history snapshot, in that order, so snapshots
//! only ever hold well-formed sequences.

use crate::catalog::{self, CommandDef, CommandKind};
use crate::error::EditorError;
use crate::workflow::history::History;
use crate::workflow::types::Step;

pub struct WorkflowSession {
    steps: Vec<Step>,
    project_name: String,
    history: History,
}

impl WorkflowSession {
    /// New session holding the one-step baseline. No snapshot is
    /// recorded until the first mutation.
    pub fn new() -> Self {
        WorkflowSession {
            steps: vec![Step::disable_echoing()],
            project_name: String::new(),
            history: History::new(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Set the project name. Name edits are metadata only: they are
    /// not undoable and do not touch the history.
    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    /// Depth of the undo history, for status display.
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// Every script must start by suppressing command echo. Inserts
    /// the synthetic baseline step at index 0 if it is not there.
    fn enforce_leading_step(&mut self) {
        let leads = self
            .steps
            .first()
            .map(|step| step.kind() == Some(CommandKind::DisableEchoing))
            .unwrap_or(false);
        if !leads {
            self.steps.insert(0, Step::disable_echoing());
        }
    }

    fn commit(&mut self) {
        self.enforce_leading_step();
        self.history.snapshot(&self.steps);
    }

    /// Append a new step of the given command id, with all fields
    /// defaulted to empty string. Returns the catalog entry.
    pub fn add_step(&mut self, id: &str) -> Result<&'static CommandDef, EditorError> {
        let def = catalog::lookup(id)?;
        self.steps.push(Step::new(def.id));
        self.commit();
        Ok(def)
    }

    /// Remove the step at `index` and return it.
    pub fn remove_step(&mut self, index: usize) -> Result<Step, EditorError> {
        if index >= self.steps.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        let removed = self.steps.remove(index);
        self.commit();
        Ok(removed)
    }

    /// Move the step at `from` to position `to`. A no-op when the two
    /// are equal; `to` is clamped into the valid range rather than
    /// rejected, which keeps sloppy drag targets forgiving.
    pub fn move_step(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        if from == to {
            return Ok(());
        }
        let len = self.steps.len();
        if from >= len {
            return Err(EditorError::IndexOutOfRange { index: from, len });
        }
        let to = to.min(len - 1);
        let step = self.steps.remove(from);
        self.steps.insert(to, step);
        self.commit();
        Ok(())
    }

    /// Set one parameter value on the step at `index`. Field edits
    /// are high-frequency, so they deliberately do not record a
    /// history snapshot; only structural edits are undoable. Keys the
    /// schema does not declare are stored as given.
    pub fn set_param(&mut self, index: usize, key: &str, value: &str) -> Result<(), EditorError> {
        let len = self.steps.len();
        let step = self
            .steps
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })?;
        step.params.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Replace the sequence with the single baseline step.
    pub fn clear(&mut self) {
        self.steps = vec![Step::disable_echoing()];
        self.commit();
    }

    /// Wholesale replacement used by the preset, load and restore
    /// paths. Steps are taken as-is apart from invariant enforcement;
    /// unknown command ids degrade to empty rendered lines instead of
    /// failing the load.
    pub fn replace_all(&mut self, steps: Vec<Step>, name: impl Into<String>) {
        self.steps = steps;
        self.project_name = name.into();
        self.commit();
    }

    /// Revert the step sequence to the state before the last
    /// structural edit.
    pub fn undo(&mut self) -> Result<(), EditorError> {
        self.steps = self.history.undo()?;
        Ok(())
    }
}

impl Default for WorkflowSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CommandId;

    fn ids(session: &WorkflowSession) -> Vec<&str> {
        session.steps().iter().map(|s| s.command.as_str()).collect()
    }

    #[test]
    fn test_new_session_holds_baseline() {
        let session = WorkflowSession::new();
        assert_eq!(ids(&session), vec!["disable-echoing"]);
        assert_eq!(session.history_depth(), 0);
    }

    #[test]
    fn test_add_step_appends_defaulted_step() {
        let mut session = WorkflowSession::new();
        let def = session.add_step("echo").unwrap();
        assert_eq!(def.label, "echo");
        assert_eq!(ids(&session), vec!["disable-echoing", "echo"]);
        assert_eq!(session.steps()[1].params.get("text"), Some(&String::new()));
        assert_eq!(session.history_depth(), 1);
    }

    #[test]
    fn test_add_step_rejects_unknown_id() {
        let mut session = WorkflowSession::new();
        let err = session.add_step("frobnicate").unwrap_err();
        assert_eq!(err, EditorError::UnknownCommand("frobnicate".to_string()));
        assert_eq!(ids(&session), vec!["disable-echoing"]);
        assert_eq!(session.history_depth(), 0);
    }

    #[test]
    fn test_remove_step_returns_removed() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.add_step("pause").unwrap();

        let removed = session.remove_step(1).unwrap();
        assert_eq!(removed.command, CommandId::from("echo".to_string()));
        assert_eq!(ids(&session), vec!["disable-echoing", "pause"]);
    }

    #[test]
    fn test_remove_step_rejects_bad_index() {
        let mut session = WorkflowSession::new();
        let err = session.remove_step(5).unwrap_err();
        assert_eq!(err, EditorError::IndexOutOfRange { index: 5, len: 1 });
    }

    #[test]
    fn test_removing_only_step_self_heals() {
        let mut session = WorkflowSession::new();
        let removed = session.remove_step(0).unwrap();
        assert_eq!(removed.kind(), Some(CommandKind::DisableEchoing));
        assert_eq!(ids(&session), vec!["disable-echoing"]);
    }

    #[test]
    fn test_move_step_clamps_target() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.add_step("pause").unwrap();

        // Far-out target lands on the last slot
        session.move_step(0, 999).unwrap();
        assert_eq!(
            ids(&session),
            vec!["disable-echoing", "echo", "pause", "disable-echoing"]
        );
    }

    #[test]
    fn test_move_step_reorders_middle() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.add_step("pause").unwrap();
        session.add_step("clear-screen").unwrap();

        session.move_step(3, 1).unwrap();
        assert_eq!(
            ids(&session),
            vec!["disable-echoing", "clear-screen", "echo", "pause"]
        );
    }

    #[test]
    fn test_move_step_same_slot_is_noop() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        let depth = session.history_depth();

        session.move_step(1, 1).unwrap();
        assert_eq!(ids(&session), vec!["disable-echoing", "echo"]);
        // A no-op records no snapshot
        assert_eq!(session.history_depth(), depth);

        // Equal out-of-range indices are still a no-op, not an error
        session.move_step(9, 9).unwrap();
    }

    #[test]
    fn test_move_step_rejects_bad_source() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        let err = session.move_step(7, 0).unwrap_err();
        assert_eq!(err, EditorError::IndexOutOfRange { index: 7, len: 2 });
    }

    #[test]
    fn test_moving_leading_step_reinserts_baseline() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();

        session.move_step(0, 1).unwrap();
        assert_eq!(
            ids(&session),
            vec!["disable-echoing", "echo", "disable-echoing"]
        );
    }

    #[test]
    fn test_set_param_updates_without_snapshot() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        let depth = session.history_depth();

        session.set_param(1, "text", "Hello world!").unwrap();
        assert_eq!(
            session.steps()[1].params.get("text"),
            Some(&"Hello world!".to_string())
        );
        assert_eq!(session.history_depth(), depth);

        // Undeclared keys are stored as given
        session.set_param(1, "volume", "11").unwrap();
        assert_eq!(session.steps()[1].params.get("volume"), Some(&"11".to_string()));
    }

    #[test]
    fn test_set_param_rejects_bad_index() {
        let mut session = WorkflowSession::new();
        let err = session.set_param(3, "text", "x").unwrap_err();
        assert_eq!(err, EditorError::IndexOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn test_clear_resets_to_baseline() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.add_step("pause").unwrap();

        session.clear();
        assert_eq!(ids(&session), vec!["disable-echoing"]);
    }

    #[test]
    fn test_replace_all_enforces_leading_step() {
        let mut session = WorkflowSession::new();
        session.replace_all(vec![Step::new(CommandKind::Pause)], "demo");
        assert_eq!(ids(&session), vec!["disable-echoing", "pause"]);
        assert_eq!(session.project_name(), "demo");

        session.replace_all(Vec::new(), "");
        assert_eq!(ids(&session), vec!["disable-echoing"]);
    }

    #[test]
    fn test_replace_all_keeps_unknown_commands() {
        let mut session = WorkflowSession::new();
        let stray = Step {
            command: CommandId::Unknown("telnet".to_string()),
            params: Default::default(),
        };
        session.replace_all(vec![stray.clone()], "legacy");
        assert_eq!(ids(&session), vec!["disable-echoing", "telnet"]);
        assert_eq!(session.steps()[1], stray);
    }

    #[test]
    fn test_undo_fails_after_single_mutation() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();

        let err = session.undo().unwrap_err();
        assert_eq!(err, EditorError::NothingToUndo);
        assert_eq!(ids(&session), vec!["disable-echoing", "echo"]);
    }

    #[test]
    fn test_undo_restores_state_after_first_mutation() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.add_step("pause").unwrap();

        session.undo().unwrap();
        assert_eq!(ids(&session), vec!["disable-echoing", "echo"]);
    }

    #[test]
    fn test_undo_reverts_a_clear() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.add_step("pause").unwrap();
        session.clear();

        session.undo().unwrap();
        assert_eq!(ids(&session), vec!["disable-echoing", "echo", "pause"]);
    }

    #[test]
    fn test_undo_does_not_restore_name() {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.replace_all(vec![Step::new(CommandKind::Pause)], "loaded");

        session.undo().unwrap();
        assert_eq!(ids(&session), vec!["disable-echoing", "echo"]);
        // Snapshots cover the step sequence only, never the name
        assert_eq!(session.project_name(), "loaded");
    }

    #[test]
    fn test_set_project_name_records_no_history() {
        let mut session = WorkflowSession::new();
        session.set_project_name("installer");
        assert_eq!(session.project_name(), "installer");
        assert_eq!(session.history_depth(), 0);
    }
}
