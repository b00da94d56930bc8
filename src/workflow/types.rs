//! Type definitions for the workflow model
//!
//! A workflow is an ordered sequence of steps; each step carries a
//! command id from the catalog and the parameter values for that
//! command's fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{CommandId, CommandKind};

/// A single entry in the workflow.
///
/// `params` holds one value per field declared by the command's
/// schema. Missing keys render as empty string rather than failing,
/// and keys the schema does not declare are preserved as-is so that
/// hand-edited documents survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Wire id of the command this step renders as
    #[serde(rename = "cmdId", default)]
    pub command: CommandId,

    /// Parameter values keyed by field key
    #[serde(default)]
    pub params: IndexMap<String, String>,
}

impl Step {
    /// New step of the given kind with every declared field set to
    /// the empty string.
    pub fn new(kind: CommandKind) -> Self {
        let params = kind
            .definition()
            .fields
            .iter()
            .map(|field| (field.key.to_string(), String::new()))
            .collect();
        Step {
            command: CommandId::Known(kind),
            params,
        }
    }

    /// New step with the given parameter values filled in on top of
    /// the schema defaults.
    pub fn with_params(kind: CommandKind, values: &[(&str, &str)]) -> Self {
        let mut step = Step::new(kind);
        for (key, value) in values {
            step.params.insert(key.to_string(), value.to_string());
        }
        step
    }

    /// The baseline first step of every workflow: the parameterless
    /// echo-suppressing command.
    pub fn disable_echoing() -> Self {
        Step::new(CommandKind::DisableEchoing)
    }

    /// The catalog kind of this step, if its id is recognized.
    pub fn kind(&self) -> Option<CommandKind> {
        self.command.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_step_defaults_all_fields() {
        let step = Step::new(CommandKind::PromptForInput);
        assert_eq!(step.params.len(), 2);
        assert_eq!(step.params.get("name"), Some(&String::new()));
        assert_eq!(step.params.get("prompt"), Some(&String::new()));
    }

    #[test]
    fn test_with_params_overrides_defaults() {
        let step = Step::with_params(CommandKind::Echo, &[("text", "hi")]);
        assert_eq!(step.params.get("text"), Some(&"hi".to_string()));
    }

    #[test]
    fn test_step_serializes_with_wire_names() {
        let step = Step::with_params(CommandKind::Echo, &[("text", "hi")]);
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"cmdId":"echo","params":{"text":"hi"}}"#);
    }

    #[test]
    fn test_step_tolerates_missing_fields_on_load() {
        let step: Step = serde_json::from_str(r#"{"cmdId":"pause"}"#).unwrap();
        assert_eq!(step.kind(), Some(CommandKind::Pause));
        assert!(step.params.is_empty());

        // Entirely empty objects load as an unknown blank command
        let step: Step = serde_json::from_str("{}").unwrap();
        assert_eq!(step.kind(), None);
        assert_eq!(step.command.as_str(), "");
    }

    #[test]
    fn test_step_ignores_foreign_keys_on_load() {
        let step: Step =
            serde_json::from_str(r#"{"type":"command","cmdId":"clear-screen","params":{}}"#)
                .unwrap();
        assert_eq!(step.kind(), Some(CommandKind::ClearScreen));
    }

    #[test]
    fn test_unknown_command_survives_round_trip() {
        let step: Step =
            serde_json::from_str(r#"{"cmdId":"telnet","params":{"host":"example.com"}}"#).unwrap();
        assert_eq!(step.kind(), None);
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"cmdId":"telnet","params":{"host":"example.com"}}"#);
    }
}
