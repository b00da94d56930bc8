//! Static command catalog
//!
//! The fixed set of command kinds a workflow step can carry, with the
//! display metadata and parameter schema for each. The catalog is
//! hand-authored and immutable for the process lifetime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// One named parameter slot in a command's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Key under which the value is stored in a step's params
    pub key: &'static str,
    /// Display label for the field
    pub label: &'static str,
}

/// The closed set of command kinds the renderer knows how to format.
///
/// Variants are declared in palette order; `CATALOG` must keep the
/// same order so `definition` can index by discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    DisableEchoing,
    Echo,
    Comment,
    PromptForInput,
    SetVariable,
    Conditional,
    ChoicePrompt,
    Pause,
    Copy,
    Move,
    Delete,
    MakeDirectory,
    RemoveDirectoryRecursive,
    StartProgram,
    CallSubscript,
    ExitWithCode,
    SetTitle,
    ClearScreen,
    Ping,
    RunShellCommand,
}

impl CommandKind {
    /// Stable wire id used in persisted documents and user commands.
    pub fn id(&self) -> &'static str {
        match self {
            CommandKind::DisableEchoing => "disable-echoing",
            CommandKind::Echo => "echo",
            CommandKind::Comment => "comment",
            CommandKind::PromptForInput => "prompt-for-input",
            CommandKind::SetVariable => "set-variable",
            CommandKind::Conditional => "conditional",
            CommandKind::ChoicePrompt => "choice-prompt",
            CommandKind::Pause => "pause",
            CommandKind::Copy => "copy",
            CommandKind::Move => "move",
            CommandKind::Delete => "delete",
            CommandKind::MakeDirectory => "make-directory",
            CommandKind::RemoveDirectoryRecursive => "remove-directory-recursive",
            CommandKind::StartProgram => "start-program",
            CommandKind::CallSubscript => "call-subscript",
            CommandKind::ExitWithCode => "exit-with-code",
            CommandKind::SetTitle => "set-title",
            CommandKind::ClearScreen => "clear-screen",
            CommandKind::Ping => "ping",
            CommandKind::RunShellCommand => "run-shell-command",
        }
    }

    /// Resolve a wire id back to a command kind.
    pub fn from_id(id: &str) -> Option<CommandKind> {
        match id {
            "disable-echoing" => Some(CommandKind::DisableEchoing),
            "echo" => Some(CommandKind::Echo),
            "comment" => Some(CommandKind::Comment),
            "prompt-for-input" => Some(CommandKind::PromptForInput),
            "set-variable" => Some(CommandKind::SetVariable),
            "conditional" => Some(CommandKind::Conditional),
            "choice-prompt" => Some(CommandKind::ChoicePrompt),
            "pause" => Some(CommandKind::Pause),
            "copy" => Some(CommandKind::Copy),
            "move" => Some(CommandKind::Move),
            "delete" => Some(CommandKind::Delete),
            "make-directory" => Some(CommandKind::MakeDirectory),
            "remove-directory-recursive" => Some(CommandKind::RemoveDirectoryRecursive),
            "start-program" => Some(CommandKind::StartProgram),
            "call-subscript" => Some(CommandKind::CallSubscript),
            "exit-with-code" => Some(CommandKind::ExitWithCode),
            "set-title" => Some(CommandKind::SetTitle),
            "clear-screen" => Some(CommandKind::ClearScreen),
            "ping" => Some(CommandKind::Ping),
            "run-shell-command" => Some(CommandKind::RunShellCommand),
            _ => None,
        }
    }

    /// Catalog entry for this kind.
    pub fn definition(&self) -> &'static CommandDef {
        // CATALOG is declared in discriminant order
        &CATALOG[*self as usize]
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A step's command reference as stored on the wire.
///
/// Persisted documents may carry ids the catalog does not know
/// (legacy or hand-edited files); those are preserved verbatim and
/// render as empty lines instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommandId {
    Known(CommandKind),
    Unknown(String),
}

impl CommandId {
    /// The catalog kind, if this id is recognized.
    pub fn kind(&self) -> Option<CommandKind> {
        match self {
            CommandId::Known(kind) => Some(*kind),
            CommandId::Unknown(_) => None,
        }
    }

    /// Wire form of the id.
    pub fn as_str(&self) -> &str {
        match self {
            CommandId::Known(kind) => kind.id(),
            CommandId::Unknown(id) => id,
        }
    }
}

impl From<String> for CommandId {
    fn from(id: String) -> Self {
        match CommandKind::from_id(&id) {
            Some(kind) => CommandId::Known(kind),
            None => CommandId::Unknown(id),
        }
    }
}

impl From<CommandId> for String {
    fn from(id: CommandId) -> Self {
        id.as_str().to_string()
    }
}

impl From<CommandKind> for CommandId {
    fn from(kind: CommandKind) -> Self {
        CommandId::Known(kind)
    }
}

impl Default for CommandId {
    fn default() -> Self {
        CommandId::Unknown(String::new())
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor for one command kind: display metadata plus the
/// ordered parameter schema that drives form generation and
/// parameter defaulting when a step is created.
#[derive(Debug)]
pub struct CommandDef {
    pub id: CommandKind,
    pub label: &'static str,
    pub desc: &'static str,
    pub fields: &'static [FieldDef],
}

/// The full catalog, in palette order.
pub const CATALOG: &[CommandDef] = &[
    CommandDef {
        id: CommandKind::DisableEchoing,
        label: "@echo off",
        desc: "Disable echoing",
        fields: &[],
    },
    CommandDef {
        id: CommandKind::Echo,
        label: "echo",
        desc: "Print text",
        fields: &[FieldDef { key: "text", label: "Text" }],
    },
    CommandDef {
        id: CommandKind::Comment,
        label: "rem",
        desc: "Comment",
        fields: &[FieldDef { key: "text", label: "Comment" }],
    },
    CommandDef {
        id: CommandKind::PromptForInput,
        label: "set /p",
        desc: "Prompt user",
        fields: &[
            FieldDef { key: "name", label: "Variable" },
            FieldDef { key: "prompt", label: "Prompt" },
        ],
    },
    CommandDef {
        id: CommandKind::SetVariable,
        label: "set VAR=",
        desc: "Set variable",
        fields: &[
            FieldDef { key: "name", label: "Name" },
            FieldDef { key: "value", label: "Value" },
        ],
    },
    CommandDef {
        id: CommandKind::Conditional,
        label: "if /I",
        desc: "Comparison",
        fields: &[
            FieldDef { key: "name", label: "Variable" },
            FieldDef { key: "val", label: "Value" },
            FieldDef { key: "cmd", label: "Then command" },
        ],
    },
    CommandDef {
        id: CommandKind::ChoicePrompt,
        label: "choice",
        desc: "Prompt with options",
        fields: &[
            FieldDef { key: "opts", label: "Options" },
            FieldDef { key: "prompt", label: "Prompt" },
        ],
    },
    CommandDef {
        id: CommandKind::Pause,
        label: "pause",
        desc: "Pause script",
        fields: &[],
    },
    CommandDef {
        id: CommandKind::Copy,
        label: "copy",
        desc: "Copy file",
        fields: &[
            FieldDef { key: "src", label: "Source" },
            FieldDef { key: "dst", label: "Destination" },
        ],
    },
    CommandDef {
        id: CommandKind::Move,
        label: "move",
        desc: "Move file",
        fields: &[
            FieldDef { key: "src", label: "Source" },
            FieldDef { key: "dst", label: "Destination" },
        ],
    },
    CommandDef {
        id: CommandKind::Delete,
        label: "del",
        desc: "Delete file",
        fields: &[FieldDef { key: "path", label: "Path" }],
    },
    CommandDef {
        id: CommandKind::MakeDirectory,
        label: "mkdir",
        desc: "Make directory",
        fields: &[FieldDef { key: "dir", label: "Directory" }],
    },
    CommandDef {
        id: CommandKind::RemoveDirectoryRecursive,
        label: "rmdir /s /q",
        desc: "Remove directory",
        fields: &[FieldDef { key: "dir", label: "Directory" }],
    },
    CommandDef {
        id: CommandKind::StartProgram,
        label: "start",
        desc: "Start program/URL",
        fields: &[FieldDef { key: "target", label: "Target" }],
    },
    CommandDef {
        id: CommandKind::CallSubscript,
        label: "call",
        desc: "Call another .bat",
        fields: &[FieldDef { key: "file", label: "File" }],
    },
    CommandDef {
        id: CommandKind::ExitWithCode,
        label: "exit /b",
        desc: "Exit script",
        fields: &[FieldDef { key: "code", label: "Exit code" }],
    },
    CommandDef {
        id: CommandKind::SetTitle,
        label: "title",
        desc: "Set console title",
        fields: &[FieldDef { key: "text", label: "Title" }],
    },
    CommandDef {
        id: CommandKind::ClearScreen,
        label: "cls",
        desc: "Clear screen",
        fields: &[],
    },
    CommandDef {
        id: CommandKind::Ping,
        label: "ping",
        desc: "Ping address",
        fields: &[
            FieldDef { key: "addr", label: "Address" },
            FieldDef { key: "count", label: "Count" },
        ],
    },
    CommandDef {
        id: CommandKind::RunShellCommand,
        label: "powershell",
        desc: "PowerShell command",
        fields: &[FieldDef { key: "cmd", label: "Command" }],
    },
];

/// Look up a command definition by wire id.
pub fn lookup(id: &str) -> Result<&'static CommandDef, EditorError> {
    CommandKind::from_id(id)
        .map(|kind| kind.definition())
        .ok_or_else(|| EditorError::UnknownCommand(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_discriminants() {
        for (i, def) in CATALOG.iter().enumerate() {
            assert_eq!(def.id as usize, i, "catalog entry {} out of order", def.id);
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for def in CATALOG {
            assert_eq!(CommandKind::from_id(def.id.id()), Some(def.id));
        }
    }

    #[test]
    fn test_catalog_has_twenty_commands() {
        assert_eq!(CATALOG.len(), 20);
    }

    #[test]
    fn test_lookup_known() {
        let def = lookup("echo").unwrap();
        assert_eq!(def.id, CommandKind::Echo);
        assert_eq!(def.label, "echo");
        assert_eq!(def.fields.len(), 1);
        assert_eq!(def.fields[0].key, "text");
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("telnet").unwrap_err();
        assert_eq!(err, EditorError::UnknownCommand("telnet".to_string()));
    }

    #[test]
    fn test_display_labels_do_not_resolve_as_ids() {
        // Labels and wire ids are separate namespaces; only the
        // kebab-case ids resolve
        assert_eq!(CommandKind::from_id("cls"), None);
        assert_eq!(CommandKind::from_id("set /p"), None);
        assert_eq!(CommandKind::from_id("@echo off"), None);
        assert!(lookup("cls").is_err());
    }

    #[test]
    fn test_command_id_preserves_unknown() {
        let id = CommandId::from("frobnicate".to_string());
        assert_eq!(id, CommandId::Unknown("frobnicate".to_string()));
        assert_eq!(id.as_str(), "frobnicate");
        assert_eq!(id.kind(), None);
    }

    #[test]
    fn test_command_id_resolves_known() {
        let id = CommandId::from("disable-echoing".to_string());
        assert_eq!(id.kind(), Some(CommandKind::DisableEchoing));
        assert_eq!(String::from(id), "disable-echoing");
    }
}
