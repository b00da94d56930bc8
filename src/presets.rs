//! Built-in workflow presets
//!
//! Small ready-made workflows used for onboarding and demos. Each
//! call builds a fresh step sequence, so loaded presets can be edited
//! freely without touching the template.

use crate::catalog::CommandKind;
use crate::workflow::Step;

/// A named workflow template.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub steps: Vec<Step>,
}

/// Keys of all built-in presets, in display order.
pub const PRESET_KEYS: &[&str] = &["hello-world", "echo-input", "copy-file", "ask-name"];

/// Build the preset for `key`, if one exists.
pub fn preset(key: &str) -> Option<Preset> {
    match key {
        "hello-world" => Some(Preset {
            name: "hello-world",
            steps: vec![
                Step::disable_echoing(),
                Step::with_params(CommandKind::Echo, &[("text", "Hello world!")]),
                Step::new(CommandKind::Pause),
            ],
        }),
        "echo-input" => Some(Preset {
            name: "echo-input",
            steps: vec![
                Step::disable_echoing(),
                Step::with_params(
                    CommandKind::PromptForInput,
                    &[("name", "TXT"), ("prompt", "Enter text:")],
                ),
                Step::with_params(CommandKind::Echo, &[("text", "%TXT%")]),
            ],
        }),
        "copy-file" => Some(Preset {
            name: "copy-file",
            steps: vec![
                Step::disable_echoing(),
                Step::with_params(
                    CommandKind::PromptForInput,
                    &[("name", "SRC"), ("prompt", "Source:")],
                ),
                Step::with_params(
                    CommandKind::PromptForInput,
                    &[("name", "DST"), ("prompt", "Destination:")],
                ),
                Step::with_params(CommandKind::Copy, &[("src", "%SRC%"), ("dst", "%DST%")]),
            ],
        }),
        "ask-name" => Some(Preset {
            name: "ask-name",
            steps: vec![
                Step::disable_echoing(),
                Step::with_params(
                    CommandKind::PromptForInput,
                    &[("name", "NAME"), ("prompt", "Your name?")],
                ),
                Step::with_params(CommandKind::Echo, &[("text", "Hello %NAME%!")]),
            ],
        }),
        _ => None,
    }
}
