//! Line renderer
//!
//! Pure functions turning steps into script text. Rendering is total:
//! a step whose command id is not in the catalog renders as an empty
//! line instead of failing, so stale documents still produce output.

use crate::catalog::CommandKind;
use crate::workflow::Step;

/// Parameter value for `key`, or "" when the step does not carry it.
fn param<'a>(step: &'a Step, key: &str) -> &'a str {
    step.params.get(key).map(String::as_str).unwrap_or("")
}

/// Parameter value for `key`, or `fallback` when missing or empty.
/// Fallbacks are literal text, compared by string emptiness only.
fn param_or<'a>(step: &'a Step, key: &str, fallback: &'a str) -> &'a str {
    match step.params.get(key) {
        Some(value) if !value.is_empty() => value,
        _ => fallback,
    }
}

/// Render one step as a single script line.
pub fn render_line(step: &Step) -> String {
    let kind = match step.kind() {
        Some(kind) => kind,
        None => return String::new(),
    };

    match kind {
        CommandKind::DisableEchoing => "@echo off".to_string(),
        CommandKind::Echo => format!("echo {}", param(step, "text")),
        CommandKind::Comment => format!("rem {}", param(step, "text")),
        CommandKind::PromptForInput => format!(
            "set /p {}={}",
            param_or(step, "name", "VAR"),
            param(step, "prompt")
        ),
        CommandKind::SetVariable => format!(
            "set {}={}",
            param_or(step, "name", "VAR"),
            param(step, "value")
        ),
        CommandKind::Conditional => format!(
            "if /I \"%{}%\"==\"{}\" {}",
            param(step, "name"),
            param(step, "val"),
            param(step, "cmd")
        ),
        CommandKind::ChoicePrompt => format!(
            "choice /C {} /M \"{}\"",
            param_or(step, "opts", "YN"),
            param(step, "prompt")
        ),
        CommandKind::Pause => "pause".to_string(),
        CommandKind::Copy => format!(
            "copy \"{}\" \"{}\"",
            param(step, "src"),
            param(step, "dst")
        ),
        CommandKind::Move => format!(
            "move \"{}\" \"{}\"",
            param(step, "src"),
            param(step, "dst")
        ),
        CommandKind::Delete => format!("del /f /q \"{}\"", param(step, "path")),
        CommandKind::MakeDirectory => format!("mkdir \"{}\"", param(step, "dir")),
        CommandKind::RemoveDirectoryRecursive => {
            format!("rmdir /s /q \"{}\"", param(step, "dir"))
        }
        CommandKind::StartProgram => format!("start \"\" \"{}\"", param(step, "target")),
        CommandKind::CallSubscript => format!("call \"{}\"", param(step, "file")),
        CommandKind::ExitWithCode => format!("exit /b {}", param_or(step, "code", "0")),
        CommandKind::SetTitle => format!("title {}", param(step, "text")),
        CommandKind::ClearScreen => "cls".to_string(),
        CommandKind::Ping => format!(
            "ping {} -n {}",
            param_or(step, "addr", "127.0.0.1"),
            param_or(step, "count", "4")
        ),
        CommandKind::RunShellCommand => {
            format!("powershell -command \"{}\"", param(step, "cmd"))
        }
    }
}

/// Render the full script: one line per step, CRLF between lines,
/// and a single trailing CRLF. CRLF is a requirement of the target
/// interpreter; the output must be byte-exact.
pub fn render_script(steps: &[Step]) -> String {
    let mut script = steps
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\r\n");
    script.push_str("\r\n");
    script
}
