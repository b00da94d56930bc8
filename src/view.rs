//! View payloads for rendering surfaces
//!
//! After every model change the editor hands the surface a full
//! redraw payload: each step with its resolved catalog metadata and
//! rendered line, plus the whole script text. Surfaces draw from this
//! snapshot and never reach into the session directly.

use indexmap::IndexMap;

use crate::catalog::FieldDef;
use crate::render;
use crate::workflow::WorkflowSession;

/// One step as the surface sees it. Steps with unrecognized command
/// ids get empty metadata and an empty rendered line.
#[derive(Debug, Clone)]
pub struct StepView {
    pub index: usize,
    pub id: String,
    pub label: &'static str,
    pub desc: &'static str,
    pub fields: &'static [FieldDef],
    pub params: IndexMap<String, String>,
    pub line: String,
}

/// Full redraw payload.
#[derive(Debug, Clone)]
pub struct WorkflowView {
    pub name: String,
    pub steps: Vec<StepView>,
    pub script: String,
    pub step_count: usize,
}

/// Build the redraw payload for the current session state.
pub fn build_view(session: &WorkflowSession) -> WorkflowView {
    let steps = session
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let (label, desc, fields): (&'static str, &'static str, &'static [FieldDef]) =
                match step.kind() {
                    Some(kind) => {
                        let def = kind.definition();
                        (def.label, def.desc, def.fields)
                    }
                    None => ("", "", &[]),
                };
            StepView {
                index,
                id: step.command.as_str().to_string(),
                label,
                desc,
                fields,
                params: step.params.clone(),
                line: render::render_line(step),
            }
        })
        .collect();

    WorkflowView {
        name: session.project_name().to_string(),
        steps,
        script: render::render_script(session.steps()),
        step_count: session.step_count(),
    }
}

/// Displays the workflow. Implementations receive the full payload
/// after every model change.
pub trait RenderSurface {
    fn present(&mut self, view: &WorkflowView);
}
