//! Export pipeline
//!
//! Produces the two downloadable artifacts, the rendered .bat script
//! and the pretty-printed project JSON, and hands each to an external
//! sink. File names derive from the project name with literal
//! defaults when the name is empty.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::persist::ProjectDocument;
use crate::render;
use crate::workflow::WorkflowSession;

/// Receives a finished artifact. The concrete transport, be it a
/// browser download, a filesystem write or a test capture, is the
/// implementation's concern.
pub trait ExportSink {
    fn deliver(&mut self, file_name: &str, contents: &str) -> io::Result<()>;
}

/// Receives script text bound for the system clipboard.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Script file name derived from the project name.
pub fn script_file_name(project_name: &str) -> String {
    if project_name.is_empty() {
        "script.bat".to_string()
    } else {
        format!("{}.bat", project_name)
    }
}

/// Project document file name derived from the project name.
pub fn project_file_name(project_name: &str) -> String {
    if project_name.is_empty() {
        "project.json".to_string()
    } else {
        format!("{}.json", project_name)
    }
}

/// Render the full script and deliver it. Returns the file name used.
pub fn export_script(
    session: &WorkflowSession,
    sink: &mut dyn ExportSink,
) -> io::Result<String> {
    let file_name = script_file_name(session.project_name());
    let script = render::render_script(session.steps());
    sink.deliver(&file_name, &script)?;
    Ok(file_name)
}

/// Serialize the project document and deliver it. Returns the file
/// name used.
pub fn save_project(
    session: &WorkflowSession,
    sink: &mut dyn ExportSink,
) -> io::Result<String> {
    let file_name = project_file_name(session.project_name());
    let doc = ProjectDocument::for_save(session);
    let text = serde_json::to_string_pretty(&doc)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    sink.deliver(&file_name, &text)?;
    Ok(file_name)
}

/// Writes artifacts into a directory on the local filesystem.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(file_name), contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CaptureSink {
        artifacts: Vec<(String, String)>,
    }

    impl ExportSink for CaptureSink {
        fn deliver(&mut self, file_name: &str, contents: &str) -> io::Result<()> {
            self.artifacts.push((file_name.to_string(), contents.to_string()));
            Ok(())
        }
    }

    fn sample_session() -> WorkflowSession {
        let mut session = WorkflowSession::new();
        session.add_step("echo").unwrap();
        session.set_param(1, "text", "Hello world!").unwrap();
        session.add_step("pause").unwrap();
        session
    }

    #[test]
    fn test_file_names_fall_back_when_unnamed() {
        assert_eq!(script_file_name(""), "script.bat");
        assert_eq!(project_file_name(""), "project.json");
        assert_eq!(script_file_name("greeter"), "greeter.bat");
        assert_eq!(project_file_name("greeter"), "greeter.json");
    }

    #[test]
    fn test_export_script_delivers_exact_bytes() {
        let session = sample_session();
        let mut sink = CaptureSink::default();

        let file_name = export_script(&session, &mut sink).unwrap();
        assert_eq!(file_name, "script.bat");
        assert_eq!(
            sink.artifacts,
            vec![(
                "script.bat".to_string(),
                "@echo off\r\necho Hello world!\r\npause\r\n".to_string()
            )]
        );
    }

    #[test]
    fn test_save_project_delivers_parseable_document() {
        let mut session = sample_session();
        session.set_project_name("greeter");
        let mut sink = CaptureSink::default();

        let file_name = save_project(&session, &mut sink).unwrap();
        assert_eq!(file_name, "greeter.json");

        let (_, contents) = &sink.artifacts[0];
        let doc = ProjectDocument::parse(contents).unwrap();
        assert_eq!(doc.name, "greeter");
        assert_eq!(doc.steps, session.steps().to_vec());
    }

    #[test]
    fn test_directory_sink_writes_files() {
        let dir = std::env::temp_dir().join(format!(
            "batflow-export-{}-{}",
            std::process::id(),
            line!()
        ));
        let mut sink = DirectorySink::new(&dir);
        sink.deliver("a.bat", "@echo off\r\n").unwrap();

        assert_eq!(fs::read_to_string(dir.join("a.bat")).unwrap(), "@echo off\r\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
