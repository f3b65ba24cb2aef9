//! Export sinks for the command line: write to disk or print to stdout.

use blockpage_compiler_html::{Export, ExportError, ExportSink};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Writes the export into a directory under its file name
pub struct FileSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            out_dir,
            written: Vec::new(),
        }
    }

    /// Paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for FileSink {
    fn offer(&mut self, export: &Export) -> Result<(), ExportError> {
        fs::create_dir_all(&self.out_dir)?;

        let path = self.out_dir.join(&export.file_name);
        fs::write(&path, &export.body)?;

        info!(path = %path.display(), bytes = export.body.len(), "Wrote export");
        self.written.push(path);
        Ok(())
    }
}

/// Prints the export body to stdout
pub struct StdoutSink;

impl ExportSink for StdoutSink {
    fn offer(&mut self, export: &Export) -> Result<(), ExportError> {
        write_body(&mut std::io::stdout().lock(), export)
    }
}

/// Body bytes only, with no trailing newline
fn write_body<W: Write>(out: &mut W, export: &Export) -> Result<(), ExportError> {
    out.write_all(export.body.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpage_compiler_html::CompileOptions;
    use blockpage_model::{Element, ElementKind};

    #[test]
    fn test_file_sink_writes_website_html() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("dist");
        let mut sink = FileSink::new(out_dir.clone());

        let elements = vec![Element::new(ElementKind::Heading, None)];
        sink.offer(&Export::from_elements(&elements, CompileOptions::default()))
            .unwrap();

        let path = out_dir.join("website.html");
        assert_eq!(sink.written(), &[path.clone()]);
        assert_eq!(fs::read_to_string(path).unwrap(), "<h1>Sample H1</h1>");
    }

    #[test]
    fn test_stdout_body_is_exact() {
        let elements = vec![Element::new(ElementKind::Paragraph, None)];
        let export = Export::from_elements(&elements, CompileOptions::default());

        let mut out = Vec::new();
        write_body(&mut out, &export).unwrap();

        assert_eq!(out, b"<p>Sample Paragraph</p>");
    }
}
