//! # Export
//!
//! The downloadable artifact and the collaborator that offers it to the
//! user. How the file actually reaches the user (browser download, disk
//! write) is up to the [`ExportSink`] implementation.

use crate::compiler::{compile_to_html, CompileOptions};
use blockpage_model::Element;
use thiserror::Error;
use tracing::info;

pub const EXPORT_FILE_NAME: &str = "website.html";
pub const EXPORT_MIME_TYPE: &str = "text/html";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export rejected: {0}")]
    Rejected(String),
}

/// A file ready to be offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub mime_type: String,
    pub body: String,
}

impl Export {
    /// Compile `elements` into the export payload
    pub fn from_elements(elements: &[Element], options: CompileOptions) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            body: compile_to_html(elements, options),
        }
    }
}

/// Offers an export to the user
pub trait ExportSink {
    fn offer(&mut self, export: &Export) -> Result<(), ExportError>;
}

/// Keeps every offered export in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub exports: Vec<Export>,
}

impl ExportSink for MemorySink {
    fn offer(&mut self, export: &Export) -> Result<(), ExportError> {
        info!(file = %export.file_name, bytes = export.body.len(), "Recorded export");
        self.exports.push(export.clone());
        Ok(())
    }
}
