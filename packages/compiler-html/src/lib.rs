//! # Blockpage HTML Compiler
//!
//! Turns the element list into the exported `website.html` payload, and
//! renders the live canvas preview shown while editing.

mod compiler;
pub mod export;
mod preview;


pub use compiler::{compile_to_html, serialize, CompileOptions};
pub use export::{Export, ExportError, ExportSink, MemorySink, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use preview::{render_preview, PreviewOptions};
