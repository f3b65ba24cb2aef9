//! Error types for the editor

use blockpage_model::ElementKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Element not found: {0}")]
    ElementNotFound(usize),

    #[error("Element kind is fixed: expected {expected}, found {found}")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("No element is being edited")]
    NoActiveSession,

    #[error("Element {0} is still being edited; save it first")]
    SessionActive(usize),

    #[error("Edit error: {0}")]
    Edit(#[from] crate::edits::EditError),
}
