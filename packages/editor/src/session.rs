//! # Edit Session
//!
//! Tracks the element currently open in the edit form.
//!
//! A session holds a *copy* of the element's value. Field edits mutate the
//! copy only; the store sees nothing until the session is saved. There is no
//! cancel: saving is the only way out of a session.

use crate::edits::{EditError, FieldEdit};
use crate::form::{form_fields, FormField};
use blockpage_model::{Element, ElementKind, ElementValue, Position};

/// The single element being edited
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// Index of the target element in the store
    pub index: usize,

    /// Kind of the target element (selects the form)
    pub kind: ElementKind,

    /// Working copy of the value
    pub value: ElementValue,

    /// Working copy of the position (absolute layout only)
    pub position: Option<Position>,
}

impl EditSession {
    /// Snapshot `element` at `index`
    pub fn new(index: usize, element: &Element) -> Self {
        Self {
            index,
            kind: element.kind(),
            value: element.value.clone(),
            position: element.position,
        }
    }

    /// Apply a field edit to the working copy
    pub fn apply(&mut self, edit: &FieldEdit) -> Result<(), EditError> {
        edit.apply(&mut self.value)
    }

    /// Update the working position
    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Inputs of the edit form for the working copy
    pub fn fields(&self) -> Vec<FormField> {
        form_fields(&self.value)
    }
}
