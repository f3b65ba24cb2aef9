//! # Field Edits
//!
//! Field-level operations on the working copy of an element being edited.
//!
//! ## Edit Semantics
//!
//! - Every edit is an atomic replacement of one field (no character diffs)
//! - Edits are validated against the value's kind before they are applied
//! - `SetListItem` replaces exactly one item; list length and the order of
//!   the other items are preserved
//! - Content is never validated: empty text and arbitrary URLs are accepted

use blockpage_model::{ElementKind, ElementValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field edit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FieldEdit {
    /// Replace the text of a heading or paragraph, or the source of an image
    SetText { text: String },

    /// Replace the visible text of a link
    SetLinkText { text: String },

    /// Replace the target of a link
    SetLinkUrl { url: String },

    /// Replace one list item
    SetListItem { index: usize, text: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Field {field} does not exist on a {kind} element")]
    FieldNotApplicable {
        field: &'static str,
        kind: ElementKind,
    },

    #[error("List item {index} out of range (list has {len} items)")]
    ListItemOutOfRange { index: usize, len: usize },
}

impl FieldEdit {
    /// Apply the edit to `value` with validation
    pub fn apply(&self, value: &mut ElementValue) -> Result<(), EditError> {
        self.validate(value)?;

        match (self, value) {
            (
                FieldEdit::SetText { text },
                ElementValue::Heading(current)
                | ElementValue::Paragraph(current)
                | ElementValue::Image(current),
            ) => {
                *current = text.clone();
            }
            (FieldEdit::SetLinkText { text }, ElementValue::Link(link)) => {
                link.text = text.clone();
            }
            (FieldEdit::SetLinkUrl { url }, ElementValue::Link(link)) => {
                link.url = url.clone();
            }
            (FieldEdit::SetListItem { index, text }, ElementValue::List(items)) => {
                items[*index] = text.clone();
            }
            // Ruled out by validate()
            (edit, value) => {
                return Err(EditError::FieldNotApplicable {
                    field: edit.field_name(),
                    kind: value.kind(),
                });
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, value: &ElementValue) -> Result<(), EditError> {
        let applicable = match self {
            FieldEdit::SetText { .. } => matches!(
                value,
                ElementValue::Heading(_) | ElementValue::Paragraph(_) | ElementValue::Image(_)
            ),
            FieldEdit::SetLinkText { .. } | FieldEdit::SetLinkUrl { .. } => {
                matches!(value, ElementValue::Link(_))
            }
            FieldEdit::SetListItem { index, .. } => match value {
                ElementValue::List(items) if *index < items.len() => true,
                ElementValue::List(items) => {
                    return Err(EditError::ListItemOutOfRange {
                        index: *index,
                        len: items.len(),
                    });
                }
                _ => false,
            },
        };

        if applicable {
            Ok(())
        } else {
            Err(EditError::FieldNotApplicable {
                field: self.field_name(),
                kind: value.kind(),
            })
        }
    }

    /// Get a debug name for the edited field
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldEdit::SetText { .. } => "text",
            FieldEdit::SetLinkText { .. } => "link-text",
            FieldEdit::SetLinkUrl { .. } => "link-url",
            FieldEdit::SetListItem { .. } => "item",
        }
    }
}
