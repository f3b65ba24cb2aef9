//! # Edit Form
//!
//! Describes the modal edit surface for the element being edited: one text
//! input per scalar value, two inputs (text, url) for a link and one input
//! per item for a list. Hosts render these fields however they like and feed
//! input back through [`FieldKey::edit`].

use crate::edits::FieldEdit;
use blockpage_model::ElementValue;
use serde::{Deserialize, Serialize};

/// Identifies one input of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", content = "index", rename_all = "snake_case")]
pub enum FieldKey {
    Text,
    LinkText,
    LinkUrl,
    ListItem(usize),
}

impl FieldKey {
    /// Turn the new input of this field into an edit
    pub fn edit(self, input: impl Into<String>) -> FieldEdit {
        let input = input.into();
        match self {
            FieldKey::Text => FieldEdit::SetText { text: input },
            FieldKey::LinkText => FieldEdit::SetLinkText { text: input },
            FieldKey::LinkUrl => FieldEdit::SetLinkUrl { url: input },
            FieldKey::ListItem(index) => FieldEdit::SetListItem { index, text: input },
        }
    }
}

/// One input of the edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub key: FieldKey,
    pub label: String,
    pub value: String,

    /// Receives focus when the form opens
    pub autofocus: bool,
}

/// Build the form fields for `value`, in display order
pub fn form_fields(value: &ElementValue) -> Vec<FormField> {
    let mut fields = match value {
        ElementValue::Heading(text) | ElementValue::Paragraph(text) => {
            vec![field(FieldKey::Text, "Text", text)]
        }
        ElementValue::Image(url) => vec![field(FieldKey::Text, "Image URL", url)],
        ElementValue::Link(link) => vec![
            field(FieldKey::LinkText, "Link text", &link.text),
            field(FieldKey::LinkUrl, "Link URL", &link.url),
        ],
        ElementValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| field(FieldKey::ListItem(i), &format!("Item {}", i + 1), item))
            .collect(),
    };

    if let Some(first) = fields.first_mut() {
        first.autofocus = true;
    }
    fields
}

fn field(key: FieldKey, label: &str, value: &str) -> FormField {
    FormField {
        key,
        label: label.to_string(),
        value: value.to_string(),
        autofocus: false,
    }
}
