//! Initial values for freshly added elements.

use crate::element::{ElementKind, ElementValue, LinkValue};

/// Image source used until the user points an image somewhere real
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Value a new element of `kind` starts with
pub fn default_value_for(kind: ElementKind) -> ElementValue {
    match kind {
        ElementKind::Heading => ElementValue::Heading("Sample H1".to_string()),
        ElementKind::Paragraph => ElementValue::Paragraph("Sample Paragraph".to_string()),
        ElementKind::Link => ElementValue::Link(LinkValue {
            text: "Sample Link".to_string(),
            url: "#".to_string(),
        }),
        ElementKind::List => ElementValue::List(vec![
            "Item 1".to_string(),
            "Item 2".to_string(),
            "Item 3".to_string(),
        ]),
        ElementKind::Image => ElementValue::Image(PLACEHOLDER_IMAGE_URL.to_string()),
    }
}
