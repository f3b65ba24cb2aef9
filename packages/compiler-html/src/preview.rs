//! # Canvas Preview
//!
//! Markup for the editing canvas. Unlike the export, the preview is live DOM
//! inserted into the editor page, so text is escaped. Each element carries a
//! `data-index` attribute so the host can map clicks back to store indices.

use blockpage_model::{Element, ElementValue, Layout};

/// Options for the canvas preview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    pub layout: Layout,
    /// Lock mode state, exposed as `data-locked` on the canvas
    pub locked: bool,
    /// Index of the element open in the edit form
    pub editing: Option<usize>,
}

/// Render the canvas preview for `elements`
pub fn render_preview(elements: &[Element], options: PreviewOptions) -> String {
    let mut html = format!(
        "<div class=\"canvas\" data-layout=\"{}\" data-locked=\"{}\">",
        options.layout, options.locked
    );

    for (index, element) in elements.iter().enumerate() {
        let attrs = element_attributes(index, element, &options);
        html.push_str(&render_element(&element.value, &attrs));
    }

    html.push_str("</div>");
    html
}

fn element_attributes(index: usize, element: &Element, options: &PreviewOptions) -> String {
    let mut attrs = format!(" data-index=\"{}\"", index);

    if options.editing == Some(index) {
        attrs.push_str(" data-editing=\"true\"");
    }

    if options.layout == Layout::Absolute {
        let position = element.position.unwrap_or_default();
        attrs.push_str(&format!(
            " style=\"position: absolute; left: {}px; top: {}px;\"",
            position.x, position.y
        ));
    }

    attrs
}

fn render_element(value: &ElementValue, attrs: &str) -> String {
    match value {
        ElementValue::Heading(text) | ElementValue::Paragraph(text) => {
            format!("<div{}>{}</div>", attrs, escape_html(text))
        }
        ElementValue::Link(link) => format!(
            "<a{} href=\"{}\">{}</a>",
            attrs,
            escape_html(&link.url),
            escape_html(&link.text)
        ),
        ElementValue::List(items) => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!("<ul{}>{}</ul>", attrs, items)
        }
        ElementValue::Image(src) => {
            format!("<img{} src=\"{}\" alt=\"Preview\">", attrs, escape_html(src))
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
