use crate::defaults::default_value_for;
use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed palette of element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[serde(alias = "h1")]
    Heading,
    #[serde(alias = "p")]
    Paragraph,
    #[serde(alias = "a")]
    Link,
    #[serde(alias = "ul")]
    List,
    #[serde(alias = "img")]
    Image,
}

impl ElementKind {
    /// Palette order
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Heading,
        ElementKind::Paragraph,
        ElementKind::Link,
        ElementKind::List,
        ElementKind::Image,
    ];

    /// HTML tag the kind exports as
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Heading => "h1",
            ElementKind::Paragraph => "p",
            ElementKind::Link => "a",
            ElementKind::List => "ul",
            ElementKind::Image => "img",
        }
    }

    /// Human-readable palette label
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Heading => "Heading",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::Link => "Link",
            ElementKind::List => "List",
            ElementKind::Image => "Image",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ElementKind::Heading => "heading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Link => "link",
            ElementKind::List => "list",
            ElementKind::Image => "image",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = ModelError;

    /// Accepts either the kind name (`heading`) or its tag (`h1`)
    fn from_str(s: &str) -> ModelResult<Self> {
        let needle = s.trim().to_ascii_lowercase();
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.name() == needle || kind.tag_name() == needle)
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}

/// Text and target of a link element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValue {
    pub text: String,
    pub url: String,
}

/// Content of an element. The variant is the element's kind, so a value can
/// never carry the wrong shape for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ElementValue {
    Heading(String),
    Paragraph(String),
    Link(LinkValue),
    List(Vec<String>),
    /// Image source URL
    Image(String),
}

impl ElementValue {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementValue::Heading(_) => ElementKind::Heading,
            ElementValue::Paragraph(_) => ElementKind::Paragraph,
            ElementValue::Link(_) => ElementKind::Link,
            ElementValue::List(_) => ElementKind::List,
            ElementValue::Image(_) => ElementKind::Image,
        }
    }
}

/// Container-relative pixel offset on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How elements are placed on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Elements stack in insertion order
    #[default]
    Flow,
    /// Every element carries an XY position
    Absolute,
}

impl FromStr for Layout {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flow" => Ok(Layout::Flow),
            "absolute" => Ok(Layout::Absolute),
            _ => Err(ModelError::UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Flow => f.write_str("flow"),
            Layout::Absolute => f.write_str("absolute"),
        }
    }
}

/// One placed item on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub value: ElementValue,

    /// Only set in the absolute layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Element {
    /// New element of `kind` holding its default value
    pub fn new(kind: ElementKind, position: Option<Position>) -> Self {
        Self {
            value: default_value_for(kind),
            position,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name_and_tag() {
        assert_eq!("heading".parse::<ElementKind>().unwrap(), ElementKind::Heading);
        assert_eq!("H1".parse::<ElementKind>().unwrap(), ElementKind::Heading);
        assert_eq!("p".parse::<ElementKind>().unwrap(), ElementKind::Paragraph);
        assert_eq!(" Link ".parse::<ElementKind>().unwrap(), ElementKind::Link);
        assert_eq!("ul".parse::<ElementKind>().unwrap(), ElementKind::List);
        assert_eq!("img".parse::<ElementKind>().unwrap(), ElementKind::Image);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "table".parse::<ElementKind>().unwrap_err();
        assert_eq!(err, ModelError::UnknownKind("table".to_string()));
    }

    #[test]
    fn test_new_element_uses_default_value() {
        let element = Element::new(ElementKind::Paragraph, None);
        assert_eq!(element.kind(), ElementKind::Paragraph);
        assert_eq!(element.value, ElementValue::Paragraph("Sample Paragraph".to_string()));
        assert!(element.position.is_none());
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("absolute".parse::<Layout>().unwrap(), Layout::Absolute);
        assert_eq!("Flow".parse::<Layout>().unwrap(), Layout::Flow);
        assert!("grid".parse::<Layout>().is_err());
    }
}
