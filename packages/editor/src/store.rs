//! # Element Store
//!
//! The ordered list of elements placed on the page.
//!
//! Elements are only ever appended or replaced in place. There is no delete
//! and no reorder, so an index handed out by [`ElementStore::append`] stays
//! valid for the lifetime of the store.

use crate::EditorError;
use blockpage_model::{Element, ElementKind, ElementValue, Position};
use tracing::debug;

/// Insertion-ordered element list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStore {
    elements: Vec<Element>,

    /// Current version number (increments on each append or commit)
    pub version: u64,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new element holding the default value for `kind`
    ///
    /// Returns the index of the new element.
    pub fn append(&mut self, kind: ElementKind, position: Option<Position>) -> usize {
        let index = self.elements.len();
        self.elements.push(Element::new(kind, position));
        self.version += 1;

        debug!(index, %kind, version = self.version, "Appended element");
        index
    }

    /// Replace the value and position of the element at `index`
    ///
    /// `index` must name an existing element, and `value` must keep the
    /// element's kind. Neither is recoverable: the store is left untouched
    /// and the error is returned to the caller.
    pub fn commit(
        &mut self,
        index: usize,
        value: ElementValue,
        position: Option<Position>,
    ) -> Result<(), EditorError> {
        let element = self
            .elements
            .get_mut(index)
            .ok_or(EditorError::ElementNotFound(index))?;

        if element.kind() != value.kind() {
            return Err(EditorError::KindMismatch {
                expected: element.kind(),
                found: value.kind(),
            });
        }

        element.value = value;
        element.position = position;
        self.version += 1;

        debug!(index, version = self.version, "Committed element");
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
