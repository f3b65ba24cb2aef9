//! # Page Builder
//!
//! The state container a host owns for one editing surface:
//! element store, the optional edit session and the canvas capture state.
//!
//! ```text
//!            add(kind)                activate(i)
//! palette ─────────────→ store    store ──────────→ session (copy)
//!                                                      │ edit / set_field
//!                         store ←──────────────────────┘ save
//! ```
//!
//! All operations run to completion synchronously; the builder is mutated
//! only through `&mut self`.

use crate::canvas::{Canvas, CanvasRect, PointerClick};
use crate::edits::FieldEdit;
use crate::form::FieldKey;
use crate::{EditSession, EditorError, ElementStore};
use blockpage_model::{Element, ElementKind, Layout, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What a canvas click did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// Canvas is locked; nothing changed
    Ignored,
    /// Click landed outside the canvas and targeted no element
    Outside,
    /// Capture state moved to this position
    Captured(Position),
    /// The clicked element was opened for editing
    Activated(usize),
}

/// Builder for a single page
#[derive(Debug, Clone)]
pub struct Builder {
    layout: Layout,
    store: ElementStore,
    session: Option<EditSession>,
    canvas: Canvas,
    canvas_rect: CanvasRect,
}

impl Builder {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            store: ElementStore::new(),
            session: None,
            canvas: Canvas::new(),
            canvas_rect: CanvasRect::default(),
        }
    }

    /// Set the canvas bounds used when replaying click actions
    pub fn with_canvas_rect(mut self, rect: CanvasRect) -> Self {
        self.canvas_rect = rect;
        self
    }

    /// Append a new element with its default value
    ///
    /// In the absolute layout the element is placed at the current capture
    /// position. New elements are not opened for editing.
    pub fn add(&mut self, kind: ElementKind) -> usize {
        let position = match self.layout {
            Layout::Flow => None,
            Layout::Absolute => Some(self.canvas.capture),
        };
        self.store.append(kind, position)
    }

    /// Open the element at `index` in the edit form
    pub fn activate(&mut self, index: usize) -> Result<&EditSession, EditorError> {
        if let Some(active) = &self.session {
            return Err(EditorError::SessionActive(active.index));
        }

        let element = self
            .store
            .get(index)
            .ok_or(EditorError::ElementNotFound(index))?;

        let mut session = EditSession::new(index, element);
        match self.layout {
            Layout::Flow => session.position = None,
            Layout::Absolute => {
                let position = element.position.unwrap_or(self.canvas.capture);
                session.set_position(position);
                // Position inputs show the element's placement straight away
                self.canvas.set_capture(position);
            }
        }

        debug!(index, kind = %session.kind, "Opened element for editing");
        Ok(self.session.insert(session))
    }

    /// Apply a field edit to the working copy
    pub fn edit(&mut self, edit: &FieldEdit) -> Result<(), EditorError> {
        let session = self.session.as_mut().ok_or(EditorError::NoActiveSession)?;
        session.apply(edit)?;
        Ok(())
    }

    /// Feed new input of one form field into the working copy
    pub fn set_field(&mut self, key: FieldKey, input: impl Into<String>) -> Result<(), EditorError> {
        self.edit(&key.edit(input))
    }

    /// Numeric X input
    pub fn set_capture_x(&mut self, x: i32) {
        self.canvas.set_x(x);
        self.sync_session_position();
    }

    /// Numeric Y input
    pub fn set_capture_y(&mut self, y: i32) {
        self.canvas.set_y(y);
        self.sync_session_position();
    }

    pub fn set_capture(&mut self, position: Position) {
        self.canvas.set_capture(position);
        self.sync_session_position();
    }

    /// Flip lock mode, returning the new state
    pub fn toggle_lock(&mut self) -> bool {
        self.canvas.toggle_lock()
    }

    /// Handle a click on the canvas
    ///
    /// `target` is the element under the pointer, if any. While the canvas is
    /// locked, or when the click lands outside it, the click has no effect.
    pub fn canvas_click(
        &mut self,
        click: PointerClick,
        rect: CanvasRect,
        target: Option<usize>,
    ) -> Result<ClickOutcome, EditorError> {
        if self.canvas.locked {
            debug!("Canvas locked, ignoring click");
            return Ok(ClickOutcome::Ignored);
        }

        let Some(position) = self.canvas.click(click, rect) else {
            debug!("Click outside the canvas");
            return Ok(ClickOutcome::Outside);
        };
        self.sync_session_position();

        let editing = self.session.is_some();
        match (target, editing) {
            (Some(index), false) => {
                self.activate(index)?;
                Ok(ClickOutcome::Activated(index))
            }
            _ => Ok(ClickOutcome::Captured(position)),
        }
    }

    /// Commit the working copy into the store and close the session
    ///
    /// Returns the index of the committed element.
    pub fn save(&mut self) -> Result<usize, EditorError> {
        let session = self.session.as_ref().ok_or(EditorError::NoActiveSession)?;
        let index = session.index;

        self.store
            .commit(index, session.value.clone(), session.position)?;
        self.session = None;

        info!(index, version = self.store.version, "Saved element");
        Ok(index)
    }

    fn sync_session_position(&mut self) {
        if self.layout != Layout::Absolute {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.set_position(self.canvas.capture);
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_rect(&self) -> CanvasRect {
        self.canvas_rect
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(Layout::Flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpage_model::ElementValue;

    #[test]
    fn test_new_elements_are_not_opened() {
        let mut builder = Builder::default();
        builder.add(ElementKind::Heading);

        assert!(builder.session().is_none());
        assert_eq!(builder.elements().len(), 1);
    }

    #[test]
    fn test_flow_elements_have_no_position() {
        let mut builder = Builder::new(Layout::Flow);
        builder.set_capture(Position::new(10, 20));
        builder.add(ElementKind::Image);

        assert_eq!(builder.elements()[0].position, None);
    }

    #[test]
    fn test_absolute_add_uses_capture() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.set_capture(Position::new(10, 20));
        builder.add(ElementKind::Paragraph);

        assert_eq!(builder.elements()[0].position, Some(Position::new(10, 20)));
    }

    #[test]
    fn test_edit_without_session() {
        let mut builder = Builder::default();
        builder.add(ElementKind::Heading);

        let err = builder.set_field(FieldKey::Text, "x").unwrap_err();
        assert_eq!(err, EditorError::NoActiveSession);
        assert_eq!(builder.save().unwrap_err(), EditorError::NoActiveSession);
    }

    #[test]
    fn test_activate_missing_element() {
        let mut builder = Builder::default();
        assert_eq!(
            builder.activate(0).unwrap_err(),
            EditorError::ElementNotFound(0)
        );
        assert!(builder.session().is_none());
    }

    #[test]
    fn test_second_activation_is_rejected() {
        let mut builder = Builder::default();
        builder.add(ElementKind::Heading);
        builder.add(ElementKind::Paragraph);

        builder.activate(0).unwrap();
        builder.set_field(FieldKey::Text, "Draft").unwrap();

        assert_eq!(builder.activate(1).unwrap_err(), EditorError::SessionActive(0));
        let session = builder.session().unwrap();
        assert_eq!(session.index, 0);
        assert_eq!(session.value, ElementValue::Heading("Draft".to_string()));
    }

    #[test]
    fn test_activate_seeds_capture_from_element() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.set_capture(Position::new(5, 5));
        builder.add(ElementKind::Heading);
        builder.set_capture(Position::new(90, 90));

        builder.activate(0).unwrap();

        assert_eq!(builder.session().unwrap().position, Some(Position::new(5, 5)));
        assert_eq!(builder.canvas().capture, Position::new(5, 5));
    }

    #[test]
    fn test_typed_coordinates_move_session() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.add(ElementKind::Image);
        builder.activate(0).unwrap();

        builder.set_capture_x(42);
        builder.set_capture_y(7);
        builder.save().unwrap();

        assert_eq!(builder.elements()[0].position, Some(Position::new(42, 7)));
    }

    #[test]
    fn test_locked_click_changes_nothing() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.add(ElementKind::Heading);
        builder.set_capture(Position::new(1, 2));
        builder.toggle_lock();

        let outcome = builder
            .canvas_click(PointerClick::new(50.0, 60.0), CanvasRect::default(), Some(0))
            .unwrap();

        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(builder.session().is_none());
        assert_eq!(builder.canvas().capture, Position::new(1, 2));
    }

    #[test]
    fn test_click_on_element_opens_it() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.add(ElementKind::Link);

        let outcome = builder
            .canvas_click(PointerClick::new(50.0, 60.0), CanvasRect::default(), Some(0))
            .unwrap();

        assert_eq!(outcome, ClickOutcome::Activated(0));
        assert_eq!(builder.session().unwrap().kind, ElementKind::Link);
    }

    #[test]
    fn test_click_while_editing_moves_session() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.add(ElementKind::Heading);
        builder.activate(0).unwrap();

        let outcome = builder
            .canvas_click(PointerClick::new(300.0, 200.0), CanvasRect::default(), None)
            .unwrap();

        assert_eq!(outcome, ClickOutcome::Captured(Position::new(300, 200)));
        assert_eq!(builder.session().unwrap().position, Some(Position::new(300, 200)));
    }

    #[test]
    fn test_click_outside() {
        let mut builder = Builder::new(Layout::Absolute);
        let outcome = builder
            .canvas_click(PointerClick::new(-5.0, 10.0), CanvasRect::default(), None)
            .unwrap();
        assert_eq!(outcome, ClickOutcome::Outside);
    }

    #[test]
    fn test_click_outside_on_target_is_noop() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.add(ElementKind::Heading);
        builder.set_capture(Position::new(3, 4));

        let outcome = builder
            .canvas_click(PointerClick::new(5000.0, 5000.0), CanvasRect::default(), Some(0))
            .unwrap();

        assert_eq!(outcome, ClickOutcome::Outside);
        assert!(builder.session().is_none());
        assert_eq!(builder.canvas().capture, Position::new(3, 4));
    }
}
