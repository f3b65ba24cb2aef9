//! # Builder Actions
//!
//! Every palette and edit-surface command as a serializable value, so a host
//! can replay a recorded script against a [`Builder`].

use crate::builder::ClickOutcome;
use crate::canvas::PointerClick;
use crate::edits::FieldEdit;
use crate::{Builder, EditorError};
use blockpage_model::{ElementKind, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Palette button: append an element with its default value
    Add { kind: ElementKind },

    /// Open an element in the edit form
    Activate { index: usize },

    /// Change one field of the element being edited
    Edit { edit: FieldEdit },

    /// Numeric X/Y inputs; a missing coordinate keeps its current value
    SetCapture {
        #[serde(default)]
        x: Option<i32>,
        #[serde(default)]
        y: Option<i32>,
    },

    ToggleLock,

    /// Click on the canvas, optionally on an element
    CanvasClick {
        client_x: f64,
        client_y: f64,
        #[serde(default)]
        target: Option<usize>,
    },

    /// Commit the element being edited
    Save,
}

/// Result of dispatching an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ActionOutcome {
    Added(usize),
    Activated(usize),
    Edited,
    CaptureSet(Position),
    LockToggled(bool),
    Clicked(ClickOutcome),
    Saved(usize),
}

impl Builder {
    /// Route an action to the matching builder operation
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, EditorError> {
        match action {
            Action::Add { kind } => Ok(ActionOutcome::Added(self.add(kind))),

            Action::Activate { index } => {
                self.activate(index)?;
                Ok(ActionOutcome::Activated(index))
            }

            Action::Edit { edit } => {
                self.edit(&edit)?;
                Ok(ActionOutcome::Edited)
            }

            Action::SetCapture { x, y } => {
                if let Some(x) = x {
                    self.set_capture_x(x);
                }
                if let Some(y) = y {
                    self.set_capture_y(y);
                }
                Ok(ActionOutcome::CaptureSet(self.canvas().capture))
            }

            Action::ToggleLock => Ok(ActionOutcome::LockToggled(self.toggle_lock())),

            Action::CanvasClick {
                client_x,
                client_y,
                target,
            } => {
                let rect = self.canvas_rect();
                let outcome =
                    self.canvas_click(PointerClick::new(client_x, client_y), rect, target)?;
                Ok(ActionOutcome::Clicked(outcome))
            }

            Action::Save => Ok(ActionOutcome::Saved(self.save()?)),
        }
    }

    /// Dispatch actions in order, stopping at the first failure
    pub fn replay<I>(&mut self, actions: I) -> Result<Vec<ActionOutcome>, EditorError>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .map(|action| self.dispatch(action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpage_model::{ElementValue, Layout};

    #[test]
    fn test_action_json() {
        let json = r#"[
            { "action": "add", "kind": "heading" },
            { "action": "activate", "index": 0 },
            { "action": "edit", "edit": { "field": "set_text", "text": "Hello" } },
            { "action": "save" }
        ]"#;

        let actions: Vec<Action> = serde_json::from_str(json).unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0], Action::Add { kind: ElementKind::Heading });

        let mut builder = Builder::default();
        let outcomes = builder.replay(actions).unwrap();

        assert_eq!(outcomes.last(), Some(&ActionOutcome::Saved(0)));
        assert_eq!(
            builder.elements()[0].value,
            ElementValue::Heading("Hello".to_string())
        );
    }

    #[test]
    fn test_partial_capture() {
        let mut builder = Builder::new(Layout::Absolute);
        builder.dispatch(Action::SetCapture { x: Some(3), y: Some(4) }).unwrap();

        let outcome = builder
            .dispatch(Action::SetCapture { x: None, y: Some(9) })
            .unwrap();

        assert_eq!(outcome, ActionOutcome::CaptureSet(Position::new(3, 9)));
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let mut builder = Builder::default();
        let result = builder.replay(vec![
            Action::Add { kind: ElementKind::List },
            Action::Save,
            Action::Add { kind: ElementKind::List },
        ]);

        assert_eq!(result.unwrap_err(), EditorError::NoActiveSession);
        assert_eq!(builder.elements().len(), 1);
    }
}
