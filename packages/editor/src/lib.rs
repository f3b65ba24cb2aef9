//! # Blockpage Editor
//!
//! Editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: element kinds, values, defaults      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Builder state container             │
//! │  - Element store (append, commit)           │
//! │  - Single edit session over a value copy    │
//! │  - Edit form description                    │
//! │  - Canvas coordinate capture + lock mode    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: elements → HTML              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use blockpage_editor::{Builder, FieldKey};
//! use blockpage_model::{ElementKind, ElementValue, Layout};
//!
//! let mut builder = Builder::new(Layout::Flow);
//! let index = builder.add(ElementKind::Heading);
//!
//! builder.activate(index)?;
//! builder.set_field(FieldKey::Text, "Welcome")?;
//! builder.save()?;
//!
//! assert_eq!(
//!     builder.elements()[0].value,
//!     ElementValue::Heading("Welcome".to_string())
//! );
//! # Ok::<(), blockpage_editor::EditorError>(())
//! ```

mod actions;
mod builder;
pub mod canvas;
mod edits;
mod errors;
mod form;
mod session;
mod store;

pub use actions::{Action, ActionOutcome};
pub use builder::{Builder, ClickOutcome};
pub use canvas::{capture_position, Canvas, CanvasRect, PointerClick};
pub use edits::{EditError, FieldEdit};
pub use errors::EditorError;
pub use form::{form_fields, FieldKey, FormField};
pub use session::EditSession;
pub use store::ElementStore;

// Re-export model types for convenience
pub use blockpage_model::{Element, ElementKind, ElementValue, Layout, LinkValue, Position};
