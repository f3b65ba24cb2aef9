//! # Blockpage Model
//!
//! The element palette of the page builder: five element kinds, the value
//! shape each one carries, canvas positions, and the defaults new elements
//! start with.

pub mod defaults;
pub mod element;
pub mod error;

pub use defaults::{default_value_for, PLACEHOLDER_IMAGE_URL};
pub use element::{Element, ElementKind, ElementValue, Layout, LinkValue, Position};
pub use error::{ModelError, ModelResult};
