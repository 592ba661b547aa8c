//! Reusable UI components.
//!
//! Small building blocks shared by the views. They hold state and know how
//! to print themselves; layout is left to the views.

pub mod alert;
pub mod text_field;

pub use alert::{Alert, AlertKind, StatusArea};
pub use text_field::TextField;
