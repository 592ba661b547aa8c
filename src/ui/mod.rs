//! Client-side presentation.
//!
//! The UI is organized into:
//! - `document`: the root handle owning every panel and the status area
//! - `components`: reusable primitives (alerts, text fields)
//! - `views`: the three panels

pub mod components;
pub mod document;
pub mod views;

pub use components::{Alert, AlertKind, StatusArea, TextField};
pub use document::Document;
pub use views::{ComposeField, ComposeForm, MessageList, MessageRow, ReadingPane, RowStyle};
