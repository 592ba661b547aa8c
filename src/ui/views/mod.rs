//! Application views.
//!
//! One view per panel. Each view owns the state it draws and prints itself
//! through `Display`; the document decides which one is visible.

mod composer;
mod message_list;
mod reading_pane;

pub use composer::{quote_original, reply_subject, ComposeField, ComposeForm};
pub use message_list::{MessageList, MessageRow, RowStyle};
pub use reading_pane::ReadingPane;
