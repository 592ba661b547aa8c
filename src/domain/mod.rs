//! Domain types shared by the API client, the controller and the views.

mod email;
mod mailbox;

pub use email::{Email, EmailId, EmailUpdate, OutgoingEmail, ServerNotice};
pub use mailbox::Mailbox;
