//! Services that talk to the outside world.

mod mail_api;

#[cfg(test)]
pub use mail_api::MockMailApi;
pub use mail_api::{HttpMailApi, MailApi};
