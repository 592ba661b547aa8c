//! mailpane: a thin, keyboard-driven front end for a REST mail backend.
//!
//! The crate is organized into:
//! - `domain`: emails, mailboxes and the payloads exchanged with the backend
//! - `services`: the [`MailApi`] seam and its HTTP implementation
//! - `ui`: the [`Document`] and the panels it owns
//! - `app`: view state, the [`MailClient`] controller and the command loop
//! - `config`: runtime settings

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use app::{App, MailClient, ReadReport, ViewState};
pub use config::Config;
pub use domain::{Email, EmailId, Mailbox, ServerNotice};
pub use error::{ClientError, Result};
pub use services::{HttpMailApi, MailApi};
pub use ui::Document;
