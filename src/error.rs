//! Error types for the mail client.

use thiserror::Error;

use crate::app::Panel;

/// Errors raised while talking to the backend or handling user actions.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a status the client cannot use.
    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unknown mailbox '{0}'")]
    UnknownMailbox(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Reply or archive requested while no email is open.
    #[error("no email is open")]
    NothingSelected,

    /// The action belongs to a panel that is not on screen.
    #[error("the {0} is not open")]
    PanelNotVisible(Panel),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
