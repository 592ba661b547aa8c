//! Email payloads exchanged with the backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend identifier of an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmailId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for EmailId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// An email as returned by `GET /emails/{mailbox}` or `GET /emails/{id}`.
///
/// List responses may omit the body, in which case it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: EmailId,
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    /// Already formatted by the server.
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Email {
    /// Recipients joined for display.
    pub fn recipients_display(&self) -> String {
        self.recipients.join(", ")
    }
}

/// State change sent with `PUT /emails/{id}`.
///
/// Serializes to a single-key object such as `{"read": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailUpdate {
    Read(bool),
    Archived(bool),
}

/// Body of `POST /emails`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    /// Comma-separated addresses, exactly as typed.
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    /// Create a new outgoing email.
    pub fn new(
        recipients: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipients: recipients.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Status envelope returned by the backend: `{"message": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerNotice {
    Message(String),
    Error(String),
}

impl ServerNotice {
    /// The human-readable text of the notice.
    pub fn text(&self) -> &str {
        match self {
            ServerNotice::Message(text) | ServerNotice::Error(text) => text,
        }
    }

    /// Whether the backend reported a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, ServerNotice::Error(_))
    }
}
