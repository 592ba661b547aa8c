//! Named mailboxes and their client-side filters.

use std::fmt;
use std::str::FromStr;

use crate::domain::Email;
use crate::error::ClientError;

/// A mailbox served by `GET /emails/{mailbox}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mailbox {
    #[default]
    Inbox,
    Sent,
    Archive,
}

impl Mailbox {
    /// All mailboxes, in navigation order.
    pub const ALL: [Mailbox; 3] = [Mailbox::Inbox, Mailbox::Sent, Mailbox::Archive];

    /// Path segment used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "inbox",
            Mailbox::Sent => "sent",
            Mailbox::Archive => "archive",
        }
    }

    /// Heading shown above the list.
    pub fn title(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "Inbox",
            Mailbox::Sent => "Sent",
            Mailbox::Archive => "Archive",
        }
    }

    /// Whether an email returned for this mailbox should be listed.
    ///
    /// The backend already partitions by mailbox; this guards against
    /// archived mail leaking into the inbox and vice versa.
    pub fn admits(&self, email: &Email) -> bool {
        match self {
            Mailbox::Inbox => !email.archived,
            Mailbox::Archive => email.archived,
            Mailbox::Sent => true,
        }
    }

    /// Whether rows show recipients instead of the sender.
    pub fn lists_recipients(&self) -> bool {
        matches!(self, Mailbox::Sent)
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mailbox {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inbox" => Ok(Mailbox::Inbox),
            "sent" => Ok(Mailbox::Sent),
            "archive" | "archived" => Ok(Mailbox::Archive),
            other => Err(ClientError::UnknownMailbox(other.to_string())),
        }
    }
}
