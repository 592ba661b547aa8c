//! Compose form.
//!
//! Three fields: recipients, subject and body. Opened blank for a new
//! message or pre-filled with a quoted original for a reply.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Email, OutgoingEmail};
use crate::error::ClientError;
use crate::ui::components::TextField;

const REPLY_PREFIX: &str = "Re: ";
const QUOTE_SEPARATOR: &str = "-------------------------------------";

/// A field of the compose form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Recipients,
    Subject,
    Body,
}

impl FromStr for ComposeField {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to" | "recipients" => Ok(ComposeField::Recipients),
            "subject" => Ok(ComposeField::Subject),
            "body" => Ok(ComposeField::Body),
            other => Err(ClientError::UnknownCommand(other.to_string())),
        }
    }
}

/// The compose form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeForm {
    recipients: TextField,
    subject: TextField,
    body: TextField,
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            recipients: TextField::new("To"),
            subject: TextField::new("Subject"),
            body: TextField::new("Body"),
        }
    }

    /// Blank every field.
    pub fn clear(&mut self) {
        self.recipients.clear();
        self.subject.clear();
        self.body.clear();
    }

    /// Fill the form to answer `original`.
    pub fn prefill_reply(&mut self, original: &Email) {
        self.recipients.set_text(original.sender.clone());
        self.subject.set_text(reply_subject(&original.subject));
        self.body.set_text(quote_original(original));
    }

    /// Current value of a field.
    pub fn value(&self, field: ComposeField) -> &str {
        self.field(field).text()
    }

    /// Replace the value of a field.
    pub fn set_value(&mut self, field: ComposeField, value: impl Into<String>) {
        self.field_mut(field).set_text(value);
    }

    /// Add a line to the end of the body.
    pub fn append_body_line(&mut self, line: &str) {
        self.body.push_line(line);
    }

    pub fn is_blank(&self) -> bool {
        self.recipients.is_empty() && self.subject.is_empty() && self.body.is_empty()
    }

    /// The payload for `POST /emails`.
    pub fn to_outgoing(&self) -> OutgoingEmail {
        OutgoingEmail::new(self.recipients.text(), self.subject.text(), self.body.text())
    }

    fn field(&self, field: ComposeField) -> &TextField {
        match field {
            ComposeField::Recipients => &self.recipients,
            ComposeField::Subject => &self.subject,
            ComposeField::Body => &self.body,
        }
    }

    fn field_mut(&mut self, field: ComposeField) -> &mut TextField {
        match field {
            ComposeField::Recipients => &mut self.recipients,
            ComposeField::Subject => &mut self.subject,
            ComposeField::Body => &mut self.body,
        }
    }
}

/// Subject for a reply, without stacking `Re:` prefixes.
pub fn reply_subject(subject: &str) -> String {
    let already_reply = subject
        .strip_prefix("Re:")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace);

    if already_reply {
        subject.to_string()
    } else {
        format!("{REPLY_PREFIX}{subject}")
    }
}

/// Body for a reply: attribution line, original body, separator.
pub fn quote_original(original: &Email) -> String {
    format!(
        "On {} {} wrote:\n{}\n{QUOTE_SEPARATOR}\n",
        original.timestamp, original.sender, original.body
    )
}

impl fmt::Display for ComposeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== New Email ==")?;
        writeln!(f, "{}: {}", self.recipients.label(), self.recipients.text())?;
        writeln!(f, "{}: {}", self.subject.label(), self.subject.text())?;
        writeln!(f, "{}:", self.body.label())?;
        write!(f, "{}", self.body.text())?;
        if !self.body.text().is_empty() && !self.body.text().ends_with('\n') {
            writeln!(f)?;
        }
        Ok(())
    }
}
