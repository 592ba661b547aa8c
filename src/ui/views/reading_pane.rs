//! Reading pane view.
//!
//! Displays the opened email with its archive and reply actions.

use std::fmt;

use crate::domain::Email;

const RULE: &str = "----------------------------------------";

/// Reading pane view component.
#[derive(Debug, Clone, Default)]
pub struct ReadingPane {
    email: Option<Email>,
    loading: bool,
}

impl ReadingPane {
    /// Create an empty reading pane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous email and wait for the next one.
    pub fn clear(&mut self) {
        self.email = None;
        self.loading = true;
    }

    /// Set the displayed email.
    pub fn set_email(&mut self, email: Option<Email>) {
        self.email = email;
        self.loading = false;
    }

    /// The displayed email, if any.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Label of the archive toggle for the displayed email.
    pub fn archive_label(&self) -> Option<&'static str> {
        self.email.as_ref().map(|email| {
            if email.archived {
                "Unarchive"
            } else {
                "Archive"
            }
        })
    }
}

impl fmt::Display for ReadingPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(email) = &self.email else {
            let placeholder = if self.loading {
                "Loading..."
            } else {
                "Select a message to read"
            };
            return writeln!(f, "{placeholder}");
        };

        writeln!(f, "From: {}", email.sender)?;
        writeln!(f, "To: {}", email.recipients_display())?;
        writeln!(f, "Subject: {}", email.subject)?;
        writeln!(f, "Timestamp: {}", email.timestamp)?;
        writeln!(
            f,
            "[{}] [Reply]",
            self.archive_label().unwrap_or("Archive")
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", email.body)
    }
}
