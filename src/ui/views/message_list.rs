//! Message list view.
//!
//! Displays one summary row per email of the current mailbox.

use std::fmt;

use crate::domain::{Email, EmailId, Mailbox};

/// Message list view component.
#[derive(Debug, Clone, Default)]
pub struct MessageList {
    mailbox: Mailbox,
    rows: Vec<MessageRow>,
    focused_index: usize,
    loading: bool,
    failed: bool,
}

/// Row styling driven by the read flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Greyed out.
    Read,
    /// Emphasized, muted timestamp.
    Unread,
}

/// Summary row for the message list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: EmailId,
    /// Sender, or the recipients when listing sent mail.
    pub counterpart: String,
    pub subject: String,
    pub timestamp: String,
    pub style: RowStyle,
}

impl MessageRow {
    /// Build the row for `email` as listed in `mailbox`.
    pub fn new(email: &Email, mailbox: Mailbox) -> Self {
        let counterpart = if mailbox.lists_recipients() {
            email.recipients_display()
        } else {
            email.sender.clone()
        };
        let style = if email.read {
            RowStyle::Read
        } else {
            RowStyle::Unread
        };

        Self {
            id: email.id,
            counterpart,
            subject: email.subject.clone(),
            timestamp: email.timestamp.clone(),
            style,
        }
    }
}

impl MessageList {
    /// Create an empty inbox list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start showing `mailbox`: new heading, no rows, waiting for data.
    pub fn reset(&mut self, mailbox: Mailbox) {
        self.mailbox = mailbox;
        self.rows.clear();
        self.focused_index = 0;
        self.loading = true;
        self.failed = false;
    }

    /// Fill the list from a mailbox response.
    ///
    /// Emails the mailbox does not admit are skipped. Returns the number of
    /// rows rendered.
    pub fn set_emails(&mut self, emails: &[Email]) -> usize {
        let mailbox = self.mailbox;
        self.rows = emails
            .iter()
            .filter(|email| mailbox.admits(email))
            .map(|email| MessageRow::new(email, mailbox))
            .collect();
        self.focused_index = 0;
        self.loading = false;
        self.failed = false;
        self.rows.len()
    }

    /// Mark the fetch as failed. Renders differently from an empty mailbox.
    pub fn set_failed(&mut self) {
        self.rows.clear();
        self.focused_index = 0;
        self.loading = false;
        self.failed = true;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn mailbox(&self) -> Mailbox {
        self.mailbox
    }

    pub fn rows(&self) -> &[MessageRow] {
        &self.rows
    }

    /// Look up a row by email id.
    pub fn row(&self, id: EmailId) -> Option<&MessageRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Move focus to next row.
    pub fn focus_next(&mut self) {
        if self.focused_index + 1 < self.rows.len() {
            self.focused_index += 1;
        }
    }

    /// Move focus to previous row.
    pub fn focus_previous(&mut self) {
        if self.focused_index > 0 {
            self.focused_index -= 1;
        }
    }

    /// Get the currently focused row.
    pub fn focused_row(&self) -> Option<&MessageRow> {
        self.rows.get(self.focused_index)
    }

    fn render_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        row: &MessageRow,
    ) -> fmt::Result {
        let cursor = if index == self.focused_index { '>' } else { ' ' };
        let marker = match row.style {
            RowStyle::Unread => '*',
            RowStyle::Read => ' ',
        };
        writeln!(
            f,
            "{cursor}{marker} {:>4}  {:<30}  {}  ({})",
            row.id, row.counterpart, row.subject, row.timestamp
        )
    }
}

impl fmt::Display for MessageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.mailbox.title())?;

        if self.loading {
            return writeln!(f, "Loading...");
        }
        if self.failed {
            return writeln!(f, "Could not load messages");
        }
        if self.rows.is_empty() {
            return writeln!(f, "No messages");
        }
        for (index, row) in self.rows.iter().enumerate() {
            self.render_row(f, index, row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_email(id: u64, subject: &str, read: bool, archived: bool) -> Email {
        Email {
            id: EmailId(id),
            sender: "bob@example.com".to_string(),
            recipients: vec!["ann@example.com".to_string(), "cy@example.com".to_string()],
            subject: subject.to_string(),
            body: String::new(),
            timestamp: "Jan 01 2024, 12:30 PM".to_string(),
            read,
            archived,
        }
    }

    fn sample() -> Vec<Email> {
        vec![
            make_email(1, "Live unread", false, false),
            make_email(2, "Stored", true, true),
            make_email(3, "Live read", true, false),
        ]
    }

    #[test]
    fn inbox_skips_archived() {
        let mut list = MessageList::new();
        list.reset(Mailbox::Inbox);

        assert_eq!(list.set_emails(&sample()), 2);
        assert!(list.rows().iter().all(|row| row.id != EmailId(2)));
        assert!(!list.is_loading());
    }

    #[test]
    fn archive_keeps_only_archived() {
        let mut list = MessageList::new();
        list.reset(Mailbox::Archive);

        assert_eq!(list.set_emails(&sample()), 1);
        assert_eq!(list.mailbox(), Mailbox::Archive);
        assert_eq!(list.rows()[0].id, EmailId(2));
    }

    #[test]
    fn sent_shows_everything_with_recipients() {
        let mut list = MessageList::new();
        list.reset(Mailbox::Sent);

        assert_eq!(list.set_emails(&sample()), 3);
        assert_eq!(list.rows()[0].counterpart, "ann@example.com, cy@example.com");
    }

    #[test]
    fn row_styles() {
        let unread = MessageRow::new(&make_email(1, "a", false, false), Mailbox::Inbox);
        let read = MessageRow::new(&make_email(1, "a", true, false), Mailbox::Inbox);
        assert_eq!(unread.style, RowStyle::Unread);
        assert_eq!(read.style, RowStyle::Read);
        assert_eq!(read.counterpart, "bob@example.com");
    }

    #[test]
    fn focus_navigation() {
        let mut list = MessageList::new();
        list.reset(Mailbox::Sent);
        list.set_emails(&sample());

        assert_eq!(list.focused_row().map(|r| r.id), Some(EmailId(1)));

        list.focus_next();
        list.focus_next();
        list.focus_next(); // Should stay on the last row
        assert_eq!(list.focused_row().map(|r| r.id), Some(EmailId(3)));

        list.focus_previous();
        assert_eq!(list.focused_row().map(|r| r.id), Some(EmailId(2)));
    }

    #[test]
    fn render_states() {
        let mut list = MessageList::new();
        list.reset(Mailbox::Archive);
        assert_eq!(list.to_string(), "== Archive ==\nLoading...\n");

        list.set_emails(&[]);
        assert_eq!(list.to_string(), "== Archive ==\nNo messages\n");
    }

    #[test]
    fn failed_fetch_is_not_an_empty_mailbox() {
        let mut list = MessageList::new();
        list.reset(Mailbox::Inbox);
        list.set_emails(&sample());

        list.set_failed();
        assert!(list.is_failed());
        assert!(list.rows().is_empty());
        assert_eq!(list.to_string(), "== Inbox ==\nCould not load messages\n");

        list.reset(Mailbox::Inbox);
        assert!(!list.is_failed());
    }

    #[test]
    fn render_rows() {
        let mut list = MessageList::new();
        list.reset(Mailbox::Inbox);
        list.set_emails(&[make_email(1, "Lunch", false, false)]);

        assert_eq!(
            list.to_string(),
            "== Inbox ==\n>*    1  bob@example.com                 Lunch  (Jan 01 2024, 12:30 PM)\n"
        );
    }
}
