//! Which panel the user is looking at.

use std::fmt;

use crate::domain::Mailbox;

/// The visible panel, with whatever it needs to be drawn.
///
/// Exactly one panel is visible at a time; the enum makes any other state
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Summary rows of one mailbox.
    MailboxList(Mailbox),
    /// A single email.
    Detail,
    /// The compose form.
    Compose,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::MailboxList(Mailbox::Inbox)
    }
}

impl ViewState {
    /// The panel this state shows.
    pub fn panel(&self) -> Panel {
        match self {
            ViewState::MailboxList(_) => Panel::MailboxList,
            ViewState::Detail => Panel::Detail,
            ViewState::Compose => Panel::Compose,
        }
    }

    /// The mailbox being listed, if any.
    pub fn mailbox(&self) -> Option<Mailbox> {
        match self {
            ViewState::MailboxList(mailbox) => Some(*mailbox),
            _ => None,
        }
    }
}

/// The three panels of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    MailboxList,
    Detail,
    Compose,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::MailboxList, Panel::Detail, Panel::Compose];
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Panel::MailboxList => "mailbox list",
            Panel::Detail => "reading pane",
            Panel::Compose => "compose form",
        };
        f.write_str(name)
    }
}

/// Identifies one navigation.
///
/// Handed out whenever the visible panel changes; a response carrying an
/// outdated token belongs to a panel the user already left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inbox() {
        assert_eq!(ViewState::default(), ViewState::MailboxList(Mailbox::Inbox));
        assert_eq!(ViewState::default().mailbox(), Some(Mailbox::Inbox));
    }

    #[test]
    fn panels() {
        assert_eq!(
            ViewState::MailboxList(Mailbox::Sent).panel(),
            Panel::MailboxList
        );
        assert_eq!(ViewState::Detail.panel(), Panel::Detail);
        assert_eq!(ViewState::Compose.panel(), Panel::Compose);
        assert_eq!(ViewState::Compose.mailbox(), None);
    }
}
