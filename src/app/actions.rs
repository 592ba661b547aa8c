//! User actions and the commands that trigger them.

use std::str::FromStr;

use crate::domain::{EmailId, Mailbox};
use crate::error::ClientError;
use crate::ui::ComposeField;

/// Commands (usage, description) listed by `help`.
pub const COMMANDS: &[(&str, &str)] = &[
    ("inbox | g i", "Go to Inbox"),
    ("sent | g t", "Go to Sent"),
    ("archive | g a", "Go to Archive"),
    ("compose | c", "Compose"),
    ("open [id] | enter", "Open an email (focused row without id)"),
    ("j / k", "Next / previous message"),
    ("reply | r", "Reply to the open email"),
    ("toggle-archive | e", "Archive or unarchive the open email"),
    ("to <addresses>", "Set recipients"),
    ("subject <text>", "Set subject"),
    ("body <text>", "Append a line to the body"),
    ("send", "Send the composed email"),
    ("help | ?", "Show this list"),
    ("quit | q", "Quit"),
];

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoTo(Mailbox),
    Compose,
    /// Open an email by id, or the focused row.
    Open(Option<EmailId>),
    NextMessage,
    PreviousMessage,
    Reply,
    ToggleArchive,
    SetField(ComposeField, String),
    AppendBody(String),
    Send,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = ClientError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let unknown = || ClientError::UnknownCommand(line.to_string());

        // Two-key sequences first.
        match line {
            "g i" => return Ok(Action::GoTo(Mailbox::Inbox)),
            "g t" => return Ok(Action::GoTo(Mailbox::Sent)),
            "g a" => return Ok(Action::GoTo(Mailbox::Archive)),
            _ => {}
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, Some(rest.trim())),
            None => (line, None),
        };

        let action = match (command, rest) {
            ("inbox" | "sent" | "archive" | "archived", None) => Action::GoTo(command.parse()?),
            ("compose" | "c", None) => Action::Compose,
            ("open" | "enter", None) => Action::Open(None),
            ("open", Some(id)) => Action::Open(Some(id.parse().map_err(|_| unknown())?)),
            ("j" | "next", None) => Action::NextMessage,
            ("k" | "prev", None) => Action::PreviousMessage,
            ("reply" | "r", None) => Action::Reply,
            ("toggle-archive" | "e", None) => Action::ToggleArchive,
            ("to" | "subject", value) => {
                Action::SetField(command.parse()?, value.unwrap_or_default().to_string())
            }
            ("body", value) => Action::AppendBody(value.unwrap_or_default().to_string()),
            ("send", None) => Action::Send,
            ("help" | "?", None) => Action::Help,
            ("quit" | "q" | "exit", None) => Action::Quit,
            _ => return Err(unknown()),
        };
        Ok(action)
    }
}

/// Text printed by `help`.
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    COMMANDS
        .iter()
        .map(|(usage, description)| format!("  {usage:<width$}  {description}\n"))
        .collect()
}
