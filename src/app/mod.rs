//! Application state and lifecycle management.
//!
//! This module contains:
//! - View state and navigation tokens (state.rs)
//! - The view controller driving the backend and the document (controller.rs)
//! - Action definitions and their command syntax (actions.rs)
//! - The interactive read-eval-render loop ([`App`])

pub mod actions;
pub mod controller;
pub mod state;

pub use actions::{help_text, Action, COMMANDS};
pub use controller::{MailClient, ReadReport};
pub use state::{NavToken, Panel, ViewState};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::Mailbox;
use crate::services::MailApi;

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Main application entry point
pub struct App<A> {
    client: MailClient<A>,
}

impl<A: MailApi> App<A> {
    /// Wrap a client.
    pub fn new(client: MailClient<A>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &MailClient<A> {
        &self.client
    }

    /// Run the application.
    ///
    /// Loads the inbox, then executes one command per input line and prints
    /// the document after each. Returns at end of input or on `quit`.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if let Err(err) = self.client.show_mailbox(Mailbox::Inbox).await {
            write_error(&mut output, &err).await?;
        }
        self.render(&mut output).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    write_error(&mut output, &err).await?;
                    continue;
                }
            };

            if action == Action::Help {
                output.write_all(help_text().as_bytes()).await?;
                output.flush().await?;
                continue;
            }

            match self.dispatch(action).await {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => write_error(&mut output, &err).await?,
            }
            self.render(&mut output).await?;
        }

        Ok(())
    }

    async fn dispatch(&self, action: Action) -> crate::Result<Flow> {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::GoTo(mailbox) => {
                self.client.show_mailbox(mailbox).await?;
            }
            Action::Compose => self.client.show_compose().await,
            Action::Open(Some(id)) => {
                self.client.read_email(id).await.detail?;
            }
            Action::Open(None) => {
                self.client.open_focused().await?.detail?;
            }
            Action::NextMessage => self.client.focus_next().await,
            Action::PreviousMessage => self.client.focus_previous().await,
            Action::Reply => self.client.reply_to_open().await?,
            Action::ToggleArchive => self.client.toggle_archive_open().await?,
            Action::SetField(field, value) => self.client.set_field(field, value).await?,
            Action::AppendBody(line) => self.client.append_body_line(&line).await?,
            Action::Send => {
                self.client.send_email().await?;
            }
            Action::Help => {}
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn render<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        let frame = self.client.render().await;
        output.write_all(frame.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        Ok(())
    }
}

async fn write_error<W: AsyncWrite + Unpin>(
    output: &mut W,
    err: &crate::ClientError,
) -> Result<()> {
    output.write_all(format!("error: {err}\n").as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
