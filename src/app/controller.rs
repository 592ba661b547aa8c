//! View controller.
//!
//! [`MailClient`] ties the backend API to the [`Document`]: it switches the
//! visible panel, issues the requests behind each panel and renders their
//! responses. Every operation takes `&self`, so a clone of the client can
//! run operations from other tasks concurrently.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::app::{NavToken, Panel, ViewState};
use crate::domain::{Email, EmailId, EmailUpdate, Mailbox, ServerNotice};
use crate::error::{ClientError, Result};
use crate::services::MailApi;
use crate::ui::{ComposeField, Document};

/// Outcome of opening an email.
///
/// The detail fetch and the mark-read update run independently; each result
/// is reported on its own.
#[derive(Debug)]
pub struct ReadReport {
    pub detail: Result<Email>,
    pub mark_read: Result<()>,
}

/// The mail client front end.
pub struct MailClient<A> {
    api: Arc<A>,
    document: Arc<RwLock<Document>>,
}

impl<A> Clone for MailClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            document: Arc::clone(&self.document),
        }
    }
}

impl<A: MailApi> MailClient<A> {
    /// Create a client with a fresh document.
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            document: Arc::new(RwLock::new(Document::new())),
        }
    }

    /// The shared document handle.
    pub fn document(&self) -> &Arc<RwLock<Document>> {
        &self.document
    }

    /// Print the visible state.
    pub async fn render(&self) -> String {
        self.document.read().await.to_string()
    }

    /// Show a mailbox and fetch its contents.
    pub async fn show_mailbox(&self, mailbox: Mailbox) -> Result<usize> {
        self.load_mailbox(mailbox, None).await
    }

    /// Show a blank compose form.
    pub async fn show_compose(&self) {
        self.compose().await;
    }

    /// Show the reading pane as it is, without fetching.
    pub async fn show_detail(&self) {
        self.document.write().await.show(ViewState::Detail);
    }

    /// Show `mailbox`, optionally with a status banner, and fetch its rows.
    ///
    /// Returns the number of rows rendered. A response that arrives after
    /// the user navigated elsewhere is dropped and counts as zero rows.
    pub async fn load_mailbox(
        &self,
        mailbox: Mailbox,
        notice: Option<ServerNotice>,
    ) -> Result<usize> {
        let token = {
            let mut doc = self.document.write().await;
            doc.status_mut().clear();
            if let Some(notice) = &notice {
                doc.status_mut().render_alert(notice);
            }
            let token = doc.show(ViewState::MailboxList(mailbox));
            doc.message_list_mut().reset(mailbox);
            token
        };
        tracing::info!(%mailbox, "loading mailbox");

        let result = self.api.list_mailbox(mailbox).await;
        let mut doc = self.document.write().await;
        let current = doc.is_current(token);

        match result {
            Ok(emails) if current => {
                let rendered = doc.message_list_mut().set_emails(&emails);
                tracing::debug!(%mailbox, received = emails.len(), rendered, "mailbox rendered");
                Ok(rendered)
            }
            Ok(_) => {
                tracing::debug!(%mailbox, "dropping stale mailbox response");
                Ok(0)
            }
            Err(err) => {
                tracing::error!(%mailbox, error = %err, "failed to load mailbox");
                if current {
                    doc.message_list_mut().set_failed();
                }
                Err(err)
            }
        }
    }

    /// Open an email.
    ///
    /// Fetches the full email and marks it read at the same time; the
    /// mark-read request is sent whether or not the fetch succeeds.
    pub async fn read_email(&self, id: EmailId) -> ReadReport {
        let token = {
            let mut doc = self.document.write().await;
            let token = doc.show(ViewState::Detail);
            doc.reading_pane_mut().clear();
            token
        };
        tracing::info!(%id, "opening email");

        let (detail, mark_read) = tokio::join!(
            self.api.get_email(id),
            self.api.update_email(id, EmailUpdate::Read(true)),
        );

        if let Err(err) = &mark_read {
            tracing::warn!(%id, error = %err, "failed to mark email read");
        }

        match &detail {
            Ok(email) => self.apply_detail(token, email).await,
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to load email");
                self.apply_missing_detail(token).await;
            }
        }

        ReadReport { detail, mark_read }
    }

    async fn apply_detail(&self, token: NavToken, email: &Email) {
        let mut doc = self.document.write().await;
        if doc.is_current(token) {
            doc.reading_pane_mut().set_email(Some(email.clone()));
        } else {
            tracing::debug!(id = %email.id, "dropping stale email response");
        }
    }

    async fn apply_missing_detail(&self, token: NavToken) {
        let mut doc = self.document.write().await;
        if doc.is_current(token) {
            doc.reading_pane_mut().set_email(None);
        }
    }

    /// Flip the archived flag of `email`, then return to the inbox.
    ///
    /// The inbox is reloaded even if the update fails; the update's result
    /// is returned.
    pub async fn toggle_archive(&self, email: &Email) -> Result<()> {
        let archived = !email.archived;
        let result = self
            .api
            .update_email(email.id, EmailUpdate::Archived(archived))
            .await;

        match &result {
            Ok(()) => tracing::info!(id = %email.id, archived, "archive flag updated"),
            Err(err) => {
                tracing::warn!(id = %email.id, error = %err, "failed to update archive flag")
            }
        }

        if let Err(err) = self.load_mailbox(Mailbox::Inbox, None).await {
            tracing::warn!(id = %email.id, error = %err, "inbox reload after archive failed");
        }
        result
    }

    /// Toggle archive on the email shown in the reading pane.
    pub async fn toggle_archive_open(&self) -> Result<()> {
        let email = self.open_email().await?;
        self.toggle_archive(&email).await
    }

    /// Show the compose form with every field cleared.
    pub async fn compose(&self) {
        let mut doc = self.document.write().await;
        doc.show(ViewState::Compose);
        doc.compose_form_mut().clear();
    }

    /// Show the compose form pre-filled to answer `original`.
    pub async fn compose_reply(&self, original: &Email) {
        let mut doc = self.document.write().await;
        doc.show(ViewState::Compose);
        doc.compose_form_mut().prefill_reply(original);
    }

    /// Reply to the email shown in the reading pane.
    pub async fn reply_to_open(&self) -> Result<()> {
        let email = self.open_email().await?;
        self.compose_reply(&email).await;
        Ok(())
    }

    /// Replace the value of a compose field. Only while composing.
    pub async fn set_field(&self, field: ComposeField, value: impl Into<String>) -> Result<()> {
        let mut doc = self.document.write().await;
        ensure_visible(&doc, Panel::Compose)?;
        doc.compose_form_mut().set_value(field, value);
        Ok(())
    }

    /// Append a line to the compose body. Only while composing.
    pub async fn append_body_line(&self, line: &str) -> Result<()> {
        let mut doc = self.document.write().await;
        ensure_visible(&doc, Panel::Compose)?;
        doc.compose_form_mut().append_body_line(line);
        Ok(())
    }

    /// Submit the compose form.
    ///
    /// On success the sent mailbox is shown with the server's message. When
    /// the backend rejects the email the form stays open, untouched, and the
    /// error is shown as a banner, unless the user navigated away meanwhile.
    /// Fails with [`ClientError::PanelNotVisible`] when the form is not shown.
    pub async fn send_email(&self) -> Result<ServerNotice> {
        let (token, outgoing) = {
            let doc = self.document.read().await;
            ensure_visible(&doc, Panel::Compose)?;
            (doc.current(), doc.compose_form().to_outgoing())
        };
        tracing::info!(
            recipients = %outgoing.recipients,
            subject = %outgoing.subject,
            "sending email"
        );

        let notice = match self.api.send_email(outgoing).await {
            Ok(notice) => notice,
            Err(err) => {
                tracing::error!(error = %err, "failed to send email");
                return Err(err);
            }
        };

        match &notice {
            ServerNotice::Message(_) => {
                // A failed reload leaves the list in its failed state.
                if let Err(err) = self.load_mailbox(Mailbox::Sent, Some(notice.clone())).await {
                    tracing::warn!(error = %err, "sent mailbox reload after send failed");
                }
            }
            ServerNotice::Error(reason) => {
                tracing::warn!(%reason, "backend rejected email");
                let mut doc = self.document.write().await;
                if doc.is_current(token) {
                    doc.status_mut().clear();
                    doc.status_mut().render_alert(&notice);
                } else {
                    tracing::debug!("dropping stale send rejection");
                }
            }
        }

        Ok(notice)
    }

    /// Move the list focus down.
    pub async fn focus_next(&self) {
        self.document.write().await.message_list_mut().focus_next();
    }

    /// Move the list focus up.
    pub async fn focus_previous(&self) {
        self.document.write().await.message_list_mut().focus_previous();
    }

    /// Open the focused row of the visible mailbox.
    pub async fn open_focused(&self) -> Result<ReadReport> {
        let id = {
            let doc = self.document.read().await;
            doc.view()
                .mailbox()
                .and_then(|_| doc.message_list().focused_row())
                .map(|row| row.id)
                .ok_or(ClientError::NothingSelected)?
        };
        Ok(self.read_email(id).await)
    }

    /// The email in the reading pane, if the pane is on screen.
    async fn open_email(&self) -> Result<Email> {
        let doc = self.document.read().await;
        if !doc.is_visible(Panel::Detail) {
            return Err(ClientError::NothingSelected);
        }
        doc.reading_pane()
            .email()
            .cloned()
            .ok_or(ClientError::NothingSelected)
    }
}

fn ensure_visible(doc: &Document, panel: Panel) -> Result<()> {
    if doc.is_visible(panel) {
        Ok(())
    } else {
        Err(ClientError::PanelNotVisible(panel))
    }
}
