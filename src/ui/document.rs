//! The client document.
//!
//! [`Document`] owns every panel plus the status area and is the only place
//! the visible panel can change. Render functions receive it explicitly.

use std::fmt;

use crate::app::{NavToken, Panel, ViewState};
use crate::ui::components::StatusArea;
use crate::ui::views::{ComposeForm, MessageList, ReadingPane};

/// Root of everything the user can see.
#[derive(Debug, Clone, Default)]
pub struct Document {
    view: ViewState,
    generation: u64,
    status: StatusArea,
    message_list: MessageList,
    reading_pane: ReadingPane,
    compose_form: ComposeForm,
}

impl Document {
    /// Create a document showing an empty inbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `view` the visible panel.
    ///
    /// Every call starts a new navigation, even when the panel does not
    /// change, so responses to earlier requests can be told apart.
    pub fn show(&mut self, view: ViewState) -> NavToken {
        self.view = view;
        self.generation += 1;
        NavToken(self.generation)
    }

    /// The visible panel.
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.view.panel() == panel
    }

    /// Token of the navigation currently on screen.
    pub fn current(&self) -> NavToken {
        NavToken(self.generation)
    }

    /// Whether no navigation happened since `token` was issued.
    pub fn is_current(&self, token: NavToken) -> bool {
        token.0 == self.generation
    }

    pub fn status(&self) -> &StatusArea {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusArea {
        &mut self.status
    }

    pub fn message_list(&self) -> &MessageList {
        &self.message_list
    }

    pub fn message_list_mut(&mut self) -> &mut MessageList {
        &mut self.message_list
    }

    pub fn reading_pane(&self) -> &ReadingPane {
        &self.reading_pane
    }

    pub fn reading_pane_mut(&mut self) -> &mut ReadingPane {
        &mut self.reading_pane
    }

    pub fn compose_form(&self) -> &ComposeForm {
        &self.compose_form
    }

    pub fn compose_form_mut(&mut self) -> &mut ComposeForm {
        &mut self.compose_form
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        match self.view.panel() {
            Panel::MailboxList => write!(f, "{}", self.message_list),
            Panel::Detail => write!(f, "{}", self.reading_pane),
            Panel::Compose => write!(f, "{}", self.compose_form),
        }
    }
}
