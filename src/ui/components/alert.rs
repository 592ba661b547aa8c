//! Status banners.
//!
//! The status area sits above whichever panel is visible and collects
//! banners until it is explicitly cleared. Nothing auto-dismisses.

use std::fmt;

use crate::domain::ServerNotice;

/// Banner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// A single banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl From<&ServerNotice> for Alert {
    fn from(notice: &ServerNotice) -> Self {
        let kind = if notice.is_error() {
            AlertKind::Danger
        } else {
            AlertKind::Success
        };
        Self {
            kind,
            text: notice.text().to_string(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            AlertKind::Success => "ok",
            AlertKind::Danger => "error",
        };
        write!(f, "[{tag}] {}", self.text)
    }
}

/// The area banners are appended to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusArea {
    alerts: Vec<Alert>,
}

impl StatusArea {
    /// Create an empty status area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a banner for a server notice.
    pub fn render_alert(&mut self, notice: &ServerNotice) {
        self.alerts.push(Alert::from(notice));
    }

    /// Remove every banner.
    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    /// Banners in the order they were added.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

impl fmt::Display for StatusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for alert in &self.alerts {
            writeln!(f, "{alert}")?;
        }
        Ok(())
    }
}
