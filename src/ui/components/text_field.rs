//! Editable text fields.
//!
//! Holds the value of one form input. Edits arrive whole-line from the
//! command prompt rather than keystroke by keystroke.

/// A labelled text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    label: &'static str,
    text: String,
}

impl TextField {
    /// Create an empty field.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            text: String::new(),
        }
    }

    /// Label shown next to the value.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clear the field.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append `line` followed by a newline.
    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }
}
