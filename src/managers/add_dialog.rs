//! Add-link dialog state machine.
//!
//! `Closed -> Open` on the add button, `Open -> Closed` on a successful save,
//! cancel or an outside click, `Open -> OpenWithError` when save is attempted
//! with a field missing or the add itself fails. The form is cleared on every
//! closing transition.

/// Current dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
    OpenWithError(String),
}

/// What a save attempt resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Both fields present; the caller should add the link, then report
    /// back through `saved` or `save_failed`. Dialog stays open until then.
    Valid { name: String, url: String },
    /// A field was missing; dialog stays open with this message.
    Invalid(String),
}

/// The add dialog and its form contents.
#[derive(Debug, Clone)]
pub struct AddDialog {
    state: DialogState,
    name: String,
    url: String,
}

impl AddDialog {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            name: String::new(),
            url: String::new(),
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    /// Form contents as last submitted.
    pub fn form(&self) -> (&str, &str) {
        (&self.name, &self.url)
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    /// Cancel button or a click outside the dialog.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Validates a save attempt with the given field values.
    pub fn submit(&mut self, name: &str, url: &str) -> DialogOutcome {
        let name = name.trim();
        let url = url.trim();
        self.name = name.to_string();
        self.url = url.to_string();
        if name.is_empty() || url.is_empty() {
            let message = "Please fill in both fields".to_string();
            self.state = DialogState::OpenWithError(message.clone());
            return DialogOutcome::Invalid(message);
        }
        DialogOutcome::Valid {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    /// The link was added.
    pub fn saved(&mut self) {
        self.close();
    }

    /// The add failed; the form is kept for another attempt.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.state = DialogState::OpenWithError(message.into());
    }

    fn close(&mut self) {
        self.state = DialogState::Closed;
        self.name.clear();
        self.url.clear();
    }
}

impl Default for AddDialog {
    fn default() -> Self {
        Self::new()
    }
}
