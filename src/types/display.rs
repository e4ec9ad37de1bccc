use serde::{Deserialize, Serialize};

/// One rendered row of the link list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayItem {
    pub id: String,
    /// HTML-escaped display label.
    pub name_html: String,
    /// Raw url as stored.
    pub url: String,
    pub important: bool,
    pub star_icon: String,
    pub star_title: String,
}

/// The full rendered list. Re-rendering always replaces the whole thing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum DisplayList {
    Empty,
    Items(Vec<DisplayItem>),
}

impl DisplayList {
    pub fn len(&self) -> usize {
        match self {
            DisplayList::Empty => 0,
            DisplayList::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<&str> {
        match self {
            DisplayList::Empty => Vec::new(),
            DisplayList::Items(items) => items.iter().map(|i| i.id.as_str()).collect(),
        }
    }
}

/// Severity of a transient user-visible notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient toast shown by the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self { message: message.into(), kind }
    }
}
