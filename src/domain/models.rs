use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens when a command is activated. The original design stuffed a
/// `string | callback` union into one field; the router's branch is
/// exhaustive here instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Executed in-process, with the current query as argument.
    Local(LocalAction),
    /// Symbolic action name relayed to the background process.
    Remote(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalAction {
    WebSearch,
}

/// Opaque display reference. The core never interprets it; the palette
/// widget decides how to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    Glyph(String),
    Url(String),
}

impl IconRef {
    #[must_use]
    pub fn glyph(g: &str) -> Self {
        IconRef::Glyph(g.to_string())
    }
}

/// Browser tab metadata carried by dynamic entries. Opaque to the palette
/// core; echoed back to the background process on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabMeta {
    pub id: i64,
    pub window_id: i64,
    pub index: u32,
    pub pinned: bool,
}

/// One catalog entry. Entries are immutable once added; augmentation only
/// appends new ones.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    pub title: String,
    pub description: String,
    pub icon: IconRef,
    pub action: CommandAction,
    /// Survives filtering even when nothing matches (the fallback set).
    pub is_default: bool,
    /// True for entries injected by tab augmentation.
    pub is_dynamic: bool,
    pub tab: Option<TabMeta>,
}

impl CommandEntry {
    #[must_use]
    pub fn builtin(title: &str, description: &str, icon: &str, action: CommandAction) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: IconRef::glyph(icon),
            action,
            is_default: false,
            is_dynamic: false,
            tab: None,
        }
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
