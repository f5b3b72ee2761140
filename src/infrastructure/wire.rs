//! Line-delimited JSON frames exchanged with the background process.

use crate::domain::models::{CommandAction, CommandEntry, IconRef, TabMeta};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A frame sent to the background process. `id` is only present when a
/// response is expected.
#[derive(Debug, Serialize)]
pub struct OutboundFrame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl OutboundFrame {
    pub fn request(id: u64, action: &str) -> Self {
        Self {
            id: Some(id),
            action: action.to_string(),
            command: None,
            query: None,
        }
    }

    pub fn relay(action: &str, entry: &CommandEntry, query: &str) -> Self {
        Self {
            id: None,
            action: action.to_string(),
            command: Some(CommandDto::from(entry)),
            query: Some(query.to_string()),
        }
    }
}

/// Anything arriving from the background process: a response correlated by
/// `id`, or an unsolicited visibility signal carrying only an `action`.
#[derive(Debug, Deserialize)]
pub struct InboundFrame {
    pub id: Option<u64>,
    pub action: Option<String>,
    #[serde(default)]
    pub tabs: Option<serde_json::Value>,
}

/// The slice of a catalog entry the background process cares about.
#[derive(Debug, Serialize)]
pub struct CommandDto {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<TabMeta>,
}

impl From<&CommandEntry> for CommandDto {
    fn from(entry: &CommandEntry) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            tab: entry.tab,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    pub id: i64,
    pub window_id: i64,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub pinned: bool,
}

impl TabDto {
    pub fn into_entry(self) -> CommandEntry {
        let title = if self.title.is_empty() {
            "Untitled tab".to_string()
        } else {
            self.title
        };
        let icon = match self.fav_icon_url {
            Some(url) if !url.is_empty() => IconRef::Url(url),
            _ => IconRef::glyph("🌐"),
        };
        CommandEntry {
            title,
            description: self.url,
            icon,
            action: CommandAction::Remote("show-tab".to_string()),
            is_default: false,
            is_dynamic: true,
            tab: Some(TabMeta {
                id: self.id,
                window_id: self.window_id,
                index: self.index,
                pinned: self.pinned,
            }),
        }
    }
}

/// Parse the `tabs` payload of a `get-tabs` response. A missing or
/// non-array payload is malformed and the catalog must stay untouched.
pub fn parse_tabs(payload: Option<serde_json::Value>) -> Result<Vec<CommandEntry>> {
    let Some(value) = payload else {
        bail!("get-tabs response carried no tabs payload");
    };
    if !value.is_array() {
        bail!("get-tabs payload is not an array");
    }
    let tabs: Vec<TabDto> = serde_json::from_value(value)?;
    Ok(tabs.into_iter().map(TabDto::into_entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog;

    #[test]
    fn relay_frame_omits_the_id() {
        let entry = &catalog::builtin_commands()[1];
        let frame = OutboundFrame::relay("new-tab", entry, "new");
        let json = serde_json::to_value(&frame).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["action"], "new-tab");
        assert_eq!(json["query"], "new");
        assert_eq!(json["command"]["title"], entry.title);
    }

    #[test]
    fn request_frame_carries_only_id_and_action() {
        let frame = OutboundFrame::request(3, "get-tabs");
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"id":3,"action":"get-tabs"}"#);
    }

    #[test]
    fn tabs_payload_roundtrips_into_entries() {
        let payload = serde_json::json!([
            {
                "title": "Rust Blog",
                "url": "https://blog.rust-lang.org",
                "favIconUrl": "https://blog.rust-lang.org/favicon.ico",
                "id": 12,
                "windowId": 1,
                "index": 4,
                "pinned": true
            }
        ]);
        let entries = parse_tabs(Some(payload)).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title, "Rust Blog");
        assert_eq!(entry.description, "https://blog.rust-lang.org");
        assert!(matches!(entry.icon, IconRef::Url(_)));
        assert!(matches!(&entry.action, CommandAction::Remote(a) if a == "show-tab"));
        assert!(entry.is_dynamic);
        assert_eq!(entry.tab.unwrap().id, 12);
        assert!(entry.tab.unwrap().pinned);
    }

    #[test]
    fn untitled_tabs_get_a_placeholder_and_a_glyph_icon() {
        let payload = serde_json::json!([
            { "id": 1, "windowId": 1 }
        ]);
        let entries = parse_tabs(Some(payload)).unwrap();
        assert_eq!(entries[0].title, "Untitled tab");
        assert!(matches!(&entries[0].icon, IconRef::Glyph(g) if g == "🌐"));
    }

    #[test]
    fn malformed_tabs_payloads_are_rejected() {
        assert!(parse_tabs(None).is_err());
        assert!(parse_tabs(Some(serde_json::Value::Null)).is_err());
        assert!(parse_tabs(Some(serde_json::json!({"nope": true}))).is_err());
    }

    #[test]
    fn signal_frames_parse_without_an_id() {
        let frame: InboundFrame = serde_json::from_str(r#"{"action":"open-warp"}"#).unwrap();
        assert_eq!(frame.id, None);
        assert_eq!(frame.action.as_deref(), Some("open-warp"));
        assert!(frame.tabs.is_none());
    }
}
