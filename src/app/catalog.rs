use crate::domain::models::{CommandAction, CommandEntry, LocalAction};

/// The built-in command set, in display order. The first entry doubles as
/// the "search this query" affordance the filter appends to every non-empty
/// result, and the fallback shown when nothing matches at all.
#[must_use]
pub fn builtin_commands() -> Vec<CommandEntry> {
    let mut search = CommandEntry::builtin(
        "Search",
        "Search the web for a query",
        "🔍",
        CommandAction::Local(LocalAction::WebSearch),
    );
    search.is_default = true;

    vec![
        search,
        CommandEntry::builtin(
            "New tab",
            "Open a new tab",
            "✨",
            CommandAction::Remote("new-tab".to_string()),
        ),
        CommandEntry::builtin(
            "Close tab",
            "Close the current tab",
            "🗑",
            CommandAction::Remote("close-tab".to_string()),
        ),
        CommandEntry::builtin(
            "Duplicate tab",
            "Duplicate the current tab",
            "📑",
            CommandAction::Remote("duplicate-tab".to_string()),
        ),
        CommandEntry::builtin(
            "Pin tab",
            "Pin or unpin the current tab",
            "📌",
            CommandAction::Remote("pin-tab".to_string()),
        ),
        CommandEntry::builtin(
            "Reload tab",
            "Reload the current tab",
            "🔄",
            CommandAction::Remote("reload-tab".to_string()),
        ),
        CommandEntry::builtin(
            "Mute tab",
            "Mute or unmute the current tab",
            "🔇",
            CommandAction::Remote("mute-tab".to_string()),
        ),
        CommandEntry::builtin(
            "History",
            "Open the browser history",
            "📜",
            CommandAction::Remote("open-history".to_string()),
        ),
        CommandEntry::builtin(
            "Downloads",
            "Open the downloads list",
            "📥",
            CommandAction::Remote("open-downloads".to_string()),
        ),
        CommandEntry::builtin(
            "Incognito window",
            "Open a new incognito window",
            "🕶",
            CommandAction::Remote("open-incognito".to_string()),
        ),
        CommandEntry::builtin(
            "Search YouTube",
            "Search YouTube for a query",
            "▶",
            CommandAction::Remote("search-youtube".to_string()),
        ),
    ]
}

#[must_use]
pub fn search_url(query: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(query)
    )
}
