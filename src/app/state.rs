use crate::app::config::WarpConfig;
use crate::app::filter;
use crate::domain::models::CommandEntry;
use ratatui::widgets::ListState;
use std::ops::{Deref, DerefMut};
use std::time::Instant;
use tui_textarea::{CursorMove, TextArea};

/// Single-line query field. Wraps `TextArea` so the whole state stays
/// `Clone + Debug + PartialEq` for the reducer tests.
#[derive(Default)]
pub struct QueryInput<'a>(pub TextArea<'a>);

impl QueryInput<'_> {
    /// The query string. The field is single-line; any stray newlines from
    /// a paste are flattened.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }
}

impl Clone for QueryInput<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for QueryInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInput")
            .field("text", &self.text())
            .finish()
    }
}

impl PartialEq for QueryInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines()
    }
}

impl<'a> Deref for QueryInput<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QueryInput<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Transient post-activation notice. Always optimistic; the relay protocol
/// carries no acknowledgment.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,

    // --- Visibility ---
    pub is_open: bool,
    pub input_focused: bool,

    // --- Catalog & filtering ---
    pub catalog: Vec<CommandEntry>,
    pub query: QueryInput<'a>,
    /// Indices into `catalog`; recomputed on every query or catalog change.
    pub matches: Vec<usize>,

    // --- Selection ---
    /// Always within `[0, matches.len() - 1]` when `matches` is non-empty;
    /// 0 means "no selection" when it is empty.
    pub cursor: usize,
    pub list_state: ListState,

    // --- Feedback ---
    pub toast: Option<Toast>,

    pub config: WarpConfig,
}

impl AppState<'_> {
    /// The catalog is an explicit constructor argument, not a module-level
    /// default; augmentation appends to this state's copy only.
    #[must_use]
    pub fn new(catalog: Vec<CommandEntry>, config: WarpConfig) -> Self {
        let matches = filter::filter_commands(&catalog, "");
        let mut state = Self {
            should_quit: false,
            is_open: config.start_open,
            input_focused: config.start_open,
            catalog,
            query: QueryInput::default(),
            matches,
            cursor: 0,
            list_state: ListState::default(),
            toast: None,
            config,
        };
        state.sync_list_selection();
        state
    }

    #[must_use]
    pub fn query_text(&self) -> String {
        self.query.text()
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&CommandEntry> {
        self.matches
            .get(self.cursor)
            .and_then(|&idx| self.catalog.get(idx))
    }

    /// Mirror the cursor into the `ListState` so stateful rendering keeps
    /// the active row scrolled into view.
    pub fn sync_list_selection(&mut self) {
        if self.matches.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.cursor));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog;

    #[test]
    fn new_state_starts_closed_with_the_full_catalog_visible() {
        let state = AppState::new(catalog::builtin_commands(), WarpConfig::default());
        assert!(!state.is_open);
        assert_eq!(state.matches.len(), state.catalog.len());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn start_open_config_opens_the_overlay_at_mount() {
        let config = WarpConfig {
            start_open: true,
            ..WarpConfig::default()
        };
        let state = AppState::new(catalog::builtin_commands(), config);
        assert!(state.is_open);
        assert!(state.input_focused);
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let state = AppState::new(Vec::new(), WarpConfig::default());
        assert_eq!(state.list_state.selected(), None);
        assert!(state.selected_entry().is_none());
    }
}
