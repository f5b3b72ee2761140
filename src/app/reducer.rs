use super::{
    action::Action,
    command::Command,
    filter,
    state::{AppState, QueryInput, Toast},
};
use crate::domain::models::CommandAction;
use std::time::{Duration, Instant};

const TOAST_MESSAGE: &str = "The action has been successful";

/// The palette controller: every state transition lives here. Returns an
/// effect `Command` when the transition needs one.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Tick => {
            if let Some(toast) = &state.toast {
                if toast.expires_at <= Instant::now() {
                    state.toast = None;
                }
            }
        }
        Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Visibility ---
        Action::ToggleOverlay => {
            if state.is_open {
                close_overlay(state);
            } else {
                state.is_open = true;
                // Focus is deferred: the surrounding chrome may still be
                // settling when the open signal lands.
                return Some(Command::ScheduleFocus);
            }
        }
        Action::CloseOverlay => {
            close_overlay(state);
        }
        Action::FocusQuery => {
            if state.is_open {
                state.input_focused = true;
            }
        }

        // --- Query ---
        Action::QueryInput(key) => {
            if state.is_open {
                state.query.input(key);
                refresh_matches(state);
            }
        }

        // --- Cursor ---
        Action::CursorNext => {
            if !state.matches.is_empty() {
                state.cursor = (state.cursor + 1).min(state.matches.len() - 1);
                state.sync_list_selection();
            }
        }
        Action::CursorPrev => {
            state.cursor = state.cursor.saturating_sub(1);
            state.sync_list_selection();
        }
        Action::CursorHome => {
            state.cursor = 0;
            state.sync_list_selection();
        }
        Action::CursorEnd => {
            if !state.matches.is_empty() {
                state.cursor = state.matches.len() - 1;
                state.sync_list_selection();
            }
        }
        Action::CursorSet(index) => {
            if index < state.matches.len() {
                state.cursor = index;
                state.sync_list_selection();
            }
        }

        // --- Activation ---
        Action::Activate => return activate_selected(state),
        Action::ActivateIndex(index) => {
            if index < state.matches.len() {
                state.cursor = index;
                state.sync_list_selection();
                return activate_selected(state);
            }
        }

        // --- Async results ---
        Action::TabsLoaded(entries) => {
            // Append only: existing entries are never replaced or deduped.
            state.catalog.extend(entries);
            refresh_matches(state);
        }
    }
    None
}

/// Recompute `matches` from the current catalog and query. A changed match
/// count resets the cursor to the top; otherwise it stays put (clamped).
fn refresh_matches(state: &mut AppState) {
    let previous_len = state.matches.len();
    state.matches = filter::filter_commands(&state.catalog, &state.query_text());
    if state.matches.len() != previous_len {
        state.cursor = 0;
    } else {
        state.cursor = state.cursor.min(state.matches.len().saturating_sub(1));
    }
    state.sync_list_selection();
}

/// Transition to closed. Query and cursor reset on every close, whatever
/// triggered it.
fn close_overlay(state: &mut AppState) {
    state.is_open = false;
    state.input_focused = false;
    state.query = QueryInput::default();
    state.matches = filter::filter_commands(&state.catalog, "");
    state.cursor = 0;
    state.sync_list_selection();
}

/// Route the entry under the cursor. No-op when nothing is selected.
/// The palette clears exactly once here, for both action branches; the
/// Enter path and the click path both funnel through this.
fn activate_selected(state: &mut AppState) -> Option<Command> {
    if !state.is_open {
        return None;
    }
    let entry = state.selected_entry()?.clone();
    let query = state.query_text();

    let command = match entry.action.clone() {
        CommandAction::Remote(name) => {
            state.toast = Some(Toast {
                message: TOAST_MESSAGE.to_string(),
                expires_at: Instant::now()
                    + Duration::from_millis(state.config.toast_duration_ms),
            });
            Command::Relay {
                action: name,
                entry,
                query,
            }
        }
        CommandAction::Local(action) => Command::RunLocal { action, query },
    };

    close_overlay(state);
    Some(command)
}
