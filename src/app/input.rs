use crate::app::{action::Action, state::AppState};
use crate::components::palette;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

/// Translate a terminal event into an `Action`. Pure: hit-testing uses the
/// same geometry the renderer does.
pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) if app_state.is_open => map_open_key(key),
        Event::Key(key) => map_idle_key(key),
        Event::Mouse(mouse) if app_state.is_open => {
            map_mouse(mouse, app_state, terminal_size)
        }
        _ => None,
    }
}

fn map_idle_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ToggleOverlay)
        }
        _ => None,
    }
}

fn map_open_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('k') => Some(Action::ToggleOverlay),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(Action::CloseOverlay),
        KeyCode::Down => Some(Action::CursorNext),
        KeyCode::Up => Some(Action::CursorPrev),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Enter => Some(Action::Activate),
        // Everything else edits the query.
        _ => Some(Action::QueryInput(key)),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let body = palette::palette_rect(area);
    let layout = palette::palette_layout(body);

    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::CursorPrev),
        MouseEventKind::ScrollDown => Some(Action::CursorNext),
        // Hover always overrides the keyboard cursor.
        MouseEventKind::Moved => {
            resolve_hovered_row(app_state, layout.list, mouse.column, mouse.row)
                .map(Action::CursorSet)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if !body.contains(Position::new(mouse.column, mouse.row)) {
                // Click on the backdrop dismisses the overlay.
                return Some(Action::CloseOverlay);
            }
            resolve_hovered_row(app_state, layout.list, mouse.column, mouse.row)
                .map(Action::ActivateIndex)
        }
        _ => None,
    }
}

/// Map a screen position to an index into the filtered list, accounting for
/// the list's scroll offset. Rows are one terminal row each.
fn resolve_hovered_row(
    app_state: &AppState<'_>,
    list: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    if !list.contains(Position::new(column, row)) {
        return None;
    }
    let index = app_state.list_state.offset() + (row - list.y) as usize;
    (index < app_state.matches.len()).then_some(index)
}
