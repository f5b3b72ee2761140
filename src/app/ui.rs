use crate::app::state::AppState;
use crate::components::{helpers, palette::Palette, toast::ToastView};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

/// Top-level compositor: idle screen, then the palette overlay when open,
/// then any active toast on top.
pub fn draw(f: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    draw_idle(f, state, theme);

    if state.is_open {
        helpers::dim_area(f.buffer_mut(), area);
        Palette { theme }.render(f, state);
    }

    if let Some(toast) = &state.toast {
        let view = ToastView { theme, toast };
        view.render(area, f.buffer_mut());
    }
}

const LOGO: [&str; 5] = [
    "██     ██  █████  ██████  ██████ ",
    "██     ██ ██   ██ ██   ██ ██   ██",
    "██  █  ██ ███████ ██████  ██████ ",
    "██ ███ ██ ██   ██ ██   ██ ██     ",
    " ███ ███  ██   ██ ██   ██ ██     ",
];

fn draw_idle(f: &mut Frame, state: &AppState, theme: &Theme) {
    let area = f.area();
    let dynamic = state.catalog.iter().filter(|e| e.is_dynamic).count();
    let status = if dynamic > 0 {
        format!(
            "{} commands ({} open tabs)",
            state.catalog.len(),
            dynamic
        )
    } else {
        format!("{} commands", state.catalog.len())
    };

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme.idle_logo)).centered())
        .collect();
    lines.push(Line::default());
    lines.push(
        Line::from(vec![
            Span::styled("ctrl+k", theme.footer_key),
            Span::styled(" open the palette    ", theme.idle_text),
            Span::styled("q", theme.footer_key),
            Span::styled(" quit", theme.idle_text),
        ])
        .centered(),
    );
    lines.push(Line::from(Span::styled(status, theme.idle_text)).centered());

    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Paragraph::new(lines).render(rows[1], f.buffer_mut());
}
