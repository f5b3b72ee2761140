use crate::app::state::AppState;
use crate::domain::models::IconRef;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, StatefulWidget, Widget},
    Frame,
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Where the palette body sits on screen. Input hit-testing and rendering
/// must agree on this.
#[must_use]
pub fn palette_rect(area: Rect) -> Rect {
    centered_rect(60, 60, area)
}

/// Inner regions of the palette body: query line, separator, results list,
/// footer. Rows in the list are one terminal row each.
#[derive(Debug, Clone, Copy)]
pub struct PaletteLayout {
    pub query: Rect,
    pub separator: Rect,
    pub list: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn palette_layout(palette: Rect) -> PaletteLayout {
    let inner = Block::default().borders(Borders::ALL).inner(palette);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // query input
            Constraint::Length(1), // separator
            Constraint::Min(0),    // results
            Constraint::Length(1), // footer
        ])
        .split(inner);
    PaletteLayout {
        query: rows[0],
        separator: rows[1],
        list: rows[2],
        footer: rows[3],
    }
}

fn icon_span<'a>(icon: &'a IconRef, theme: &Theme) -> Span<'a> {
    match icon {
        IconRef::Glyph(glyph) => Span::styled(glyph.as_str(), theme.list_item),
        // A terminal cannot fetch favicons; any URL icon renders as the
        // generic globe, like the extension's broken-image fallback.
        IconRef::Url(_) => Span::styled("🌐", theme.list_item),
    }
}

pub struct Palette<'a> {
    pub theme: &'a Theme,
}

impl Palette<'_> {
    pub fn render(self, f: &mut Frame, state: &mut AppState) {
        let area = f.area();
        let modal_area = palette_rect(area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(f.buffer_mut(), modal_area, area);
        Clear.render(modal_area, f.buffer_mut());

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" WARP ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(modal_area, f.buffer_mut());

        let layout = palette_layout(modal_area);

        // Query line. The blinking caret only appears once the deferred
        // focus has landed.
        let query_text = state.query_text();
        let mut query_spans = vec![Span::styled(" > ", self.theme.query_prompt)];
        if query_text.is_empty() {
            query_spans.push(Span::styled(
                "Type a command or search",
                self.theme.placeholder,
            ));
        } else {
            query_spans.push(Span::styled(query_text, self.theme.query_text));
        }
        if state.input_focused {
            query_spans.push(Span::styled(
                "_",
                self.theme
                    .query_text
                    .add_modifier(ratatui::style::Modifier::SLOW_BLINK),
            ));
        }
        let query_line = Line::from(query_spans);
        f.buffer_mut()
            .set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);

        let separator = "─".repeat(layout.separator.width as usize);
        f.buffer_mut().set_string(
            layout.separator.x,
            layout.separator.y,
            separator,
            self.theme.border,
        );

        // Results. One row per match; the stateful render keeps the active
        // row scrolled into view.
        let items: Vec<ListItem> = state
            .matches
            .iter()
            .enumerate()
            .map(|(i, &catalog_idx)| {
                let entry = &state.catalog[catalog_idx];
                let style = if i == state.cursor {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if i == state.cursor { "▸ " } else { "  " };

                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    icon_span(&entry.icon, self.theme),
                    Span::styled(format!(" {:<18}", entry.title), style),
                    Span::styled(
                        format!(" {}", entry.description),
                        self.theme
                            .list_item
                            .add_modifier(ratatui::style::Modifier::DIM),
                    ),
                ]))
            })
            .collect();

        if items.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No commands found.",
                self.theme
                    .list_item
                    .add_modifier(ratatui::style::Modifier::DIM),
            ));
            f.buffer_mut()
                .set_line(layout.list.x, layout.list.y, &no_results, layout.list.width);
        } else {
            let list = List::new(items);
            StatefulWidget::render(list, layout.list, f.buffer_mut(), &mut state.list_state);
        }

        // Footer: result count left, navigation hint right.
        let count = format!(" {} results", state.matches.len());
        let hint = "Use arrow keys ↑ ↓ to navigate ";
        let padding = (layout.footer.width as usize)
            .saturating_sub(count.chars().count() + hint.chars().count());
        let footer_line = Line::from(vec![
            Span::styled(count, self.theme.footer_val),
            Span::raw(" ".repeat(padding)),
            Span::styled(hint, self.theme.footer_key),
        ]);
        f.buffer_mut().set_line(
            layout.footer.x,
            layout.footer.y,
            &footer_line,
            layout.footer.width,
        );
    }
}
