use crate::app::state::Toast;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub struct ToastView<'a> {
    pub theme: &'a Theme,
    pub toast: &'a Toast,
}

impl ToastView<'_> {
    /// Bottom-right corner, like the extension's toast element.
    #[must_use]
    pub fn rect(&self, area: Rect) -> Rect {
        let width = (self.toast.message.chars().count() as u16 + 6).min(area.width);
        let height = 3.min(area.height);
        Rect {
            x: area.right().saturating_sub(width + 2).max(area.x),
            y: area.bottom().saturating_sub(height + 1).max(area.y),
            width,
            height,
        }
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.rect(area);
        if toast_area.width < 4 || toast_area.height < 3 {
            return;
        }
        Clear.render(toast_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.toast_border);
        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(" ✓ ", self.theme.toast_accent),
            Span::styled(self.toast.message.as_str(), self.theme.toast_text),
        ]))
        .block(block);
        paragraph.render(toast_area, buf);
    }
}
