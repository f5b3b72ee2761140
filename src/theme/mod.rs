use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_active: Style,

    pub query_prompt: Style,
    pub query_text: Style,
    pub placeholder: Style,

    pub list_item: Style,
    pub list_selected: Style,

    pub footer_key: Style,
    pub footer_val: Style,

    pub toast_border: Style,
    pub toast_text: Style,
    pub toast_accent: Style,

    pub idle_logo: Style,
    pub idle_text: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    CatppuccinMocha,
    Nord,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface),
            border_focus: Style::default().fg(p.blue),

            header_active: Style::default()
                .fg(p.base)
                .bg(p.blue)
                .add_modifier(Modifier::BOLD),

            query_prompt: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            query_text: Style::default().fg(p.text),
            placeholder: Style::default().fg(p.overlay),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),

            footer_key: Style::default().fg(p.subtext),
            footer_val: Style::default().fg(p.overlay),

            toast_border: Style::default().fg(p.green),
            toast_text: Style::default().fg(p.text),
            toast_accent: Style::default().fg(p.green).add_modifier(Modifier::BOLD),

            idle_logo: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            idle_text: Style::default().fg(p.subtext),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
