use super::palette::Palette;
use ratatui::style::Color;

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    base: Color::Rgb(30, 30, 46),
    surface: Color::Rgb(69, 71, 90),
    overlay: Color::Rgb(108, 112, 134),
    text: Color::Rgb(205, 214, 244),
    subtext: Color::Rgb(166, 173, 200),
    blue: Color::Rgb(137, 180, 250),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
};
