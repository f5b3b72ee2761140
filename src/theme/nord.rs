use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    base: Color::Rgb(46, 52, 64),
    surface: Color::Rgb(67, 76, 94),
    overlay: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    subtext: Color::Rgb(216, 222, 233),
    blue: Color::Rgb(129, 161, 193),
    green: Color::Rgb(163, 190, 140),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
    mauve: Color::Rgb(180, 142, 173),
};
