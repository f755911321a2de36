use ratatui::style::Color;

pub const BUTTON_TEXT: Color = Color::Red;
pub const BUTTON_PRIMARY_TEXT: Color = Color::White;
pub const BUTTON_PRIMARY_BG: Color = Color::Blue;

pub const BROWSER_ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GROUP_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
