use ratatui::style::Color;

/// Titles and the focused form field.
pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3f, 0x46, 0x52);
pub const HEADER_TEXT: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const POPUP_BORDER: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const STATUS_OK: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x1e, 0x29, 0x3b);
