use colored::Color;

pub const PRIMARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const HEADER: Color = Color::BrightMagenta;
pub const WARNING: Color = Color::Yellow;
pub const FAIL: Color = Color::Red;
