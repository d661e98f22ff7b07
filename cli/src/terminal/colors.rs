use colored::Color;

pub const PRIMARY: Color = Color::BrightMagenta;
pub const SECONDARY: Color = Color::Magenta;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ALERT: Color = Color::BrightRed;
