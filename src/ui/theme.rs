use ratatui::style::Color;

// Station status palette.
pub const STATUS_LOW: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const STATUS_MEDIUM: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_HIGH: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const STATUS_PEAK: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_NEUTRAL: Color = Color::Rgb(0x6b, 0x72, 0x80);

// Line colors.
pub const LINE_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LINE_GREEN: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const LINE_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);

// Trend and rush accents.
pub const TREND_UP: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const TREND_DOWN: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const TREND_FLAT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const RUSH_LOW: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const RUSH_MODERATE: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const RUSH_HIGH: Color = Color::Rgb(0xf8, 0x71, 0x71);

// Chrome.
pub const TITLE_ACCENT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BAR_TRACK: Color = Color::Rgb(0x47, 0x55, 0x69);
