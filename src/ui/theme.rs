use ratatui::style::{Color, Modifier, Style};

pub const GOLD: Color = Color::Rgb(201, 163, 94);

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(GOLD)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const BRAND: Style = Style::new().fg(GOLD).add_modifier(Modifier::BOLD);

/// Header look once the page is scrolled.
pub const HEADER_GLASS: Style = Style::new().fg(Color::White).bg(Color::Rgb(28, 26, 34));

pub const HEADER_CLEAR: Style = Style::new().fg(Color::White);

pub const NAV_ACTIVE: Style = Style::new().fg(GOLD).add_modifier(Modifier::BOLD);

pub const NAV_LINK: Style = Style::new().fg(Color::Gray);

pub const BORDER_FOCUSED: Style = Style::new().fg(GOLD);

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const FILTER_ACTIVE: Style = Style::new()
    .fg(Color::Black)
    .bg(GOLD)
    .add_modifier(Modifier::BOLD);

pub const FILTER: Style = Style::new().fg(Color::Gray);

pub const CHIP: Style = Style::new().fg(Color::Rgb(220, 200, 160)).bg(Color::Rgb(48, 42, 36));

pub const PRICE: Style = Style::new().fg(GOLD).add_modifier(Modifier::BOLD);

pub const BUTTON: Style = Style::new().fg(Color::White).add_modifier(Modifier::UNDERLINED);

pub const COVER: Style = Style::new().fg(Color::Rgb(250, 235, 200)).bg(Color::Rgb(92, 70, 40));

/// Decorative gradient shown when a book has no cover.
pub const COVER_FALLBACK: Style = Style::new().fg(Color::Rgb(120, 100, 70)).bg(Color::Rgb(36, 32, 40));
