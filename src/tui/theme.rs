//! Colour palette and shared styles.

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY: Color = Color::Rgb(232, 84, 33); // orange-red
pub const SECONDARY: Color = Color::Rgb(242, 130, 46); // orange
pub const ACCENT: Color = Color::Rgb(18, 120, 110); // teal

pub const TITLE_TEXT: Color = Color::Rgb(33, 38, 51);
pub const BODY_TEXT: Color = Color::Rgb(69, 74, 84);
pub const LIGHT_TEXT: Color = Color::Rgb(145, 150, 156);

pub const REJECT: Color = Color::Red;

pub fn primary_button() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn secondary_button() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(LIGHT_TEXT)
}
