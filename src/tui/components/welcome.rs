//! # Welcome Screen

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::{primary_button, secondary_button};
use crate::tui::theme;

pub const TAGLINE: &str = "Never argue about where to eat again!";

pub struct Welcome;

impl Component for Welcome {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("( ✕ )", Style::default().fg(theme::SECONDARY))),
            Line::default(),
            Line::from(Span::styled(
                "Dish Decider",
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(theme::BODY_TEXT))),
            Line::default(),
            primary_button("Enter", "Start Group Session"),
            Line::default(),
            secondary_button("s", "Solo Mode"),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
