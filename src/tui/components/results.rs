//! # Results Screen
//!
//! The first three liked dishes, each with the restaurant that serves it and
//! how far away it is. An empty liked list gets a "try again" prompt instead.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::catalog::Catalog;
use crate::core::item::Dish;
use crate::tui::component::Component;
use crate::tui::components::{primary_button, secondary_button};
use crate::tui::theme;

pub const MAX_MATCHES: usize = 3;

pub struct Results<'a> {
    pub liked: &'a [Dish],
    pub catalog: &'a Catalog,
    /// (latitude, longitude) distances are measured from.
    pub origin: (f64, f64),
}

impl<'a> Results<'a> {
    pub fn new(liked: &'a [Dish], catalog: &'a Catalog, origin: (f64, f64)) -> Self {
        Self {
            liked,
            catalog,
            origin,
        }
    }

    fn location_line(&self, dish: &Dish) -> Line<'static> {
        let text = match self.catalog.restaurant_for(dish) {
            Some(r) => format!(
                "⌖ {} ({:.1} miles away)",
                r.name,
                r.distance_miles(self.origin.0, self.origin.1)
            ),
            None => "⌖ Unknown restaurant".to_string(),
        };
        Line::from(Span::styled(text, Style::default().fg(theme::ACCENT)))
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("?", Style::default().fg(theme::SECONDARY))),
            Line::default(),
            Line::from(Span::styled(
                "No matches found",
                Style::default()
                    .fg(theme::TITLE_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Try again with different preferences?", theme::muted())),
            Line::default(),
            primary_button("Enter", "Try Again"),
            Line::default(),
            secondary_button("a", "Start Over"),
        ];
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

impl Component for Results<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.liked.is_empty() {
            self.render_empty(frame, area);
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                "Top Matches",
                Style::default()
                    .fg(theme::TITLE_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Based on your group's preferences", theme::muted())),
            Line::default(),
        ];

        for (rank, dish) in self.liked.iter().take(MAX_MATCHES).enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}. {}", rank + 1, dish.name),
                    Style::default()
                        .fg(theme::TITLE_TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(dish.formatted_price(), Style::default().fg(theme::PRIMARY)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", dish.description),
                Style::default().fg(theme::BODY_TEXT),
            )));
            let mut location = self.location_line(dish);
            location.spans.insert(0, Span::raw("   "));
            lines.push(location);
            lines.push(Line::default());
        }

        lines.push(primary_button("Enter", "Try Again"));
        lines.push(Line::default());
        lines.push(secondary_button("a", "Start Over"));

        frame.render_widget(Paragraph::new(lines), area);
    }
}
