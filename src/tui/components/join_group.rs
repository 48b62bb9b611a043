//! # Join Group Screen
//!
//! Lists the session's members under the group name.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::session::Session;
use crate::tui::component::Component;
use crate::tui::components::primary_button;
use crate::tui::theme;

pub struct JoinGroup<'a> {
    pub session: &'a Session,
}

impl<'a> JoinGroup<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl Component for JoinGroup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Your Group",
                Style::default()
                    .fg(theme::TITLE_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.session.name.as_str(), theme::muted())),
            Line::default(),
        ];
        lines.extend(self.session.members.iter().map(|member| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(theme::ACCENT)),
                Span::styled(member.as_str(), Style::default().fg(theme::BODY_TEXT)),
            ])
        }));
        lines.push(Line::default());
        lines.push(primary_button("Enter", "Continue"));

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
