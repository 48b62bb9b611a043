//! # Alert Modal
//!
//! Shows scanned text that is neither a URL nor a restaurant code.
//! Enter or Esc dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::centered_rect;
use crate::tui::theme;

pub const ALERT_TITLE: &str = " Scanned Code ";

pub struct AlertModal<'a> {
    pub message: &'a str,
}

impl<'a> AlertModal<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for AlertModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PRIMARY))
            .title(Line::from(ALERT_TITLE).centered())
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(" Enter OK ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(self.message)
            .style(Style::default().fg(theme::BODY_TEXT))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}
