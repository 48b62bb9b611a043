//! # Header Component
//!
//! Top bar: a back chevron on every screen but Welcome, and the screen title
//! centered.
//!
//! Stateless. The screen is a prop from core state:
//!
//! ```rust,ignore
//! let mut header = Header::new(app.screen());
//! header.render(frame, header_area);
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::flow::Screen;
use crate::tui::component::Component;
use crate::tui::theme;

pub const BACK_LABEL: &str = "‹ Back";

pub struct Header {
    pub screen: Screen,
}

impl Header {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.screen.title(),
            Style::default()
                .fg(theme::TITLE_TEXT)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, area);

        if self.screen.previous().is_some() {
            let back = Span::styled(BACK_LABEL, Style::default().fg(theme::PRIMARY));
            frame.render_widget(Paragraph::new(Line::from(back)), area);
        }
    }
}
