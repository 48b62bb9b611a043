//! # Scanner Overlay
//!
//! Stands in for the camera: the decoded QR text is typed or pasted in.
//! Enter reports a successful scan, Esc cancels.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ScannerState` lives in `TuiState` while the overlay is open
//! - `Scanner` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Events emitted by the scanner overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    Scanned(String),
    Cancelled,
}

#[derive(Debug, Default)]
pub struct ScannerState {
    pub buffer: String,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for ScannerState {
    type Event = ScanEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScanEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            // Scanners hand over a single line
            TuiEvent::Paste(data) => {
                self.buffer.push_str(data.trim_end_matches(['\r', '\n']));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => {
                if self.buffer.is_empty() {
                    None
                } else {
                    Some(ScanEvent::Scanned(std::mem::take(&mut self.buffer)))
                }
            }
            TuiEvent::Escape => Some(ScanEvent::Cancelled),
            _ => None,
        }
    }
}

/// Transient render wrapper for the scanner overlay.
pub struct Scanner<'a> {
    state: &'a ScannerState,
}

impl<'a> Scanner<'a> {
    pub fn new(state: &'a ScannerState) -> Self {
        Self { state }
    }
}

impl Component for Scanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 40, area);
        // borders + padding + prompt + cursor
        let input_width = overlay.width.saturating_sub(7) as usize;
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(" Scan QR Code ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Scan  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        let lines = vec![
            Line::from(Span::styled(
                "Position the QR code within the frame",
                theme::muted(),
            )),
            Line::from(Span::styled("(paste or type the decoded text)", theme::muted())),
            Line::default(),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme::PRIMARY)),
                Span::styled(
                    visible_tail(&self.state.buffer, input_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled("▏", Style::default().fg(theme::PRIMARY)),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            overlay,
        );
    }
}

/// The longest suffix of `text` that fits in `width` columns.
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[i + c.len_utf8()..];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    #[test]
    fn test_typing_and_submit() {
        let mut state = ScannerState::new();
        for c in "hello".chars() {
            assert_eq!(state.handle_event(&TuiEvent::InputChar(c)), None);
        }
        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ScanEvent::Scanned("hell".to_string()))
        );
        assert!(state.buffer.is_empty());
    }

    #[test]
    fn test_paste_strips_trailing_newline() {
        let mut state = ScannerState::new();
        state.handle_event(&TuiEvent::Paste("restaurant:42\n".to_string()));
        assert_eq!(state.buffer, "restaurant:42");
    }

    #[test]
    fn test_empty_submit_ignored() {
        let mut state = ScannerState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_escape_cancels() {
        let mut state = ScannerState::new();
        state.buffer = "half".to_string();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ScanEvent::Cancelled));
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("restaurant:42", 40), "restaurant:42");
        assert_eq!(visible_tail("restaurant:42", 2), "42");
        assert_eq!(visible_tail("寿司bar", 4), "bar");
        assert_eq!(visible_tail("", 0), "");
    }

    #[test]
    fn test_render_shows_buffer() {
        let state = ScannerState {
            buffer: "https://example.com".to_string(),
        };
        let text = render_text(80, 20, |f| Scanner::new(&state).render(f, f.area()));
        assert!(text.contains("Scan QR Code"));
        assert!(text.contains("https://example.com"));
    }
}
