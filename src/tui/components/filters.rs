//! # Filters Component
//!
//! The "Preferences" screen: a radius slider followed by the dietary and vibe
//! checkboxes, navigated with a single cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FiltersState` lives in `TuiState` (cursor position survives redraws)
//! - `Filters` is created each frame with borrowed state and session
//!
//! ```text
//! row 0        Location Radius   ◀ ━━━━●────── ▶  Within 5 miles
//! rows 1..=5   [x] Vegetarian ...
//! rows 6..=10  [ ] Casual ...
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::session::{DIETARY_OPTIONS, MAX_RADIUS, MIN_RADIUS, Session, VIBE_OPTIONS};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::primary_button;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const RADIUS_ROW: usize = 0;
const ROW_COUNT: usize = 1 + DIETARY_OPTIONS.len() + VIBE_OPTIONS.len();
const SLIDER_WIDTH: usize = 24;

/// What the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Radius,
    Dietary(&'static str),
    Vibe(&'static str),
}

fn row_at(index: usize) -> FilterRow {
    match index {
        RADIUS_ROW => FilterRow::Radius,
        i if i <= DIETARY_OPTIONS.len() => FilterRow::Dietary(DIETARY_OPTIONS[i - 1]),
        i => FilterRow::Vibe(VIBE_OPTIONS[(i - 1 - DIETARY_OPTIONS.len()).min(VIBE_OPTIONS.len() - 1)]),
    }
}

/// Events emitted by the filters screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    /// Slider step, in miles.
    AdjustRadius(f64),
    ToggleDietary(String),
    ToggleVibe(String),
    StartSwiping,
}

#[derive(Debug, Default)]
pub struct FiltersState {
    pub cursor: usize,
}

impl FiltersState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> FilterRow {
        row_at(self.cursor)
    }
}

impl EventHandler for FiltersState {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FilterEvent> {
        match event {
            TuiEvent::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::Down => {
                self.cursor = (self.cursor + 1).min(ROW_COUNT - 1);
                None
            }
            TuiEvent::Left if self.cursor == RADIUS_ROW => Some(FilterEvent::AdjustRadius(-1.0)),
            TuiEvent::Right if self.cursor == RADIUS_ROW => Some(FilterEvent::AdjustRadius(1.0)),
            TuiEvent::InputChar(' ') => match self.selected() {
                FilterRow::Radius => None,
                FilterRow::Dietary(option) => Some(FilterEvent::ToggleDietary(option.to_string())),
                FilterRow::Vibe(option) => Some(FilterEvent::ToggleVibe(option.to_string())),
            },
            TuiEvent::Submit => Some(FilterEvent::StartSwiping),
            _ => None,
        }
    }
}

/// Transient render wrapper for the filters screen.
pub struct Filters<'a> {
    state: &'a FiltersState,
    session: &'a Session,
}

impl<'a> Filters<'a> {
    pub fn new(state: &'a FiltersState, session: &'a Session) -> Self {
        Self { state, session }
    }

    fn row_style(&self, index: usize) -> Style {
        if self.state.cursor == index {
            Style::default()
                .fg(theme::TITLE_TEXT)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(theme::BODY_TEXT)
        }
    }

    fn slider(&self) -> String {
        let span = MAX_RADIUS - MIN_RADIUS;
        let fraction = ((self.session.location_radius - MIN_RADIUS) / span).clamp(0.0, 1.0);
        let knob = (fraction * (SLIDER_WIDTH - 1) as f64).round() as usize;
        (0..SLIDER_WIDTH)
            .map(|i| match i.cmp(&knob) {
                std::cmp::Ordering::Less => '━',
                std::cmp::Ordering::Equal => '●',
                std::cmp::Ordering::Greater => '─',
            })
            .collect()
    }

    fn checkbox(&self, index: usize, option: &str, checked: bool) -> Line<'static> {
        let mark = if checked { "[x]" } else { "[ ]" };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{mark} {option}"), self.row_style(index)),
        ])
    }
}

impl Component for Filters<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Where would you like to eat?",
                Style::default()
                    .fg(theme::TITLE_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled("Distance", theme::heading())),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("Location Radius ", self.row_style(RADIUS_ROW)),
                Span::styled(format!(" ◀ {} ▶ ", self.slider()), Style::default().fg(theme::PRIMARY)),
                Span::styled(self.session.radius_label(), theme::muted()),
            ]),
            Line::default(),
            Line::from(Span::styled("Dietary Preferences", theme::heading())),
        ];

        for (i, option) in DIETARY_OPTIONS.iter().enumerate() {
            lines.push(self.checkbox(1 + i, option, self.session.has_dietary(option)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Vibe", theme::heading())));
        for (i, option) in VIBE_OPTIONS.iter().enumerate() {
            let index = 1 + DIETARY_OPTIONS.len() + i;
            lines.push(self.checkbox(index, option, self.session.has_vibe(option)));
        }
        lines.push(Line::default());
        lines.push(primary_button("Enter", "Start Swiping"));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    #[test]
    fn test_cursor_clamps() {
        let mut state = FiltersState::new();
        state.handle_event(&TuiEvent::Up);
        assert_eq!(state.cursor, 0);
        for _ in 0..50 {
            state.handle_event(&TuiEvent::Down);
        }
        assert_eq!(state.cursor, ROW_COUNT - 1);
        assert_eq!(state.selected(), FilterRow::Vibe("Date Night"));
    }

    #[test]
    fn test_left_right_adjust_radius_only_on_slider() {
        let mut state = FiltersState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Right),
            Some(FilterEvent::AdjustRadius(1.0))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Left),
            Some(FilterEvent::AdjustRadius(-1.0))
        );

        state.handle_event(&TuiEvent::Down);
        assert_eq!(state.handle_event(&TuiEvent::Right), None);
    }

    #[test]
    fn test_space_toggles_selected_option() {
        let mut state = FiltersState::new();
        assert_eq!(state.handle_event(&TuiEvent::InputChar(' ')), None);

        state.handle_event(&TuiEvent::Down);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' ')),
            Some(FilterEvent::ToggleDietary("Vegetarian".to_string()))
        );

        for _ in 0..DIETARY_OPTIONS.len() {
            state.handle_event(&TuiEvent::Down);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' ')),
            Some(FilterEvent::ToggleVibe("Casual".to_string()))
        );
    }

    #[test]
    fn test_enter_starts_swiping() {
        let mut state = FiltersState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(FilterEvent::StartSwiping));
    }

    #[test]
    fn test_render_reflects_session() {
        let state = FiltersState::new();
        let session = Session::sample().toggle_dietary("Vegan");
        let text = render_text(80, 24, |f| Filters::new(&state, &session).render(f, f.area()));

        assert!(text.contains("Within 5 miles"));
        assert!(text.contains("[x] Vegan"));
        assert!(text.contains("[ ] Vegetarian"));
        assert!(text.contains("[x] Casual"));
        assert!(text.contains("[ ] Upscale"));
        assert!(text.contains("Start Swiping"));
    }
}
