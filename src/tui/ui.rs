use crate::core::flow::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AlertModal, Filters, Header, JoinGroup, Results, Scanner, SwipeDeck, Welcome,
};
use crate::tui::theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1), Length(1)]);
    let [header_area, _, body_area, status_area, help_area] = layout.areas(frame.area());

    Header::new(app.screen()).render(frame, header_area);

    tui.card_area = None;
    match app.screen() {
        Screen::Welcome => Welcome.render(frame, body_area),
        Screen::JoinGroup => JoinGroup::new(&app.session).render(frame, body_area),
        Screen::Filters => Filters::new(&tui.filters, &app.session).render(frame, body_area),
        Screen::SwipeDeck => {
            let mut deck = SwipeDeck::new(&app.deck, &app.catalog, app.gesture.transform());
            deck.render(frame, body_area);
            tui.card_area = deck.card_area;
        }
        Screen::Results => {
            Results::new(app.deck.liked(), &app.catalog, app.origin).render(frame, body_area)
        }
    }

    if !app.status_message.is_empty() {
        let status = Span::styled(app.status_message.as_str(), Style::default().fg(theme::ACCENT));
        frame.render_widget(Paragraph::new(Line::from(status).centered()), status_area);
    }
    let help = Span::styled(help_text(app), theme::muted());
    frame.render_widget(Paragraph::new(Line::from(help).centered()), help_area);

    // Overlays last so they sit on top
    if app.scanner_open {
        Scanner::new(&tui.scanner).render(frame, frame.area());
    }
    if let Some(ref message) = app.alert {
        AlertModal::new(message).render(frame, frame.area());
    }
}

fn help_text(app: &App) -> &'static str {
    if app.alert.is_some() {
        return "Enter/Esc dismiss";
    }
    if app.scanner_open {
        return "Enter scan · Esc cancel";
    }
    match app.screen() {
        Screen::Welcome => "Enter group · s solo · c scan QR · q quit",
        Screen::JoinGroup => "Enter continue · b back · c scan QR · q quit",
        Screen::Filters => "↑↓ move · ←→ radius · Space toggle · Enter swipe · b back",
        Screen::SwipeDeck => "drag card or ←/h nope · →/l like · r results · b back",
        Screen::Results => "Enter try again · a start over · b back · q quit",
    }
}

/// Whether (col, row) is on the top card drawn last frame.
pub fn hit_test_card(card_area: Option<Rect>, col: u16, row: u16) -> bool {
    card_area.is_some_and(|area| area.contains(Position::new(col, row)))
}
