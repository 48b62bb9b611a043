//! # SwipeDeck Component
//!
//! Renders the top card of the deck, shifted by the in-progress drag, with
//! the reject/accept buttons underneath. Only the top card is drawn.
//!
//! ## Points to cells
//!
//! Gestures are measured in points. A terminal cell is treated as
//! `POINTS_PER_COL` wide and `POINTS_PER_ROW` tall, so a 120 pt swipe is a
//! 15-column drag.
//!
//! ## Hit testing
//!
//! `render()` records where the top card landed in `card_area`. The event
//! loop only starts a gesture when the mouse goes down inside it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::catalog::Catalog;
use crate::core::deck::Deck;
use crate::core::gesture::{CardTransform, SWIPE_THRESHOLD};
use crate::core::item::Dish;
use crate::tui::component::Component;
use crate::tui::components::primary_button;
use crate::tui::theme;

pub const POINTS_PER_COL: f64 = 8.0;
pub const POINTS_PER_ROW: f64 = 16.0;

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 12;
const BUTTON_ROWS: u16 = 3;

/// Rotation (degrees) at which the like/nope stamp starts showing.
const TILT_HINT_DEGREES: f64 = 0.5;

pub const EMPTY_MESSAGE: &str = "You've swiped through all dishes!";

pub struct SwipeDeck<'a> {
    pub deck: &'a Deck,
    pub catalog: &'a Catalog,
    pub transform: CardTransform,
    /// Output: where the top card was drawn this frame.
    pub card_area: Option<Rect>,
}

impl<'a> SwipeDeck<'a> {
    pub fn new(deck: &'a Deck, catalog: &'a Catalog, transform: CardTransform) -> Self {
        Self {
            deck,
            catalog,
            transform,
            card_area: None,
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("✓", Style::default().fg(theme::ACCENT))),
            Line::default(),
            Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default()
                    .fg(theme::TITLE_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            primary_button("Enter", "See Results"),
        ];
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let buttons = Line::from(vec![
            Span::styled(" [←] ✗ Nope ", Style::default().fg(theme::REJECT).add_modifier(Modifier::BOLD)),
            Span::raw("        "),
            Span::styled(" [→] ♥ Like ", Style::default().fg(theme::PRIMARY).add_modifier(Modifier::BOLD)),
        ]);
        let remaining = Line::from(Span::styled(
            format!("{} left", self.deck.len()),
            theme::muted(),
        ));
        frame.render_widget(
            Paragraph::new(vec![Line::default(), buttons, remaining]).alignment(Alignment::Center),
            area,
        );
    }
}

/// Centered card rect, shifted by the transform and kept inside `area`.
pub fn card_rect(area: Rect, transform: CardTransform) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let base_x = area.x as f64 + (area.width - width) as f64 / 2.0;
    let base_y = area.y as f64 + (area.height - height) as f64 / 2.0;

    let max_x = (area.x + area.width - width) as f64;
    let max_y = (area.y + area.height - height) as f64;
    let x = (base_x + transform.offset_x / POINTS_PER_COL).round().clamp(area.x as f64, max_x);
    let y = (base_y + transform.offset_y / POINTS_PER_ROW).round().clamp(area.y as f64, max_y);

    Rect::new(x as u16, y as u16, width, height)
}

/// Stamp shown on the card while it is tilted. Bold once a release would
/// count as a decision.
fn tilt_stamp(transform: CardTransform) -> Option<Span<'static>> {
    let decisive = transform.offset_x.abs() > SWIPE_THRESHOLD;
    let stamp_style = |color: Color| {
        let base = Style::default().fg(color);
        if decisive {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base
        }
    };
    if transform.rotation_degrees > TILT_HINT_DEGREES {
        Some(Span::styled(" ♥ LIKE ", stamp_style(theme::PRIMARY)))
    } else if transform.rotation_degrees < -TILT_HINT_DEGREES {
        Some(Span::styled(" ✗ NOPE ", stamp_style(theme::REJECT)))
    } else {
        None
    }
}

/// Lean glyph drawn in the card's top corner, derived from the rotation hint.
fn lean(rotation_degrees: f64) -> &'static str {
    if rotation_degrees > TILT_HINT_DEGREES {
        "╱"
    } else if rotation_degrees < -TILT_HINT_DEGREES {
        "╲"
    } else {
        "│"
    }
}

fn dish_card<'a>(dish: &'a Dish, catalog: &'a Catalog, transform: CardTransform) -> Paragraph<'a> {
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::SECONDARY))
        .title(Line::from(lean(transform.rotation_degrees)).left_aligned());
    if let Some(stamp) = tilt_stamp(transform) {
        block = block.title(Line::from(stamp).right_aligned());
    }

    let mut lines = vec![
        Line::from(Span::styled(
            dish.name.as_str(),
            Style::default()
                .fg(theme::TITLE_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            dish.formatted_price(),
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(dish.description.as_str(), Style::default().fg(theme::BODY_TEXT))),
    ];
    if !dish.dietary_tags.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            dish.dietary_tags.join(" · "),
            Style::default().fg(theme::ACCENT),
        )));
    }
    if let Some(restaurant) = catalog.restaurant_for(dish) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} · {}", restaurant.name, restaurant.price_label()),
            theme::muted(),
        )));
    }

    Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
}

impl Component for SwipeDeck<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.card_area = None;

        let Some(top) = self.deck.top_card() else {
            self.render_empty(frame, area);
            return;
        };

        let [card_zone, button_zone] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(BUTTON_ROWS)]).areas(area);

        let rect = card_rect(card_zone, self.transform);
        frame.render_widget(dish_card(top, self.catalog, self.transform), rect);
        self.card_area = Some(rect);

        self.render_buttons(frame, button_zone);
    }
}
