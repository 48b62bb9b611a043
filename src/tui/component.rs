use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields), usually borrowed from `App`.
/// - They may write back presentation facts (e.g. `SwipeDeck::card_area`).
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component can record layout it computed
/// during the draw, like where the top card ended up after the drag offset.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
