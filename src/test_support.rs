//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::catalog::Catalog;
use crate::core::item::Dish;
use crate::core::session::Session;
use crate::core::state::App;

/// Plain dishes named after `names`, in order, with no restaurant.
pub fn dishes(names: &[&str]) -> Vec<Dish> {
    names
        .iter()
        .map(|name| Dish::new(name, "test dish", 10.0, "fork.knife", "test-kitchen", &[]))
        .collect()
}

/// Creates a test App over the sample catalog and sample group.
pub fn test_app() -> App {
    App::new(Catalog::sample(), Session::sample())
}

/// A test App already navigated to the swipe deck via solo mode.
pub fn app_on_swipe_deck() -> App {
    let mut app = test_app();
    update(&mut app, Action::SoloMode);
    update(&mut app, Action::StartSwiping);
    app
}

/// Render with `draw` into a `width`×`height` test terminal and return the
/// buffer text, row by row.
pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
