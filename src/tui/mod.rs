//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It is
//! also where effects returned by `update()` are carried out: the
//! auto-advance timer runs as a tokio task and the URL opener calls out to
//! the platform.
//!
//! ## Redraw Strategy
//!
//! The loop only draws after something happened: an input event, a
//! resize, or an action arriving from a background task. Between events it
//! sleeps in `poll` for up to 250ms so timer actions are picked up promptly.
//!
//! ## Gestures
//!
//! A left-button press on the top card starts a gesture. Drag samples are
//! converted from cells to points relative to the press and sent as
//! `DragChanged`; the release sends `DragEnded`.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::StartMode;
use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::deck::Decision;
use crate::core::flow::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::swipe_deck::{POINTS_PER_COL, POINTS_PER_ROW};
use crate::tui::components::{FilterEvent, FiltersState, ScanEvent, ScannerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub filters: FiltersState,
    pub scanner: ScannerState,
    /// Where the top card was drawn last frame (hit testing).
    pub card_area: Option<ratatui::layout::Rect>,
    /// Cell where the current gesture started.
    pub drag_origin: Option<(u16, u16)>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            filters: FiltersState::new(),
            scanner: ScannerState::new(),
            card_area: None,
            drag_origin: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Show);
    }
}

pub fn run(config: ResolvedConfig, catalog: Catalog, mode: StartMode) -> std::io::Result<()> {
    let mut app = App::from_config(catalog, &config);
    let mut tui = TuiState::new();

    if mode == StartMode::Solo {
        update(&mut app, Action::SoloMode);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable mouse capture: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = action_for_event(&app, &mut tui, event)
                && !dispatch(&mut app, action, &tx)
            {
                break 'main;
            }
        }

        // Handle background task actions (auto-advance timer)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if !dispatch(&mut app, action, &tx) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    info!("Dish Decider shutting down");
    Ok(())
}

/// Run `action` through the reducer and carry out its effect.
/// Returns false when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::None => true,
        Effect::Quit => false,
        Effect::ScheduleAutoAdvance { generation, delay } => {
            spawn_auto_advance(generation, delay, tx.clone());
            true
        }
        Effect::OpenUrl(url) => {
            info!("Opening URL: {}", url);
            if let Err(e) = open::that(url.as_str()) {
                warn!("Failed to open {}: {}", url, e);
                app.status_message = format!("Could not open {}", url);
            }
            true
        }
    }
}

/// Sleep `delay`, then feed the auto-advance back into the loop.
fn spawn_auto_advance(
    generation: u64,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Scheduling auto-advance (gen {}) in {:?}", generation, delay);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Action::AutoAdvance { generation }).is_err() {
            warn!("Failed to send auto-advance (gen {}): receiver dropped", generation);
        }
    })
}

/// Translate a terminal event into a core action, routing through whichever
/// overlay or screen currently owns input.
///
/// A gesture only survives while the deck owns input and every action in
/// between is part of the drag. Otherwise the origin is dropped and a later
/// release does nothing.
fn action_for_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    let action = route_event(app, tui, event);
    let deck_owns_input =
        app.screen() == Screen::SwipeDeck && app.alert.is_none() && !app.scanner_open;
    let interrupts_drag = action
        .as_ref()
        .is_some_and(|a| !matches!(a, Action::DragChanged { .. } | Action::DragEnded { .. }));
    if !deck_owns_input || interrupts_drag {
        tui.drag_origin = None;
    }
    action
}

fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    // ForceQuit (Ctrl+C) always quits regardless of mode
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }

    // Alert is modal
    if app.alert.is_some() {
        return matches!(event, TuiEvent::Submit | TuiEvent::Escape).then_some(Action::DismissAlert);
    }

    // When the scanner is open, route all events to it
    if app.scanner_open {
        return tui.scanner.handle_event(&event).map(|scan| match scan {
            ScanEvent::Scanned(code) => Action::ScanSucceeded(code),
            ScanEvent::Cancelled => Action::ScanFailed,
        });
    }

    match event {
        TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::InputChar('c') => {
            tui.scanner = ScannerState::new();
            return Some(Action::OpenScanner);
        }
        TuiEvent::Backspace | TuiEvent::InputChar('b') => return Some(Action::Back),
        _ => {}
    }

    match app.screen() {
        Screen::Welcome => match event {
            TuiEvent::Submit => Some(Action::StartGroupSession),
            TuiEvent::InputChar('s') => Some(Action::SoloMode),
            _ => None,
        },
        Screen::JoinGroup => match event {
            TuiEvent::Submit => Some(Action::ContinueToFilters),
            _ => None,
        },
        Screen::Filters => tui.filters.handle_event(&event).map(|filter| match filter {
            FilterEvent::AdjustRadius(step) => Action::SetRadius(app.session.location_radius + step),
            FilterEvent::ToggleDietary(option) => Action::ToggleDietary(option),
            FilterEvent::ToggleVibe(option) => Action::ToggleVibe(option),
            FilterEvent::StartSwiping => Action::StartSwiping,
        }),
        Screen::SwipeDeck => swipe_deck_action(app, tui, event),
        Screen::Results => match event {
            TuiEvent::Submit => Some(Action::TryAgain),
            TuiEvent::InputChar('a') => Some(Action::StartOver),
            _ => None,
        },
    }
}

fn swipe_deck_action(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Left | TuiEvent::InputChar('h') => Some(Action::Decide(Decision::Reject)),
        TuiEvent::Right | TuiEvent::InputChar('l') => Some(Action::Decide(Decision::Accept)),
        TuiEvent::InputChar('r') => Some(Action::SeeResults),
        TuiEvent::Submit if app.deck.is_empty() => Some(Action::SeeResults),
        TuiEvent::MouseDown(col, row) => {
            tui.drag_origin = ui::hit_test_card(tui.card_area, col, row).then_some((col, row));
            None
        }
        TuiEvent::MouseDrag(col, row) => tui.drag_origin.map(|origin| {
            let (x, y) = cells_to_points(origin, (col, row));
            Action::DragChanged { x, y }
        }),
        TuiEvent::MouseUp(col, row) => tui.drag_origin.take().map(|origin| {
            let (x, y) = cells_to_points(origin, (col, row));
            Action::DragEnded { x, y }
        }),
        _ => None,
    }
}

/// Cell delta from `origin` to `to`, in points.
fn cells_to_points(origin: (u16, u16), to: (u16, u16)) -> (f64, f64) {
    let dx = f64::from(to.0) - f64::from(origin.0);
    let dy = f64::from(to.1) - f64::from(origin.1);
    (dx * POINTS_PER_COL, dy * POINTS_PER_ROW)
}
