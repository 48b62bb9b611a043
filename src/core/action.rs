//! # Actions
//!
//! Everything that can happen in Dish Decider becomes an `Action`.
//! User swipes right? That's `Action::DragEnded { x, y }`.
//! Scanner reads a code? That's `Action::ScanSucceeded(code)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//! No side effects here. Timers and URL opening happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Duration;

use log::{debug, info};
use url::Url;

use crate::core::deck::{DeckEvent, Decision};
use crate::core::flow::{AUTO_ADVANCE_DELAY, AutoAdvance, Screen};
use crate::core::gesture::GestureOutcome;
use crate::core::qr::{self, QrAction};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Screen flow
    StartGroupSession,
    SoloMode,
    ContinueToFilters,
    StartSwiping,
    SeeResults,
    Back,
    TryAgain,
    StartOver,

    // Filters screen
    SetRadius(f64),
    ToggleDietary(String),
    ToggleVibe(String),

    // Swipe deck (points)
    DragChanged { x: f64, y: f64 },
    DragEnded { x: f64, y: f64 },
    /// Reject/accept buttons; bypasses the gesture threshold.
    Decide(Decision),

    /// Delayed follow-up to deck exhaustion.
    AutoAdvance { generation: u64 },

    // QR scanner
    OpenScanner,
    ScanSucceeded(String),
    ScanFailed,
    DismissAlert,

    Quit,
}

/// Work for the adapter after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Feed `Action::AutoAdvance { generation }` back after `delay`.
    ScheduleAutoAdvance { generation: u64, delay: Duration },
    OpenUrl(Url),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {:?}", action, app.screen());

    match action {
        Action::StartGroupSession => {
            app.flow.start_group_session();
            Effect::None
        }
        Action::SoloMode => {
            if app.flow.solo_mode() {
                app.session = std::mem::take(&mut app.session).solo();
            }
            Effect::None
        }
        Action::ContinueToFilters => {
            app.flow.continue_to_filters();
            Effect::None
        }
        Action::StartSwiping => {
            app.flow.start_swiping();
            Effect::None
        }
        Action::SeeResults => {
            app.flow.see_results();
            Effect::None
        }
        Action::Back => {
            app.flow.back();
            app.gesture.reset();
            Effect::None
        }
        Action::TryAgain => {
            if app.flow.try_again() {
                app.reload_deck();
            }
            Effect::None
        }
        Action::StartOver => {
            if app.flow.start_over() {
                app.reload_deck();
            }
            Effect::None
        }

        Action::SetRadius(radius) => {
            if app.screen() == Screen::Filters {
                app.session = std::mem::take(&mut app.session).with_radius(radius);
            }
            Effect::None
        }
        Action::ToggleDietary(option) => {
            if app.screen() == Screen::Filters {
                app.session = std::mem::take(&mut app.session).toggle_dietary(&option);
            }
            Effect::None
        }
        Action::ToggleVibe(option) => {
            if app.screen() == Screen::Filters {
                app.session = std::mem::take(&mut app.session).toggle_vibe(&option);
            }
            Effect::None
        }

        Action::DragChanged { x, y } => {
            if app.screen() == Screen::SwipeDeck && !app.deck.is_empty() {
                app.gesture.on_drag(x, y);
            }
            Effect::None
        }
        Action::DragEnded { x, y } => {
            if app.screen() != Screen::SwipeDeck || app.deck.is_empty() {
                app.gesture.reset();
                return Effect::None;
            }
            match app.gesture.on_end(x, y) {
                GestureOutcome::Decided { decision, .. } => apply_decision(app, decision),
                GestureOutcome::SnapBack => Effect::None,
            }
        }
        Action::Decide(decision) => {
            if app.screen() != Screen::SwipeDeck {
                return Effect::None;
            }
            app.gesture.reset();
            apply_decision(app, decision)
        }

        Action::AutoAdvance { generation } => {
            app.flow.fire_auto_advance(AutoAdvance { generation });
            Effect::None
        }

        Action::OpenScanner => {
            app.scanner_open = true;
            app.gesture.reset();
            Effect::None
        }
        Action::ScanSucceeded(code) => {
            app.scanner_open = false;
            handle_qr_code(app, &code)
        }
        Action::ScanFailed => {
            app.scanner_open = false;
            app.status_message = "Scan cancelled".to_string();
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Remove the top card and, if that emptied the deck, schedule the jump to
/// Results.
fn apply_decision(app: &mut App, decision: Decision) -> Effect {
    let event = app.deck.decide(decision);
    if event != DeckEvent::Unchanged {
        app.last_removal = Some(decision.removal_transition());
    }

    match event {
        DeckEvent::Exhausted => {
            let ticket = app.flow.schedule_auto_advance();
            info!(
                "Deck exhausted with {} liked; auto-advance scheduled (gen {})",
                app.deck.liked().len(),
                ticket.generation
            );
            Effect::ScheduleAutoAdvance {
                generation: ticket.generation,
                delay: AUTO_ADVANCE_DELAY,
            }
        }
        DeckEvent::Removed | DeckEvent::Unchanged => Effect::None,
    }
}

fn handle_qr_code(app: &mut App, code: &str) -> Effect {
    match qr::classify(code, &app.url_schemes) {
        QrAction::OpenUrl(url) => {
            info!("QR code is a URL: {}", url);
            app.status_message = format!("Opening {}", url);
            Effect::OpenUrl(url)
        }
        QrAction::ResolveRestaurant(id) => {
            match app.catalog.restaurant(&id) {
                Some(restaurant) => {
                    info!("QR code resolved restaurant '{}'", restaurant.id);
                    app.status_message = format!("{} · {}", restaurant.name, restaurant.address);
                }
                None => {
                    info!("QR code names unknown restaurant '{}'", id);
                    app.alert = Some(format!("Unknown restaurant: {}", id));
                }
            }
            Effect::None
        }
        QrAction::Alert(text) => {
            app.alert = Some(text);
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gesture::RemovalTransition;
    use crate::test_support::{app_on_swipe_deck, test_app};

    fn drag(app: &mut App, x: f64) -> Effect {
        update(app, Action::DragChanged { x: x / 2.0, y: 5.0 });
        update(app, Action::DragEnded { x, y: 10.0 })
    }

    #[test]
    fn test_solo_mode_collapses_members() {
        let mut app = test_app();
        update(&mut app, Action::SoloMode);
        assert_eq!(app.session.members, vec!["You"]);
        assert_eq!(app.screen(), Screen::Filters);

        update(&mut app, Action::Back);
        assert_eq!(app.screen(), Screen::JoinGroup);
    }

    #[test]
    fn test_solo_mode_off_welcome_keeps_group() {
        let mut app = test_app();
        update(&mut app, Action::StartGroupSession);
        update(&mut app, Action::SoloMode);
        assert_eq!(app.session.members.len(), 4);
        assert_eq!(app.screen(), Screen::JoinGroup);
    }

    #[test]
    fn test_swipe_right_likes_top() {
        let mut app = app_on_swipe_deck();
        let top = app.deck.top_card().cloned().unwrap();
        let before = app.deck.len();

        assert_eq!(drag(&mut app, 200.0), Effect::None);
        assert_eq!(app.deck.len(), before - 1);
        assert_eq!(app.deck.liked(), &[top]);
        assert_eq!(app.last_removal, Some(RemovalTransition::TrailingBottom));
        assert!(app.gesture.drag().is_zero());
    }

    #[test]
    fn test_swipe_left_rejects() {
        let mut app = app_on_swipe_deck();
        let before = app.deck.len();
        drag(&mut app, -200.0);
        assert_eq!(app.deck.len(), before - 1);
        assert!(app.deck.liked().is_empty());
        assert_eq!(app.last_removal, Some(RemovalTransition::LeadingBottom));
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut app = app_on_swipe_deck();
        let before = app.deck.len();
        drag(&mut app, 120.0);
        assert_eq!(app.deck.len(), before);
        assert!(app.gesture.drag().is_zero());
        assert_eq!(app.last_removal, None);
    }

    #[test]
    fn test_drag_ignored_off_deck_screen() {
        let mut app = test_app();
        update(&mut app, Action::DragChanged { x: 50.0, y: 0.0 });
        assert!(app.gesture.drag().is_zero());
        update(&mut app, Action::Decide(Decision::Accept));
        assert_eq!(app.deck.len(), app.catalog.dishes.len());
    }

    #[test]
    fn test_buttons_bypass_threshold() {
        let mut app = app_on_swipe_deck();
        update(&mut app, Action::Decide(Decision::Accept));
        assert_eq!(app.deck.liked().len(), 1);
        assert_eq!(app.last_removal, Some(RemovalTransition::TrailingBottom));
        update(&mut app, Action::Decide(Decision::Reject));
        assert_eq!(app.deck.liked().len(), 1);
        assert_eq!(app.last_removal, Some(RemovalTransition::LeadingBottom));
    }

    #[test]
    fn test_exhaustion_schedules_exactly_once() {
        let mut app = app_on_swipe_deck();
        let n = app.deck.len();
        let effects: Vec<_> = (0..n + 2)
            .map(|_| update(&mut app, Action::Decide(Decision::Reject)))
            .collect();

        let scheduled: Vec<_> = effects
            .iter()
            .filter(|e| matches!(e, Effect::ScheduleAutoAdvance { .. }))
            .collect();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(
            effects[n - 1],
            Effect::ScheduleAutoAdvance {
                generation: app.flow.generation(),
                delay: AUTO_ADVANCE_DELAY,
            }
        );
    }

    #[test]
    fn test_auto_advance_moves_to_results() {
        let mut app = app_on_swipe_deck();
        let mut last = Effect::None;
        while !app.deck.is_empty() {
            last = update(&mut app, Action::Decide(Decision::Accept));
        }
        let Effect::ScheduleAutoAdvance { generation, .. } = last else {
            panic!("expected auto-advance, got {last:?}");
        };
        // Empty state stays visible until the timer fires
        assert_eq!(app.screen(), Screen::SwipeDeck);

        update(&mut app, Action::AutoAdvance { generation });
        assert_eq!(app.screen(), Screen::Results);
    }

    #[test]
    fn test_stale_auto_advance_dropped() {
        let mut app = app_on_swipe_deck();
        let mut last = Effect::None;
        while !app.deck.is_empty() {
            last = update(&mut app, Action::Decide(Decision::Reject));
        }
        let Effect::ScheduleAutoAdvance { generation, .. } = last else {
            panic!("expected auto-advance");
        };
        update(&mut app, Action::Back);
        update(&mut app, Action::AutoAdvance { generation });
        assert_eq!(app.screen(), Screen::Filters);
    }

    #[test]
    fn test_try_again_reloads_and_goes_to_filters() {
        let mut app = app_on_swipe_deck();
        update(&mut app, Action::Decide(Decision::Accept));
        update(&mut app, Action::SeeResults);
        update(&mut app, Action::TryAgain);
        assert_eq!(app.screen(), Screen::Filters);
        assert_eq!(app.deck.cards(), app.catalog.dishes.as_slice());
        assert!(app.deck.liked().is_empty());
    }

    #[test]
    fn test_start_over_reloads_and_goes_home() {
        let mut app = app_on_swipe_deck();
        update(&mut app, Action::Decide(Decision::Accept));
        update(&mut app, Action::SeeResults);
        update(&mut app, Action::StartOver);
        assert_eq!(app.screen(), Screen::Welcome);
        assert_eq!(app.deck.len(), app.catalog.dishes.len());
        assert!(app.deck.liked().is_empty());
    }

    #[test]
    fn test_filters_only_change_on_filters_screen() {
        let mut app = test_app();
        update(&mut app, Action::SetRadius(20.0));
        assert_eq!(app.session.location_radius, 5.0);

        update(&mut app, Action::SoloMode);
        update(&mut app, Action::SetRadius(20.0));
        update(&mut app, Action::ToggleDietary("Vegan".to_string()));
        update(&mut app, Action::ToggleVibe("Casual".to_string()));
        assert_eq!(app.session.location_radius, 20.0);
        assert!(app.session.has_dietary("Vegan"));
        assert!(!app.session.has_vibe("Casual"));
    }

    #[test]
    fn test_filters_do_not_touch_deck() {
        let mut app = test_app();
        update(&mut app, Action::SoloMode);
        update(&mut app, Action::ToggleDietary("Vegan".to_string()));
        update(&mut app, Action::StartSwiping);
        assert_eq!(app.deck.cards(), app.catalog.dishes.as_slice());
    }

    #[test]
    fn test_qr_url_opens() {
        let mut app = test_app();
        update(&mut app, Action::OpenScanner);
        assert!(app.scanner_open);
        let effect = update(&mut app, Action::ScanSucceeded("https://example.com".to_string()));
        assert!(matches!(effect, Effect::OpenUrl(ref u) if u.as_str() == "https://example.com/"));
        assert!(!app.scanner_open);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_qr_text_alerts_and_dismisses() {
        let mut app = test_app();
        update(&mut app, Action::ScanSucceeded("hello".to_string()));
        assert_eq!(app.alert.as_deref(), Some("hello"));
        update(&mut app, Action::DismissAlert);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_qr_known_restaurant_sets_status() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ScanSucceeded("restaurant:pho-house".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.status_message.contains("Pho House"));
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_qr_unknown_restaurant_alerts() {
        let mut app = test_app();
        update(&mut app, Action::ScanSucceeded("restaurant:42".to_string()));
        assert_eq!(app.alert.as_deref(), Some("Unknown restaurant: 42"));
    }

    #[test]
    fn test_scanner_interrupts_drag() {
        let mut app = app_on_swipe_deck();
        update(&mut app, Action::DragChanged { x: 90.0, y: 0.0 });
        update(&mut app, Action::OpenScanner);
        assert!(app.gesture.drag().is_zero());
    }

    #[test]
    fn test_scan_failed_only_closes_scanner() {
        let mut app = app_on_swipe_deck();
        update(&mut app, Action::OpenScanner);
        let before = app.deck.len();
        assert_eq!(update(&mut app, Action::ScanFailed), Effect::None);
        assert!(!app.scanner_open);
        assert!(app.alert.is_none());
        assert_eq!(app.deck.len(), before);
        assert_eq!(app.screen(), Screen::SwipeDeck);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
