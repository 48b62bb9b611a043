//! # Screen Flow
//!
//! Finite state machine over the five screens.
//!
//! ```text
//!            start_group            continue          start_swiping        see_results
//!  Welcome ─────────────► JoinGroup ────────► Filters ─────────────► SwipeDeck ─────────► Results
//!     │                                          ▲                       ▲  auto-advance   │
//!     └──────────── solo_mode ───────────────────┘                       └─────── back ────┘
//!
//!  back:  Results → SwipeDeck → Filters → JoinGroup → Welcome (no-op at Welcome)
//!  Results: try_again → Filters, start_over → Welcome
//! ```
//!
//! `back` from Filters always lands on JoinGroup, even when solo mode
//! skipped it.
//!
//! Every screen change bumps `generation`. A delayed auto-advance carries
//! the generation it was scheduled under and is dropped if the user has
//! navigated since.

use std::time::Duration;

use log::debug;

/// Delay between the deck emptying and the jump to Results, so the empty
/// state is visible briefly.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    JoinGroup,
    Filters,
    SwipeDeck,
    Results,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Welcome => "",
            Screen::JoinGroup => "Create Group",
            Screen::Filters => "Preferences",
            Screen::SwipeDeck => "Swipe Dishes",
            Screen::Results => "Results",
        }
    }

    /// Where "back" leads. `None` at Welcome.
    pub fn previous(self) -> Option<Screen> {
        match self {
            Screen::Welcome => None,
            Screen::JoinGroup => Some(Screen::Welcome),
            Screen::Filters => Some(Screen::JoinGroup),
            Screen::SwipeDeck => Some(Screen::Filters),
            Screen::Results => Some(Screen::SwipeDeck),
        }
    }
}

/// Ticket for a scheduled auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScreenFlow {
    current: Screen,
    generation: u64,
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn go(&mut self, to: Screen) {
        debug!("screen {:?} -> {:?}", self.current, to);
        self.current = to;
        self.generation += 1;
    }

    /// Move `from → to` only if currently on `from`.
    fn transition(&mut self, from: Screen, to: Screen) -> bool {
        if self.current != from {
            debug!(
                "ignoring {:?} -> {:?} while on {:?}",
                from, to, self.current
            );
            return false;
        }
        self.go(to);
        true
    }

    pub fn start_group_session(&mut self) -> bool {
        self.transition(Screen::Welcome, Screen::JoinGroup)
    }

    /// Welcome → Filters. The caller collapses the session to one member.
    pub fn solo_mode(&mut self) -> bool {
        self.transition(Screen::Welcome, Screen::Filters)
    }

    pub fn continue_to_filters(&mut self) -> bool {
        self.transition(Screen::JoinGroup, Screen::Filters)
    }

    pub fn start_swiping(&mut self) -> bool {
        self.transition(Screen::Filters, Screen::SwipeDeck)
    }

    pub fn see_results(&mut self) -> bool {
        self.transition(Screen::SwipeDeck, Screen::Results)
    }

    pub fn back(&mut self) -> bool {
        match self.current.previous() {
            Some(prev) => {
                self.go(prev);
                true
            }
            None => false,
        }
    }

    /// Results → Filters. The caller reloads the deck.
    pub fn try_again(&mut self) -> bool {
        self.transition(Screen::Results, Screen::Filters)
    }

    /// Results → Welcome. The caller reloads the deck.
    pub fn start_over(&mut self) -> bool {
        self.transition(Screen::Results, Screen::Welcome)
    }

    /// Ticket for an auto-advance scheduled now.
    pub fn schedule_auto_advance(&self) -> AutoAdvance {
        AutoAdvance {
            generation: self.generation,
        }
    }

    /// Fire a scheduled auto-advance. Stale tickets (any screen change since
    /// scheduling) are dropped.
    pub fn fire_auto_advance(&mut self, ticket: AutoAdvance) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "stale auto-advance (scheduled gen {}, now {})",
                ticket.generation, self.generation
            );
            return false;
        }
        self.see_results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_at(screen: Screen) -> ScreenFlow {
        let mut flow = ScreenFlow::new();
        match screen {
            Screen::Welcome => {}
            Screen::JoinGroup => {
                flow.start_group_session();
            }
            Screen::Filters => {
                flow.solo_mode();
            }
            Screen::SwipeDeck => {
                flow.solo_mode();
                flow.start_swiping();
            }
            Screen::Results => {
                flow.solo_mode();
                flow.start_swiping();
                flow.see_results();
            }
        }
        assert_eq!(flow.current(), screen);
        flow
    }

    #[test]
    fn test_initial_screen_is_welcome() {
        assert_eq!(ScreenFlow::new().current(), Screen::Welcome);
    }

    #[test]
    fn test_forward_path() {
        let mut flow = ScreenFlow::new();
        assert!(flow.start_group_session());
        assert_eq!(flow.current(), Screen::JoinGroup);
        assert!(flow.continue_to_filters());
        assert_eq!(flow.current(), Screen::Filters);
        assert!(flow.start_swiping());
        assert_eq!(flow.current(), Screen::SwipeDeck);
        assert!(flow.see_results());
        assert_eq!(flow.current(), Screen::Results);
    }

    #[test]
    fn test_back_chain() {
        let mut flow = flow_at(Screen::Results);
        let mut visited = vec![];
        while flow.back() {
            visited.push(flow.current());
        }
        assert_eq!(
            visited,
            vec![
                Screen::SwipeDeck,
                Screen::Filters,
                Screen::JoinGroup,
                Screen::Welcome
            ]
        );
    }

    #[test]
    fn test_back_at_welcome_is_noop() {
        let mut flow = ScreenFlow::new();
        let gen_before = flow.generation();
        assert!(!flow.back());
        assert_eq!(flow.current(), Screen::Welcome);
        assert_eq!(flow.generation(), gen_before);
    }

    #[test]
    fn test_solo_back_goes_to_join_group() {
        let mut flow = ScreenFlow::new();
        flow.solo_mode();
        flow.back();
        assert_eq!(flow.current(), Screen::JoinGroup);
    }

    #[test]
    fn test_transitions_from_wrong_screen_ignored() {
        let mut flow = flow_at(Screen::JoinGroup);
        assert!(!flow.start_swiping());
        assert!(!flow.see_results());
        assert!(!flow.try_again());
        assert!(!flow.solo_mode());
        assert_eq!(flow.current(), Screen::JoinGroup);
    }

    #[test]
    fn test_results_resets() {
        let mut flow = flow_at(Screen::Results);
        assert!(flow.try_again());
        assert_eq!(flow.current(), Screen::Filters);

        let mut flow = flow_at(Screen::Results);
        assert!(flow.start_over());
        assert_eq!(flow.current(), Screen::Welcome);
    }

    #[test]
    fn test_auto_advance_fires_when_untouched() {
        let mut flow = flow_at(Screen::SwipeDeck);
        let ticket = flow.schedule_auto_advance();
        assert!(flow.fire_auto_advance(ticket));
        assert_eq!(flow.current(), Screen::Results);
    }

    #[test]
    fn test_auto_advance_dropped_after_navigation() {
        let mut flow = flow_at(Screen::SwipeDeck);
        let ticket = flow.schedule_auto_advance();
        flow.back();
        assert!(!flow.fire_auto_advance(ticket));
        assert_eq!(flow.current(), Screen::Filters);

        // Coming back to the deck does not revive the old ticket.
        flow.start_swiping();
        assert!(!flow.fire_auto_advance(ticket));
        assert_eq!(flow.current(), Screen::SwipeDeck);
    }

    #[test]
    fn test_auto_advance_fires_once() {
        let mut flow = flow_at(Screen::SwipeDeck);
        let ticket = flow.schedule_auto_advance();
        assert!(flow.fire_auto_advance(ticket));
        assert!(!flow.fire_auto_advance(ticket));
    }

    #[test]
    fn test_titles() {
        assert_eq!(Screen::Welcome.title(), "");
        assert_eq!(Screen::SwipeDeck.title(), "Swipe Dishes");
    }
}
