//! # Deck Engine
//!
//! The stack of remaining cards plus the append-only list of liked ones.
//!
//! ```text
//! catalog: [A, B, C]
//!
//! cards:   [A, B, C]      top = C (last element)
//!                   ^
//! decide(Accept) → liked: [C],   cards: [A, B]
//! decide(Reject) → liked: [C],   cards: [A]
//! ```
//!
//! The top card is the *tail* of the vector, so cards leave in reverse
//! catalog order.

use log::debug;
use uuid::Uuid;

use crate::core::item::Dish;

/// Outcome of a completed swipe or button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// What a `decide` call did to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// Deck was already empty; nothing changed.
    Unchanged,
    /// One card removed, cards remain.
    Removed,
    /// The last card was removed. Emitted exactly once per emptying.
    Exhausted,
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Dish>,
    liked: Vec<Dish>,
}

impl Deck {
    pub fn new(catalog: &[Dish]) -> Self {
        Self {
            cards: catalog.to_vec(),
            liked: Vec::new(),
        }
    }

    /// The currently visible card (tail of the stack).
    pub fn top_card(&self) -> Option<&Dish> {
        self.cards.last()
    }

    /// Index of the top card, if any. Always `len() - 1`.
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// True iff `id` is the top card. Only the top card takes gesture input.
    pub fn is_top(&self, id: Uuid) -> bool {
        self.top_card().is_some_and(|top| top.id == id)
    }

    /// Apply a decision to the top card.
    ///
    /// On `Accept` the top card is copied to `liked` before it is removed.
    /// On an empty deck this is a no-op.
    pub fn decide(&mut self, decision: Decision) -> DeckEvent {
        let Some(top) = self.cards.pop() else {
            debug!("decide({:?}) on empty deck ignored", decision);
            return DeckEvent::Unchanged;
        };

        debug!("decide({:?}) on '{}' ({} left)", decision, top.name, self.cards.len());
        if decision == Decision::Accept {
            self.liked.push(top);
        }

        if self.cards.is_empty() {
            DeckEvent::Exhausted
        } else {
            DeckEvent::Removed
        }
    }

    /// Reload the deck from `catalog` and clear the liked list.
    pub fn reset(&mut self, catalog: &[Dish]) {
        self.cards = catalog.to_vec();
        self.liked.clear();
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Dish] {
        &self.cards
    }

    /// Accepted cards in the order they were accepted.
    pub fn liked(&self) -> &[Dish] {
        &self.liked
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
