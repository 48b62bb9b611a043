//! # Group Session
//!
//! Who is deciding, and the preferences they picked. Every command takes the
//! session by value and returns the updated one; nothing mutates in place.
//!
//! The filters are recorded only. They are not applied to the deck.

use serde::{Deserialize, Serialize};

pub const SOLO_MEMBER: &str = "You";

pub const MIN_RADIUS: f64 = 1.0;
pub const MAX_RADIUS: f64 = 25.0;

pub const DIETARY_OPTIONS: [&str; 5] = ["Vegetarian", "Vegan", "Gluten-Free", "Dairy-Free", "Nut-Free"];
pub const VIBE_OPTIONS: [&str; 5] = ["Casual", "Upscale", "Fast", "Family-Friendly", "Date Night"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub name: String,
    pub members: Vec<String>,
    /// Miles.
    pub location_radius: f64,
    pub dietary_filters: Vec<String>,
    pub vibe_filters: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::sample()
    }
}

impl Session {
    /// The built-in "Friday Night Dinner" group.
    pub fn sample() -> Self {
        Self {
            name: "Friday Night Dinner".to_string(),
            members: ["You", "Alex", "Taylor", "Jordan"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            location_radius: 5.0,
            dietary_filters: vec!["Vegetarian Option".to_string()],
            vibe_filters: vec!["Casual".to_string()],
        }
    }

    /// Collapse the group to a single participant.
    pub fn solo(self) -> Self {
        Self {
            members: vec![SOLO_MEMBER.to_string()],
            ..self
        }
    }

    /// Set the radius, snapped to whole miles within `1..=25`.
    pub fn with_radius(self, radius: f64) -> Self {
        let radius = if radius.is_finite() {
            radius.round().clamp(MIN_RADIUS, MAX_RADIUS)
        } else {
            self.location_radius
        };
        Self {
            location_radius: radius,
            ..self
        }
    }

    pub fn toggle_dietary(self, option: &str) -> Self {
        Self {
            dietary_filters: toggled(self.dietary_filters, option),
            ..self
        }
    }

    pub fn toggle_vibe(self, option: &str) -> Self {
        Self {
            vibe_filters: toggled(self.vibe_filters, option),
            ..self
        }
    }

    pub fn has_dietary(&self, option: &str) -> bool {
        self.dietary_filters.iter().any(|f| f == option)
    }

    pub fn has_vibe(&self, option: &str) -> bool {
        self.vibe_filters.iter().any(|f| f == option)
    }

    /// Radius as shown on the filters screen.
    pub fn radius_label(&self) -> String {
        format!("Within {} miles", self.location_radius as i64)
    }
}

/// Remove every copy of `option` if present, otherwise append it once.
fn toggled(mut set: Vec<String>, option: &str) -> Vec<String> {
    if set.iter().any(|f| f == option) {
        set.retain(|f| f != option);
    } else {
        set.push(option.to_string());
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_group() {
        let s = Session::sample();
        assert_eq!(s.members, vec!["You", "Alex", "Taylor", "Jordan"]);
        assert_eq!(s.location_radius, 5.0);
    }

    #[test]
    fn test_solo_keeps_filters() {
        let s = Session::sample().solo();
        assert_eq!(s.members, vec!["You"]);
        assert_eq!(s.vibe_filters, vec!["Casual"]);
        assert_eq!(s.name, "Friday Night Dinner");
    }

    #[test]
    fn test_radius_clamped_and_stepped() {
        let s = Session::sample();
        assert_eq!(s.clone().with_radius(12.4).location_radius, 12.0);
        assert_eq!(s.clone().with_radius(0.0).location_radius, 1.0);
        assert_eq!(s.clone().with_radius(100.0).location_radius, 25.0);
        assert_eq!(s.with_radius(f64::NAN).location_radius, 5.0);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let s = Session::sample().toggle_dietary("Vegan");
        assert!(s.has_dietary("Vegan"));
        let s = s.toggle_dietary("Vegan");
        assert!(!s.has_dietary("Vegan"));
        assert_eq!(s.dietary_filters, vec!["Vegetarian Option"]);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut s = Session::sample();
        s.vibe_filters = vec!["Fast".into(), "Fast".into()];
        let s = s.toggle_vibe("Fast");
        assert!(s.vibe_filters.is_empty());
        let s = s.toggle_vibe("Fast").toggle_vibe("Upscale");
        assert_eq!(s.vibe_filters, vec!["Fast", "Upscale"]);
    }

    #[test]
    fn test_radius_label() {
        assert_eq!(Session::sample().radius_label(), "Within 5 miles");
    }
}
