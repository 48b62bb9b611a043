//! # Gesture Mapper
//!
//! Turns a continuous drag into a discrete swipe decision.
//!
//! ```text
//!  DragChanged(x, y) ... DragChanged(x, y)  DragEnded(x, y)
//!        │                     │                  │
//!        ▼                     ▼                  ▼
//!   DragState (visual feedback only)     |x| > 120 ? Decided : SnapBack
//! ```
//!
//! Units are points, the same scale the threshold is defined in. Adapters
//! convert their native input units before feeding samples in.

use crate::core::deck::Decision;

/// Horizontal travel (points) a drag must exceed to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 120.0;

/// Card tilt is `x / ROTATION_DIVISOR` degrees.
pub const ROTATION_DIVISOR: f64 = 40.0;

/// The card follows only this fraction of the vertical drag.
pub const VERTICAL_DAMPING: f64 = 0.4;

/// In-progress drag offset. Zero when no gesture is active.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub x: f64,
    pub y: f64,
}

impl DragState {
    pub const ZERO: DragState = DragState { x: 0.0, y: 0.0 };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Rendering hints derived from a `DragState`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation_degrees: f64,
}

/// Direction the removed card leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalTransition {
    /// Off to the right and down (accept).
    TrailingBottom,
    /// Off to the left and down (reject).
    LeadingBottom,
}

impl Decision {
    /// Removal direction matching the decision's polarity. Used by both the
    /// gesture path and the buttons.
    pub fn removal_transition(self) -> RemovalTransition {
        match self {
            Decision::Accept => RemovalTransition::TrailingBottom,
            Decision::Reject => RemovalTransition::LeadingBottom,
        }
    }
}

/// Result of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Decided {
        decision: Decision,
        transition: RemovalTransition,
    },
    /// Not far enough; the card springs back to center.
    SnapBack,
}

#[derive(Debug, Clone, Default)]
pub struct GestureMapper {
    drag: DragState,
}

impl GestureMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Intermediate sample. Stores the offset, never decides.
    pub fn on_drag(&mut self, x: f64, y: f64) {
        self.drag = DragState { x, y };
    }

    /// Terminal sample. Always leaves the drag state at zero.
    pub fn on_end(&mut self, x: f64, y: f64) -> GestureOutcome {
        self.drag = DragState { x, y };
        let outcome = classify(x);
        self.reset();
        outcome
    }

    pub fn reset(&mut self) {
        self.drag = DragState::ZERO;
    }

    pub fn transform(&self) -> CardTransform {
        transform_for(self.drag)
    }
}

/// Threshold rule on the horizontal delta. `|dx| <= 120` snaps back.
pub fn classify(dx: f64) -> GestureOutcome {
    if dx.abs() > SWIPE_THRESHOLD {
        let decision = if dx > 0.0 {
            Decision::Accept
        } else {
            Decision::Reject
        };
        GestureOutcome::Decided {
            decision,
            transition: decision.removal_transition(),
        }
    } else {
        GestureOutcome::SnapBack
    }
}

pub fn transform_for(drag: DragState) -> CardTransform {
    CardTransform {
        offset_x: drag.x,
        offset_y: drag.y * VERTICAL_DAMPING,
        rotation_degrees: drag.x / ROTATION_DIVISOR,
    }
}
