//! Drag gesture state machine
//!
//! Consumes press/move/release samples for the top card and classifies the
//! release. The controller decides whether a sample reaches this machine at
//! all (top card only, nothing animating); this module only knows about
//! phases, deltas and boundaries.

use log::debug;

use crate::domain::core::{CardVisualState, Point, Size, SwipeDirection};
use crate::domain::geometry::{Geometry, card_center_x};

/// Result of a completed drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    DismissedLeft,
    DismissedRight,
    Reset,
}

impl SwipeOutcome {
    /// Direction the card leaves in, or `None` for a reset
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            SwipeOutcome::DismissedLeft => Some(SwipeDirection::Left),
            SwipeOutcome::DismissedRight => Some(SwipeDirection::Right),
            SwipeOutcome::Reset => None,
        }
    }

    pub fn from_direction(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => SwipeOutcome::DismissedLeft,
            SwipeDirection::Right => SwipeOutcome::DismissedRight,
        }
    }
}

/// Samples of a drag between press and release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Where the finger went down
    pub origin: Point,
    /// Most recent sample
    pub last: Point,
}

impl DragSession {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            last: origin,
        }
    }
}

/// Phase of the gesture machine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(DragSession),
    Resetting,
    DismissingLeft,
    DismissingRight,
}

impl GesturePhase {
    fn after(outcome: SwipeOutcome) -> Self {
        match outcome {
            SwipeOutcome::DismissedLeft => GesturePhase::DismissingLeft,
            SwipeOutcome::DismissedRight => GesturePhase::DismissingRight,
            SwipeOutcome::Reset => GesturePhase::Resetting,
        }
    }
}

/// Drag interpretation for the top card
#[derive(Debug, Clone)]
pub struct GestureController {
    phase: GesturePhase,
    geometry: Geometry,
    card_size: Size,
}

impl GestureController {
    pub fn new(geometry: Geometry, card_size: Size) -> Self {
        Self {
            phase: GesturePhase::Idle,
            geometry,
            card_size,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    /// Starts a drag session at `point`
    ///
    /// Any previous session is discarded; the caller cancels the card's
    /// running animation.
    pub fn press(&mut self, point: Point) {
        self.phase = GesturePhase::Dragging(DragSession::new(point));
    }

    /// Applies a move sample to the card
    ///
    /// Returns the card's new horizontal offset, or `None` when no drag is
    /// in progress and the sample is not consumed.
    pub fn drag(&mut self, point: Point, visual: &mut CardVisualState) -> Option<f32> {
        let GesturePhase::Dragging(session) = &mut self.phase else {
            return None;
        };

        let (dx, dy) = point.delta_from(session.last);
        session.last = point;

        visual.translate(dx, dy);
        // The card follows the finger, so this is the grab point on the card
        let touch_local_y = point.y - visual.y;
        visual.rotation = self
            .geometry
            .rotation_degrees(visual.x, touch_local_y, self.card_size.h);
        visual.set_badge_progress(self.geometry.badge_alpha(visual.x));

        Some(visual.x)
    }

    /// Classifies the release against the boundaries
    ///
    /// Returns `None` when no drag is in progress.
    pub fn release(&mut self, visual: &CardVisualState) -> Option<SwipeOutcome> {
        if !self.is_dragging() {
            return None;
        }

        let center = card_center_x(visual.x, self.card_size.w);
        let outcome = if self.geometry.is_beyond_left(center) {
            SwipeOutcome::DismissedLeft
        } else if self.geometry.is_beyond_right(center) {
            SwipeOutcome::DismissedRight
        } else {
            SwipeOutcome::Reset
        };

        debug!("drag released at center {center:.1}: {outcome:?}");
        self.phase = GesturePhase::after(outcome);
        Some(outcome)
    }

    /// Host-level gesture cancel, forced into a reset
    ///
    /// Returns `None` when no drag is in progress.
    pub fn cancel(&mut self) -> Option<SwipeOutcome> {
        if !self.is_dragging() {
            return None;
        }
        self.phase = GesturePhase::Resetting;
        Some(SwipeOutcome::Reset)
    }

    /// Enters a dismissal phase from an explicit action
    pub fn dismissing(&mut self, direction: SwipeDirection) {
        self.phase = GesturePhase::after(SwipeOutcome::from_direction(direction));
    }

    /// Returns to idle once the terminal animation has completed
    pub fn settle(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}
