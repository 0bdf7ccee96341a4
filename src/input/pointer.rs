//! Pointer and action input contract
//!
//! The host runtime translates its native touch/mouse events into
//! [`PointerEvent`]s addressed to a card, and its buttons into
//! [`ActionRequest`]s applied to whatever card is on top.

use crate::domain::card::CardKey;
use crate::domain::core::Point;

/// Kind of pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    /// Finger down / button pressed, in container coordinates
    Press { x: f32, y: f32 },
    /// Pointer moved while held
    Move { x: f32, y: f32 },
    /// Finger lifted
    Release,
    /// Host-level gesture cancel (focus loss, view detached)
    Cancel,
}

impl PointerKind {
    /// Returns the sample position for press and move events
    pub fn point(&self) -> Option<Point> {
        match *self {
            PointerKind::Press { x, y } | PointerKind::Move { x, y } => Some(Point::new(x, y)),
            PointerKind::Release | PointerKind::Cancel => None,
        }
    }
}

/// A pointer sample targeted at a specific card
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub target: CardKey,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn press(target: &CardKey, x: f32, y: f32) -> Self {
        Self {
            target: target.clone(),
            kind: PointerKind::Press { x, y },
        }
    }

    pub fn moved(target: &CardKey, x: f32, y: f32) -> Self {
        Self {
            target: target.clone(),
            kind: PointerKind::Move { x, y },
        }
    }

    pub fn release(target: &CardKey) -> Self {
        Self {
            target: target.clone(),
            kind: PointerKind::Release,
        }
    }

    pub fn cancel(target: &CardKey) -> Self {
        Self {
            target: target.clone(),
            kind: PointerKind::Cancel,
        }
    }
}

/// Requests from non-gesture triggers such as on-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    /// Flash the delete badge and dismiss the top card to the left
    RequestDelete,
    /// Flash the pass badge and dismiss the top card to the left
    RequestPass,
    /// Start the approval flow for the top card; the card stays
    RequestApprove,
}

impl ActionRequest {
    /// Maps a button tag (1 = delete, 2 = pass, 3 = approve) to a request
    pub fn from_button_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(ActionRequest::RequestDelete),
            2 => Some(ActionRequest::RequestPass),
            3 => Some(ActionRequest::RequestApprove),
            _ => None,
        }
    }
}

/// Builds the full event sequence of a straight drag
///
/// Produces a press at `from`, `steps` evenly spaced moves ending at `to`,
/// and a release. Used by the demo binary and tests to script gestures.
pub fn drag_gesture(target: &CardKey, from: Point, to: Point, steps: usize) -> Vec<PointerEvent> {
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps + 2);
    events.push(PointerEvent::press(target, from.x, from.y));
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        events.push(PointerEvent::moved(
            target,
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
        ));
    }
    events.push(PointerEvent::release(target));
    events
}
