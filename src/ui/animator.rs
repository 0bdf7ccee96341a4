//! Card transform animations
//!
//! The animator owns running animation tracks keyed by card. It never
//! touches the stack itself: [`Animator::advance`] yields frames and the
//! stack controller applies them, so a track whose card has already left
//! the stack simply finishes into a no-op.

use std::time::Duration;

use log::debug;

use crate::domain::card::CardKey;
use crate::domain::core::{CardVisualState, SwipeDirection};
use crate::ui::easing::{Easing, lerp};

/// Default duration of both snap-back and fly-off
pub const DEFAULT_DURATION: Duration = Duration::from_millis(700);

/// What a track is animating towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Snap back to the resting slot
    Reset,
    /// Fly off-screen; the card is removed when this ends
    Dismiss(SwipeDirection),
}

/// Lifecycle notifications of a track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationEvent {
    Started { key: CardKey, kind: AnimationKind },
    Ended { key: CardKey, kind: AnimationKind },
    /// Stopped before reaching its target, by a press or a replacing track
    Cancelled { key: CardKey, kind: AnimationKind },
}

/// Position and rotation of a card at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl Transform {
    pub fn of(visual: &CardVisualState) -> Self {
        Self {
            x: visual.x,
            y: visual.y,
            rotation: visual.rotation,
        }
    }

    /// Writes position and rotation, leaving badge opacities alone
    pub fn apply_to(&self, visual: &mut CardVisualState) {
        visual.x = self.x;
        visual.y = self.y;
        visual.rotation = self.rotation;
    }
}

/// A frame produced by [`Animator::advance`]
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub key: CardKey,
    pub kind: AnimationKind,
    pub transform: Transform,
    /// True on the last frame of the track
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct Track {
    key: CardKey,
    kind: AnimationKind,
    from: Transform,
    to: Transform,
    easing: Easing,
    elapsed: Duration,
}

impl Track {
    fn sample(&self, duration: Duration) -> (Transform, bool) {
        // Same comparison as the retain in `advance`, so a track ends exactly once
        let finished = self.elapsed >= duration;
        let progress = if finished {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };
        // Snap exactly onto the target at the end
        let eased = if finished { 1.0 } else { self.easing.apply(progress) };
        let transform = Transform {
            x: lerp(self.from.x, self.to.x, eased),
            y: lerp(self.from.y, self.to.y, eased),
            rotation: lerp(self.from.rotation, self.to.rotation, eased),
        };
        (transform, finished)
    }
}

/// Drives snap-back and fly-off animations
#[derive(Debug, Clone)]
pub struct Animator {
    duration: Duration,
    container_width: f32,
    tracks: Vec<Track>,
}

impl Animator {
    /// Creates an animator for a container
    ///
    /// # Arguments
    /// * `container_width` - Used for the off-screen fly-off target
    /// * `duration` - Fixed duration of every animation
    pub fn new(container_width: f32, duration: Duration) -> Self {
        Self {
            duration,
            container_width,
            tracks: Vec::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts a snap-back of the card to its slot
    ///
    /// Badges are hidden immediately, not at the end: the drag has been
    /// abandoned.
    /// Returns `Cancelled` for a replaced track, if any, followed by `Started`.
    pub fn reset(&mut self, key: &CardKey, visual: &mut CardVisualState) -> Vec<AnimationEvent> {
        visual.clear_badges();
        self.start(
            key,
            AnimationKind::Reset,
            Transform::of(visual),
            Transform {
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
            },
            Easing::overshoot(),
        )
    }

    /// Starts a fly-off to twice the container width on the given side
    pub fn dismiss(
        &mut self,
        key: &CardKey,
        visual: &CardVisualState,
        direction: SwipeDirection,
    ) -> Vec<AnimationEvent> {
        let from = Transform::of(visual);
        let to = Transform {
            x: direction.sign() * self.container_width * 2.0,
            y: 0.0,
            rotation: from.rotation,
        };
        self.start(key, AnimationKind::Dismiss(direction), from, to, Easing::Accelerate)
    }

    fn start(
        &mut self,
        key: &CardKey,
        kind: AnimationKind,
        from: Transform,
        to: Transform,
        easing: Easing,
    ) -> Vec<AnimationEvent> {
        // One track per card; a new animation replaces the old one
        let mut events: Vec<AnimationEvent> = self.cancel(key).into_iter().collect();
        debug!("animation {:?} started for card {}", kind, key);
        self.tracks.push(Track {
            key: key.clone(),
            kind,
            from,
            to,
            easing,
            elapsed: Duration::ZERO,
        });
        events.push(AnimationEvent::Started {
            key: key.clone(),
            kind,
        });
        events
    }

    /// Cancels the card's running animation, if any
    ///
    /// The card keeps whatever transform the last applied frame gave it.
    pub fn cancel(&mut self, key: &CardKey) -> Option<AnimationEvent> {
        let index = self.tracks.iter().position(|track| &track.key == key)?;
        let track = self.tracks.remove(index);
        debug!("animation {:?} cancelled for card {}", track.kind, key);
        Some(AnimationEvent::Cancelled {
            key: track.key,
            kind: track.kind,
        })
    }

    /// Returns the kind of the card's running animation
    pub fn running(&self, key: &CardKey) -> Option<AnimationKind> {
        self.tracks
            .iter()
            .find(|track| &track.key == key)
            .map(|track| track.kind)
    }

    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Advances every track by `dt` and returns one frame per track
    ///
    /// Finished tracks are dropped after yielding their final frame.
    pub fn advance(&mut self, dt: Duration) -> Vec<AnimationFrame> {
        let duration = self.duration;
        let mut frames = Vec::with_capacity(self.tracks.len());
        for track in &mut self.tracks {
            track.elapsed += dt;
            let (transform, finished) = track.sample(duration);
            frames.push(AnimationFrame {
                key: track.key.clone(),
                kind: track.kind,
                transform,
                finished,
            });
        }
        self.tracks.retain(|track| track.elapsed < duration);
        frames
    }
}
