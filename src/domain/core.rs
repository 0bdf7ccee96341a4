//! Core domain types and operations
//!
//! This module defines the pure value types shared by the gesture machine,
//! the animator and the renderer. Everything is expressed in real pixels of
//! the stack container; the card's resting slot has its top-left at (0, 0).

/// A point in container pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the component-wise difference `self - origin`
    pub fn delta_from(&self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Width and height of a card in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    /// Creates a new size
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Horizontal direction a card leaves the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// -1 for left, +1 for right
    pub fn sign(&self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Which badge a card can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// "Approve" badge, tracks rightward drags
    Approve,
    /// "Delete" badge, tracks leftward drags
    Delete,
    /// "Pass" badge, only shown by an explicit pass action
    Pass,
}

/// Visual transform of a card
///
/// Position is the offset of the card from its resting slot. Badge opacities
/// are always stored clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardVisualState {
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees around the card center
    pub rotation: f32,
    pub approve_alpha: f32,
    pub delete_alpha: f32,
    pub pass_alpha: f32,
}

impl CardVisualState {
    /// Returns true if the card sits untouched in its slot
    pub fn is_at_rest(&self) -> bool {
        self.x == 0.0
            && self.y == 0.0
            && self.rotation == 0.0
            && self.approve_alpha == 0.0
            && self.delete_alpha == 0.0
            && self.pass_alpha == 0.0
    }

    /// Moves the card by a delta
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Writes the raw drag progress into the approve/delete badges
    ///
    /// The approve badge takes `+alpha` and the delete badge `-alpha`, so at
    /// most one of them is visible after clamping.
    pub fn set_badge_progress(&mut self, alpha: f32) {
        self.approve_alpha = alpha.clamp(0.0, 1.0);
        self.delete_alpha = (-alpha).clamp(0.0, 1.0);
    }

    /// Sets a single badge opacity
    pub fn set_badge(&mut self, badge: Badge, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        match badge {
            Badge::Approve => self.approve_alpha = alpha,
            Badge::Delete => self.delete_alpha = alpha,
            Badge::Pass => self.pass_alpha = alpha,
        }
    }

    /// Returns the opacity of a single badge
    pub fn badge(&self, badge: Badge) -> f32 {
        match badge {
            Badge::Approve => self.approve_alpha,
            Badge::Delete => self.delete_alpha,
            Badge::Pass => self.pass_alpha,
        }
    }

    /// Hides all three badges
    pub fn clear_badges(&mut self) {
        self.approve_alpha = 0.0;
        self.delete_alpha = 0.0;
        self.pass_alpha = 0.0;
    }
}
