//! Boundary and transform calculations for card drags
//!
//! Pure functions mapping the container width and the card's horizontal
//! position to dismissal boundaries, rotation and badge opacity. No I/O and
//! no state beyond the container metrics captured at construction.

/// Maximum card tilt in degrees, reached at a drag of one container width
pub const CARD_ROTATION_DEGREES: f32 = 40.0;

/// Geometry of the stack container
///
/// Boundaries are derived once from the container width, which is assumed
/// static after construction. A non-positive width is the caller's problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    container_width: f32,
    padding: f32,
    left_boundary: f32,
    right_boundary: f32,
    max_rotation: f32,
}

impl Geometry {
    /// Creates the geometry for a container
    ///
    /// # Arguments
    /// * `container_width` - Width of the stack container in pixels
    /// * `padding` - Card padding in pixels (already converted from dp)
    pub fn new(container_width: f32, padding: f32) -> Self {
        Self::with_max_rotation(container_width, padding, CARD_ROTATION_DEGREES)
    }

    /// Creates the geometry with a custom maximum rotation
    pub fn with_max_rotation(container_width: f32, padding: f32, max_rotation: f32) -> Self {
        Self {
            container_width,
            padding,
            left_boundary: container_width * (1.0 / 6.0),
            right_boundary: container_width * (5.0 / 6.0),
            max_rotation,
        }
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Left 1/6 of the container
    pub fn left_boundary(&self) -> f32 {
        self.left_boundary
    }

    /// Right 1/6 of the container starts here
    pub fn right_boundary(&self) -> f32 {
        self.right_boundary
    }

    /// Returns true if the card's middle is beyond the left boundary
    pub fn is_beyond_left(&self, card_center_x: f32) -> bool {
        card_center_x < self.left_boundary
    }

    /// Returns true if the card's middle is beyond the right boundary
    pub fn is_beyond_right(&self, card_center_x: f32) -> bool {
        card_center_x > self.right_boundary
    }

    /// Card rotation for a horizontal position
    ///
    /// The sign depends on where the finger holds the card: touches above
    /// `card_height / 2 - 2 * padding` tilt one way, touches below tilt the
    /// other, so the card pivots around the touch point.
    ///
    /// # Arguments
    /// * `pos_x` - Horizontal offset of the card from its slot
    /// * `touch_local_y` - Vertical touch position in card coordinates
    /// * `card_height` - Height of the card
    pub fn rotation_degrees(&self, pos_x: f32, touch_local_y: f32, card_height: f32) -> f32 {
        let rotation = (self.max_rotation * pos_x) / self.container_width;
        if touch_local_y < card_height / 2.0 - 2.0 * self.padding {
            rotation
        } else {
            -rotation
        }
    }

    /// Raw badge alpha for a horizontal position
    ///
    /// Not clamped: positive values belong to the approve badge and negative
    /// values (negated) to the delete badge.
    pub fn badge_alpha(&self, pos_x: f32) -> f32 {
        (pos_x - self.padding) / (self.container_width * 0.5)
    }
}

/// Horizontal center of a card at offset `card_x`
pub fn card_center_x(card_x: f32, card_width: f32) -> f32 {
    card_x + card_width / 2.0
}
