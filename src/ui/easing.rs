//! Easing curves used by card animations

/// Tension of the snap-back overshoot
pub const DEFAULT_OVERSHOOT_TENSION: f32 = 2.0;

/// Maps linear animation progress to eased progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Starts slow and speeds up (`t²`), used for fly-offs
    Accelerate,
    /// Decelerates past the target and settles back, used for snap-back
    Overshoot { tension: f32 },
}

impl Easing {
    /// Standard overshoot curve
    pub fn overshoot() -> Self {
        Easing::Overshoot {
            tension: DEFAULT_OVERSHOOT_TENSION,
        }
    }

    /// Evaluates the curve at `t`, clamped to `[0, 1]`
    ///
    /// Every curve maps 0 to 0 and 1 to 1; the overshoot curve exceeds 1
    /// in between.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Accelerate => t * t,
            Easing::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }
}

/// Linear interpolation between `from` and `to`
pub fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    from + (to - from) * progress
}
