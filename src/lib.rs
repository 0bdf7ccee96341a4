//! Swipeable card stack
//!
//! Gesture interpretation and animation state for a deck of cards where only
//! the top card is interactive. A drag on the top card resolves into a
//! dismissal to the left, a dismissal to the right with an approval request,
//! or a snap back to the center.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::{StackController, StackError, StackEvent, SwipeOutcome};
pub use config::{ConfigError, ScreenMetrics, StackConfig};
pub use domain::card::{Card, CardKey, UserRecord};
pub use input::{ActionRequest, PointerEvent, PointerKind};
