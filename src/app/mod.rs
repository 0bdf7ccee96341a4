//! Stack orchestration layer
//!
//! This module coordinates between input, domain and animation. It owns
//! the card stack and turns gestures into stack mutations and events.

pub mod controller;
pub mod events;
pub mod gesture;

pub use controller::{StackController, StackError};
pub use events::StackEvent;
pub use gesture::{GestureController, GesturePhase, SwipeOutcome};
