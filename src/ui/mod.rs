pub mod animator;
pub mod binder;
pub mod easing;
pub mod renderer;

pub use animator::{AnimationEvent, AnimationKind, Animator};
pub use binder::{CardViewBinder, ImageLoader, NoopImageLoader};
pub use renderer::{RendererError, StackRenderer};
