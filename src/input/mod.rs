pub mod pointer;

pub use pointer::{ActionRequest, PointerEvent, PointerKind, drag_gesture};
