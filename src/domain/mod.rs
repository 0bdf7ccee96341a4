//! Domain logic and core data structures
//!
//! This module contains pure card-stack logic that is independent
//! of any rendering or windowing runtime.

pub mod card;
pub mod core;
pub mod geometry;
