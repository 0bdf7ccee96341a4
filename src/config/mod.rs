//! Configuration module for swipe-stack
//!
//! Holds the tunable widget constants and resolves them against the host's
//! screen metrics into a pixel layout.

pub mod stack;

pub use stack::{ConfigError, Layout, ScreenMetrics, StackConfig};
