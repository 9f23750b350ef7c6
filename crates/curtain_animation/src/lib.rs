//! Curtain Animation Driver
//!
//! Frame-driven value interpolation for the Curtain transition system.
//!
//! # Features
//!
//! - **Value Cells**: driver-registered scalar cells read by the renderer
//!   each frame
//! - **Timed Steps**: interpolations from a cell's current value to a
//!   target over a duration, with easing
//! - **Graphs**: parallel and sequential composition of steps
//! - **RAII ownership**: cells and graphs deregister when their owner
//!   drops; a cancelled graph can never touch a cell again
//!
//! The driver is advanced from the host's per-frame callback. It never
//! spawns threads or timers; tests step it deterministically with
//! [`AnimationDriver::advance_ms`].

pub mod driver;
pub mod easing;
pub mod graph;

pub use driver::{
    AnimatedScalar, AnimationDriver, DriverHandle, GraphHandle, GraphId, ValueId,
};
pub use easing::Easing;
pub use graph::{AnimationGraph, Step};
