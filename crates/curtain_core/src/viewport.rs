//! Viewport metrics
//!
//! The device metrics a transition needs (logical width/height of the
//! surface the wrapped content slides across). Injected explicitly at
//! construction so tests can run against fixed dimensions; a mid-session
//! resolution change is out of scope for a mounted instance.

/// Logical viewport dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}
