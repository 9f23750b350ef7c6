//! Curtain core primitives
//!
//! Shared building blocks for the Curtain transition system:
//!
//! - **Affine math**: 2D affine transforms with concatenation
//! - **Transform lists**: the ordered transform ops a renderer applies
//! - **Viewport**: injected device metrics (logical width/height)

pub mod geometry;
pub mod viewport;

pub use geometry::{Affine2D, TransformList, TransformOp};
pub use viewport::Viewport;
