//! Curtain View Layer
//!
//! Entrance transitions for mounted screens.
//!
//! # Features
//!
//! - **Transition kinds**: fade, slide-from-right, slide-from-bottom,
//!   scale-and-fade; unrecognized names fall back to fade
//! - **Effect table**: each kind maps to one row describing which cells
//!   participate, consumed by a single build-graph function
//! - **Orchestrator**: owns the opacity/offset/scale cells of one mount,
//!   resets them synchronously and restarts on reconfiguration
//! - **View wrapper**: `transition(child).kind(..).mount(..)` builder
//!   exposing per-frame `RenderProps` to the host renderer
//! - **Config**: TOML-backed per-screen transition specs
//!
//! Exit animations, gesture-driven transitions and completion callbacks
//! are out of scope: an entrance plays when content mounts and restarts
//! when its spec changes, nothing more.

pub mod config;
pub mod effect;
pub mod entrance;
pub mod error;
pub mod kind;
pub mod view;

pub use config::TransitionsConfig;
pub use effect::{EffectSpec, SlideAxis, SCALE_START};
pub use entrance::EntranceTransition;
pub use error::ConfigError;
pub use kind::{TransitionKind, TransitionSpec};
pub use view::{transition, RenderProps, TransitionBuilder, TransitionView};
