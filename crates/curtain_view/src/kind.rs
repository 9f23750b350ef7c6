//! Transition kinds and specs
//!
//! A [`TransitionSpec`] is the immutable configuration of one mounted
//! entrance: which [`TransitionKind`] to play and over how many
//! milliseconds. Kind names arrive as free-form strings from config
//! files and host bindings; anything unrecognized maps to [`TransitionKind::Fade`]
//! (the designed catch-all, not an error).

use serde::{Deserialize, Serialize};

/// Entrance style for a mounted screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransitionKind {
    /// Opacity only, 0 to 1
    #[default]
    Fade,
    /// Slide in from the right viewport edge while fading in
    SlideFromRight,
    /// Slide in from the bottom viewport edge while fading in
    SlideFromBottom,
    /// Grow from 0.8 scale while fading in
    ScaleAndFade,
}

impl TransitionKind {
    /// Resolve a kind from its configured name
    ///
    /// Accepts the canonical camelCase names and snake_case aliases.
    /// Unrecognized names fall back to `Fade`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => TransitionKind::Fade,
            "slideFromRight" | "slide_from_right" => TransitionKind::SlideFromRight,
            "slideFromBottom" | "slide_from_bottom" => TransitionKind::SlideFromBottom,
            "scaleAndFade" | "scale_and_fade" => TransitionKind::ScaleAndFade,
            other => {
                tracing::debug!(kind = other, "unrecognized transition kind, using fade");
                TransitionKind::Fade
            }
        }
    }

    /// Canonical name of this kind
    pub fn name(self) -> &'static str {
        match self {
            TransitionKind::Fade => "fade",
            TransitionKind::SlideFromRight => "slideFromRight",
            TransitionKind::SlideFromBottom => "slideFromBottom",
            TransitionKind::ScaleAndFade => "scaleAndFade",
        }
    }
}

impl From<String> for TransitionKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for TransitionKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<TransitionKind> for String {
    fn from(kind: TransitionKind) -> Self {
        kind.name().to_string()
    }
}

/// Configuration of one entrance transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Entrance style
    #[serde(default)]
    pub kind: TransitionKind,
    /// Duration in milliseconds; 0 degenerates to an instantaneous jump
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

fn default_duration_ms() -> u32 {
    300
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration_ms: default_duration_ms(),
        }
    }
}

impl TransitionSpec {
    pub fn new(kind: TransitionKind, duration_ms: u32) -> Self {
        Self { kind, duration_ms }
    }
}
