//! Kind-to-effect lookup table
//!
//! Each [`TransitionKind`] maps to one [`EffectSpec`] row describing
//! which cells participate in the entrance. The orchestrator consumes
//! the row in a single generic build-graph function instead of
//! branching on the kind at every call site.

use curtain_core::Viewport;

use crate::kind::TransitionKind;

/// Axis an entrance slides along
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideAxis {
    Horizontal,
    Vertical,
}

/// Scale a scale-and-fade entrance grows from
pub const SCALE_START: f32 = 0.8;

/// Which cells participate in an entrance, and how
///
/// Opacity participates in every kind (0 to 1) and is not represented
/// here. At most one slide axis is ever set, because the kinds are
/// mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectSpec {
    /// Slide axis, if the offset cell participates
    pub slide: Option<SlideAxis>,
    /// Whether the scale cell participates (0.8 to 1.0)
    pub scales: bool,
}

impl TransitionKind {
    /// Look up this kind's row of the effect table
    pub fn effect(self) -> EffectSpec {
        match self {
            TransitionKind::Fade => EffectSpec {
                slide: None,
                scales: false,
            },
            TransitionKind::SlideFromRight => EffectSpec {
                slide: Some(SlideAxis::Horizontal),
                scales: false,
            },
            TransitionKind::SlideFromBottom => EffectSpec {
                slide: Some(SlideAxis::Vertical),
                scales: false,
            },
            TransitionKind::ScaleAndFade => EffectSpec {
                slide: None,
                scales: true,
            },
        }
    }
}

impl EffectSpec {
    /// Offset the slide starts from: the viewport extent along the axis
    pub fn offset_start(&self, viewport: Viewport) -> Option<f32> {
        self.slide.map(|axis| match axis {
            SlideAxis::Horizontal => viewport.width,
            SlideAxis::Vertical => viewport.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_table_rows() {
        assert_eq!(
            TransitionKind::Fade.effect(),
            EffectSpec {
                slide: None,
                scales: false
            }
        );
        assert_eq!(
            TransitionKind::SlideFromRight.effect(),
            EffectSpec {
                slide: Some(SlideAxis::Horizontal),
                scales: false
            }
        );
        assert_eq!(
            TransitionKind::SlideFromBottom.effect(),
            EffectSpec {
                slide: Some(SlideAxis::Vertical),
                scales: false
            }
        );
        assert_eq!(
            TransitionKind::ScaleAndFade.effect(),
            EffectSpec {
                slide: None,
                scales: true
            }
        );
    }

    #[test]
    fn test_offset_start_uses_viewport_extent() {
        let viewport = Viewport::new(390.0, 844.0);
        assert_eq!(
            TransitionKind::SlideFromRight.effect().offset_start(viewport),
            Some(390.0)
        );
        assert_eq!(
            TransitionKind::SlideFromBottom.effect().offset_start(viewport),
            Some(844.0)
        );
        assert_eq!(TransitionKind::Fade.effect().offset_start(viewport), None);
        assert_eq!(
            TransitionKind::ScaleAndFade.effect().offset_start(viewport),
            None
        );
    }
}
