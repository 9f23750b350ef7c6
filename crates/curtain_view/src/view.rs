//! Transition view wrapper
//!
//! Pairs arbitrary children with an [`EntranceTransition`] and exposes
//! the per-frame [`RenderProps`] the host renderer applies to the
//! wrapping container.
//!
//! # Example
//!
//! ```ignore
//! let mut view = transition(settings_screen())
//!     .kind(TransitionKind::SlideFromRight)
//!     .duration_ms(400)
//!     .mount(driver.handle(), viewport);
//!
//! // each frame, after driver.tick():
//! let props = view.render_props();
//! renderer.draw(view.child(), props.opacity, &props.transform);
//! ```

use curtain_animation::DriverHandle;
use curtain_core::{TransformList, Viewport};

use crate::entrance::EntranceTransition;
use crate::kind::{TransitionKind, TransitionSpec};

/// Visual properties the host renderer samples each frame
#[derive(Clone, Debug, Default)]
pub struct RenderProps {
    /// Opacity applied to the wrapped content, in [0, 1]
    pub opacity: f32,
    /// Ordered transform list (translate-x?, translate-y?, scale?)
    pub transform: TransformList,
}

/// Start building a transition view around some children
pub fn transition<C>(child: C) -> TransitionBuilder<C> {
    TransitionBuilder {
        child,
        spec: TransitionSpec::default(),
    }
}

/// Builder returned by [`transition`]
pub struct TransitionBuilder<C> {
    child: C,
    spec: TransitionSpec,
}

impl<C> TransitionBuilder<C> {
    pub fn kind(mut self, kind: TransitionKind) -> Self {
        self.spec.kind = kind;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.spec.duration_ms = duration_ms;
        self
    }

    pub fn spec(mut self, spec: TransitionSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Mount the view: create its cells and start the entrance
    pub fn mount(self, driver: DriverHandle, viewport: Viewport) -> TransitionView<C> {
        TransitionView {
            child: self.child,
            entrance: EntranceTransition::new(driver, viewport, self.spec),
        }
    }
}

/// A mounted view playing its entrance animation
///
/// Dropping the view releases its cells and cancels any running graph;
/// nothing outlives the mount.
pub struct TransitionView<C> {
    child: C,
    entrance: EntranceTransition,
}

impl<C> TransitionView<C> {
    /// The wrapped children
    pub fn child(&self) -> &C {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut C {
        &mut self.child
    }

    /// The orchestrator driving this view's entrance
    pub fn entrance(&self) -> &EntranceTransition {
        &self.entrance
    }

    /// Apply a new spec; restarts the entrance if it changed
    ///
    /// Called by the host's lifecycle adapter whenever the configured
    /// kind or duration changes.
    pub fn reconfigure(&mut self, spec: TransitionSpec) {
        self.entrance.reconfigure(spec);
    }

    /// Replay the entrance from the beginning with the current spec
    pub fn replay(&mut self) {
        self.entrance.restart();
    }

    pub fn is_animating(&self) -> bool {
        self.entrance.is_running()
    }

    /// Sample the visual properties for the current frame
    pub fn render_props(&self) -> RenderProps {
        RenderProps {
            opacity: self.entrance.opacity(),
            transform: self.entrance.transform(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curtain_animation::AnimationDriver;
    use curtain_core::TransformOp;

    #[test]
    fn test_builder_defaults_to_fade() {
        let driver = AnimationDriver::new();
        let view = transition("content").mount(driver.handle(), Viewport::default());

        assert_eq!(view.entrance().spec(), TransitionSpec::default());
        assert_eq!(*view.child(), "content");
    }

    #[test]
    fn test_render_props_track_the_animation() {
        let driver = AnimationDriver::new();
        let view = transition("content")
            .kind(TransitionKind::SlideFromRight)
            .duration_ms(200)
            .mount(driver.handle(), Viewport::new(400.0, 300.0));

        let props = view.render_props();
        assert_eq!(props.opacity, 0.0);
        assert!(props.transform.iter().next() == Some(&TransformOp::TranslateX(400.0)));
        assert!(view.is_animating());

        driver.advance_ms(200.0);
        let props = view.render_props();
        assert_eq!(props.opacity, 1.0);
        assert!(props.transform.iter().next() == Some(&TransformOp::TranslateX(0.0)));
        assert!(!view.is_animating());
    }

    #[test]
    fn test_replay_restarts_with_current_spec() {
        let driver = AnimationDriver::new();
        let mut view = transition(())
            .duration_ms(100)
            .mount(driver.handle(), Viewport::default());

        driver.advance_ms(100.0);
        assert_eq!(view.render_props().opacity, 1.0);

        view.replay();
        assert_eq!(view.render_props().opacity, 0.0);
        assert!(view.is_animating());
    }

    #[test]
    fn test_drop_releases_everything() {
        let driver = AnimationDriver::new();
        {
            let _view = transition(())
                .kind(TransitionKind::ScaleAndFade)
                .mount(driver.handle(), Viewport::default());
            assert_eq!(driver.value_count(), 3);
        }
        assert_eq!(driver.value_count(), 0);
        assert_eq!(driver.graph_count(), 0);
    }
}
