//! Entrance transition orchestrator
//!
//! [`EntranceTransition`] owns the three animatable cells of one mounted
//! screen (opacity, slide offset, scale), selects which of them
//! participate for the configured kind, and drives them through one
//! timed graph per (re)configuration.
//!
//! The cells live as long as the orchestrator; dropping it cancels any
//! in-flight graph and deregisters the cells from the driver.

use curtain_animation::{AnimatedScalar, AnimationGraph, DriverHandle, GraphHandle, Step};
use curtain_core::{TransformList, TransformOp, Viewport};

use crate::effect::{EffectSpec, SlideAxis, SCALE_START};
use crate::kind::TransitionSpec;

/// Drives the entrance animation of one mounted screen
pub struct EntranceTransition {
    driver: DriverHandle,
    viewport: Viewport,
    spec: TransitionSpec,
    opacity: AnimatedScalar,
    offset: AnimatedScalar,
    scale: AnimatedScalar,
    graph: Option<GraphHandle>,
}

impl EntranceTransition {
    /// Create the cells and start the entrance
    ///
    /// The viewport is read once here and treated as immutable for the
    /// instance's lifetime.
    pub fn new(driver: DriverHandle, viewport: Viewport, spec: TransitionSpec) -> Self {
        let opacity = AnimatedScalar::new(driver.clone(), 0.0);
        let offset = AnimatedScalar::new(driver.clone(), 0.0);
        let scale = AnimatedScalar::new(driver.clone(), 1.0);
        let mut this = Self {
            driver,
            viewport,
            spec,
            opacity,
            offset,
            scale,
            graph: None,
        };
        this.restart();
        this
    }

    pub fn spec(&self) -> TransitionSpec {
        self.spec
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply a new spec, restarting the entrance if it changed
    ///
    /// A mid-flight reconfiguration discards the running graph and
    /// restarts from the kind's starting values; the current partial
    /// values are not carried over, so a visible jump is possible.
    pub fn reconfigure(&mut self, spec: TransitionSpec) {
        if spec == self.spec {
            return;
        }
        self.spec = spec;
        self.restart();
    }

    /// Reset the cells and play the entrance from the beginning
    pub fn restart(&mut self) {
        // Cancel the previous graph before resetting, so a stale
        // in-flight step cannot overwrite the starting values below.
        self.graph = None;

        let effect = self.spec.kind.effect();
        self.opacity.set(0.0);
        if let Some(start) = effect.offset_start(self.viewport) {
            self.offset.set(start);
        }
        if effect.scales {
            self.scale.set(SCALE_START);
        }

        let Some(graph) = self.build_graph(effect) else {
            return;
        };
        tracing::debug!(
            kind = self.spec.kind.name(),
            duration_ms = self.spec.duration_ms,
            "starting entrance"
        );
        self.graph = Some(GraphHandle::start(self.driver.clone(), graph));
    }

    /// Build the timed graph for the current spec from its effect row
    ///
    /// Opacity always animates to 1; offset and scale join a parallel
    /// group when the row includes them. The result is always one
    /// top-level node wrapped in a length-1 sequence. Returns `None`
    /// when the driver is gone and the cells have no IDs.
    fn build_graph(&self, effect: EffectSpec) -> Option<AnimationGraph> {
        let duration_ms = self.spec.duration_ms as f32;
        let mut steps = vec![AnimationGraph::Step(Step::timing(
            self.opacity.id()?,
            1.0,
            duration_ms,
        ))];
        if effect.slide.is_some() {
            steps.push(AnimationGraph::Step(Step::timing(
                self.offset.id()?,
                0.0,
                duration_ms,
            )));
        }
        if effect.scales {
            steps.push(AnimationGraph::Step(Step::timing(
                self.scale.id()?,
                1.0,
                duration_ms,
            )));
        }

        let node = if steps.len() == 1 {
            steps.remove(0)
        } else {
            AnimationGraph::parallel(steps)
        };
        Some(AnimationGraph::sequence(vec![node]))
    }

    /// Check if the entrance is still playing
    pub fn is_running(&self) -> bool {
        self.graph.as_ref().map(|g| g.is_running()).unwrap_or(false)
    }

    /// Current opacity of the wrapped content, in [0, 1]
    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    /// Ordered transform list for the current frame
    ///
    /// Entries are appended in a fixed order: translate-x (horizontal
    /// slide only), translate-y (vertical slide only), scale
    /// (scale-and-fade only). A plain fade contributes no entries.
    pub fn transform(&self) -> TransformList {
        let effect = self.spec.kind.effect();
        let mut list = TransformList::new();
        match effect.slide {
            Some(SlideAxis::Horizontal) => list.push(TransformOp::TranslateX(self.offset.get())),
            Some(SlideAxis::Vertical) => list.push(TransformOp::TranslateY(self.offset.get())),
            None => {}
        }
        if effect.scales {
            list.push(TransformOp::Scale(self.scale.get()));
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TransitionKind;
    use curtain_animation::AnimationDriver;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn mounted(driver: &AnimationDriver, kind: TransitionKind, duration_ms: u32) -> EntranceTransition {
        EntranceTransition::new(
            driver.handle(),
            VIEWPORT,
            TransitionSpec::new(kind, duration_ms),
        )
    }

    #[test]
    fn test_opacity_reaches_one_for_every_kind() {
        for kind in [
            TransitionKind::Fade,
            TransitionKind::SlideFromRight,
            TransitionKind::SlideFromBottom,
            TransitionKind::ScaleAndFade,
        ] {
            let driver = AnimationDriver::new();
            let entrance = mounted(&driver, kind, 300);
            assert_eq!(entrance.opacity(), 0.0, "{kind:?} must start transparent");

            driver.advance_ms(300.0);
            assert_eq!(entrance.opacity(), 1.0, "{kind:?} must end opaque");
            assert!(!entrance.is_running());
        }
    }

    #[test]
    fn test_slide_from_right_offset_spans_viewport_width() {
        let driver = AnimationDriver::new();
        let entrance = mounted(&driver, TransitionKind::SlideFromRight, 300);

        // First frame reads the reset value, not a stale zero
        let props = entrance.transform();
        assert_eq!(props.len(), 1);
        assert!(props.iter().next() == Some(&TransformOp::TranslateX(VIEWPORT.width)));

        driver.advance_ms(150.0);
        let mid = match entrance.transform().iter().next() {
            Some(&TransformOp::TranslateX(x)) => x,
            other => panic!("expected translate-x, got {other:?}"),
        };
        assert!(mid > 0.0 && mid < VIEWPORT.width);

        driver.advance_ms(150.0);
        assert!(entrance.transform().iter().next() == Some(&TransformOp::TranslateX(0.0)));
    }

    #[test]
    fn test_slide_from_bottom_uses_viewport_height() {
        let driver = AnimationDriver::new();
        let entrance = mounted(&driver, TransitionKind::SlideFromBottom, 300);

        assert!(
            entrance.transform().iter().next() == Some(&TransformOp::TranslateY(VIEWPORT.height))
        );
        driver.advance_ms(300.0);
        assert!(entrance.transform().iter().next() == Some(&TransformOp::TranslateY(0.0)));
    }

    #[test]
    fn test_scale_and_fade_grows_from_point_eight() {
        let driver = AnimationDriver::new();
        let entrance = mounted(&driver, TransitionKind::ScaleAndFade, 300);

        let ops: Vec<_> = entrance.transform().iter().copied().collect();
        assert_eq!(ops, vec![TransformOp::Scale(SCALE_START)]);

        driver.advance_ms(300.0);
        let ops: Vec<_> = entrance.transform().iter().copied().collect();
        assert_eq!(ops, vec![TransformOp::Scale(1.0)]);
    }

    #[test]
    fn test_scale_absent_outside_scale_and_fade() {
        let driver = AnimationDriver::new();
        for kind in [
            TransitionKind::Fade,
            TransitionKind::SlideFromRight,
            TransitionKind::SlideFromBottom,
        ] {
            let entrance = mounted(&driver, kind, 300);
            assert!(
                !entrance
                    .transform()
                    .iter()
                    .any(|op| matches!(op, TransformOp::Scale(_))),
                "{kind:?} must not scale"
            );
        }
    }

    #[test]
    fn test_unrecognized_kind_is_bit_identical_to_fade() {
        let driver = AnimationDriver::new();
        let fade = mounted(&driver, TransitionKind::Fade, 300);
        let bogus = mounted(&driver, TransitionKind::from_name("bogus"), 300);

        for _ in 0..20 {
            driver.advance_ms(16.0);
            assert_eq!(fade.opacity(), bogus.opacity());
            assert!(fade.transform().is_empty());
            assert!(bogus.transform().is_empty());
        }
    }

    #[test]
    fn test_reconfigure_resets_offset_before_new_graph_runs() {
        let driver = AnimationDriver::new();
        let mut entrance = mounted(&driver, TransitionKind::Fade, 300);

        driver.advance_ms(150.0);
        assert!(entrance.opacity() > 0.0);

        entrance.reconfigure(TransitionSpec::new(TransitionKind::SlideFromRight, 300));

        // Synchronously reset, before any driver frame
        assert_eq!(entrance.opacity(), 0.0);
        assert!(
            entrance.transform().iter().next() == Some(&TransformOp::TranslateX(VIEWPORT.width))
        );

        driver.advance_ms(300.0);
        assert_eq!(entrance.opacity(), 1.0);
        assert!(entrance.transform().iter().next() == Some(&TransformOp::TranslateX(0.0)));
    }

    #[test]
    fn test_reconfigure_with_same_spec_is_noop() {
        let driver = AnimationDriver::new();
        let mut entrance = mounted(&driver, TransitionKind::Fade, 300);

        driver.advance_ms(150.0);
        let opacity = entrance.opacity();
        assert!(opacity > 0.0);

        entrance.reconfigure(TransitionSpec::new(TransitionKind::Fade, 300));
        assert_eq!(entrance.opacity(), opacity);
        assert!(entrance.is_running());
    }

    #[test]
    fn test_duration_change_alone_restarts() {
        let driver = AnimationDriver::new();
        let mut entrance = mounted(&driver, TransitionKind::Fade, 300);

        driver.advance_ms(150.0);
        assert!(entrance.opacity() > 0.0);

        entrance.reconfigure(TransitionSpec::new(TransitionKind::Fade, 600));
        assert_eq!(entrance.opacity(), 0.0);

        driver.advance_ms(600.0);
        assert_eq!(entrance.opacity(), 1.0);
    }

    #[test]
    fn test_instances_are_independent() {
        let driver = AnimationDriver::new();
        let spec = TransitionSpec::new(TransitionKind::SlideFromRight, 300);
        let a = EntranceTransition::new(driver.handle(), VIEWPORT, spec);
        let mut b = EntranceTransition::new(driver.handle(), VIEWPORT, spec);

        // Three cells per instance
        assert_eq!(driver.value_count(), 6);

        driver.advance_ms(150.0);
        // Restarting one instance must not disturb the other
        b.restart();
        assert_eq!(b.opacity(), 0.0);
        assert!(a.opacity() > 0.0);

        driver.advance_ms(150.0);
        assert_eq!(a.opacity(), 1.0);
        assert!(b.opacity() < 1.0);
    }

    #[test]
    fn test_parallel_cells_finish_on_the_same_frame() {
        let driver = AnimationDriver::new();
        let entrance = mounted(&driver, TransitionKind::SlideFromRight, 300);

        driver.advance_ms(299.0);
        assert!(entrance.opacity() < 1.0);
        let offset = match entrance.transform().iter().next() {
            Some(&TransformOp::TranslateX(x)) => x,
            other => panic!("expected translate-x, got {other:?}"),
        };
        assert!(offset > 0.0);

        // One more millisecond completes both together
        driver.advance_ms(1.0);
        assert_eq!(entrance.opacity(), 1.0);
        assert!(entrance.transform().iter().next() == Some(&TransformOp::TranslateX(0.0)));
    }

    #[test]
    fn test_zero_duration_jumps_to_final_state() {
        let driver = AnimationDriver::new();
        let entrance = mounted(&driver, TransitionKind::SlideFromBottom, 0);

        driver.advance_ms(0.0);
        assert_eq!(entrance.opacity(), 1.0);
        assert!(entrance.transform().iter().next() == Some(&TransformOp::TranslateY(0.0)));
        assert!(!entrance.is_running());
    }

    #[test]
    fn test_unmount_releases_driver_resources() {
        let driver = AnimationDriver::new();
        {
            let _entrance = mounted(&driver, TransitionKind::ScaleAndFade, 300);
            assert_eq!(driver.value_count(), 3);
            assert_eq!(driver.graph_count(), 1);
        }
        assert_eq!(driver.value_count(), 0);
        assert_eq!(driver.graph_count(), 0);
    }

    #[test]
    fn test_survives_dropped_driver() {
        let entrance = {
            let driver = AnimationDriver::new();
            mounted(&driver, TransitionKind::SlideFromRight, 300)
        };
        // Reads fall back to the last written values; nothing panics
        assert_eq!(entrance.opacity(), 0.0);
        assert!(!entrance.is_running());
    }
}
