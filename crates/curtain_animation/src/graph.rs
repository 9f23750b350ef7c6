//! Timed animation graphs
//!
//! A graph describes what a transition wants animated: single timed
//! steps, parallel groups (all members share each frame's timestamp) and
//! sequences (strict hand-off, step N+1 starts only once step N is
//! done). The driver instantiates a graph into a [`RunningGraph`] and
//! walks it each frame.
//!
//! A step's starting value is not part of the description: it is read
//! from the target cell at the moment the step first runs, so resets
//! applied to a cell just before the graph starts are honored.

use slotmap::SlotMap;

use crate::driver::ValueId;
use crate::easing::Easing;

/// One timed interpolation of a value cell toward a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Cell to animate
    pub target: ValueId,
    /// Final value of the cell when the step completes
    pub to_value: f32,
    /// Step duration in milliseconds; zero or negative completes on the
    /// first frame (instantaneous jump)
    pub duration_ms: f32,
    /// Easing curve applied to the step's progress
    pub easing: Easing,
}

impl Step {
    /// Timed step with the driver's default easing
    pub fn timing(target: ValueId, to_value: f32, duration_ms: f32) -> Self {
        Self {
            target,
            to_value,
            duration_ms,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Declarative composition of timed steps
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationGraph {
    /// A single step
    Step(Step),
    /// All children start together; the group completes when the
    /// slowest child completes
    Parallel(Vec<AnimationGraph>),
    /// Children run strictly one after another
    Sequence(Vec<AnimationGraph>),
}

impl AnimationGraph {
    /// Single timed step with default easing
    pub fn timing(target: ValueId, to_value: f32, duration_ms: f32) -> Self {
        AnimationGraph::Step(Step::timing(target, to_value, duration_ms))
    }

    pub fn parallel(children: Vec<AnimationGraph>) -> Self {
        AnimationGraph::Parallel(children)
    }

    pub fn sequence(children: Vec<AnimationGraph>) -> Self {
        AnimationGraph::Sequence(children)
    }

    /// Total duration of the graph in milliseconds
    pub fn duration_ms(&self) -> f32 {
        match self {
            AnimationGraph::Step(step) => step.duration_ms.max(0.0),
            AnimationGraph::Parallel(children) => children
                .iter()
                .map(|c| c.duration_ms())
                .fold(0.0, f32::max),
            AnimationGraph::Sequence(children) => {
                children.iter().map(|c| c.duration_ms()).sum()
            }
        }
    }

    /// Collect every cell this graph mutates
    pub fn targets(&self) -> Vec<ValueId> {
        let mut out = Vec::new();
        self.collect_targets(&mut out);
        out
    }

    fn collect_targets(&self, out: &mut Vec<ValueId>) {
        match self {
            AnimationGraph::Step(step) => {
                if !out.contains(&step.target) {
                    out.push(step.target);
                }
            }
            AnimationGraph::Parallel(children) | AnimationGraph::Sequence(children) => {
                for child in children {
                    child.collect_targets(out);
                }
            }
        }
    }
}

// ============================================================================
// Runtime state
// ============================================================================

#[derive(Clone, Copy, Debug)]
pub(crate) enum StepState {
    /// Not started yet; the starting value has not been captured
    Pending,
    /// Interpolating from the captured starting value
    Running { from: f32, elapsed_ms: f32 },
    Done,
}

/// A graph instantiated for execution
#[derive(Debug)]
pub(crate) enum RunningNode {
    Step { step: Step, state: StepState },
    Parallel(Vec<RunningNode>),
    Sequence { children: Vec<RunningNode>, current: usize },
}

impl RunningNode {
    pub(crate) fn new(graph: &AnimationGraph) -> Self {
        match graph {
            AnimationGraph::Step(step) => RunningNode::Step {
                step: *step,
                state: StepState::Pending,
            },
            AnimationGraph::Parallel(children) => {
                RunningNode::Parallel(children.iter().map(RunningNode::new).collect())
            }
            AnimationGraph::Sequence(children) => RunningNode::Sequence {
                children: children.iter().map(RunningNode::new).collect(),
                current: 0,
            },
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        match self {
            RunningNode::Step { state, .. } => matches!(state, StepState::Done),
            RunningNode::Parallel(children) => children.iter().all(|c| c.is_done()),
            RunningNode::Sequence { children, current } => *current >= children.len(),
        }
    }

    /// Advance by `dt_ms`, mutating the target cells
    ///
    /// Returns the leftover time not consumed by this node, so a parent
    /// sequence can hand the remainder of the frame to its next child.
    /// All children of a parallel group receive the same `dt_ms`.
    pub(crate) fn advance(&mut self, dt_ms: f32, cells: &mut SlotMap<ValueId, f32>) -> f32 {
        match self {
            RunningNode::Step { step, state } => {
                if let StepState::Pending = state {
                    // Capture the starting value at first touch. A cell
                    // removed before the step starts completes the step
                    // without effect.
                    match cells.get(step.target) {
                        Some(&from) => {
                            *state = StepState::Running {
                                from,
                                elapsed_ms: 0.0,
                            }
                        }
                        None => {
                            *state = StepState::Done;
                            return dt_ms;
                        }
                    }
                }
                let StepState::Running { from, elapsed_ms } = &mut *state else {
                    return dt_ms;
                };

                if step.duration_ms <= 0.0 {
                    if let Some(cell) = cells.get_mut(step.target) {
                        *cell = step.to_value;
                    }
                    *state = StepState::Done;
                    return dt_ms;
                }

                *elapsed_ms += dt_ms;
                if *elapsed_ms >= step.duration_ms {
                    let leftover = *elapsed_ms - step.duration_ms;
                    if let Some(cell) = cells.get_mut(step.target) {
                        *cell = step.to_value;
                    }
                    *state = StepState::Done;
                    return leftover;
                }

                let t = *elapsed_ms / step.duration_ms;
                if let Some(cell) = cells.get_mut(step.target) {
                    *cell = *from + (step.to_value - *from) * step.easing.apply(t);
                }
                0.0
            }
            RunningNode::Parallel(children) => {
                if children.is_empty() {
                    return dt_ms;
                }
                let mut leftover = f32::INFINITY;
                for child in children.iter_mut() {
                    leftover = leftover.min(child.advance(dt_ms, cells));
                }
                leftover
            }
            RunningNode::Sequence { children, current } => {
                let mut remaining = dt_ms;
                while *current < children.len() {
                    remaining = children[*current].advance(remaining, cells);
                    if children[*current].is_done() {
                        *current += 1;
                    } else {
                        return 0.0;
                    }
                }
                remaining
            }
        }
    }
}
