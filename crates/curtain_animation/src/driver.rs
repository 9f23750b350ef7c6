//! Animation driver
//!
//! Owns all registered value cells and running graphs, and advances them
//! once per frame. The host rendering loop calls [`AnimationDriver::tick`]
//! (wall clock) or [`AnimationDriver::advance_ms`] (explicit delta, used
//! by tests and headless runs) from its frame callback; the driver never
//! spawns its own execution context.
//!
//! Components hold a [`DriverHandle`] (weak) and interact through RAII
//! wrappers:
//! - [`AnimatedScalar`] - an exclusively-owned value cell
//! - [`GraphHandle`] - a started graph; dropping it cancels the graph
//!
//! Cells and graphs are only removed when their wrapper drops, so a
//! finished graph can be inspected until its owner lets go of it.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

use crate::graph::{AnimationGraph, RunningNode};

new_key_type! {
    /// Handle to a registered value cell
    pub struct ValueId;
    /// Handle to a started animation graph
    pub struct GraphId;
}

/// A graph under execution, with the cells it mutates
struct RunningGraph {
    node: RunningNode,
    targets: Vec<ValueId>,
}

/// Internal state of the animation driver
struct DriverInner {
    cells: SlotMap<ValueId, f32>,
    graphs: SlotMap<GraphId, RunningGraph>,
    last_frame: Instant,
}

/// The frame-driven animation driver
///
/// Typically owned by the application shell; components receive a
/// [`DriverHandle`] via [`AnimationDriver::handle`].
pub struct AnimationDriver {
    inner: Arc<Mutex<DriverInner>>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DriverInner {
                cells: SlotMap::with_key(),
                graphs: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a weak handle for passing to components
    pub fn handle(&self) -> DriverHandle {
        DriverHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all graphs by the wall-clock time since the previous call
    ///
    /// Returns true while any graph is still running (needs another
    /// frame).
    pub fn tick(&self) -> bool {
        let dt_ms = {
            let mut inner = self.inner.lock().unwrap();
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f32() * 1000.0;
            inner.last_frame = now;
            dt
        };
        self.advance_ms(dt_ms)
    }

    /// Advance all graphs by an explicit delta in milliseconds
    ///
    /// Every graph - and every member of a parallel group - sees the
    /// same delta, so values animated together stay synchronized within
    /// the frame.
    pub fn advance_ms(&self, dt_ms: f32) -> bool {
        let mut guard = self.inner.lock().unwrap();
        let inner = &mut *guard;
        for (_, graph) in inner.graphs.iter_mut() {
            graph.node.advance(dt_ms, &mut inner.cells);
        }
        // Finished graphs stay registered until their handle drops.
        inner.graphs.iter().any(|(_, g)| !g.node.is_done())
    }

    /// Check if any graph is still running
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.graphs.iter().any(|(_, g)| !g.node.is_done())
    }

    /// Number of registered value cells
    pub fn value_count(&self) -> usize {
        self.inner.lock().unwrap().cells.len()
    }

    /// Number of registered graphs (running or finished)
    pub fn graph_count(&self) -> usize {
        self.inner.lock().unwrap().graphs.len()
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation driver
///
/// Safe to hold after the driver drops: every operation becomes a no-op
/// returning `None`/`false`.
#[derive(Clone)]
pub struct DriverHandle {
    inner: Weak<Mutex<DriverInner>>,
}

impl DriverHandle {
    /// Register a value cell with an initial value
    pub fn register_value(&self, initial: f32) -> Option<ValueId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            // Reset last_frame so a wall-clock tick right after
            // registration does not see a stale, oversized delta.
            guard.last_frame = Instant::now();
            guard.cells.insert(initial)
        })
    }

    /// Read a cell's current value
    pub fn get_value(&self, id: ValueId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().cells.get(id).copied())
    }

    /// Set a cell's value immediately, outside any graph
    pub fn set_value(&self, id: ValueId, value: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(cell) = inner.lock().unwrap().cells.get_mut(id) {
                *cell = value;
            }
        }
    }

    /// Remove a cell
    pub fn remove_value(&self, id: ValueId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().cells.remove(id);
        }
    }

    /// Start a graph and return its ID
    ///
    /// Any previously started graph that mutates one of the same cells
    /// is removed first (last-write-wins): a cell is never advanced by
    /// two graphs in the same frame.
    pub fn start_graph(&self, graph: AnimationGraph) -> Option<GraphId> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.lock().unwrap();

        let targets = graph.targets();
        let stale: Vec<GraphId> = guard
            .graphs
            .iter()
            .filter(|(_, g)| g.targets.iter().any(|t| targets.contains(t)))
            .map(|(id, _)| id)
            .collect();
        for id in stale {
            if let Some(old) = guard.graphs.remove(id) {
                if !old.node.is_done() {
                    tracing::debug!(?id, "superseding in-flight graph on shared cell");
                }
            }
        }

        guard.last_frame = Instant::now();
        Some(guard.graphs.insert(RunningGraph {
            node: RunningNode::new(&graph),
            targets,
        }))
    }

    /// Check if a graph exists and has not finished
    pub fn is_graph_running(&self, id: GraphId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .graphs
                    .get(id)
                    .map(|g| !g.node.is_done())
            })
            .unwrap_or(false)
    }

    /// Remove a graph, cancelling it if still running
    pub fn remove_graph(&self, id: GraphId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().graphs.remove(id);
        }
    }

    /// Check if the driver is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Scalar
// ============================================================================

/// An exclusively-owned animated value cell
///
/// Registers with the driver on creation and removes its cell on drop.
/// Deliberately not `Clone`: each cell belongs to exactly one owner, and
/// two owners mutating one cell would race within a frame.
pub struct AnimatedScalar {
    handle: DriverHandle,
    id: Option<ValueId>,
    /// Mirror of the last value written, used when the driver is gone
    current: f32,
}

impl AnimatedScalar {
    /// Create and register a cell with the given initial value
    pub fn new(handle: DriverHandle, initial: f32) -> Self {
        let id = handle.register_value(initial);
        Self {
            handle,
            id,
            current: initial,
        }
    }

    /// Cell ID for building animation steps
    pub fn id(&self) -> Option<ValueId> {
        self.id
    }

    /// Current value of the cell
    pub fn get(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.get_value(id))
            .unwrap_or(self.current)
    }

    /// Set the value immediately, outside any graph
    ///
    /// Takes effect synchronously: a graph started afterwards captures
    /// this as its starting value.
    pub fn set(&mut self, value: f32) {
        self.current = value;
        if let Some(id) = self.id {
            self.handle.set_value(id, value);
        }
    }
}

impl Drop for AnimatedScalar {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_value(id);
        }
    }
}

// ============================================================================
// Graph Handle
// ============================================================================

/// A started animation graph
///
/// Dropping the handle removes the graph from the driver, cancelling it
/// if still running - nothing outlives its owner.
pub struct GraphHandle {
    handle: DriverHandle,
    id: Option<GraphId>,
}

impl GraphHandle {
    /// Start a graph on the driver
    pub fn start(handle: DriverHandle, graph: AnimationGraph) -> Self {
        let id = handle.start_graph(graph);
        Self { handle, id }
    }

    /// Check if the graph is still running
    pub fn is_running(&self) -> bool {
        self.id
            .map(|id| self.handle.is_graph_running(id))
            .unwrap_or(false)
    }

    /// Cancel the graph now instead of at drop
    pub fn stop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove_graph(id);
        }
    }
}

impl Drop for GraphHandle {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_graph(id);
        }
    }
}
