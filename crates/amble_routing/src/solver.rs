//! Seams to the external graph engine.
//!
//! The routing core never searches the graph itself. It evaluates costs,
//! hands an edge list to a [`ShortestPathSolver`] and reads edge records back
//! from an [`EdgeStore`]. Any engine satisfying these traits can be plugged in.

use std::time::{Duration, Instant};

use crate::error::{LocatorError, SolverError};
use crate::geopoint::GeoPoint;
use crate::road_edge::{EdgeId, NodeId, RoadEdge};

/// Point in time after which a request stops searching. [`Deadline::NONE`] never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub const NONE: Deadline = Deadline(None);

    pub fn at(instant: Instant) -> Self {
        Deadline(Some(instant))
    }

    pub fn after(timeout: Duration) -> Self {
        Deadline(Instant::now().checked_add(timeout))
    }

    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}

/// Edge handed to the solver with its cost already evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostedEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub cost: f64,
}

pub trait ShortestPathSolver: Send + Sync {
    /// Undirected minimum-cost path from `source` to `target`, as the ids of the traversed edges.
    ///
    /// Implementations give up with [`SolverError::Cancelled`] once `deadline` has passed.
    fn solve(
        &self,
        edges: &[CostedEdge],
        source: NodeId,
        target: NodeId,
        deadline: Deadline,
    ) -> Result<Vec<EdgeId>, SolverError>;
}

pub trait NodeLocator: Send + Sync {
    fn nearest_node(&self, point: &GeoPoint) -> Result<NodeId, LocatorError>;
}

pub trait EdgeStore: Send + Sync {
    fn edges(&self) -> &[RoadEdge];
    fn edge(&self, id: EdgeId) -> Option<&RoadEdge>;
}
