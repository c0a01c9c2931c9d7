
#[cfg(test)]
pub mod test_solver {
    use parking_lot::Mutex;

    use crate::error::{LocatorError, SolverError};
    use crate::geopoint::GeoPoint;
    use crate::road_edge::{EdgeId, NodeId};
    use crate::solver::{CostedEdge, Deadline, NodeLocator, ShortestPathSolver};

    type SolveFn = dyn Fn(&[CostedEdge], NodeId, NodeId) -> Result<Vec<EdgeId>, SolverError>
        + Send
        + Sync;

    /// Solver stub answering through a closure and recording every edge list it receives.
    pub struct RecordingSolver {
        answer: Box<SolveFn>,
        calls: Mutex<Vec<Vec<CostedEdge>>>,
    }

    impl RecordingSolver {
        pub fn new(
            answer: impl Fn(&[CostedEdge], NodeId, NodeId) -> Result<Vec<EdgeId>, SolverError>
            + Send
            + Sync
            + 'static,
        ) -> Self {
            RecordingSolver {
                answer: Box::new(answer),
                calls: Mutex::new(vec![]),
            }
        }

        /// Always answers with the same edges.
        pub fn fixed(edge_ids: Vec<EdgeId>) -> Self {
            Self::new(move |_, _, _| Ok(edge_ids.clone()))
        }

        pub fn calls(&self) -> Vec<Vec<CostedEdge>> {
            self.calls.lock().clone()
        }
    }

    impl ShortestPathSolver for RecordingSolver {
        fn solve(
            &self,
            edges: &[CostedEdge],
            source: NodeId,
            target: NodeId,
            _deadline: Deadline,
        ) -> Result<Vec<EdgeId>, SolverError> {
            self.calls.lock().push(edges.to_vec());
            (self.answer)(edges, source, target)
        }
    }

    /// Locator resolving to the closest of a fixed set of nodes.
    pub struct FixedLocator(pub Vec<(GeoPoint, NodeId)>);

    impl NodeLocator for FixedLocator {
        fn nearest_node(&self, point: &GeoPoint) -> Result<NodeId, LocatorError> {
            let [x, y] = point.mercator();
            let distance = |other: &GeoPoint| {
                let [ox, oy] = other.mercator();
                (ox - x).powi(2) + (oy - y).powi(2)
            };

            self.0
                .iter()
                .min_by(|(a, _), (b, _)| distance(a).total_cmp(&distance(b)))
                .map(|(_, node)| *node)
                .ok_or(LocatorError::EmptyNetwork)
        }
    }
}
