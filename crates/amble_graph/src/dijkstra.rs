use amble_routing::error::SolverError;
use amble_routing::road_edge::{EdgeId, NodeId};
use amble_routing::solver::{CostedEdge, Deadline, ShortestPathSolver};
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, warn};

// Settled nodes between two deadline checks
const DEADLINE_CHECK_INTERVAL: usize = 256;

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: f64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

struct NodeData {
    weight: f64,
    settled: bool,
    parent: Option<NodeId>,
    // Index in the edge list of the edge from parent to current node
    edge_index: usize,
}

/// Undirected edge list with its adjacency, built once per search.
struct SearchGraph<'e> {
    edges: &'e [CostedEdge],
    adjacency: FxHashMap<NodeId, Vec<usize>>,
}

impl<'e> SearchGraph<'e> {
    fn new(edges: &'e [CostedEdge]) -> Result<Self, SolverError> {
        let mut adjacency: FxHashMap<NodeId, Vec<usize>> = FxHashMap::default();

        for (index, edge) in edges.iter().enumerate() {
            if !edge.cost.is_finite() || edge.cost < 0.0 {
                return Err(SolverError::Engine(format!(
                    "edge {} has invalid cost {}",
                    edge.id, edge.cost
                )));
            }

            adjacency.entry(edge.source).or_default().push(index);
            if edge.target != edge.source {
                adjacency.entry(edge.target).or_default().push(index);
            }
        }

        Ok(SearchGraph { edges, adjacency })
    }

    fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn node_edges(&self, node: NodeId) -> &[usize] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn adj_node(&self, edge_index: usize, node: NodeId) -> NodeId {
        let edge = &self.edges[edge_index];
        if edge.source == node {
            edge.target
        } else {
            edge.source
        }
    }
}

/// Binary heap Dijkstra over an undirected edge list with non-negative costs.
#[derive(Default)]
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<NodeId, NodeData>,
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra::default()
    }

    fn init(&mut self, start: NodeId) {
        self.heap.clear();
        self.data.clear();
        self.heap.push(HeapItem {
            node_id: start,
            weight: 0.0,
        });
        self.update_node_data(start, 0.0, None, usize::MAX);
    }

    fn update_node_data(
        &mut self,
        node: NodeId,
        weight: f64,
        parent: Option<NodeId>,
        edge_index: usize,
    ) {
        self.data.insert(
            node,
            NodeData {
                weight,
                settled: false,
                parent,
                edge_index,
            },
        );
    }

    #[inline(always)]
    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> f64 {
        self.data.get(&node).map_or(f64::INFINITY, |data| data.weight)
    }

    fn build_path(&self, graph: &SearchGraph, end: NodeId) -> Vec<EdgeId> {
        let mut path = Vec::with_capacity(32);
        let mut node = end;

        while let Some(data) = self.data.get(&node) {
            let Some(parent) = data.parent else {
                break;
            };
            path.push(graph.edges[data.edge_index].id);
            node = parent;
        }

        path.reverse();
        path
    }

    pub fn shortest_path(
        &mut self,
        edges: &[CostedEdge],
        start: NodeId,
        end: NodeId,
        deadline: Deadline,
    ) -> Result<Vec<EdgeId>, SolverError> {
        if start == end {
            return Ok(vec![]);
        }

        let graph = SearchGraph::new(edges)?;
        if !graph.contains(start) || !graph.contains(end) {
            return Err(SolverError::NoPath);
        }

        self.init(start);

        let mut iterations = 0;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            // Node is already settled, skip
            if self.is_settled(node_id) {
                continue;
            }

            // The weight is bigger than the current shortest weight, skip
            if weight > self.current_shortest_weight(node_id) {
                continue;
            }

            if iterations % DEADLINE_CHECK_INTERVAL == 0 && deadline.is_expired() {
                warn!(iterations, "dijkstra cancelled after deadline");
                return Err(SolverError::Cancelled);
            }

            self.set_settled(node_id);
            iterations += 1;
            if node_id == end {
                break;
            }

            for &edge_index in graph.node_edges(node_id) {
                let adj_node = graph.adj_node(edge_index, node_id);

                if self.is_settled(adj_node) {
                    continue;
                }

                let next_weight = weight + graph.edges[edge_index].cost;

                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(adj_node, next_weight, Some(node_id), edge_index);
                    self.heap.push(HeapItem {
                        weight: next_weight,
                        node_id: adj_node,
                    });
                }
            }
        }

        debug!(iterations, "dijkstra finished");

        if !self.is_settled(end) {
            return Err(SolverError::NoPath);
        }

        Ok(self.build_path(&graph, end))
    }
}

impl ShortestPathSolver for Dijkstra {
    fn solve(
        &self,
        edges: &[CostedEdge],
        source: NodeId,
        target: NodeId,
        deadline: Deadline,
    ) -> Result<Vec<EdgeId>, SolverError> {
        Dijkstra::new().shortest_path(edges, source, target, deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    const NO_DEADLINE: Deadline = Deadline::NONE;

    fn costed(id: EdgeId, source: NodeId, target: NodeId, cost: f64) -> CostedEdge {
        CostedEdge {
            id,
            source,
            target,
            cost,
        }
    }

    // 1 -a- 2 -b- 3, with a direct 1 - 3 shortcut and an isolated 8 - 9 pair.
    fn triangle(shortcut_cost: f64) -> Vec<CostedEdge> {
        vec![
            costed(100, 1, 2, 4.0),
            costed(200, 2, 3, 4.0),
            costed(300, 1, 3, shortcut_cost),
            costed(400, 8, 9, 1.0),
        ]
    }

    #[test]
    fn test_takes_cheapest_path() {
        let mut dijkstra = Dijkstra::new();

        assert_eq!(dijkstra.shortest_path(&triangle(10.0), 1, 3, NO_DEADLINE), Ok(vec![100, 200]));
        assert_eq!(dijkstra.shortest_path(&triangle(7.5), 1, 3, NO_DEADLINE), Ok(vec![300]));
    }

    #[test]
    fn test_edges_are_undirected() {
        let dijkstra = Dijkstra::new();

        assert_eq!(dijkstra.solve(&triangle(10.0), 3, 1, NO_DEADLINE), Ok(vec![200, 100]));
    }

    #[test]
    fn test_disconnected_nodes() {
        let dijkstra = Dijkstra::new();

        assert_eq!(dijkstra.solve(&triangle(10.0), 1, 9, NO_DEADLINE), Err(SolverError::NoPath));
        assert_eq!(dijkstra.solve(&triangle(10.0), 1, 42, NO_DEADLINE), Err(SolverError::NoPath));
    }

    #[test]
    fn test_same_start_and_end() {
        let dijkstra = Dijkstra::new();

        assert_eq!(dijkstra.solve(&triangle(10.0), 2, 2, NO_DEADLINE), Ok(vec![]));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let dijkstra = Dijkstra::new();

        assert!(matches!(
            dijkstra.solve(&[costed(1, 1, 2, -1.0)], 1, 2, NO_DEADLINE),
            Err(SolverError::Engine(_))
        ));
    }

    #[test]
    fn test_expired_deadline_cancels_search() {
        let mut dijkstra = Dijkstra::new();
        let deadline = Deadline::at(Instant::now());

        assert_eq!(
            dijkstra.shortest_path(&triangle(10.0), 1, 3, deadline),
            Err(SolverError::Cancelled)
        );
        // Trivial queries never start a search
        assert_eq!(dijkstra.shortest_path(&triangle(10.0), 2, 2, deadline), Ok(vec![]));
    }

    #[test]
    fn test_future_deadline_finishes() {
        let dijkstra = Dijkstra::new();
        let deadline = Deadline::after(Duration::from_secs(60));

        assert_eq!(dijkstra.solve(&triangle(10.0), 1, 3, deadline), Ok(vec![100, 200]));
    }

    #[test]
    fn test_parallel_edges_pick_cheapest() {
        let dijkstra = Dijkstra::new();
        let edges = [costed(1, 1, 2, 9.0), costed(2, 2, 1, 3.0), costed(3, 1, 2, 5.0)];

        assert_eq!(dijkstra.solve(&edges, 1, 2, NO_DEADLINE), Ok(vec![2]));
    }

    #[test]
    fn test_reusable_between_searches() {
        let mut dijkstra = Dijkstra::new();
        let edges = triangle(10.0);

        assert_eq!(dijkstra.shortest_path(&edges, 1, 2, NO_DEADLINE), Ok(vec![100]));
        assert_eq!(dijkstra.shortest_path(&edges, 8, 9, NO_DEADLINE), Ok(vec![400]));
    }
}
