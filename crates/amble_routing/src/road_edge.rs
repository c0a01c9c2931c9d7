use fxhash::FxHashMap;
use geo_types::LineString;

use crate::comfort_factor::{ComfortAttributes, ComfortFactor};
use crate::error::DuplicateEdgeError;
use crate::geopoint::GeoPoint;
use crate::solver::EdgeStore;

pub type EdgeId = i64;
pub type NodeId = i64;

/// Road segment of the pedestrian network. Read-only for the routing core.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub geometry: LineString<f64>,
    /// Length in meters.
    pub length: f64,
    pub attributes: ComfortAttributes,
}

impl RoadEdge {
    #[inline(always)]
    pub fn attribute(&self, factor: ComfortFactor) -> Option<f64> {
        self.attributes[factor]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadNode {
    pub id: NodeId,
    pub position: GeoPoint,
}

/// Edges indexed by id.
#[derive(Debug, Default)]
pub struct EdgeTable {
    edges: Vec<RoadEdge>,
    index: FxHashMap<EdgeId, usize>,
}

impl EdgeTable {
    pub fn new(edges: Vec<RoadEdge>) -> Result<Self, DuplicateEdgeError> {
        let mut index = FxHashMap::default();
        index.reserve(edges.len());

        for (position, edge) in edges.iter().enumerate() {
            if index.insert(edge.id, position).is_some() {
                return Err(DuplicateEdgeError(edge.id));
            }
        }

        Ok(EdgeTable { edges, index })
    }

    pub fn get(&self, id: EdgeId) -> Option<&RoadEdge> {
        self.index.get(&id).map(|&position| &self.edges[position])
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl EdgeStore for EdgeTable {
    fn edges(&self) -> &[RoadEdge] {
        &self.edges
    }

    fn edge(&self, id: EdgeId) -> Option<&RoadEdge> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_edges::edge;

    #[test]
    fn test_get_by_id() {
        let table = EdgeTable::new(vec![edge(7, 1, 2, 10.0), edge(3, 2, 3, 5.0)]).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(3).map(|e| e.length), Some(5.0));
        assert!(table.get(4).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = EdgeTable::new(vec![edge(1, 1, 2, 10.0), edge(1, 2, 3, 5.0)]);

        assert_eq!(result.unwrap_err(), DuplicateEdgeError(1));
    }
}
