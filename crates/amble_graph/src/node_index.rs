use amble_routing::geopoint::GeoPoint;
use amble_routing::road_edge::{NodeId, RoadNode};
use rstar::RTree;
use rstar::primitives::GeomWithData;

type IndexedNode = GeomWithData<[f64; 2], NodeId>;

/// R-tree over node positions, projected to Web Mercator so that planar
/// distances between nearby points follow ground distances.
pub struct NodeIndex {
    tree: RTree<IndexedNode>,
}

impl NodeIndex {
    pub fn build(nodes: &[RoadNode]) -> NodeIndex {
        let tree = RTree::bulk_load(
            nodes
                .iter()
                .map(|node| IndexedNode::new(node.position.mercator(), node.id))
                .collect(),
        );

        NodeIndex { tree }
    }

    pub fn nearest(&self, point: &GeoPoint) -> Option<NodeId> {
        self.tree
            .nearest_neighbor(&point.mercator())
            .map(|nearest| nearest.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
