use std::path::Path;
use std::str::FromStr;

use amble_routing::comfort_factor::{ComfortAttributes, ComfortFactor};
use amble_routing::error::{LocatorError, SolverError};
use amble_routing::geopoint::GeoPoint;
use amble_routing::road_edge::{EdgeId, EdgeTable, NodeId, RoadEdge, RoadNode};
use amble_routing::solver::{CostedEdge, Deadline, EdgeStore, NodeLocator, ShortestPathSolver};
use fxhash::FxHashMap;
use geo::{Haversine, Length};
use geo_types::{Coord, LineString};
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue, Value};
use tracing::info;

use crate::dijkstra::Dijkstra;
use crate::error::GraphError;
use crate::node_index::NodeIndex;

/// Road network held in memory: edge table, node positions and a nearest-node index.
pub struct RoadGraph {
    edges: EdgeTable,
    nodes: Vec<RoadNode>,
    index: NodeIndex,
}

impl RoadGraph {
    pub fn from_geojson_file(path: impl AsRef<Path>) -> Result<RoadGraph, GraphError> {
        let path = path.as_ref();
        info!("Loading road network from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&content)
    }

    pub fn from_geojson_str(content: &str) -> Result<RoadGraph, GraphError> {
        match GeoJson::from_str(content)? {
            GeoJson::FeatureCollection(collection) => Self::from_feature_collection(&collection),
            _ => Err(GraphError::NotAFeatureCollection),
        }
    }

    pub fn from_feature_collection(
        collection: &FeatureCollection,
    ) -> Result<RoadGraph, GraphError> {
        let edges = collection
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| parse_edge(index, feature))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_edges(edges)
    }

    /// Node positions are taken from the first and last coordinate of each edge geometry.
    pub fn from_edges(edges: Vec<RoadEdge>) -> Result<RoadGraph, GraphError> {
        let mut positions: FxHashMap<NodeId, GeoPoint> = FxHashMap::default();
        for edge in &edges {
            let coords = edge.geometry.0.as_slice();
            if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
                positions.entry(edge.source).or_insert((*first).into());
                positions.entry(edge.target).or_insert((*last).into());
            }
        }

        let mut nodes: Vec<RoadNode> = positions
            .into_iter()
            .map(|(id, position)| RoadNode { id, position })
            .collect();
        nodes.sort_by_key(|node| node.id);

        let index = NodeIndex::build(&nodes);
        let edges = EdgeTable::new(edges).map_err(|error| GraphError::DuplicateEdge(error.0))?;

        info!(
            "Road network loaded with {} edges and {} nodes",
            edges.len(),
            nodes.len()
        );

        Ok(RoadGraph {
            edges,
            nodes,
            index,
        })
    }

    pub fn nodes(&self) -> &[RoadNode] {
        &self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl EdgeStore for RoadGraph {
    fn edges(&self) -> &[RoadEdge] {
        self.edges.edges()
    }

    fn edge(&self, id: EdgeId) -> Option<&RoadEdge> {
        self.edges.get(id)
    }
}

impl NodeLocator for RoadGraph {
    fn nearest_node(&self, point: &GeoPoint) -> Result<NodeId, LocatorError> {
        self.index.nearest(point).ok_or(LocatorError::EmptyNetwork)
    }
}

impl ShortestPathSolver for RoadGraph {
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

fn parse_edge(index: usize, feature: &Feature) -> Result<RoadEdge, GraphError> {
    let empty = JsonObject::new();
    let properties = feature.properties.as_ref().unwrap_or(&empty);

    let id = integer_property(properties, index, "gid")?;
    let source = integer_property(properties, index, "source")?;
    let target = integer_property(properties, index, "target")?;

    let geometry = match feature.geometry.as_ref().map(|geometry| &geometry.value) {
        Some(Value::LineString(positions)) if positions.len() >= 2 => positions
            .iter()
            .map(|position| match position.as_slice() {
                [x, y, ..] => Ok(Coord { x: *x, y: *y }),
                _ => Err(GraphError::InvalidGeometry { index }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(LineString::new)?,
        _ => return Err(GraphError::InvalidGeometry { index }),
    };

    let length = match properties.get("length") {
        None | Some(JsonValue::Null) => Haversine.length(&geometry),
        Some(value) => value.as_f64().ok_or(GraphError::MissingProperty {
            index,
            property: "length",
        })?,
    };
    if !length.is_finite() || length < 0.0 {
        return Err(GraphError::InvalidLength {
            edge_id: id,
            length,
        });
    }

    let mut attributes = ComfortAttributes::filled(None);
    for factor in ComfortFactor::ALL {
        let column = factor.attribute_column();
        attributes[factor] = match properties.get(column) {
            None | Some(JsonValue::Null) => None,
            Some(value) => {
                let value = value.as_f64().ok_or(GraphError::MissingProperty {
                    index,
                    property: column,
                })?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(GraphError::AttributeOutOfRange {
                        edge_id: id,
                        column,
                        value,
                    });
                }
                Some(value)
            }
        };
    }

    Ok(RoadEdge {
        id,
        source,
        target,
        geometry,
        length,
        attributes,
    })
}

fn integer_property(
    properties: &JsonObject,
    index: usize,
    property: &'static str,
) -> Result<i64, GraphError> {
    properties
        .get(property)
        .and_then(JsonValue::as_i64)
        .ok_or(GraphError::MissingProperty { index, property })
}
