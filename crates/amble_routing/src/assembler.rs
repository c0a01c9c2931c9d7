use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::error::RoutingError;
use crate::road_edge::RoadEdge;
use crate::route::{Route, RouteVariant};
use crate::solver::EdgeStore;

/// Looks up every edge of the route. Fails on the first id the store does not know.
pub fn resolve_edges<'s>(
    route: &Route,
    store: &'s dyn EdgeStore,
) -> Result<Vec<&'s RoadEdge>, RoutingError> {
    route
        .edge_ids()
        .iter()
        .map(|&edge_id| {
            store.edge(edge_id).ok_or(RoutingError::MissingEdge {
                variant: route.variant(),
                edge_id,
            })
        })
        .collect()
}

pub fn assemble_route(
    route: &Route,
    store: &dyn EdgeStore,
) -> Result<FeatureCollection, RoutingError> {
    let edges = resolve_edges(route, store)?;
    Ok(feature_collection(&edges, route.variant()))
}

pub fn feature_collection(edges: &[&RoadEdge], variant: RouteVariant) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: edges.iter().map(|edge| edge_feature(edge, variant)).collect(),
        foreign_members: None,
    }
}

fn edge_feature(edge: &RoadEdge, variant: RouteVariant) -> Feature {
    let coordinates = edge.geometry.coords().map(|c| vec![c.x, c.y]).collect();

    let mut properties = JsonObject::new();
    properties.insert("gid".to_string(), JsonValue::from(edge.id));
    for (factor, value) in edge.attributes.iter() {
        properties.insert(
            factor.attribute_column().to_string(),
            value.map_or(JsonValue::Null, JsonValue::from),
        );
    }
    properties.insert("segment_length_meters".to_string(), JsonValue::from(edge.length));
    properties.insert("route_type".to_string(), JsonValue::from(variant.as_str()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
