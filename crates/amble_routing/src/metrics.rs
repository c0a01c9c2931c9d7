use serde::Serialize;

use crate::comfort_factor::FactorMap;
use crate::road_edge::RoadEdge;
use crate::route::RouteVariant;

/// Summary statistics of one route.
///
/// `means` holds, per comfort factor, the mean over the edges that have a
/// value for it. Edges without a value are left out rather than counted as 0,
/// so the figure describes the data that exists. A factor no edge has a value
/// for, or an empty route, reports `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    #[serde(rename = "type")]
    pub variant: RouteVariant,
    pub total_length: f64,
    #[serde(flatten)]
    pub means: FactorMap<Option<f64>>,
}

pub fn aggregate(variant: RouteVariant, edges: &[&RoadEdge]) -> RouteMetrics {
    let total_length = edges.iter().fold(0.0, |total, edge| total + edge.length);

    let means = FactorMap::from_fn(|factor| {
        let (sum, count) = edges
            .iter()
            .filter_map(|edge| edge.attribute(factor))
            .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

        (count > 0).then(|| sum / count as f64)
    });

    RouteMetrics {
        variant,
        total_length,
        means,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comfort_factor::ComfortFactor;
    use crate::test_utils::test_edges::{edge, edge_with, three_edge_path};

    #[test]
    fn test_total_length_is_sum_of_edges() {
        let edges = three_edge_path();
        let refs: Vec<&RoadEdge> = edges.iter().collect();

        let metrics = aggregate(RouteVariant::Comfort, &refs);

        assert_eq!(metrics.total_length, 23.0);
        assert_eq!(metrics.variant, RouteVariant::Comfort);
    }

    #[test]
    fn test_means_per_factor() {
        let edges = three_edge_path();
        let refs: Vec<&RoadEdge> = edges.iter().collect();

        let metrics = aggregate(RouteVariant::Comfort, &refs);

        assert_eq!(metrics.means[ComfortFactor::Sidewalks], Some(0.5));
        assert_eq!(metrics.means[ComfortFactor::Surface], Some(2.0 / 3.0));
        assert_eq!(metrics.means[ComfortFactor::Greenery], Some(0.5));
        assert_eq!(metrics.means[ComfortFactor::Benches], None);
    }

    #[test]
    fn test_missing_values_are_excluded_from_mean() {
        let edges = [
            edge_with(1, 1, 2, 4.0, &[(ComfortFactor::Water, 0.8)]),
            edge(2, 2, 3, 6.0),
            edge_with(3, 3, 4, 2.0, &[(ComfortFactor::Water, 0.4)]),
        ];
        let refs: Vec<&RoadEdge> = edges.iter().collect();

        let metrics = aggregate(RouteVariant::Shortest, &refs);

        assert!((metrics.means[ComfortFactor::Water].unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(metrics.total_length, 12.0);
    }

    #[test]
    fn test_empty_route() {
        let metrics = aggregate(RouteVariant::Shortest, &[]);

        assert_eq!(metrics.total_length, 0.0);
        assert!(metrics.means.iter().all(|(_, mean)| mean.is_none()));
    }

    #[test]
    fn test_serialized_record() {
        let edges = three_edge_path();
        let refs: Vec<&RoadEdge> = edges.iter().collect();

        let json = serde_json::to_value(aggregate(RouteVariant::Shortest, &refs)).unwrap();

        assert_eq!(json["type"], "shortest");
        assert_eq!(json["total_length"], 23.0);
        assert_eq!(json["pedestrian_infrastructure_norm"], 0.5);
        assert!(json["light"].is_null());
    }
}
