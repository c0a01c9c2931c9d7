use crate::preferences::{NormalizedPreferences, PreferenceVector};
use crate::road_edge::RoadEdge;
use crate::route::RouteVariant;

/// Non-negative cost of traversing an edge.
pub trait CostModel: Send + Sync {
    fn edge_cost(&self, edge: &RoadEdge) -> f64;
}

/// `length * (1 + alpha * sum(weight * (1 - attribute)))`.
///
/// A missing attribute counts as 0, the least comfortable value, so gaps in
/// the network data never make an edge look better than it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortCost {
    weights: PreferenceVector,
    alpha: f64,
}

impl ComfortCost {
    pub fn new(weights: PreferenceVector, alpha: f64) -> Self {
        ComfortCost { weights, alpha }
    }

    pub fn discomfort(&self, edge: &RoadEdge) -> f64 {
        self.weights
            .iter()
            .map(|(factor, weight)| weight * (1.0 - edge.attribute(factor).unwrap_or(0.0)))
            .sum()
    }
}

impl CostModel for ComfortCost {
    #[inline]
    fn edge_cost(&self, edge: &RoadEdge) -> f64 {
        edge.length * (1.0 + self.alpha * self.discomfort(edge))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceCost;

impl CostModel for DistanceCost {
    #[inline]
    fn edge_cost(&self, edge: &RoadEdge) -> f64 {
        edge.length
    }
}

/// The two cost models of one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModels {
    pub comfort: ComfortCost,
    pub distance: DistanceCost,
}

impl CostModels {
    pub fn build(preferences: &NormalizedPreferences) -> Self {
        CostModels {
            comfort: ComfortCost::new(preferences.weights, preferences.alpha()),
            distance: DistanceCost,
        }
    }

    pub fn for_variant(&self, variant: RouteVariant) -> &dyn CostModel {
        match variant {
            RouteVariant::Comfort => &self.comfort,
            RouteVariant::Shortest => &self.distance,
        }
    }
}
