use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::road_edge::EdgeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteVariant {
    Comfort,
    Shortest,
}

impl RouteVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteVariant::Comfort => "comfort",
            RouteVariant::Shortest => "shortest",
        }
    }
}

impl fmt::Display for RouteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge-id set found by one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    variant: RouteVariant,
    edge_ids: Vec<EdgeId>,
}

impl Route {
    /// Repeated ids are kept once, in order of first appearance.
    pub fn new(variant: RouteVariant, edge_ids: impl IntoIterator<Item = EdgeId>) -> Self {
        let mut seen = FxHashSet::default();
        let edge_ids = edge_ids.into_iter().filter(|id| seen.insert(*id)).collect();

        Route { variant, edge_ids }
    }

    pub fn variant(&self) -> RouteVariant {
        self.variant
    }

    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_edges_are_kept_once() {
        let route = Route::new(RouteVariant::Comfort, [4, 2, 4, 9, 2]);

        assert_eq!(route.edge_ids(), &[4, 2, 9]);
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(RouteVariant::Shortest).unwrap(),
            serde_json::json!("shortest")
        );
    }
}
