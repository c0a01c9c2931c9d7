use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const FACTOR_COUNT: usize = 13;

/// Pedestrian-experience attribute used to bias the routing cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComfortFactor {
    Sidewalks,
    Surface,
    Speed,
    Greenery,
    Buildings,
    Crossings,
    Facilities,
    Lanes,
    Water,
    Benches,
    Light,
    Visuals,
    Gradient,
}

impl ComfortFactor {
    pub const ALL: [ComfortFactor; FACTOR_COUNT] = [
        ComfortFactor::Sidewalks,
        ComfortFactor::Surface,
        ComfortFactor::Speed,
        ComfortFactor::Greenery,
        ComfortFactor::Buildings,
        ComfortFactor::Crossings,
        ComfortFactor::Facilities,
        ComfortFactor::Lanes,
        ComfortFactor::Water,
        ComfortFactor::Benches,
        ComfortFactor::Light,
        ComfortFactor::Visuals,
        ComfortFactor::Gradient,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ComfortFactor::Sidewalks => "sidewalks",
            ComfortFactor::Surface => "surface",
            ComfortFactor::Speed => "speed",
            ComfortFactor::Greenery => "greenery",
            ComfortFactor::Buildings => "buildings",
            ComfortFactor::Crossings => "crossings",
            ComfortFactor::Facilities => "facilities",
            ComfortFactor::Lanes => "lanes",
            ComfortFactor::Water => "water",
            ComfortFactor::Benches => "benches",
            ComfortFactor::Light => "light",
            ComfortFactor::Visuals => "visuals",
            ComfortFactor::Gradient => "gradient",
        }
    }

    /// Key of the slider in the route request payload.
    pub fn request_key(self) -> &'static str {
        match self {
            ComfortFactor::Light => "lights",
            ComfortFactor::Visuals => "attractiveness",
            ComfortFactor::Gradient => "steepness",
            other => other.name(),
        }
    }

    /// Name of the normalized edge attribute in the road network.
    pub fn attribute_column(self) -> &'static str {
        match self {
            ComfortFactor::Sidewalks => "pedestrian_infrastructure_norm",
            ComfortFactor::Surface => "pavement_norm",
            ComfortFactor::Speed => "max_speed_norm",
            ComfortFactor::Greenery => "greenness_norm",
            ComfortFactor::Buildings => "buildings_norm",
            ComfortFactor::Crossings => "crossings_norm",
            ComfortFactor::Facilities => "facilities_norm",
            ComfortFactor::Lanes => "number_lanes_norm",
            ComfortFactor::Water => "water_norm",
            ComfortFactor::Benches => "benches",
            ComfortFactor::Light => "light",
            ComfortFactor::Visuals => "visuals",
            ComfortFactor::Gradient => "gradient_norm",
        }
    }

    /// Slider value used when the request omits this factor, `None` when the factor is required.
    pub fn default_slider(self) -> Option<f64> {
        match self {
            ComfortFactor::Sidewalks | ComfortFactor::Surface | ComfortFactor::Greenery => None,
            _ => Some(5.0),
        }
    }

    pub fn is_required(self) -> bool {
        self.default_slider().is_none()
    }
}

impl fmt::Display for ComfortFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-size map holding one value per [`ComfortFactor`].
///
/// Serializes as a map keyed by the factor's attribute column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorMap<T>([T; FACTOR_COUNT]);

impl<T> FactorMap<T> {
    pub fn from_fn(mut f: impl FnMut(ComfortFactor) -> T) -> Self {
        FactorMap(std::array::from_fn(|i| f(ComfortFactor::ALL[i])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComfortFactor, &T)> {
        ComfortFactor::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Copy> FactorMap<T> {
    pub fn filled(value: T) -> Self {
        FactorMap([value; FACTOR_COUNT])
    }
}

impl<T> Index<ComfortFactor> for FactorMap<T> {
    type Output = T;

    fn index(&self, factor: ComfortFactor) -> &T {
        &self.0[factor.index()]
    }
}

impl<T> IndexMut<ComfortFactor> for FactorMap<T> {
    fn index_mut(&mut self, factor: ComfortFactor) -> &mut T {
        &mut self.0[factor.index()]
    }
}

impl<T: Serialize> Serialize for FactorMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FACTOR_COUNT))?;
        for (factor, value) in self.iter() {
            map.serialize_entry(factor.attribute_column(), value)?;
        }
        map.end()
    }
}

/// Normalized comfort attributes of an edge, `None` when the network has no value.
pub type ComfortAttributes = FactorMap<Option<f64>>;
