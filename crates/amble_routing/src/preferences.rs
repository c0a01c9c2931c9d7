use serde::Deserialize;

use crate::comfort_factor::{ComfortFactor, FactorMap};
use crate::error::ValidationError;

const SLIDER_MAX: f64 = 10.0;

/// Raw slider values as sent by the client, on a 0 to 10 scale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreferenceInput {
    pub sidewalks: Option<f64>,
    pub surface: Option<f64>,
    pub speed: Option<f64>,
    pub greenery: Option<f64>,
    pub buildings: Option<f64>,
    pub crossings: Option<f64>,
    pub facilities: Option<f64>,
    pub lanes: Option<f64>,
    pub water: Option<f64>,
    pub benches: Option<f64>,
    pub lights: Option<f64>,
    pub attractiveness: Option<f64>,
    pub steepness: Option<f64>,
    /// Comfort/distance balance level, 1 to 3.
    pub length: Option<f64>,
}

impl PreferenceInput {
    pub fn slider(&self, factor: ComfortFactor) -> Option<f64> {
        match factor {
            ComfortFactor::Sidewalks => self.sidewalks,
            ComfortFactor::Surface => self.surface,
            ComfortFactor::Speed => self.speed,
            ComfortFactor::Greenery => self.greenery,
            ComfortFactor::Buildings => self.buildings,
            ComfortFactor::Crossings => self.crossings,
            ComfortFactor::Facilities => self.facilities,
            ComfortFactor::Lanes => self.lanes,
            ComfortFactor::Water => self.water,
            ComfortFactor::Benches => self.benches,
            ComfortFactor::Light => self.lights,
            ComfortFactor::Visuals => self.attractiveness,
            ComfortFactor::Gradient => self.steepness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceLevel {
    PrioritizeShortness,
    Balanced,
    PrioritizeComfort,
}

impl BalanceLevel {
    /// Unknown or absent codes fall back to [`BalanceLevel::Balanced`].
    pub fn from_code(code: Option<f64>) -> Self {
        match code {
            Some(c) if c == 1.0 => BalanceLevel::PrioritizeShortness,
            Some(c) if c == 3.0 => BalanceLevel::PrioritizeComfort,
            _ => BalanceLevel::Balanced,
        }
    }

    pub fn alpha(self) -> f64 {
        match self {
            BalanceLevel::PrioritizeShortness => 0.5,
            BalanceLevel::Balanced => 5.0,
            BalanceLevel::PrioritizeComfort => 10.0,
        }
    }
}

/// Weight in `[0.0, 1.0]` for every comfort factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceVector(FactorMap<f64>);

impl PreferenceVector {
    pub fn weight(&self, factor: ComfortFactor) -> f64 {
        self.0[factor]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComfortFactor, f64)> + '_ {
        self.0.iter().map(|(factor, weight)| (factor, *weight))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPreferences {
    pub weights: PreferenceVector,
    pub balance: BalanceLevel,
}

impl NormalizedPreferences {
    pub fn alpha(&self) -> f64 {
        self.balance.alpha()
    }
}

pub fn normalize(input: &PreferenceInput) -> Result<NormalizedPreferences, ValidationError> {
    let mut weights = FactorMap::filled(0.0);

    for factor in ComfortFactor::ALL {
        let value = input
            .slider(factor)
            .or(factor.default_slider())
            .ok_or(ValidationError::MissingFactor(factor))?;

        if !value.is_finite() || !(0.0..=SLIDER_MAX).contains(&value) {
            return Err(ValidationError::FactorOutOfRange { factor, value });
        }

        weights[factor] = value / SLIDER_MAX;
    }

    Ok(NormalizedPreferences {
        weights: PreferenceVector(weights),
        balance: BalanceLevel::from_code(input.length),
    })
}
