use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::ValidationError;

const EARTH_RADIUS: f64 = 6_371_000.0;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Rejects non-finite or out of range WGS84 coordinates. `field` names the point in the error.
    pub fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        let valid = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);

        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidCoordinate {
                field,
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    /// Web Mercator projection in meters, `[x, y]`.
    pub fn mercator(&self) -> [f64; 2] {
        let lat_rad = self.lat.to_radians();
        let lon_rad = self.lon.to_radians();
        let x = EARTH_RADIUS * lon_rad;
        let y = EARTH_RADIUS * (lat_rad / 2.0 + PI / 4.0).tan().ln();
        [x, y]
    }
}

impl From<geo_types::Coord<f64>> for GeoPoint {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        GeoPoint {
            lat: coord.y,
            lon: coord.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_munich() {
        assert!(GeoPoint::new(48.137, 11.575).validate("start").is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_and_nan() {
        assert_eq!(
            GeoPoint::new(91.0, 0.0).validate("end"),
            Err(ValidationError::InvalidCoordinate {
                field: "end",
                lat: 91.0,
                lon: 0.0
            })
        );
        assert!(GeoPoint::new(0.0, -180.5).validate("start").is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate("start").is_err());
    }

    #[test]
    fn test_mercator_grows_north_and_east() {
        let marienplatz = GeoPoint::new(48.1374, 11.5755).mercator();
        let odeonsplatz = GeoPoint::new(48.1425, 11.5773).mercator();

        assert!(odeonsplatz[0] > marienplatz[0]);
        assert!(odeonsplatz[1] > marienplatz[1]);
    }

    #[test]
    fn test_mercator_origin() {
        let [x, y] = GeoPoint::new(0.0, 0.0).mercator();
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
