use serde::{Deserialize, Serialize};

use crate::cases::model::Case;
use crate::geo::haversine_km;

/// NGO domain model - a responder and its circular service area
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ngo {
    pub ngo_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub service_radius_km: f64,
}

impl Ngo {
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> f64 {
        haversine_km(self.latitude, self.longitude, latitude, longitude)
    }

    /// Inclusive: a point exactly on the radius is inside.
    pub fn covers(&self, latitude: f64, longitude: f64) -> bool {
        self.distance_km(latitude, longitude) <= self.service_radius_km
    }

    /// Cases without both coordinates are never covered.
    pub fn covers_case(&self, case: &Case) -> bool {
        case.coordinates()
            .is_some_and(|(lat, lon)| self.covers(lat, lon))
    }
}
