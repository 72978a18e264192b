use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::shared::{Identifiable, Place, Timestamp};

/// One point-to-point drive as logged by the vehicle.
///
/// Trips are only ever ordered by `start_time`. Nothing else about them is
/// validated, an `end_time` before `start_time` is carried as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Arc<str>,
    pub start_place: Place,
    pub end_place: Place,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub average_speed_kmh: f64,
    #[serde(default)]
    pub duration_seconds: u64,
}

impl Trip {
    pub fn new(
        id: impl Into<Arc<str>>,
        start_place: impl Into<Place>,
        end_place: impl Into<Place>,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            start_place: start_place.into(),
            end_place: end_place.into(),
            start_time,
            end_time,
            distance_km: 0.0,
            average_speed_kmh: 0.0,
            duration_seconds: 0,
        }
    }

    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self
    }

    pub fn with_average_speed(mut self, average_speed_kmh: f64) -> Self {
        self.average_speed_kmh = average_speed_kmh;
        self
    }

    pub fn with_duration(mut self, duration_seconds: u64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    pub fn starts_at(&self, place: &str) -> bool {
        *self.start_place == *place
    }

    pub fn ends_at(&self, place: &str) -> bool {
        *self.end_place == *place
    }
}

impl Identifiable for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}
