use serde::{Deserialize, Serialize};

use crate::{
    shared::{Place, round_to_tenth},
    trip::Trip,
};

/// A multi-leg drive collapsed into one logical trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedTrip {
    pub trip: Trip,
    /// Places passed through between the first origin and the final
    /// destination, in the order visited.
    pub extra_stops: Vec<Place>,
}

/// Collapses `legs` into one trip from the first origin to the last
/// destination.
///
/// Distance and duration are summed. Speed is the distance weighted mean
/// of the leg speeds. Both are rounded to one decimal. A single leg is
/// returned untouched and `None` is returned for no legs.
pub fn merge(legs: &[Trip]) -> Option<MergedTrip> {
    let (first, last) = match legs {
        [] => return None,
        [only] => {
            return Some(MergedTrip {
                trip: only.clone(),
                extra_stops: Vec::new(),
            });
        }
        [first, .., last] => (first, last),
    };

    let distance: f64 = legs.iter().map(|leg| leg.distance_km).sum();
    let weighted_speed: f64 = legs
        .iter()
        .map(|leg| leg.average_speed_kmh * leg.distance_km)
        .sum();
    let average_speed = if distance > 0.0 {
        weighted_speed / distance
    } else {
        0.0
    };
    let duration = legs
        .iter()
        .map(|leg| leg.duration_seconds)
        .fold(0u64, u64::saturating_add);
    let extra_stops = legs[..legs.len() - 1]
        .iter()
        .map(|leg| leg.end_place.clone())
        .collect();

    let trip = Trip::new(
        format!("{}-{}", first.id, last.id),
        first.start_place.clone(),
        last.end_place.clone(),
        first.start_time,
        last.end_time,
    )
    .with_distance(round_to_tenth(distance))
    .with_average_speed(round_to_tenth(average_speed))
    .with_duration(duration);

    Some(MergedTrip { trip, extra_stops })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utc;

    fn leg(id: &str, from: &str, to: &str, hour: u32, km: f64, kmh: f64) -> Trip {
        let start = utc(2024, 2, 10, hour, 0).unwrap();
        let end = utc(2024, 2, 10, hour + 1, 0).unwrap();
        Trip::new(id, from, to, start, end)
            .with_distance(km)
            .with_average_speed(kmh)
            .with_duration(3600)
    }

    #[test]
    fn empty_has_nothing_to_merge() {
        assert!(merge(&[]).is_none());
    }

    #[test]
    fn zero_distance_gives_zero_speed() {
        let legs = [
            leg("1", "A", "B", 8, 0.0, 50.0),
            leg("2", "B", "C", 9, 0.0, 70.0),
        ];
        let merged = merge(&legs).unwrap();
        assert_eq!(merged.trip.distance_km, 0.0);
        assert_eq!(merged.trip.average_speed_kmh, 0.0);
    }

    #[test]
    fn duration_saturates() {
        let legs = [
            leg("1", "A", "B", 8, 1.0, 50.0).with_duration(u64::MAX - 10),
            leg("2", "B", "C", 9, 1.0, 50.0).with_duration(3600),
        ];
        let merged = merge(&legs).unwrap();
        assert_eq!(merged.trip.duration_seconds, u64::MAX);
    }

    #[test]
    fn rounds_to_one_decimal() {
        let legs = [
            leg("1", "A", "B", 8, 10.04, 61.0),
            leg("2", "B", "C", 9, 20.03, 83.0),
        ];
        let merged = merge(&legs).unwrap();
        assert_eq!(merged.trip.distance_km, 30.1);
        // (61 * 10.04 + 83 * 20.03) / 30.07 = 75.65...
        assert_eq!(merged.trip.average_speed_kmh, 75.7);
    }
}
