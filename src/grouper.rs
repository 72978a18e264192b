use std::ops::Deref;

use tracing::trace;

use crate::{shared::Place, trip::Trip};

/// A contiguous run of legs, in time order, that leaves a place and
/// (usually) comes back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripGroup {
    legs: Vec<Trip>,
}

impl RoundTripGroup {
    pub fn legs(&self) -> &[Trip] {
        &self.legs
    }

    pub fn into_legs(self) -> Vec<Trip> {
        self.legs
    }

    /// Where the first leg departed from.
    pub fn origin(&self) -> &str {
        &self.legs[0].start_place
    }

    /// True when the last leg ends where the first one started.
    pub fn is_closed(&self) -> bool {
        self.legs
            .last()
            .is_some_and(|last| *last.end_place == *self.origin())
    }
}

impl Deref for RoundTripGroup {
    type Target = [Trip];

    fn deref(&self) -> &Self::Target {
        &self.legs
    }
}

/// Sorts `trips` by start time and splits them into round trips.
///
/// A group is closed when a leg returns to the group's origin, or when a
/// leg departs the origin again before any return was logged. The second
/// case covers a missing return leg: the earlier excursion is closed as is
/// and the new departure starts the next group.
pub fn group(mut trips: Vec<Trip>) -> Vec<RoundTripGroup> {
    // Stable, so legs sharing a start time keep their input order
    trips.sort_by_key(|trip| trip.start_time);

    let mut groups = Vec::new();
    let mut current: Vec<Trip> = Vec::new();
    let mut origin: Option<Place> = None;

    for trip in trips {
        match &origin {
            Some(place) if *trip.start_place == **place => {
                trace!("Leg {} departs {} again, closing group", trip.id, place);
                groups.push(RoundTripGroup {
                    legs: std::mem::take(&mut current),
                });
                origin = Some(trip.start_place.clone());
                current.push(trip);
            }
            Some(place) => {
                let returned = *trip.end_place == **place;
                current.push(trip);
                if returned {
                    groups.push(RoundTripGroup {
                        legs: std::mem::take(&mut current),
                    });
                    origin = None;
                }
            }
            None => {
                origin = Some(trip.start_place.clone());
                current.push(trip);
            }
        }
    }

    if !current.is_empty() {
        groups.push(RoundTripGroup { legs: current });
    }
    groups
}
