use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    merger::{self, MergedTrip},
    shared::{Identifiable, Timestamp, date_in},
    trip::Trip,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("A visit needs at least one outbound leg")]
    EmptyOutbound,
    #[error("Return ends at {end} but the visit started from {start}")]
    ReturnEndsElsewhere { start: String, end: String },
}

/// One stay at the cabin: how the traveler got there, what they drove while
/// there and how they got back.
///
/// `outbound` is never empty, starts at home and ends at the cabin.
/// `return_legs` is empty when no drive home has been logged (yet).
/// Deserialized visits go through the same checks and get their id
/// rebuilt from the legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCabinVisit")]
pub struct CabinVisit {
    id: String,
    #[serde(skip_serializing)]
    outbound_start: Timestamp,
    #[serde(skip_serializing)]
    outbound_end: Timestamp,
    outbound: Vec<Trip>,
    at_cabin: Vec<Trip>,
    return_legs: Vec<Trip>,
}

#[derive(Deserialize)]
struct RawCabinVisit {
    outbound: Vec<Trip>,
    #[serde(default)]
    at_cabin: Vec<Trip>,
    #[serde(default)]
    return_legs: Vec<Trip>,
}

impl TryFrom<RawCabinVisit> for CabinVisit {
    type Error = self::Error;

    fn try_from(value: RawCabinVisit) -> Result<Self, Self::Error> {
        Self::new(value.outbound, value.at_cabin, value.return_legs)
    }
}

impl CabinVisit {
    pub(crate) fn new(
        outbound: Vec<Trip>,
        at_cabin: Vec<Trip>,
        return_legs: Vec<Trip>,
    ) -> Result<Self, self::Error> {
        let (Some(first), Some(last)) = (outbound.first(), outbound.last()) else {
            return Err(self::Error::EmptyOutbound);
        };
        let id = match return_legs.last() {
            Some(back) if back.end_place != first.start_place => {
                return Err(self::Error::ReturnEndsElsewhere {
                    start: first.start_place.to_string(),
                    end: back.end_place.to_string(),
                });
            }
            Some(back) => format!("{}-{}", first.id, back.id),
            None => first.id.to_string(),
        };
        Ok(Self {
            id,
            outbound_start: first.start_time,
            outbound_end: last.end_time,
            outbound,
            at_cabin,
            return_legs,
        })
    }

    pub fn outbound_legs(&self) -> &[Trip] {
        &self.outbound
    }

    pub fn at_cabin_legs(&self) -> &[Trip] {
        &self.at_cabin
    }

    pub fn return_legs(&self) -> &[Trip] {
        &self.return_legs
    }

    /// Every leg of the visit in driving order.
    pub fn legs(&self) -> impl Iterator<Item = &Trip> {
        self.outbound
            .iter()
            .chain(&self.at_cabin)
            .chain(&self.return_legs)
    }

    pub fn leg_count(&self) -> usize {
        self.outbound.len() + self.at_cabin.len() + self.return_legs.len()
    }

    pub fn has_return(&self) -> bool {
        !self.return_legs.is_empty()
    }

    pub fn outbound_start(&self) -> Timestamp {
        self.outbound_start
    }

    pub fn outbound_end(&self) -> Timestamp {
        self.outbound_end
    }

    pub fn return_start(&self) -> Option<Timestamp> {
        self.return_legs.first().map(|leg| leg.start_time)
    }

    pub fn return_end(&self) -> Option<Timestamp> {
        self.return_legs.last().map(|leg| leg.end_time)
    }

    /// When the traveler got to the cabin.
    pub fn arrival(&self) -> Timestamp {
        self.outbound_end()
    }

    /// When the traveler left the cabin for home.
    pub fn departure(&self) -> Option<Timestamp> {
        self.return_start()
    }

    /// Time spent based at the cabin, `None` while no return is logged.
    pub fn stay(&self) -> Option<TimeDelta> {
        Some(self.departure()? - self.arrival())
    }

    pub fn includes_date(&self, date: NaiveDate) -> bool {
        self.includes_date_in(date, &Utc)
    }

    /// True when `date`, seen from `tz`, falls between the day the outbound
    /// drive started and the day the return drive ended. A visit without a
    /// return has no last day.
    pub fn includes_date_in<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> bool {
        let first_day = date_in(&self.outbound_start(), tz);
        let last_day = self.return_end().map(|end| date_in(&end, tz));
        date >= first_day && last_day.is_none_or(|last_day| date <= last_day)
    }

    /// True when the visit shares any instant with `[from, to)`.
    pub fn overlaps(&self, from: Timestamp, to: Timestamp) -> bool {
        self.outbound_start() < to && self.return_end().is_none_or(|end| end > from)
    }

    /// The outbound drive as one trip. Always `Some`, `outbound` is never empty.
    pub fn merged_outbound(&self) -> Option<MergedTrip> {
        merger::merge(&self.outbound)
    }

    pub fn merged_return(&self) -> Option<MergedTrip> {
        merger::merge(&self.return_legs)
    }
}

impl Identifiable for CabinVisit {
    fn id(&self) -> &str {
        &self.id
    }
}
