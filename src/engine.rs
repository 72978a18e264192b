use chrono::{NaiveDate, TimeZone, Utc};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    classifier::VisitClassifier,
    config::Config,
    grouper::{self, RoundTripGroup},
    shared::Timestamp,
    trip::Trip,
    visit::CabinVisit,
};

/// Turns a bag of trips into cabin visits.
///
/// The engine keeps no state between calls, every call sorts, groups and
/// classifies its input from scratch.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    classifier: VisitClassifier,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            classifier: VisitClassifier::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        self.classifier.config()
    }

    pub fn groups(&self, trips: Vec<Trip>) -> Vec<RoundTripGroup> {
        grouper::group(trips)
    }

    /// All visits found in `trips`, ordered by outbound start.
    /// Groups are classified in parallel, collecting keeps them in group order.
    pub fn visits(&self, trips: Vec<Trip>) -> Vec<CabinVisit> {
        self.run(trips, |groups| {
            groups
                .par_iter()
                .filter_map(|group| self.classify(group))
                .collect()
        })
    }

    /// Same as [`Engine::visits`] without touching the rayon pool.
    pub fn visits_sequential(&self, trips: Vec<Trip>) -> Vec<CabinVisit> {
        self.run(trips, |groups| {
            groups
                .iter()
                .filter_map(|group| self.classify(group))
                .collect()
        })
    }

    /// Visits sharing any instant with `[from, to)`.
    pub fn visits_between(
        &self,
        trips: Vec<Trip>,
        from: Timestamp,
        to: Timestamp,
    ) -> Vec<CabinVisit> {
        self.visits(trips)
            .into_iter()
            .filter(|visit| visit.overlaps(from, to))
            .collect()
    }

    /// The visit covering `date` (UTC), if any.
    pub fn visit_on(&self, trips: Vec<Trip>, date: NaiveDate) -> Option<CabinVisit> {
        self.visit_on_in(trips, date, &Utc)
    }

    /// The visit covering `date` as seen from `tz`. When two visits touch
    /// the same day the latest one wins.
    pub fn visit_on_in<Tz: TimeZone>(
        &self,
        trips: Vec<Trip>,
        date: NaiveDate,
        tz: &Tz,
    ) -> Option<CabinVisit> {
        self.visits(trips)
            .into_iter()
            .rev()
            .find(|visit| visit.includes_date_in(date, tz))
    }

    fn run<F>(&self, trips: Vec<Trip>, classify_all: F) -> Vec<CabinVisit>
    where
        F: FnOnce(&[RoundTripGroup]) -> Vec<CabinVisit>,
    {
        let trip_count = trips.len();
        let groups = grouper::group(trips);
        let visits = classify_all(&groups);
        debug!(
            "Got {} groups and {} visits from {trip_count} trips",
            groups.len(),
            visits.len()
        );
        visits
    }

    fn classify(&self, group: &RoundTripGroup) -> Option<CabinVisit> {
        let visit = self.classifier.classify(group);
        if visit.is_none() {
            debug!(
                "Dropping group of {} legs from {}, it never reached {}",
                group.len(),
                group.origin(),
                self.config().cabin()
            );
        } else {
            trace!(
                "Classified group of {} legs from {}",
                group.len(),
                group.origin()
            );
        }
        visit
    }
}
