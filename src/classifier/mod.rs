mod state;

pub use state::State;

use state::{Context, Segment};
use tracing::trace;

use crate::{config::Config, trip::Trip, visit::CabinVisit};

/// Splits one round trip into the outbound drive, the local driving while
/// at the cabin and the drive back home.
#[derive(Debug, Clone, Default)]
pub struct VisitClassifier {
    config: Config,
}

impl VisitClassifier {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the state machine over `legs` (one round-trip group, in time
    /// order). Returns `None` when the group never drove from home to the
    /// cabin.
    pub fn classify(&self, legs: &[Trip]) -> Option<CabinVisit> {
        let home = self.config.home();
        let cabin = self.config.cabin();
        let ctx = Context::new(legs, home, cabin);

        let mut state = State::Skip;
        let mut outbound: Vec<Trip> = Vec::new();
        let mut at_cabin: Vec<Trip> = Vec::new();
        let mut return_legs: Vec<Trip> = Vec::new();

        for (i, leg) in legs.iter().enumerate() {
            if state == State::Done {
                trace!("Ignoring {} trailing legs", legs.len() - i);
                break;
            }
            let (segment, next) = state.step(leg, i, &ctx);
            trace!(
                "Leg {} [{} -> {}]: {:?} -> {:?} as {:?}",
                leg.id, leg.start_place, leg.end_place, state, next, segment
            );
            match segment {
                Some(Segment::Outbound) => outbound.push(leg.clone()),
                Some(Segment::AtCabin) => at_cabin.push(leg.clone()),
                Some(Segment::Return) => return_legs.push(leg.clone()),
                None => {}
            }
            state = next;
        }

        let reached_cabin = outbound.first().is_some_and(|leg| leg.starts_at(home))
            && outbound.last().is_some_and(|leg| leg.ends_at(cabin));
        if !reached_cabin {
            return None;
        }
        CabinVisit::new(outbound, at_cabin, return_legs).ok()
    }
}
