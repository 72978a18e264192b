//! Reconstructs cabin visits from a vehicle's point-to-point trip log.
//!
//! Trips are sorted and split into round trips by [`grouper`], each round
//! trip is run through the [`classifier`] state machine, and the resulting
//! [`visit::CabinVisit`]s can be summarized with [`merger`].

pub mod classifier;
pub mod config;
pub mod engine;
pub mod grouper;
pub mod merger;
pub mod shared;
pub mod trip;
pub mod visit;

pub use config::Error as ConfigError;
pub use visit::Error as VisitError;

pub mod prelude {
    pub use crate::{
        classifier::{State, VisitClassifier},
        config::Config,
        engine::Engine,
        grouper::{RoundTripGroup, group},
        merger::{MergedTrip, merge},
        shared::{Identifiable, Place, Timestamp},
        trip::Trip,
        visit::CabinVisit,
    };
}
