pub mod time;

pub use time::*;

use std::sync::Arc;

/// A place name as reported by the trip source, e.g. "Oslo".
/// Matching is always exact string equality.
pub type Place = Arc<str>;

pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Rounds to one decimal place, the precision used for merged measurements.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
