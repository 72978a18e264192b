use thiserror::Error;

use crate::shared::Place;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Place name for {0} is empty")]
    EmptyPlace(&'static str),
    #[error("Home and cabin are both set to {0}")]
    SamePlace(String),
}

/// The two anchor places a visit is measured between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    home: Place,
    cabin: Place,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: "Home".into(),
            cabin: "Cabin".into(),
        }
    }
}

impl Config {
    pub fn new(home: impl Into<Place>, cabin: impl Into<Place>) -> Result<Self, self::Error> {
        let home: Place = home.into();
        let cabin: Place = cabin.into();
        if home.trim().is_empty() {
            return Err(self::Error::EmptyPlace("home"));
        }
        if cabin.trim().is_empty() {
            return Err(self::Error::EmptyPlace("cabin"));
        }
        if home == cabin {
            return Err(self::Error::SamePlace(home.to_string()));
        }
        Ok(Self { home, cabin })
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn cabin(&self) -> &str {
        &self.cabin
    }
}
