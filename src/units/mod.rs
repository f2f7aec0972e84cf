pub mod measurement;
pub mod direction;
pub mod direction_sector;

pub use measurement::Measurement;
pub use direction::Direction;
pub use direction_sector::DirectionSector;

use std::fmt;

use serde::{Deserialize, Serialize};

/// NOWPHAS publishes everything in metric units, so the unit system only
/// drives labelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Metric,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
        }
    }

    pub fn label(&self, measurement: &Measurement, abbrev: bool) -> &'static str {
        match (self, measurement, abbrev) {
            (Units::Metric, Measurement::Length, true) => "m",
            (Units::Metric, Measurement::Length, false) => "meters",
            (_, Measurement::Time, true) => "s",
            (_, Measurement::Time, false) => "seconds",
            (_, Measurement::Direction, _) => "°",
            (_, Measurement::Count, true) => "",
            (_, Measurement::Count, false) => "waves",
            (_, Measurement::Flag, _) => "",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataParseError {
    InvalidString,
}
