use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::DataParseError;
use super::DirectionSector;
use super::Measurement;
use super::Units;

/// Wave direction in degrees, measured clockwise from north
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub degrees: f64,
    sector: DirectionSector,
}

impl Direction {
    pub fn from_degrees(degrees: f64) -> Direction {
        Direction {
            degrees,
            sector: DirectionSector::from_degrees(degrees),
        }
    }

    pub fn sector(&self) -> DirectionSector {
        self.sector
    }

    pub fn radian(&self) -> f64 {
        self.degrees.to_radians()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            self.degrees,
            Units::Metric.label(&Measurement::Direction, true),
            self.sector
        )
    }
}

impl FromStr for Direction {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<f64>() {
            Ok(degrees) if degrees.is_finite() => Ok(Direction::from_degrees(degrees)),
            _ => Err(DataParseError::InvalidString),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        let direction: Direction = "200".parse().unwrap();
        assert_eq!(direction.sector().number(), 8);
        assert_eq!(direction.to_string(), "200° direction_8");
        assert!("NNE".parse::<Direction>().is_err());
    }
}
