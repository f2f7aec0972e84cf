use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DataParseError;

/// One of the twelve 30° compass sectors used for the directional
/// frequency distribution. Sector 1 is centered on north and wraps across
/// 0°, covering [345°, 360°) and [0°, 15°). Sector n > 1 covers
/// [15 + 30(n - 2), 45 + 30(n - 2)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectionSector(u8);

impl DirectionSector {
    pub const COUNT: usize = 12;
    pub const WIDTH: f64 = 30.0;

    pub fn new(number: u8) -> Option<DirectionSector> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Some(DirectionSector(number))
        } else {
            None
        }
    }

    /// All sectors in ascending order, starting with the north sector
    pub fn all() -> impl Iterator<Item = DirectionSector> {
        (1..=Self::COUNT as u8).map(DirectionSector)
    }

    /// Half-open binning of a bearing in degrees. Bearings outside [0, 360)
    /// are wrapped first, so 360° lands in sector 1.
    pub fn from_degrees(degrees: f64) -> DirectionSector {
        let shifted = (degrees.rem_euclid(360.0) + Self::WIDTH / 2.0).rem_euclid(360.0);
        let index = (shifted / Self::WIDTH).floor() as u8 % Self::COUNT as u8;
        DirectionSector(index + 1)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero based position of the sector, north first
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// Inclusive lower edge of the sector in degrees
    pub fn range_start(&self) -> i32 {
        (345 + 30 * self.index() as i32) % 360
    }

    /// Exclusive upper edge of the sector in degrees
    pub fn range_end(&self) -> i32 {
        15 + 30 * self.index() as i32
    }

    /// Representative bearing of the sector. The north sector reports 0.
    pub fn bearing(&self) -> i32 {
        30 * self.index() as i32
    }

    pub fn contains(&self, degrees: f64) -> bool {
        DirectionSector::from_degrees(degrees) == *self
    }
}

impl fmt::Display for DirectionSector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "direction_{}", self.0)
    }
}

impl FromStr for DirectionSector {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim_start_matches("direction_")
            .parse::<u8>()
            .map_err(|_| DataParseError::InvalidString)?;
        DirectionSector::new(number).ok_or(DataParseError::InvalidString)
    }
}
