use serde::Serialize;

use crate::data::Observation;
use crate::units::DirectionSector;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectionalFrequencyRow {
    pub sector: DirectionSector,
    pub range1: i32,
    pub range2: i32,
    pub value: i32,
    pub probability: f64,
    pub count: u64,
}

/// Wave counts per 12-sector compass bin, north sector first
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectionalFrequencyTable {
    pub rows: Vec<DirectionalFrequencyRow>,
    pub total: u64,
}

impl DirectionalFrequencyTable {
    pub fn from_observations(observations: &[Observation]) -> DirectionalFrequencyTable {
        let mut counts = [0u64; DirectionSector::COUNT];
        for observation in observations {
            counts[observation.direction.sector().index()] += observation.wave_count as u64;
        }
        let total: u64 = counts.iter().sum();

        let rows = DirectionSector::all()
            .map(|sector| {
                let count = counts[sector.index()];
                // An empty dataset reports zero probability everywhere.
                let probability = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };
                DirectionalFrequencyRow {
                    sector,
                    range1: sector.range_start(),
                    range2: sector.range_end(),
                    value: sector.bearing(),
                    probability,
                    count,
                }
            })
            .collect();

        DirectionalFrequencyTable { rows, total }
    }

    pub fn row(&self, sector: DirectionSector) -> &DirectionalFrequencyRow {
        &self.rows[sector.index()]
    }

    pub fn probability_sum(&self) -> f64 {
        self.rows.iter().map(|row| row.probability).sum()
    }
}
