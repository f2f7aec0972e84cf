pub mod directional;
pub mod joint;

pub use directional::{DirectionalFrequencyRow, DirectionalFrequencyTable};
pub use joint::{JointDistribution, JointDistributionBuilder};

use serde::Serialize;

use crate::data::Observation;
use crate::error::Result;

/// Everything the spreadsheet report is rendered from
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaveFrequencyReport {
    pub observation_count: usize,
    pub directional: DirectionalFrequencyTable,
    pub joint: Vec<JointDistribution>,
}

impl WaveFrequencyReport {
    /// Both aggregations read the cleaned dataset independently
    pub fn from_observations(observations: &[Observation]) -> WaveFrequencyReport {
        WaveFrequencyReport {
            observation_count: observations.len(),
            directional: DirectionalFrequencyTable::from_observations(observations),
            joint: JointDistributionBuilder::default().build_all(observations),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
