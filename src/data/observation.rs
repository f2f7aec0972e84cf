use chrono::NaiveDateTime;
use serde::Serialize;

use super::nowphas_wave_data_record::NowphasWaveDataRecord;
use crate::error::Result;
use crate::tools::date::{parse_nowphas_timestamp, TimestampResolution};
use crate::units::Direction;

/// Magic numbers NOWPHAS writes in place of a missing measurement
pub const SENTINELS: [f64; 9] = [
    66.66, 666.6, 6666.0, 77.77, 777.7, 7777.0, 99.99, 999.9, 9999.0,
];

/// A cleaned buoy measurement. Only built from records with every field
/// present.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub resolution: TimestampResolution,
    pub flag: i32,
    pub wave_count: u32,
    pub average_wave_height: f64,
    pub average_wave_period: f64,
    pub significant_wave_height: f64,
    pub significant_wave_period: f64,
    pub tenth_wave_height: f64,
    pub tenth_wave_period: f64,
    pub maximum_wave_height: f64,
    pub maximum_wave_period: f64,
    pub direction: Direction,
}

impl Observation {
    /// Returns `Ok(None)` when any field is missing or the wave count does
    /// not fit a `u32`
    pub fn from_record(record: &NowphasWaveDataRecord) -> Result<Option<Observation>> {
        let [Some(flag), Some(wave_count), Some(average_wave_height), Some(average_wave_period), Some(significant_wave_height), Some(significant_wave_period), Some(tenth_wave_height), Some(tenth_wave_period), Some(maximum_wave_height), Some(maximum_wave_period), Some(direction)] =
            record.fields().map(|field| field.value)
        else {
            return Ok(None);
        };

        let wave_count = wave_count.round();
        if !(0.0..=u32::MAX as f64).contains(&wave_count) {
            log::warn!(
                "dropping record {} with out of range wave count {}",
                record.timestamp,
                wave_count
            );
            return Ok(None);
        }

        let (timestamp, resolution) = parse_nowphas_timestamp(&record.timestamp)?;

        Ok(Some(Observation {
            timestamp,
            resolution,
            flag: flag as i32,
            wave_count: wave_count as u32,
            average_wave_height,
            average_wave_period,
            significant_wave_height,
            significant_wave_period,
            tenth_wave_height,
            tenth_wave_period,
            maximum_wave_height,
            maximum_wave_period,
            direction: Direction::from_degrees(direction),
        }))
    }
}

#[cfg(test)]
impl Observation {
    pub(crate) fn sample(direction: f64, height: f64, period: f64, wave_count: u32) -> Observation {
        Observation {
            timestamp: chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
            resolution: TimestampResolution::Hour,
            flag: 0,
            wave_count,
            average_wave_height: height * 0.6,
            average_wave_period: period * 0.8,
            significant_wave_height: height,
            significant_wave_period: period,
            tenth_wave_height: height * 1.3,
            tenth_wave_period: period * 1.05,
            maximum_wave_height: height * 1.8,
            maximum_wave_period: period * 1.1,
            direction: Direction::from_degrees(direction),
        }
    }
}

/// Masks sentinel values and drops every record left with a missing field.
/// Runs before any derived value is computed.
pub fn drop_sentinel_records(records: Vec<NowphasWaveDataRecord>) -> Vec<NowphasWaveDataRecord> {
    let total = records.len();
    let kept: Vec<NowphasWaveDataRecord> = records
        .into_iter()
        .map(|mut record| {
            record
                .fields_mut()
                .into_iter()
                .for_each(|field| field.mask(&SENTINELS));
            record
        })
        .filter(|record| record.is_complete())
        .collect();

    log::info!(
        "dropped {} of {} records carrying sentinel values",
        total - kept.len(),
        total
    );
    kept
}

/// Full cleaning pass: sentinel removal, then timestamp reconstruction.
/// A timestamp of unexpected length aborts the pass.
pub fn clean(records: Vec<NowphasWaveDataRecord>) -> Result<Vec<Observation>> {
    drop_sentinel_records(records)
        .iter()
        .filter_map(|record| Observation::from_record(record).transpose())
        .collect()
}
