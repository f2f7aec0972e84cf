use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{NowphasError, Result};

/// Resolution of a NOWPHAS timestamp, told apart by its text length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampResolution {
    Hour,
    Minute,
}

/// Converts a raw `YYYYMMDDHH` or `YYYYMMDDHHMM` timestamp into a datetime.
/// Times are kept naive, NOWPHAS reports them in JST.
pub fn parse_nowphas_timestamp(raw: &str) -> Result<(NaiveDateTime, TimestampResolution)> {
    let (text, resolution) = match raw.len() {
        10 => (format!("{raw}00"), TimestampResolution::Hour),
        12 => (raw.to_string(), TimestampResolution::Minute),
        _ => {
            return Err(NowphasError::TimestampFormat(format!(
                "{raw:?} has {} characters, expected 10 or 12",
                raw.len()
            )))
        }
    };

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NowphasError::TimestampFormat(format!("{raw:?} is not numeric")));
    }

    let datetime = NaiveDateTime::parse_from_str(&text, "%Y%m%d%H%M")
        .map_err(|e| NowphasError::TimestampFormat(format!("{raw:?}: {e}")))?;
    Ok((datetime, resolution))
}
