use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measurement {
    Length,
    Time,
    Direction,
    Count,
    Flag,
}

impl Measurement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measurement::Length => "length",
            Measurement::Time => "time",
            Measurement::Direction => "direction",
            Measurement::Count => "count",
            Measurement::Flag => "flag",
        }
    }
}
