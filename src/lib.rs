//! Directional wave frequency analysis of NOWPHAS buoy records.
//!
//! Fixed-width NOWPHAS wave text files are parsed, stripped of sentinel
//! records and aggregated into a 12-sector directional distribution plus a
//! significant wave height × period distribution per sector, then written
//! to a spreadsheet report.

pub mod analysis;
pub mod analyzer;
pub mod data;
pub mod dimensional_data;
pub mod error;
pub mod report;
pub mod tools;
pub mod units;

pub use analyzer::{analyze_dir, nowphas_analyzer};
pub use error::{NowphasError, Result};
pub use report::ReportConfig;
