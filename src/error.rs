/// Error types for the NOWPHAS analyzer
use std::path::PathBuf;

use thiserror::Error;

use crate::data::parseable_data_record::DataRecordParsingError;

/// Main error type for NOWPHAS pipeline operations
#[derive(Error, Debug)]
pub enum NowphasError {
    /// Reading an input file or directory failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A data file could not be decomposed into records
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: DataRecordParsingError,
    },

    /// Timestamp text is neither `YYYYMMDDHH` nor `YYYYMMDDHHMM`
    #[error("Invalid timestamp format: {0}")]
    TimestampFormat(String),

    /// The file name pattern failed to compile
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Building or saving the workbook failed
    #[error("Failed to write report: {0}")]
    Report(#[from] rust_xlsxwriter::XlsxError),

    /// Serializing the report summary failed
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using NowphasError
pub type Result<T> = std::result::Result<T, NowphasError>;
