use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataRecordParsingError {
    /// Line `line` (1-based, header included) split into `found` fields
    FieldCount { line: usize, found: usize },
    ParseFailure(String),
}

impl std::fmt::Display for DataRecordParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataRecordParsingError::FieldCount { line, found } => write!(
                f,
                "line {line}: expected {} fields, found {found}",
                super::nowphas_wave_data_record::FIELD_COUNT
            ),
            DataRecordParsingError::ParseFailure(reason) => write!(f, "Data parse failure: {reason}"),
        }
    }
}

impl std::error::Error for DataRecordParsingError {}

pub trait ParseableDataRecord {
    type Metadata;

    fn from_data_row(
        metadata: Option<&Self::Metadata>,
        row: &[&str],
    ) -> Result<Self, DataRecordParsingError>
    where
        Self: Sized;
}
