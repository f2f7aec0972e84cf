use std::io::Cursor;
use std::path::Path;

use csv::Reader;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::parseable_data_record::{DataRecordParsingError, ParseableDataRecord};
use crate::dimensional_data::DimensionalData;
use crate::units::*;

/// Number of whitespace delimited fields in every NOWPHAS data line
pub const FIELD_COUNT: usize = 12;

/// The two historical NOWPHAS text layouts differ only in the width of the
/// leading timestamp field. Blanks inside that field stand for zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLayout {
    pub leading_width: usize,
}

impl FileLayout {
    /// `YYYYMMDDHH`
    pub const HOURLY: FileLayout = FileLayout { leading_width: 10 };
    /// `YYYYMMDDHHMM`
    pub const MINUTELY: FileLayout = FileLayout { leading_width: 12 };

    /// Files whose name contains a lowercase `e` carry minute resolution
    pub fn from_path(path: &Path) -> FileLayout {
        let minutely = path
            .file_name()
            .map(|name| name.to_string_lossy().contains('e'))
            .unwrap_or(false);

        if minutely {
            FileLayout::MINUTELY
        } else {
            FileLayout::HOURLY
        }
    }

    /// Replaces blanks inside the leading field with `0` so the timestamp
    /// keeps its fixed width once the line is split on whitespace.
    pub fn correct_line(&self, line: &str) -> String {
        line.chars()
            .enumerate()
            .map(|(i, c)| if i < self.leading_width && c == ' ' { '0' } else { c })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NowphasWaveDataRecord {
    pub timestamp: String,
    pub flag: DimensionalData<f64>,
    pub wave_count: DimensionalData<f64>,
    pub average_wave_height: DimensionalData<f64>,
    pub average_wave_period: DimensionalData<f64>,
    pub significant_wave_height: DimensionalData<f64>,
    pub significant_wave_period: DimensionalData<f64>,
    pub tenth_wave_height: DimensionalData<f64>,
    pub tenth_wave_period: DimensionalData<f64>,
    pub maximum_wave_height: DimensionalData<f64>,
    pub maximum_wave_period: DimensionalData<f64>,
    pub wave_direction: DimensionalData<f64>,
}

impl NowphasWaveDataRecord {
    /// Every numeric field of the record, in file order
    pub fn fields(&self) -> [&DimensionalData<f64>; FIELD_COUNT - 1] {
        [
            &self.flag,
            &self.wave_count,
            &self.average_wave_height,
            &self.average_wave_period,
            &self.significant_wave_height,
            &self.significant_wave_period,
            &self.tenth_wave_height,
            &self.tenth_wave_period,
            &self.maximum_wave_height,
            &self.maximum_wave_period,
            &self.wave_direction,
        ]
    }

    pub fn fields_mut(&mut self) -> [&mut DimensionalData<f64>; FIELD_COUNT - 1] {
        [
            &mut self.flag,
            &mut self.wave_count,
            &mut self.average_wave_height,
            &mut self.average_wave_period,
            &mut self.significant_wave_height,
            &mut self.significant_wave_period,
            &mut self.tenth_wave_height,
            &mut self.tenth_wave_period,
            &mut self.maximum_wave_height,
            &mut self.maximum_wave_period,
            &mut self.wave_direction,
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|field| !field.is_missing())
    }
}

fn parse_field(
    raw: &str,
    variable_name: &'static str,
    measurement: Measurement,
) -> Result<DimensionalData<f64>, DataRecordParsingError> {
    DimensionalData::try_from_raw_data(raw, variable_name, measurement, Units::Metric)
        .map_err(DataRecordParsingError::ParseFailure)
}

impl ParseableDataRecord for NowphasWaveDataRecord {
    /// Source line number, used for error reporting
    type Metadata = usize;

    fn from_data_row(
        metadata: Option<&Self::Metadata>,
        row: &[&str],
    ) -> Result<NowphasWaveDataRecord, DataRecordParsingError> {
        if row.len() != FIELD_COUNT {
            return Err(DataRecordParsingError::FieldCount {
                line: metadata.copied().unwrap_or(0),
                found: row.len(),
            });
        }

        Ok(NowphasWaveDataRecord {
            timestamp: row[0].to_string(),
            flag: parse_field(row[1], "flag", Measurement::Flag)?,
            wave_count: parse_field(row[2], "wave count", Measurement::Count)?,
            average_wave_height: parse_field(row[3], "average wave height", Measurement::Length)?,
            average_wave_period: parse_field(row[4], "average wave period", Measurement::Time)?,
            significant_wave_height: parse_field(
                row[5],
                "significant wave height",
                Measurement::Length,
            )?,
            significant_wave_period: parse_field(
                row[6],
                "significant wave period",
                Measurement::Time,
            )?,
            tenth_wave_height: parse_field(row[7], "1/10 wave height", Measurement::Length)?,
            tenth_wave_period: parse_field(row[8], "1/10 wave period", Measurement::Time)?,
            maximum_wave_height: parse_field(row[9], "maximum wave height", Measurement::Length)?,
            maximum_wave_period: parse_field(row[10], "maximum wave period", Measurement::Time)?,
            wave_direction: parse_field(row[11], "wave direction", Measurement::Direction)?,
        })
    }
}

pub struct NowphasWaveDataRecordCollection {
    reader: Reader<Cursor<Vec<u8>>>,
}

impl NowphasWaveDataRecordCollection {
    /// Prepares already decoded file contents for reading. The first line is
    /// the header and is dropped. Runs of spaces or tabs collapse to a single
    /// space and whitespace-only lines become empty, which the reader skips
    /// without shifting line numbers.
    pub fn from_data(data: &str, layout: FileLayout) -> Self {
        let corrected = data
            .lines()
            .skip(1)
            .map(|line| layout.correct_line(line).split_whitespace().join(" "))
            .collect::<Vec<String>>()
            .join("\n");

        let reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .trim(csv::Trim::All)
            .quoting(false)
            .has_headers(false)
            .flexible(true)
            .from_reader(Cursor::new(corrected.into_bytes()));

        NowphasWaveDataRecordCollection { reader }
    }

    pub fn records(
        &mut self,
    ) -> impl Iterator<Item = Result<NowphasWaveDataRecord, DataRecordParsingError>> + '_ {
        self.reader.records().map(|result| {
            let record =
                result.map_err(|e| DataRecordParsingError::ParseFailure(e.to_string()))?;
            // The header was stripped before reading, so shift by one.
            let line = record.position().map(|p| p.line() as usize + 1).unwrap_or(0);
            let filtered_record: Vec<&str> =
                record.iter().filter(|data| !data.is_empty()).collect();
            NowphasWaveDataRecord::from_data_row(Some(&line), &filtered_record)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOURLY_DATA: &str = "年月日時 ﾌﾗｸﾞ 波数 header\n\
        2020010100 0  120  0.85  6.1  1.32  7.4  1.71  8.0  2.40  8.3  95\n\
        20200101 1 0  118  0.80  6.0  1.25  7.2  1.60  7.9  2.10  8.1  100\n";

    #[test]
    fn test_layout_from_file_name() {
        assert_eq!(FileLayout::from_path(Path::new("data/h301e2020.txt")), FileLayout::MINUTELY);
        assert_eq!(FileLayout::from_path(Path::new("data/H3012020.txt")), FileLayout::HOURLY);
        // Only the file name decides, not the directory.
        assert_eq!(FileLayout::from_path(Path::new("site/h3012020.txt")), FileLayout::HOURLY);
    }

    #[test]
    fn test_correct_leading_field() {
        let line = "20200101 5 0  12";
        assert_eq!(FileLayout::HOURLY.correct_line(line), "2020010105 0  12");
        assert_eq!(FileLayout::MINUTELY.correct_line("20200101 530 0 12"), "202001010530 0 12");
        assert_eq!(FileLayout::HOURLY.correct_line("2 1"), "201");
    }

    #[test]
    fn test_nowphas_wave_data_row_parse() {
        let raw_data = "2020010100 0 120 0.85 6.1 1.32 7.4 1.71 8.0 2.40 8.3 95";
        let data_row: Vec<&str> = raw_data.split_whitespace().collect();

        let wave_data = NowphasWaveDataRecord::from_data_row(None, &data_row).unwrap();

        assert_eq!(wave_data.timestamp, "2020010100");
        assert!((wave_data.wave_count.value.unwrap_or(0.0) - 120.0).abs() < 0.0001);
        assert!((wave_data.significant_wave_height.value.unwrap_or(0.0) - 1.32).abs() < 0.0001);
        assert!((wave_data.significant_wave_period.value.unwrap_or(0.0) - 7.4).abs() < 0.0001);
        assert!((wave_data.wave_direction.value.unwrap_or(0.0) - 95.0).abs() < 0.0001);
        assert!(wave_data.is_complete());
    }

    #[test]
    fn test_read_collection() {
        let mut collection = NowphasWaveDataRecordCollection::from_data(HOURLY_DATA, FileLayout::HOURLY);
        let records: Vec<NowphasWaveDataRecord> = collection
            .records()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, "2020010100");
        assert_eq!(records[1].timestamp, "2020010101");
        assert!((records[1].wave_direction.value.unwrap_or(0.0) - 100.0).abs() < 0.0001);
    }

    #[test]
    fn test_tab_separated_line() {
        let data = "header\n2020010100\t0\t120\t0.85\t6.1\t1.32\t7.4\t1.71\t8.0\t2.40\t8.3\t95\n";
        let mut collection = NowphasWaveDataRecordCollection::from_data(data, FileLayout::HOURLY);
        let records: Vec<NowphasWaveDataRecord> = collection
            .records()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, "2020010100");
        assert!((records[0].wave_count.value.unwrap_or(0.0) - 120.0).abs() < 0.0001);
        assert!((records[0].wave_direction.value.unwrap_or(0.0) - 95.0).abs() < 0.0001);
    }

    #[test]
    fn test_whitespace_only_lines_are_ignored() {
        let data = format!("{}   \n\t \n", HOURLY_DATA);
        let mut collection = NowphasWaveDataRecordCollection::from_data(&data, FileLayout::HOURLY);
        let records: Vec<NowphasWaveDataRecord> = collection
            .records()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].timestamp, "2020010101");
    }

    #[test]
    fn test_wrong_field_count_is_fatal() {
        let data = "header\n2020010100 0 120 0.85 6.1\n";
        let mut collection = NowphasWaveDataRecordCollection::from_data(data, FileLayout::HOURLY);
        let result: Result<Vec<NowphasWaveDataRecord>, _> = collection.records().collect();

        assert_eq!(
            result.unwrap_err(),
            DataRecordParsingError::FieldCount { line: 2, found: 5 }
        );
    }

    #[test]
    fn test_non_numeric_field_is_fatal() {
        let data = "header\n2020010100 0 120 0.85 6.1 1.32 7.4 1.71 8.0 2.40 8.3 NNE\n";
        let mut collection = NowphasWaveDataRecordCollection::from_data(data, FileLayout::HOURLY);
        let result: Result<Vec<NowphasWaveDataRecord>, _> = collection.records().collect();

        assert!(matches!(result, Err(DataRecordParsingError::ParseFailure(_))));
    }

    #[test]
    fn test_header_only() {
        let mut collection = NowphasWaveDataRecordCollection::from_data("header\n", FileLayout::HOURLY);
        assert_eq!(collection.records().count(), 0);
    }
}
