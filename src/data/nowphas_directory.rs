use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use super::nowphas_wave_data_record::{
    FileLayout, NowphasWaveDataRecord, NowphasWaveDataRecordCollection,
};
use crate::error::{NowphasError, Result};

/// Matches NOWPHAS wave data file names, `h*.txt` or `H*.txt`
pub const FILE_NAME_PATTERN: &str = r"^[hH].*\.txt$";

/// Reads one NOWPHAS file. The contents are Shift_JIS encoded and any
/// malformed line fails the whole file.
pub fn read_file(path: &Path) -> Result<Vec<NowphasWaveDataRecord>> {
    let bytes = fs::read(path)?;
    let (contents, had_errors) = encoding_rs::SHIFT_JIS.decode_without_bom_handling(&bytes);
    if had_errors {
        log::warn!("{} contains bytes that are not valid Shift_JIS", path.display());
    }

    let layout = FileLayout::from_path(path);
    let mut collection = NowphasWaveDataRecordCollection::from_data(&contents, layout);
    let records = collection
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| NowphasError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "parsed {} records from {} (leading width {})",
        records.len(),
        path.display(),
        layout.leading_width
    );
    Ok(records)
}

/// Lists the NOWPHAS data files directly inside `dirpath`
pub fn find_files(dirpath: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Regex::new(FILE_NAME_PATTERN)?;

    let mut paths = Vec::new();
    for entry in fs::read_dir(dirpath)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .map(|name| pattern.is_match(&name.to_string_lossy()))
            .unwrap_or(false);
        if matches && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Reads every NOWPHAS file in a directory into one dataset ordered by the
/// raw timestamp text. Both layouts share the `YYYYMMDDHH` prefix, so text
/// order is chronological even when they are mixed.
pub fn read_dir(dirpath: &Path) -> Result<Vec<NowphasWaveDataRecord>> {
    let paths = find_files(dirpath)?;

    let mut records = Vec::new();
    for path in paths.iter() {
        records.extend(read_file(path)?);
    }
    records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    log::info!(
        "loaded {} records from {} files in {}",
        records.len(),
        paths.len(),
        dirpath.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_pattern() {
        let pattern = Regex::new(FILE_NAME_PATTERN).unwrap();
        assert!(pattern.is_match("h301e2020.txt"));
        assert!(pattern.is_match("H3012020.txt"));
        assert!(!pattern.is_match("x301.txt"));
        assert!(!pattern.is_match("h301.csv"));
        assert!(!pattern.is_match("h301.txt.bak"));
    }
}
