use std::path::Path;

use crate::analysis::WaveFrequencyReport;
use crate::data::{clean, read_dir};
use crate::error::Result;
use crate::report::{write_report, ReportConfig};

/// Computes the frequency report for a directory of NOWPHAS files without
/// writing anything
pub fn analyze_dir(dirpath: &Path) -> Result<WaveFrequencyReport> {
    let records = read_dir(dirpath)?;
    let observations = clean(records)?;
    Ok(WaveFrequencyReport::from_observations(&observations))
}

/// Runs the full pipeline and saves the workbook described by `config`
pub fn nowphas_analyzer(dirpath: &Path, config: &ReportConfig) -> Result<WaveFrequencyReport> {
    let report = analyze_dir(dirpath)?;
    write_report(&report, config)?;
    Ok(report)
}
