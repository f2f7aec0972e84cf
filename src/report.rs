//! Renders a [`WaveFrequencyReport`] into a single-sheet workbook: the
//! directional frequency table with its radar chart, then one height ×
//! period grid per direction sector.
//!
//! The whole workbook is assembled in memory and saved once, so a failed
//! run never leaves a half written report behind.

use std::path::PathBuf;

use rust_xlsxwriter::{Chart, ChartLegendPosition, ChartType, Format, Workbook, Worksheet};

use crate::analysis::{DirectionalFrequencyTable, JointDistribution, WaveFrequencyReport};
use crate::error::Result;
use crate::units::DirectionSector;

pub const FILE_NAME: &str = "nowphas_wave_frequency_distribution.xlsx";
pub const SHEET_NAME: &str = "sheet1";

// Directional table header sits on B2, data on B3:G14.
const TABLE_ROW: u32 = 1;
const TABLE_COL: u16 = 1;
const TABLE_HEADERS: [&str; 6] = ["dir_no", "range1", "range2", "value", "probability", "count"];
const VALUE_COL: u16 = TABLE_COL + 3;
const PROBABILITY_COL: u16 = TABLE_COL + 4;

// Chart anchored on B17, 10 cm square.
const CHART_ROW: u32 = 16;
const CHART_COL: u16 = 1;
const CHART_SIZE: u32 = 378;
const CHART_TITLE: &str = "Wave Direction";

// Sector n grid starts on row 2 + 25(n - 1), column J.
const GRID_ROW: u32 = 1;
const GRID_STRIDE: u32 = 25;
const GRID_COL: u16 = 9;
const GRID_CORNER: &str = "Hs\\Tp";
const TOTAL_LABEL: &str = "Total";

#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub output: PathBuf,
    pub sheet_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output: PathBuf::from(FILE_NAME),
            sheet_name: SHEET_NAME.to_string(),
        }
    }
}

/// Builds the complete report workbook without touching the filesystem
pub fn build_workbook(report: &WaveFrequencyReport, sheet_name: &str) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    write_directional_table(worksheet, &report.directional)?;
    insert_radar_chart(worksheet, sheet_name)?;
    for grid in report.joint.iter() {
        write_joint_distribution(worksheet, grid)?;
    }

    Ok(workbook)
}

pub fn write_report(report: &WaveFrequencyReport, config: &ReportConfig) -> Result<()> {
    let mut workbook = build_workbook(report, &config.sheet_name)?;
    workbook.save(&config.output)?;
    log::info!("saved report to {}", config.output.display());
    Ok(())
}

fn write_directional_table(worksheet: &mut Worksheet, table: &DirectionalFrequencyTable) -> Result<()> {
    let percent = Format::new().set_num_format("0.0%");

    for (i, header) in TABLE_HEADERS.iter().enumerate() {
        worksheet.write_string(TABLE_ROW, TABLE_COL + i as u16, *header)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let r = TABLE_ROW + 1 + i as u32;
        worksheet.write_number(r, TABLE_COL, row.sector.number() as f64)?;
        worksheet.write_number(r, TABLE_COL + 1, row.range1 as f64)?;
        worksheet.write_number(r, TABLE_COL + 2, row.range2 as f64)?;
        worksheet.write_number(r, VALUE_COL, row.value as f64)?;
        worksheet.write_number_with_format(r, PROBABILITY_COL, row.probability, &percent)?;
        worksheet.write_number(r, TABLE_COL + 5, row.count as f64)?;
    }

    Ok(())
}

fn insert_radar_chart(worksheet: &mut Worksheet, sheet_name: &str) -> Result<()> {
    let first_row = TABLE_ROW + 1;
    let last_row = TABLE_ROW + DirectionSector::COUNT as u32;

    let mut chart = Chart::new(ChartType::Radar);
    chart
        .add_series()
        .set_name((sheet_name, TABLE_ROW, PROBABILITY_COL))
        .set_categories((sheet_name, first_row, VALUE_COL, last_row, VALUE_COL))
        .set_values((sheet_name, first_row, PROBABILITY_COL, last_row, PROBABILITY_COL));
    chart.title().set_name(CHART_TITLE);
    chart.legend().set_position(ChartLegendPosition::Top);
    chart.set_width(CHART_SIZE).set_height(CHART_SIZE);

    worksheet.insert_chart(CHART_ROW, CHART_COL, &chart)?;
    Ok(())
}

/// Top row of the region holding the grid of `sector`
pub fn grid_origin(sector: DirectionSector) -> (u32, u16) {
    (GRID_ROW + GRID_STRIDE * sector.index() as u32, GRID_COL)
}

fn write_joint_distribution(worksheet: &mut Worksheet, grid: &JointDistribution) -> Result<()> {
    let two_decimals = Format::new().set_num_format("0.00");
    let (top, left) = grid_origin(grid.sector);
    let total_col = left + 1 + grid.period_labels.len() as u16;

    worksheet.write_string(top, left, grid.sector.to_string())?;

    let header = top + 1;
    worksheet.write_string(header, left, GRID_CORNER)?;
    for (p, label) in grid.period_labels.iter().enumerate() {
        worksheet.write_string(header, left + 1 + p as u16, label.as_str())?;
    }
    worksheet.write_string(header, total_col, TOTAL_LABEL)?;

    for (h, label) in grid.height_labels.iter().enumerate() {
        let row = header + 1 + h as u32;
        worksheet.write_string(row, left, label.as_str())?;
        for (p, value) in grid.cells[h].iter().enumerate() {
            worksheet.write_number_with_format(row, left + 1 + p as u16, *value, &two_decimals)?;
        }
        worksheet.write_number_with_format(row, total_col, grid.row_totals[h], &two_decimals)?;
    }

    let totals_row = header + 1 + grid.height_labels.len() as u32;
    worksheet.write_string(totals_row, left, TOTAL_LABEL)?;
    for (p, value) in grid.column_totals.iter().enumerate() {
        worksheet.write_number_with_format(totals_row, left + 1 + p as u16, *value, &two_decimals)?;
    }
    worksheet.write_number_with_format(totals_row, total_col, grid.grand_total, &two_decimals)?;

    Ok(())
}
