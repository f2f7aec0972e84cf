use itertools::Itertools;
use serde::Serialize;

use crate::data::Observation;
use crate::tools::binning::Bins;
use crate::tools::math::percentage;
use crate::units::DirectionSector;

/// Percentage of a sector's waves falling in each significant wave height
/// and period combination, with `Total` margins.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JointDistribution {
    pub sector: DirectionSector,
    pub height_labels: Vec<String>,
    pub period_labels: Vec<String>,
    /// One row per height bin, one column per period bin
    pub cells: Vec<Vec<f64>>,
    pub row_totals: Vec<f64>,
    pub column_totals: Vec<f64>,
    pub grand_total: f64,
    pub wave_count: u64,
}

impl JointDistribution {
    /// A sector without observations collapses to one all-zero row in the
    /// first height bin.
    pub fn degenerate(sector: DirectionSector, height_bins: &Bins, period_bins: &Bins) -> Self {
        JointDistribution {
            sector,
            height_labels: height_bins.labels().iter().take(1).cloned().collect(),
            period_labels: period_bins.labels().to_vec(),
            cells: vec![vec![0.0; period_bins.len()]],
            row_totals: vec![0.0],
            column_totals: vec![0.0; period_bins.len()],
            grand_total: 0.0,
            wave_count: 0,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.cells.len() == 1 && self.wave_count == 0
    }

    pub fn cell(&self, height_label: &str, period_label: &str) -> Option<f64> {
        let row = self.height_labels.iter().position(|l| l == height_label)?;
        let column = self.period_labels.iter().position(|l| l == period_label)?;
        Some(self.cells[row][column])
    }
}

/// Bins each sector's observations into a dense height × period grid
#[derive(Clone, Debug)]
pub struct JointDistributionBuilder {
    pub height_bins: Bins,
    pub period_bins: Bins,
}

impl Default for JointDistributionBuilder {
    fn default() -> Self {
        JointDistributionBuilder {
            height_bins: Bins::significant_wave_height(),
            period_bins: Bins::significant_wave_period(),
        }
    }
}

impl JointDistributionBuilder {
    /// `observations` must already be restricted to `sector`
    pub fn build(&self, sector: DirectionSector, observations: &[&Observation]) -> JointDistribution {
        if observations.is_empty() {
            return JointDistribution::degenerate(sector, &self.height_bins, &self.period_bins);
        }

        let mut counts = vec![vec![0u64; self.period_bins.len()]; self.height_bins.len()];
        let mut wave_count = 0u64;

        for observation in observations {
            wave_count += observation.wave_count as u64;

            let height = self.height_bins.index_of(observation.significant_wave_height);
            let period = self.period_bins.index_of(observation.significant_wave_period);
            match (height, period) {
                (Some(h), Some(p)) => counts[h][p] += observation.wave_count as u64,
                _ => log::warn!(
                    "{}: Hs {} / Tp {} at {} is outside the binning range",
                    sector,
                    observation.significant_wave_height,
                    observation.significant_wave_period,
                    observation.timestamp
                ),
            }
        }

        let total = wave_count as f64;
        let cells: Vec<Vec<f64>> = counts
            .iter()
            .map(|row| row.iter().map(|c| percentage(*c as f64, total)).collect())
            .collect();
        let row_totals: Vec<f64> = counts
            .iter()
            .map(|row| percentage(row.iter().sum::<u64>() as f64, total))
            .collect();
        let column_totals: Vec<f64> = (0..self.period_bins.len())
            .map(|p| percentage(counts.iter().map(|row| row[p]).sum::<u64>() as f64, total))
            .collect();
        let binned: u64 = counts.iter().flatten().sum();

        JointDistribution {
            sector,
            height_labels: self.height_bins.labels().to_vec(),
            period_labels: self.period_bins.labels().to_vec(),
            cells,
            row_totals,
            column_totals,
            grand_total: percentage(binned as f64, total),
            wave_count,
        }
    }

    /// One distribution per sector, north sector first
    pub fn build_all(&self, observations: &[Observation]) -> Vec<JointDistribution> {
        let mut by_sector = observations
            .iter()
            .map(|o| (o.direction.sector(), o))
            .into_group_map();

        DirectionSector::all()
            .map(|sector| {
                let subset = by_sector.remove(&sector).unwrap_or_default();
                self.build(sector, &subset)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(number: u8) -> DirectionSector {
        DirectionSector::new(number).unwrap()
    }

    #[test]
    fn test_single_cell_sector() {
        let observations = vec![
            Observation::sample(100.0, 0.3, 2.0, 1),
            Observation::sample(100.0, 0.3, 2.0, 1),
        ];
        let refs: Vec<&Observation> = observations.iter().collect();

        let grid = JointDistributionBuilder::default().build(sector(4), &refs);

        assert_eq!(grid.cells.len(), 21);
        assert_eq!(grid.period_labels.len(), 16);
        assert!((grid.cell("0.0-0.5", "2-3").unwrap() - 100.0).abs() < 0.0001);
        for (h, row) in grid.cells.iter().enumerate() {
            for (p, value) in row.iter().enumerate() {
                if (h, p) != (0, 2) {
                    assert_eq!(*value, 0.0);
                }
            }
        }
        assert!((grid.row_totals[0] - 100.0).abs() < 0.0001);
        assert!((grid.column_totals[2] - 100.0).abs() < 0.0001);
        assert!((grid.grand_total - 100.0).abs() < 0.0001);
        assert!(!grid.is_degenerate());
    }

    #[test]
    fn test_empty_sector_is_single_zero_row() {
        let grid = JointDistributionBuilder::default().build(sector(5), &[]);

        assert!(grid.is_degenerate());
        assert_eq!(grid.height_labels, vec!["0.0-0.5".to_string()]);
        assert_eq!(grid.cells.len(), 1);
        assert!(grid.cells[0].iter().all(|v| *v == 0.0));
        assert_eq!(grid.cells[0].len(), 16);
        assert_eq!(grid.grand_total, 0.0);
        assert_eq!(grid.row_totals, vec![0.0]);
    }

    #[test]
    fn test_tail_bins_and_margins() {
        let observations = vec![
            Observation::sample(0.0, 11.2, 16.5, 2),
            Observation::sample(0.0, 1.2, 7.5, 1),
            Observation::sample(0.0, 1.4, 8.0, 1),
        ];
        let refs: Vec<&Observation> = observations.iter().collect();

        let grid = JointDistributionBuilder::default().build(sector(1), &refs);

        assert!((grid.cell(">10.0", ">15").unwrap() - 50.0).abs() < 0.0001);
        assert!((grid.cell("1.0-1.5", "7-8").unwrap() - 25.0).abs() < 0.0001);
        assert!((grid.cell("1.0-1.5", "8-9").unwrap() - 25.0).abs() < 0.0001);
        assert!((grid.row_totals[2] - 50.0).abs() < 0.0001);
        assert!((grid.grand_total - 100.0).abs() < 0.0001);
        assert_eq!(grid.wave_count, 4);
    }

    #[test]
    fn test_zero_wave_count_sector() {
        let observations = vec![Observation::sample(0.0, 1.2, 7.5, 0)];
        let refs: Vec<&Observation> = observations.iter().collect();

        let grid = JointDistributionBuilder::default().build(sector(1), &refs);

        assert_eq!(grid.cells.len(), 21);
        assert!(grid.cells.iter().flatten().all(|v| *v == 0.0));
        assert_eq!(grid.grand_total, 0.0);
    }

    #[test]
    fn test_build_all_sectors() {
        let observations = vec![
            Observation::sample(10.0, 0.3, 2.0, 5),
            Observation::sample(200.0, 2.1, 9.0, 3),
        ];

        let grids = JointDistributionBuilder::default().build_all(&observations);

        assert_eq!(grids.len(), 12);
        for grid in grids.iter() {
            match grid.sector.number() {
                1 | 8 => assert!((grid.grand_total - 100.0).abs() < 0.0001),
                _ => assert!(grid.is_degenerate()),
            }
        }
        assert!((grids[7].cell("2.0-2.5", "9-10").unwrap() - 100.0).abs() < 0.0001);
    }
}
