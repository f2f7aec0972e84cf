use serde::{Deserialize, Serialize};

/// Contiguous half-open bins `[edge_i, edge_i+1)` of equal width, followed
/// by one open tail bin `[last_edge, inf)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bins {
    edges: Vec<f64>,
    labels: Vec<String>,
}

impl Bins {
    /// `count` bins of `width` starting at `start`, labelled `"lo-hi"` with
    /// `precision` decimals, plus a tail bin labelled `">hi"`.
    pub fn uniform(start: f64, width: f64, count: usize, precision: usize) -> Bins {
        let edges: Vec<f64> = (0..=count).map(|i| start + i as f64 * width).collect();

        let mut labels: Vec<String> = edges
            .windows(2)
            .map(|w| format!("{:.p$}-{:.p$}", w[0], w[1], p = precision))
            .collect();
        labels.push(format!(">{:.p$}", edges[count], p = precision));

        Bins { edges, labels }
    }

    /// Significant wave height bins, 0.5 m wide up to 10 m
    pub fn significant_wave_height() -> Bins {
        Bins::uniform(0.0, 0.5, 20, 1)
    }

    /// Significant wave period bins, 1 s wide up to 15 s
    pub fn significant_wave_period() -> Bins {
        Bins::uniform(0.0, 1.0, 15, 0)
    }

    /// Index of the bin holding `value`, or `None` below the first edge
    pub fn index_of(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        match self.edges.partition_point(|edge| *edge <= value) {
            0 => None,
            n => Some(n - 1),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of bins, tail included
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_bins() {
        let bins = Bins::significant_wave_height();
        assert_eq!(bins.len(), 21);
        assert_eq!(bins.labels()[0], "0.0-0.5");
        assert_eq!(bins.labels()[19], "9.5-10.0");
        assert_eq!(bins.labels()[20], ">10.0");

        assert_eq!(bins.index_of(0.0), Some(0));
        assert_eq!(bins.index_of(0.3), Some(0));
        assert_eq!(bins.index_of(0.5), Some(1));
        assert_eq!(bins.index_of(9.99), Some(19));
        assert_eq!(bins.index_of(10.0), Some(20));
        assert_eq!(bins.index_of(25.0), Some(20));
        assert_eq!(bins.index_of(-0.1), None);
    }

    #[test]
    fn test_period_bins() {
        let bins = Bins::significant_wave_period();
        assert_eq!(bins.len(), 16);
        assert_eq!(bins.labels()[2], "2-3");
        assert_eq!(bins.labels()[15], ">15");

        assert_eq!(bins.index_of(2.0), Some(2));
        assert_eq!(bins.index_of(14.9), Some(14));
        assert_eq!(bins.index_of(15.0), Some(15));
        assert_eq!(bins.index_of(f64::NAN), None);
    }
}
