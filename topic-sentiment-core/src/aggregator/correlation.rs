use {
    serde::Serialize,
    crate::record::{Metric, ScoredRecord},
    super::describe::mean,
};

/// Pairwise Pearson correlation of the metric columns. A cell is `None` when it is undefined
/// (fewer than two records or a constant column).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    pub metrics: Vec<Metric>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn of(records: &[ScoredRecord]) -> Self {
        let metrics = Metric::ALL.to_vec();
        let columns: Vec<Vec<f64>> = metrics.iter()
            .map(|metric| records.iter().map(|v| v.metric(*metric)).collect())
            .collect();

        let values = columns.iter()
            .map(|x| columns.iter().map(|y| pearson(x, y)).collect())
            .collect();

        Self {
            metrics,
            values,
        }
    }

    pub fn get(&self, row: Metric, column: Metric) -> Option<f64> {
        let row = self.metrics.iter().position(|v| *v == row)?;
        let column = self.metrics.iter().position(|v| *v == column)?;
        self.values[row][column]
    }
}

pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 || variance_y == 0.0 {
        return None;
    }

    Some((covariance / (variance_x * variance_y).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::record::ContentType,
    };

    #[test]
    fn perfectly_correlated_columns() {
        assert!((pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn undefined_correlations() {
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let records: Vec<ScoredRecord> = [(0.1, 0.3), (0.5, 0.2), (-0.4, -0.6)]
            .iter()
            .enumerate()
            .map(|(i, (compound, polarity))| ScoredRecord::builder()
                .id(i.to_string())
                .content_type(ContentType::Post)
                .subreddit("rust")
                .vader_compound(*compound)
                .textblob_polarity(*polarity)
                .combined_compound((compound + polarity) / 2.0)
                .build())
            .collect();

        let matrix = CorrelationMatrix::of(&records);
        assert_eq!(matrix.metrics.len(), 6);

        let compound = matrix.get(Metric::VaderCompound, Metric::VaderCompound).unwrap();
        assert!((compound - 1.0).abs() < 1e-12);
        assert_eq!(
            matrix.get(Metric::VaderCompound, Metric::TextblobPolarity),
            matrix.get(Metric::TextblobPolarity, Metric::VaderCompound),
        );
        // every vader_neg is zero in this set
        assert_eq!(matrix.get(Metric::VaderNeg, Metric::VaderCompound), None);
    }
}
