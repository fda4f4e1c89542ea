use {
    serde::Serialize,
    crate::record::{Metric, ScoredRecord},
};

/// Count, mean, spread and quartiles of one numeric column.
///
/// `std` is the sample standard deviation and is `None` for a single observation.
/// Quartiles interpolate linearly between the two closest ranks.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ColumnSummary {
    pub metric: Metric,
    pub summary: Summary,
}

impl Summary {
    pub fn of(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            count: values.len(),
            mean,
            std: sample_std(values),
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Summary of every metric column, in [`Metric::ALL`] order. Empty when there are no records.
pub fn describe(records: &[ScoredRecord]) -> Vec<ColumnSummary> {
    Metric::ALL.iter()
        .filter_map(|metric| {
            let values: Vec<f64> = records.iter().map(|v| v.metric(*metric)).collect();
            Summary::of(&values).map(|summary| ColumnSummary {
                metric: *metric,
                summary,
            })
        })
        .collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = mean(values)?;
    let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some(squared_deviations / (values.len() - 1) as f64)
}

pub fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}
