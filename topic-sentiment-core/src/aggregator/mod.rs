use {
    std::cmp::Ordering,
    serde::Serialize,
    tracing::debug,
    crate::{
        category::SentimentCategory,
        error::AggregationError,
        record::ScoredRecord,
    },
};

pub mod correlation;
pub mod describe;
pub mod groups;
pub mod tenor;

pub use self::{
    correlation::CorrelationMatrix,
    describe::{ColumnSummary, Summary},
    groups::{GroupStats, TypeComparison},
    tenor::{IntensityTenor, SentimentTenor, VarianceTenor},
};

/// Records listed in each of the most positive and most negative tables.
pub const TOP_K: usize = 5;

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CategoryStats {
    pub count: usize,
    pub percentage: f64,
    // 0 for an empty category
    pub average_score: f64,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct CategoryBreakdown {
    pub positive: CategoryStats,
    pub negative: CategoryStats,
    pub neutral: CategoryStats,
}

/// Everything the report and the charts need to know about one analysis run.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatisticsBundle {
    pub total_count: usize,
    pub categories: CategoryBreakdown,
    pub describe: Vec<ColumnSummary>,
    pub most_positive: Vec<ScoredRecord>,
    pub most_negative: Vec<ScoredRecord>,
    pub by_type: Vec<GroupStats>,
    pub by_community: Vec<GroupStats>,
    pub over_time: Vec<GroupStats>,
    pub most_positive_community: GroupStats,
    pub most_negative_community: GroupStats,
    pub type_comparison: Option<TypeComparison>,
    pub overall_mean: f64,
    pub overall_variance: Option<f64>,
    pub sentiment_tenor: SentimentTenor,
    pub variance_tenor: VarianceTenor,
    pub intensity_tenor: IntensityTenor,
    pub correlation: CorrelationMatrix,
}

impl CategoryBreakdown {
    pub fn get(&self, category: SentimentCategory) -> &CategoryStats {
        match category {
            SentimentCategory::Positive => &self.positive,
            SentimentCategory::Negative => &self.negative,
            SentimentCategory::Neutral => &self.neutral,
        }
    }
}

pub fn aggregate(records: &[ScoredRecord]) -> Result<StatisticsBundle, AggregationError> {
    let scores: Vec<f64> = records.iter().map(|v| v.combined_compound).collect();
    let overall_mean = describe::mean(&scores).ok_or(AggregationError::EmptyCorpus)?;
    let overall_variance = describe::sample_variance(&scores);

    let by_community = groups::by_community(records);
    let most_positive_community = groups::highest_mean(&by_community).cloned().ok_or(AggregationError::EmptyCorpus)?;
    let most_negative_community = groups::lowest_mean(&by_community).cloned().ok_or(AggregationError::EmptyCorpus)?;

    let by_type = groups::by_content_type(records);
    let type_comparison = groups::compare_types(&by_type);

    debug!(
        total = records.len(),
        overall_mean,
        communities = by_community.len(),
        "aggregated scored records"
    );

    Ok(StatisticsBundle {
        total_count: records.len(),
        categories: category_breakdown(records),
        describe: describe::describe(records),
        most_positive: top_k(records, TOP_K, |a, b| b.total_cmp(a)),
        most_negative: top_k(records, TOP_K, |a, b| a.total_cmp(b)),
        by_type,
        by_community,
        over_time: groups::by_day(records),
        most_positive_community,
        most_negative_community,
        type_comparison,
        overall_mean,
        overall_variance,
        sentiment_tenor: SentimentTenor::from_mean(overall_mean),
        variance_tenor: VarianceTenor::from_variance(overall_variance),
        intensity_tenor: IntensityTenor::from_mean(overall_mean),
        correlation: CorrelationMatrix::of(records),
    })
}

fn category_breakdown(records: &[ScoredRecord]) -> CategoryBreakdown {
    let stats_for = |category: SentimentCategory| {
        let scores: Vec<f64> = records.iter()
            .filter(|v| v.category() == category)
            .map(|v| v.combined_compound)
            .collect();

        CategoryStats {
            count: scores.len(),
            percentage: scores.len() as f64 / records.len() as f64 * 100.0,
            average_score: describe::mean(&scores).unwrap_or(0.0),
        }
    };

    CategoryBreakdown {
        positive: stats_for(SentimentCategory::Positive),
        negative: stats_for(SentimentCategory::Negative),
        neutral: stats_for(SentimentCategory::Neutral),
    }
}

// stable: records with equal scores keep their input order
fn top_k<F>(records: &[ScoredRecord], k: usize, order: F) -> Vec<ScoredRecord> where F: Fn(&f64, &f64) -> Ordering {
    let mut sorted: Vec<&ScoredRecord> = records.iter().collect();
    sorted.sort_by(|a, b| order(&a.combined_compound, &b.combined_compound));
    sorted.into_iter().take(k).cloned().collect()
}
