use {
    std::fmt,
    serde::{Serialize, Deserialize},
};

/// Lowest combined compound score still counted as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Highest combined compound score still counted as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way label derived from a record's combined compound score.
///
/// This is the only place the category cut points live: the aggregator, the report and
/// anything charting the scored records go through [`SentimentCategory::from_score`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    pub const ALL: [SentimentCategory; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(SentimentCategory::from_score(0.05), SentimentCategory::Positive);
        assert_eq!(SentimentCategory::from_score(-0.05), SentimentCategory::Negative);
    }

    #[test]
    fn scores_between_thresholds_are_neutral() {
        assert_eq!(SentimentCategory::from_score(0.049), SentimentCategory::Neutral);
        assert_eq!(SentimentCategory::from_score(-0.049), SentimentCategory::Neutral);
        assert_eq!(SentimentCategory::from_score(0.0), SentimentCategory::Neutral);
    }

    #[test]
    fn extremes_are_categorized() {
        assert_eq!(SentimentCategory::from_score(1.0), SentimentCategory::Positive);
        assert_eq!(SentimentCategory::from_score(-1.0), SentimentCategory::Negative);
    }

    #[test]
    fn display_matches_report_labels() {
        let labels: Vec<String> = SentimentCategory::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, vec!["Positive", "Negative", "Neutral"]);
    }
}
