use {
    std::fmt,
    serde::Serialize,
};

pub const POSITIVE_TENOR_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_TENOR_THRESHOLD: f64 = -0.1;

pub const HIGH_VARIANCE_THRESHOLD: f64 = 0.3;
pub const LOW_VARIANCE_THRESHOLD: f64 = 0.1;

pub const STRONG_INTENSITY_THRESHOLD: f64 = 0.3;

/// Qualitative reading of the overall mean combined compound. Both cut points are exclusive.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentimentTenor {
    Positive,
    Negative,
    Neutral,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarianceTenor {
    High,
    Moderate,
    Low,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntensityTenor {
    Strong,
    Moderate,
}

impl SentimentTenor {
    pub fn from_mean(mean: f64) -> Self {
        if mean > POSITIVE_TENOR_THRESHOLD {
            Self::Positive
        } else if mean < NEGATIVE_TENOR_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Positive => "predominantly positive",
            Self::Negative => "predominantly negative",
            Self::Neutral => "generally neutral",
        }
    }
}

impl VarianceTenor {
    /// An undefined variance (single record) falls through both cut points.
    pub fn from_variance(variance: Option<f64>) -> Self {
        match variance {
            Some(variance) if variance > HIGH_VARIANCE_THRESHOLD => Self::High,
            Some(variance) if variance < LOW_VARIANCE_THRESHOLD => Self::Low,
            _ => Self::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

impl IntensityTenor {
    pub fn from_mean(mean: f64) -> Self {
        if mean.abs() > STRONG_INTENSITY_THRESHOLD {
            Self::Strong
        } else {
            Self::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
        }
    }
}

impl fmt::Display for SentimentTenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for VarianceTenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IntensityTenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
