use {
    std::fmt,
    chrono::{DateTime, NaiveDateTime, TimeZone, Utc},
    serde::{Serialize, Deserialize, Deserializer, de::{self, Unexpected, Visitor}},
    serde_json::Value,
    typed_builder::TypedBuilder,
    crate::{
        category::SentimentCategory,
        error::RecordError,
        scorer::TextScores,
    },
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Comment,
}

/// One post or comment as handed over by the acquisition step.
#[derive(TypedBuilder, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawRecord {
    #[builder(setter(into))]
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    // None when the field is absent, null or not a string at all
    #[serde(default, deserialize_with = "text_if_string")]
    #[builder(default, setter(strip_option))]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created: DateTime<Utc>,
    #[builder(setter(into))]
    pub subreddit: String,
    #[builder(default, setter(into))]
    pub url: String,
}

/// A raw record together with the scores of both analyzers. Flat, so it maps to one csv row.
#[derive(TypedBuilder, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoredRecord {
    #[builder(setter(into))]
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[builder(default, setter(into))]
    pub text: String,
    #[builder(setter(into))]
    pub subreddit: String,
    #[builder(default)]
    pub created: DateTime<Utc>,
    #[builder(default, setter(into))]
    pub url: String,

    #[builder(default)]
    pub vader_neg: f64,
    #[builder(default)]
    pub vader_neu: f64,
    #[builder(default)]
    pub vader_pos: f64,
    #[builder(default)]
    pub vader_compound: f64,
    #[builder(default)]
    pub textblob_polarity: f64,
    #[builder(default)]
    pub textblob_subjectivity: f64,
    pub combined_compound: f64,
    #[builder(default)]
    pub confidence: f64,
}

/// Numeric columns summarized in the describe table and the correlation matrix.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    VaderNeg,
    VaderNeu,
    VaderPos,
    VaderCompound,
    TextblobPolarity,
    CombinedCompound,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

impl RawRecord {
    pub fn from_json_value(position: usize, value: Value) -> Result<Self, RecordError> {
        serde_json::from_value(value).map_err(|source| RecordError::Malformed { position, source })
    }

    pub fn from_json_line(position: usize, line: &str) -> Result<Self, RecordError> {
        serde_json::from_str(line).map_err(|source| RecordError::Malformed { position, source })
    }

    /// Text the scorer can work with. An empty string is still usable text.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn scored(&self, text: &str, scores: &TextScores) -> ScoredRecord {
        ScoredRecord {
            id: self.id.clone(),
            content_type: self.content_type,
            text: text.to_owned(),
            subreddit: self.subreddit.clone(),
            created: self.created,
            url: self.url.clone(),
            vader_neg: scores.valence.neg,
            vader_neu: scores.valence.neu,
            vader_pos: scores.valence.pos,
            vader_compound: scores.valence.compound,
            textblob_polarity: scores.pattern.polarity,
            textblob_subjectivity: scores.pattern.subjectivity,
            combined_compound: scores.combined_compound,
            confidence: scores.confidence,
        }
    }
}

impl ScoredRecord {
    pub fn category(&self) -> SentimentCategory {
        SentimentCategory::from_score(self.combined_compound)
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::VaderNeg => self.vader_neg,
            Metric::VaderNeu => self.vader_neu,
            Metric::VaderPos => self.vader_pos,
            Metric::VaderCompound => self.vader_compound,
            Metric::TextblobPolarity => self.textblob_polarity,
            Metric::CombinedCompound => self.combined_compound,
        }
    }
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Self::VaderNeg,
        Self::VaderNeu,
        Self::VaderPos,
        Self::VaderCompound,
        Self::TextblobPolarity,
        Self::CombinedCompound,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            Self::VaderNeg => "vader_neg",
            Self::VaderNeu => "vader_neu",
            Self::VaderPos => "vader_pos",
            Self::VaderCompound => "vader_compound",
            Self::TextblobPolarity => "textblob_polarity",
            Self::CombinedCompound => "combined_compound",
        }
    }
}

const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reads a creation timestamp in any of the shapes acquisition exports carry: RFC 3339,
/// a naive `YYYY-MM-DD HH:MM:SS[.fff]` taken as UTC, or epoch seconds (number or string).
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error> where D: Deserializer<'de> {
    deserializer.deserialize_any(TimestampVisitor)
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an RFC 3339 timestamp, a naive `YYYY-MM-DD HH:MM:SS` timestamp or epoch seconds")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        parse_timestamp(value).ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        DateTime::from_timestamp(value, 0).ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value).ok()
            .and_then(|v| DateTime::from_timestamp(v, 0))
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        from_epoch_seconds(value).ok_or_else(|| E::invalid_value(Unexpected::Float(value), &self))
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = value.parse::<DateTime<Utc>>() {
        return Some(parsed);
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }

    value.parse::<f64>().ok().and_then(from_epoch_seconds)
}

fn from_epoch_seconds(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }

    let seconds = value.floor();
    let nanos = (((value - seconds) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(seconds as i64, nanos)
}

fn text_if_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error> where D: Deserializer<'de> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}
