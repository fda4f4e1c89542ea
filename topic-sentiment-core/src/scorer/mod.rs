use {
    tracing::debug,
    crate::record::{RawRecord, ScoredRecord},
};

pub mod pattern;
mod pattern_lexicon;
pub mod valence;
mod valence_lexicon;

pub use self::{
    pattern::{PatternAnalyzer, PatternLexicon, PatternScores},
    valence::{PolarityScores, ValenceAnalyzer, ValenceLexicon},
};

/// Both analyzers, built once by the caller and shared read-only by every scoring call.
#[derive(Default)]
pub struct Analyzers {
    valence: ValenceAnalyzer,
    pattern: PatternAnalyzer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextScores {
    pub valence: PolarityScores,
    pub pattern: PatternScores,
    pub combined_compound: f64,
    pub confidence: f64,
}

impl Analyzers {
    pub fn new(valence: ValenceAnalyzer, pattern: PatternAnalyzer) -> Self {
        Self {
            valence,
            pattern,
        }
    }

    pub fn valence(&self) -> &ValenceAnalyzer {
        &self.valence
    }

    pub fn pattern(&self) -> &PatternAnalyzer {
        &self.pattern
    }

    pub fn score_text(&self, text: &str) -> TextScores {
        let valence = self.valence.polarity_scores(text);
        let pattern = self.pattern.sentiment(text);
        let combined_compound = combine(valence.compound, pattern.polarity);

        TextScores {
            valence,
            pattern,
            combined_compound,
            confidence: combined_compound.abs(),
        }
    }
}

/// Mean of the two independent polarity estimates.
pub fn combine(compound: f64, polarity: f64) -> f64 {
    (compound + polarity) / 2.0
}

/// Scores one record, or returns `None` when it carries no text. An empty string is text and
/// comes back zero-filled.
pub fn score_record(analyzers: &Analyzers, record: &RawRecord) -> Option<ScoredRecord> {
    let Some(text) = record.usable_text() else {
        debug!(id = %record.id, "skipping record without text");
        return None;
    };

    let scores = analyzers.score_text(text);
    debug!(id = %record.id, combined_compound = scores.combined_compound, "scored record");

    Some(record.scored(text, &scores))
}

/// Scores records in input order, leaving out the ones without text.
pub fn score_records(analyzers: &Analyzers, records: &[RawRecord]) -> Vec<ScoredRecord> {
    records.iter()
        .filter_map(|record| score_record(analyzers, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        chrono::{TimeZone, Utc},
        super::*,
        crate::record::ContentType,
    };

    fn record(id: &str, text: Option<&str>) -> RawRecord {
        let created = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
        match text {
            Some(text) => RawRecord::builder()
                .id(id)
                .content_type(ContentType::Post)
                .text(text.to_owned())
                .created(created)
                .subreddit("python")
                .build(),
            None => RawRecord::builder()
                .id(id)
                .content_type(ContentType::Post)
                .created(created)
                .subreddit("python")
                .build(),
        }
    }

    #[test]
    fn empty_text_is_scored_as_zero() {
        let scored = score_record(&Analyzers::default(), &record("1", Some(""))).unwrap();

        assert_eq!(scored.vader_neg, 0.0);
        assert_eq!(scored.vader_neu, 0.0);
        assert_eq!(scored.vader_pos, 0.0);
        assert_eq!(scored.vader_compound, 0.0);
        assert_eq!(scored.textblob_polarity, 0.0);
        assert_eq!(scored.textblob_subjectivity, 0.0);
        assert_eq!(scored.combined_compound, 0.0);
        assert_eq!(scored.confidence, 0.0);
    }

    #[test]
    fn missing_text_is_dropped() {
        assert_eq!(score_record(&Analyzers::default(), &record("1", None)), None);
    }

    #[test]
    fn missing_and_empty_text_are_handled_differently() {
        let records = vec![record("1", None), record("2", Some("")), record("3", None)];
        let scored = score_records(&Analyzers::default(), &records);

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].id, "2");
    }

    #[test]
    fn positive_text() {
        let scored = score_record(&Analyzers::default(), &record("1", Some("I love Python, it's the best language!"))).unwrap();

        assert!(scored.vader_pos > 0.0);
        assert!(scored.textblob_polarity > 0.0);
        assert!(scored.combined_compound > 0.0);
        assert!(scored.confidence > 0.0);
    }

    #[test]
    fn negative_text() {
        let scored = score_record(&Analyzers::default(), &record("1", Some("I hate bugs, they are so annoying."))).unwrap();

        assert!(scored.vader_neg > 0.0);
        assert!(scored.textblob_polarity < 0.0);
        assert!(scored.combined_compound < 0.0);
        assert!(scored.confidence > 0.0);
    }

    #[test]
    fn neutral_text() {
        let scored = score_record(&Analyzers::default(), &record("1", Some("The sky is blue."))).unwrap();

        assert!((scored.vader_neu - 1.0).abs() <= 0.1);
        assert!(scored.textblob_polarity.abs() <= 0.1);
        assert!(scored.combined_compound.abs() <= 0.1);
    }

    #[test]
    fn combined_compound_is_the_mean_and_confidence_its_magnitude() {
        let analyzers = Analyzers::default();
        for text in ["great stuff", "this is not good at all", "meh", "WORST. RELEASE. EVER!!!"] {
            let scores = analyzers.score_text(text);
            assert_eq!(scores.combined_compound, (scores.valence.compound + scores.pattern.polarity) / 2.0);
            assert!(scores.combined_compound >= -1.0 && scores.combined_compound <= 1.0);
            assert_eq!(scores.confidence, scores.combined_compound.abs());
        }
    }

    #[test]
    fn output_keeps_input_order_and_identity() {
        let records = vec![
            record("a", Some("terrible")),
            record("b", None),
            record("c", Some("wonderful")),
            record("d", Some("fine")),
        ];
        let scored = score_records(&Analyzers::default(), &records);

        let ids: Vec<&str> = scored.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
        assert_eq!(scored[1].text, "wonderful");
        assert_eq!(scored[1].subreddit, "python");
        assert_eq!(scored[1].created, records[2].created);
    }
}
