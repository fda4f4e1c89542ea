//! Polarity and subjectivity from a pattern lexicon of adjectives and adverbs.
//!
//! Each rated word becomes an assessment. A preceding adverb scales it ("very good"), a
//! preceding negation halves and flips it ("not good" is mildly bad) and an exclamation mark
//! pushes it further out. The text scores are the means over all assessments.

use {
    std::{collections::HashMap, fs::File, io::{BufRead, BufReader}, path::Path},
    serde::{Serialize, Deserialize},
    crate::error::LexiconError,
    super::pattern_lexicon::{PatternEntry, BUILTIN_ENTRIES, NEGATIONS, EMOTICONS},
};

const NEGATED_POLARITY_FACTOR: f64 = -0.5;
const EXCLAMATION_FACTOR: f64 = 1.25;
const IRONY_MARKER: &str = "(!)";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PatternScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub struct PatternLexicon {
    entries: HashMap<String, PatternEntry>,
}

pub struct PatternAnalyzer {
    lexicon: PatternLexicon,
    emoticons: HashMap<&'static str, f64>,
}

struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

impl PatternLexicon {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES.iter().map(|(word, entry)| (word.to_string(), *entry)).collect(),
        }
    }

    /// Reads a tab separated lexicon:
    /// `word<TAB>polarity<TAB>subjectivity[<TAB>intensity[<TAB>part of speech]]`.
    /// Intensity defaults to 1. Adverbs (`RB` tags) scale the word that follows them.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let line_number = index + 1;
            let mut columns = line.split('\t');
            let word = columns.next().unwrap_or_default().trim().to_lowercase();
            let polarity = number_column(columns.next(), line_number, "polarity")?;
            let subjectivity = number_column(columns.next(), line_number, "subjectivity")?;
            let intensity = match columns.next().map(str::trim).filter(|v| !v.is_empty()) {
                Some(value) => number_column(Some(value), line_number, "intensity")?,
                None => 1.0,
            };
            let modifier = columns.next().map(|v| v.trim().to_uppercase().starts_with("RB")).unwrap_or(false);

            entries.insert(word, PatternEntry {
                polarity,
                subjectivity,
                intensity,
                modifier,
            });
        }

        Ok(Self {
            entries,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    fn get(&self, word: &str) -> Option<&PatternEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new(PatternLexicon::builtin())
    }
}

impl PatternAnalyzer {
    pub fn new(lexicon: PatternLexicon) -> Self {
        Self {
            lexicon,
            emoticons: EMOTICONS.iter().copied().collect(),
        }
    }

    pub fn lexicon(&self) -> &PatternLexicon {
        &self.lexicon
    }

    pub fn sentiment(&self, text: &str) -> PatternScores {
        let assessments = self.assessments(&tokenize(text));
        if assessments.is_empty() {
            return PatternScores::default();
        }

        let total = assessments.len() as f64;
        let polarity = assessments.iter()
            .map(|v| if v.negated { v.polarity * NEGATED_POLARITY_FACTOR } else { v.polarity })
            .sum::<f64>() / total;
        let subjectivity = assessments.iter().map(|v| v.subjectivity).sum::<f64>() / total;

        PatternScores {
            // a negated neutral word comes out as -0.0
            polarity: clamp_unit(polarity) + 0.0,
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    fn assessments(&self, tokens: &[String]) -> Vec<Assessment> {
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut modifier = false;
        let mut negation = false;

        for token in tokens {
            let token = token.as_str();

            if let Some(entry) = self.lexicon.get(token) {
                if !modifier {
                    assessments.push(Assessment {
                        polarity: entry.polarity,
                        subjectivity: entry.subjectivity,
                        intensity: entry.intensity,
                        negated: false,
                    });
                } else if let Some(last) = assessments.last_mut() {
                    last.polarity = clamp_unit(entry.polarity * last.intensity);
                    last.subjectivity = clamp_unit(entry.subjectivity * last.intensity);
                    last.intensity = entry.intensity;
                }

                if negation {
                    if let Some(last) = assessments.last_mut() {
                        last.intensity = 1.0 / last.intensity;
                        last.negated = true;
                    }
                }

                modifier = entry.modifier;
                negation = NEGATIONS.contains(&token);
                continue;
            }

            if NEGATIONS.contains(&token) {
                negation = true;
            } else if negation && token.trim_matches('\'').chars().count() > 1 {
                // negations carry across short words only ("not a good")
                negation = false;
            }

            if negation && modifier {
                // "really not good"
                if let Some(last) = assessments.last_mut() {
                    last.negated = true;
                }
                negation = false;
            } else if modifier && token.chars().count() > 2 {
                modifier = false;
            }

            if token == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = clamp_unit(last.polarity * EXCLAMATION_FACTOR);
                }
            }

            if token == IRONY_MARKER {
                assessments.push(Assessment {
                    polarity: 0.0,
                    subjectivity: 1.0,
                    intensity: 1.0,
                    negated: false,
                });
            }

            if let Some(polarity) = self.emoticons.get(token) {
                assessments.push(Assessment {
                    polarity: *polarity,
                    subjectivity: 1.0,
                    intensity: 1.0,
                    negated: false,
                });
            }
        }

        assessments
    }
}

/// Lowercased words and single punctuation marks. Contractions are split the way the lexicon
/// expects them ("isn't" -> "is", "n't"); emoticons and the irony marker stay whole.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let lowered = chunk.to_lowercase();
        if lowered == IRONY_MARKER || EMOTICONS.iter().any(|(emoticon, _)| *emoticon == lowered) {
            tokens.push(lowered);
            continue;
        }

        let mut word = String::new();
        for c in lowered.chars() {
            if c.is_alphanumeric() || c == '\'' || c == '-' {
                word.push(c);
            } else {
                push_word(&mut word, &mut tokens);
                tokens.push(c.to_string());
            }
        }
        push_word(&mut word, &mut tokens);
    }

    tokens
}

fn push_word(word: &mut String, tokens: &mut Vec<String>) {
    let taken = std::mem::take(word);
    let trimmed = taken.trim_matches('\'');
    if trimmed.is_empty() {
        return;
    }

    if let Some(stem) = trimmed.strip_suffix("n't") {
        if !stem.is_empty() {
            tokens.push(stem.to_owned());
        }
        tokens.push("n't".to_owned());
    } else if let Some((stem, suffix)) = trimmed.split_once('\'') {
        tokens.push(stem.to_owned());
        tokens.push(format!("'{}", suffix));
    } else {
        tokens.push(trimmed.to_owned());
    }
}

fn number_column(value: Option<&str>, line: usize, column: &'static str) -> Result<f64, LexiconError> {
    let value = value.ok_or(LexiconError::MissingColumn { line, column })?.trim();
    value.parse::<f64>().map_err(|_| LexiconError::InvalidColumn {
        line,
        column,
        value: value.to_owned(),
    })
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use {
        std::io::Cursor,
        super::*,
    };

    fn sentiment(text: &str) -> PatternScores {
        PatternAnalyzer::default().sentiment(text)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {} to be close to {}", actual, expected);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(sentiment(""), PatternScores { polarity: 0.0, subjectivity: 0.0 });
    }

    #[test]
    fn text_without_rated_words_scores_zero() {
        assert_eq!(sentiment("We shipped the release yesterday"), PatternScores::default());
    }

    #[test]
    fn positive_and_negative_text() {
        assert!(sentiment("I love Python, it's the best language!").polarity > 0.0);
        assert!(sentiment("I hate bugs, they are so annoying.").polarity < 0.0);
    }

    #[test]
    fn common_polar_words_are_rated() {
        assert_close(sentiment("I love this").polarity, 0.5);
        assert_close(sentiment("I hate this").polarity, -0.8);
        assert!(sentiment("what a disaster").polarity < 0.0);
    }

    #[test]
    fn negated_neutral_word_is_plain_zero() {
        let result = sentiment("extremely not");
        assert_eq!(result.polarity, 0.0);
        assert!(result.polarity.is_sign_positive());
    }

    #[test]
    fn neutral_adjective_keeps_polarity_at_zero() {
        let result = sentiment("The sky is blue.");
        assert_close(result.polarity, 0.0);
        assert!(result.subjectivity > 0.0);
    }

    #[test]
    fn negation_halves_and_flips() {
        assert_close(sentiment("not good").polarity, -0.35);
        assert_close(sentiment("this isn't good").polarity, -0.35);
        assert_close(sentiment("not a good idea").polarity, -0.35);
    }

    #[test]
    fn negation_is_dropped_after_a_longer_word() {
        assert_close(sentiment("not that good").polarity, 0.7);
    }

    #[test]
    fn modifier_scales_the_next_word() {
        let result = sentiment("very good");
        assert_close(result.polarity, 0.7 * 1.3);
        assert_close(result.subjectivity, 0.6 * 1.3);
    }

    #[test]
    fn negated_modifier_softens() {
        let result = sentiment("not very good").polarity;
        assert!(result < 0.0);
        assert!(result > -0.35);
    }

    #[test]
    fn exclamation_boosts_previous_assessment() {
        assert_close(sentiment("great").polarity, 0.8);
        assert_close(sentiment("great!").polarity, 1.0);
        assert_close(sentiment("bad!").polarity, -0.875);
    }

    #[test]
    fn scores_are_averaged_over_assessments() {
        assert_close(sentiment("good but slow").polarity, (0.7 - 0.3) / 2.0);
    }

    #[test]
    fn emoticons_and_irony() {
        assert_close(sentiment("deploy done :)").polarity, 0.5);
        assert_close(sentiment("deploy done :(").polarity, -0.75);
        assert_eq!(sentiment("sure (!)"), PatternScores { polarity: 0.0, subjectivity: 1.0 });
    }

    #[test]
    fn scores_stay_in_range() {
        let result = sentiment("absolutely perfect!!! incredibly awesome!!! extremely wonderful!!!");
        assert!(result.polarity <= 1.0 && result.polarity >= -1.0);
        assert!(result.subjectivity <= 1.0 && result.subjectivity >= 0.0);
    }

    #[test]
    fn tokenizer_splits_contractions_and_punctuation() {
        assert_eq!(
            tokenize("It's NOT great, isn't it?"),
            vec!["it", "'s", "not", "great", ",", "is", "n't", "it", "?"],
        );
    }

    #[test]
    fn lexicon_from_reader() {
        let lexicon = PatternLexicon::from_reader(Cursor::new(
            "# word\tpolarity\tsubjectivity\tintensity\tpos\nShiny\t0.6\t0.8\n\nmighty\t0.1\t0.5\t1.5\tRB\n"
        )).unwrap();
        assert_eq!(lexicon.len(), 2);

        let analyzer = PatternAnalyzer::new(lexicon);
        assert_close(analyzer.sentiment("so shiny").polarity, 0.6);
        assert_close(analyzer.sentiment("mighty shiny").polarity, 0.6 * 1.5);
        assert_eq!(analyzer.sentiment("great").polarity, 0.0);
    }

    #[test]
    fn lexicon_rejects_bad_lines() {
        assert!(matches!(
            PatternLexicon::from_reader(Cursor::new("word\t0.5\n")),
            Err(LexiconError::MissingColumn { line: 1, column: "subjectivity" })
        ));
        assert!(matches!(
            PatternLexicon::from_reader(Cursor::new("ok\t0.1\t0.2\nword\thigh\t0.5\n")),
            Err(LexiconError::InvalidColumn { line: 2, column: "polarity", .. })
        ));
    }

    #[test]
    fn builtin_lexicon_is_the_default() {
        assert_eq!(PatternAnalyzer::default().lexicon().len(), PatternLexicon::builtin().len());
        assert!(!PatternLexicon::builtin().is_empty());
    }
}
