//! Rule-based valence scoring tuned for short social-media text.
//!
//! Every word found in the lexicon contributes its valence, adjusted by the words around it
//! (boosters, negations, "but" contrast, capitalization) and by trailing punctuation. The sum
//! is squashed into `[-1, 1]` as the compound score; the neg/neu/pos proportions describe how
//! much of the text leaned each way.

use {
    std::{collections::HashMap, fs::File, io::{BufRead, BufReader}, path::Path},
    serde::{Serialize, Deserialize},
    crate::error::LexiconError,
    super::valence_lexicon::{BUILTIN_VALENCES, BOOSTERS, NEGATIONS},
};

const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

pub struct ValenceLexicon {
    valences: HashMap<String, f64>,
}

pub struct ValenceAnalyzer {
    lexicon: ValenceLexicon,
    boosters: HashMap<&'static str, f64>,
}

impl ValenceLexicon {
    pub fn builtin() -> Self {
        Self {
            valences: BUILTIN_VALENCES.iter().map(|(word, valence)| (word.to_string(), *valence)).collect(),
        }
    }

    /// Reads a tab separated lexicon: `token<TAB>mean valence[<TAB>anything else]`.
    /// Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut valences = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default().trim();
            let value = columns.next().ok_or(LexiconError::MissingValence { line: index + 1 })?.trim();
            let valence = value.parse::<f64>().map_err(|_| LexiconError::InvalidValence {
                line: index + 1,
                value: value.to_owned(),
            })?;

            valences.insert(token.to_lowercase(), valence);
        }

        Ok(Self {
            valences,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for ValenceAnalyzer {
    fn default() -> Self {
        Self::new(ValenceLexicon::builtin())
    }
}

impl ValenceAnalyzer {
    pub fn new(lexicon: ValenceLexicon) -> Self {
        Self {
            lexicon,
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    pub fn lexicon(&self) -> &ValenceLexicon {
        &self.lexicon
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words = tokenize(text);
        let lowered: Vec<String> = words.iter().map(|v| v.to_lowercase()).collect();
        let is_cap_diff = has_cap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for (i, word) in lowered.iter().enumerate() {
            let skip = self.boosters.contains_key(word.as_str())
                || (word == "kind" && lowered.get(i + 1).map(|v| v == "of").unwrap_or(false));

            if skip {
                sentiments.push(0.0);
            } else {
                sentiments.push(self.word_valence(&words, &lowered, i, is_cap_diff));
            }
        }

        apply_but_contrast(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn word_valence(&self, words: &[&str], lowered: &[String], i: usize, is_cap_diff: bool) -> f64 {
        let word = lowered[i].as_str();
        let Some(base) = self.lexicon.valence(word) else {
            return 0.0;
        };

        let mut valence = base;

        // "no" directly in front of another rated word acts as a negation, not as a sentiment
        if word == "no" && lowered.get(i + 1).map(|v| self.lexicon.contains(v)).unwrap_or(false) {
            valence = 0.0;
        }

        let preceded_by_no = (i > 0 && lowered[i - 1] == "no")
            || (i > 1 && lowered[i - 2] == "no")
            || (i > 2 && lowered[i - 3] == "no" && (lowered[i - 1] == "or" || lowered[i - 1] == "nor"));
        if preceded_by_no {
            valence = base * NEGATION_SCALAR;
        }

        if is_cap_diff && is_upper(words[i]) {
            valence += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
        }

        for start in 0..3 {
            if i <= start {
                break;
            }

            let preceding = &lowered[i - (start + 1)];
            if self.lexicon.contains(preceding) {
                continue;
            }

            let mut scalar = self.booster_scalar(words[i - (start + 1)], preceding, valence, is_cap_diff);
            if start == 1 {
                scalar *= 0.95;
            } else if start == 2 {
                scalar *= 0.9;
            }

            valence += scalar;
            valence = negation_check(valence, lowered, start, i);
        }

        least_check(valence, lowered, i, &self.lexicon)
    }

    fn booster_scalar(&self, word: &str, lowered: &str, valence: f64, is_cap_diff: bool) -> f64 {
        let Some(mut scalar) = self.boosters.get(lowered).copied() else {
            return 0.0;
        };

        if valence < 0.0 {
            scalar = -scalar;
        }

        if is_cap_diff && is_upper(word) {
            scalar += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
        }

        scalar
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| PUNCTUATION.contains(c));
            // short tokens keep their punctuation so emoticons survive
            if stripped.chars().count() <= 2 { token } else { stripped }
        })
        .collect()
}

fn is_upper(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic()) && !word.chars().any(|c| c.is_lowercase())
}

/// Capitalization only counts as emphasis when some words are shouted and others are not.
fn has_cap_differential(words: &[&str]) -> bool {
    let shouted = words.iter().filter(|v| is_upper(v)).count();
    shouted > 0 && shouted < words.len()
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

fn negation_check(valence: f64, lowered: &[String], start: usize, i: usize) -> f64 {
    let word_at = |offset: usize| lowered[i - offset].as_str();

    match start {
        0 => {
            if is_negation(word_at(1)) {
                return valence * NEGATION_SCALAR;
            }
        },
        1 => {
            if word_at(2) == "never" && (word_at(1) == "so" || word_at(1) == "this") {
                return valence * 1.25;
            }
            if word_at(2) == "without" && word_at(1) == "doubt" {
                return valence;
            }
            if is_negation(word_at(2)) {
                return valence * NEGATION_SCALAR;
            }
        },
        _ => {
            if word_at(3) == "never"
                && (word_at(2) == "so" || word_at(2) == "this" || word_at(1) == "so" || word_at(1) == "this") {
                return valence * 1.25;
            }
            if word_at(3) == "without" && (word_at(2) == "doubt" || word_at(1) == "doubt") {
                return valence;
            }
            if is_negation(word_at(3)) {
                return valence * NEGATION_SCALAR;
            }
        },
    }

    valence
}

fn least_check(valence: f64, lowered: &[String], i: usize, lexicon: &ValenceLexicon) -> f64 {
    if i == 0 || lowered[i - 1] != "least" || lexicon.contains(&lowered[i - 1]) {
        return valence;
    }

    // "at least good" and "very least" are not negations
    if i > 1 && (lowered[i - 2] == "at" || lowered[i - 2] == "very") {
        valence
    } else {
        valence * NEGATION_SCALAR
    }
}

/// Sentiment after "but" dominates: halve what came before, amplify what comes after.
fn apply_but_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lowered.iter().position(|v| v == "but") else {
        return;
    };

    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but_index {
            *sentiment *= 0.5;
        } else if index > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = if questions > 3 {
        MAX_QUESTION_EMPHASIS
    } else if questions > 1 {
        questions as f64 * QUESTION_INCREMENT
    } else {
        0.0
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    // rated words count one more than their valence so neutral words do not drown them out
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for sentiment in sentiments {
        if *sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if *sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;

    PolarityScores {
        neg: round_to(neg_sum.abs() / total, 3),
        neu: round_to(neu_count / total, 3),
        pos: round_to(pos_sum.abs() / total, 3),
        compound: round_to(compound, 4),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
