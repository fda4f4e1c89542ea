use {
    std::collections::HashMap,
    serde::Serialize,
};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
}

const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "http", "https", "if", "in", "into", "is",
    "it", "its", "itself", "just", "let", "like", "me", "more", "most", "my", "myself", "no", "nor",
    "not", "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "same", "shall", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "with", "would", "www", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Most frequent words over all texts, the input of the word cloud.
///
/// Words are lowercased runs of letters (an apostrophe is kept inside a word, a trailing `'s` is
/// dropped). Stop words and single letters are skipped. Ties are ordered alphabetically.
pub fn term_frequencies<'a, I>(texts: I, limit: usize) -> Vec<TermFrequency> where I: IntoIterator<Item = &'a str> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for text in texts {
        for word in words(text) {
            if word.chars().count() < 2 || STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut terms: Vec<TermFrequency> = counts.into_iter()
        .map(|(term, count)| TermFrequency { term, count })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    terms.truncate(limit);
    terms
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphabetic() || c == '\''))
        .map(|word| {
            let word = word.trim_matches('\'').to_lowercase();
            match word.strip_suffix("'s") {
                Some(stem) => stem.to_owned(),
                None => word,
            }
        })
        .filter(|word| !word.is_empty())
}
