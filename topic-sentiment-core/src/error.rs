use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("cannot aggregate an empty set of scored records")]
    EmptyCorpus,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record #{position} is malformed")]
    Malformed {
        position: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon")]
    Io(#[from] std::io::Error),

    #[error("lexicon line {line} has no valence column")]
    MissingValence { line: usize },

    #[error("lexicon line {line} has an invalid valence: {value}")]
    InvalidValence { line: usize, value: String },

    #[error("lexicon line {line} has no {column} column")]
    MissingColumn { line: usize, column: &'static str },

    #[error("lexicon line {line} has an invalid {column}: {value}")]
    InvalidColumn { line: usize, column: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid toml")]
    Toml(#[from] toml::de::Error),
}
