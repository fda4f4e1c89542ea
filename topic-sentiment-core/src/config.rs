use {
    std::{fs::read_to_string, str::FromStr, path::PathBuf},
    tracing::Level,
    serde::Deserialize,
    crate::error::ConfigError,
};

const DEFAULT_TOPIC: &str = "rust";
const DEFAULT_INPUT_PATH: &str = "./data/records.jsonl";
const DEFAULT_OUTPUT_DIR: &str = "./output";
const DEFAULT_SCORING_CONCURRENCY: usize = 256;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    analysis: Option<AnalysisConfig>,
    input: Option<InputConfig>,
    output: Option<OutputConfig>,
    #[serde(default)]
    scoring: ScoringConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AnalysisConfig {
    topic: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InputConfig {
    path: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputConfig {
    dir: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ScoringConfig {
    concurrency: Option<usize>,
    valence_lexicon_path: Option<String>,
    pattern_lexicon_path: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoggingConfig {
    level: Option<String>,
    #[serde(default)]
    json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: None,
            input: None,
            output: None,
            scoring: ScoringConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            topic: None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            concurrency: None,
            valence_lexicon_path: None,
            pattern_lexicon_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            json: false,
        }
    }
}

impl Config {
    /// Reads `./config.toml`, then `/config/config.toml`. The error is returned rather than
    /// logged so the caller can report it once logging is up and carry on with defaults.
    pub fn try_load() -> Result<Self, ConfigError> {
        let content = read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn analysis(&self) -> AnalysisConfig {
        self.analysis.as_ref().cloned().unwrap_or_default()
    }

    pub fn input(&self) -> InputConfig {
        self.input.as_ref().cloned().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.as_ref().cloned().unwrap_or_default()
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

impl AnalysisConfig {
    pub fn topic(&self) -> String {
        self.topic.as_ref().cloned().unwrap_or(DEFAULT_TOPIC.to_owned())
    }
}

impl InputConfig {
    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_INPUT_PATH))
    }
}

impl OutputConfig {
    pub fn dir(&self) -> PathBuf {
        PathBuf::from(self.dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }
}

impl ScoringConfig {
    /// Upper bound on records being scored at the same time. Never zero.
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(DEFAULT_SCORING_CONCURRENCY).max(1)
    }

    pub fn valence_lexicon_path(&self) -> Option<PathBuf> {
        self.valence_lexicon_path.as_ref().map(PathBuf::from)
    }

    pub fn pattern_lexicon_path(&self) -> Option<PathBuf> {
        self.pattern_lexicon_path.as_ref().map(PathBuf::from)
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Level {
        self.level.as_deref()
            .and_then(|v| Level::from_str(v).ok())
            .unwrap_or(Level::INFO)
    }

    pub fn json(&self) -> bool {
        self.json
    }
}
