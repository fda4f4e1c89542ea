use {
    std::{sync::Arc, collections::VecDeque},
    anyhow::{Context, Result},
    tracing::info,
    topic_sentiment_core::{
        config::ScoringConfig,
        record::{RawRecord, ScoredRecord},
        scorer::{score_record, Analyzers, PatternAnalyzer, PatternLexicon, ValenceAnalyzer, ValenceLexicon},
    },
    crate::progress::Progress,
};

pub fn build_analyzers(config: &ScoringConfig) -> Result<Analyzers> {
    let valence_lexicon = match config.valence_lexicon_path() {
        Some(path) => ValenceLexicon::from_path(&path)
            .with_context(|| format!("failed to load valence lexicon from {}", path.display()))?,
        None => ValenceLexicon::builtin(),
    };
    info!("valence lexicon has {} entries", valence_lexicon.len());

    let pattern_lexicon = match config.pattern_lexicon_path() {
        Some(path) => PatternLexicon::from_path(&path)
            .with_context(|| format!("failed to load pattern lexicon from {}", path.display()))?,
        None => PatternLexicon::builtin(),
    };
    info!("pattern lexicon has {} entries", pattern_lexicon.len());

    Ok(Analyzers::new(ValenceAnalyzer::new(valence_lexicon), PatternAnalyzer::new(pattern_lexicon)))
}

/// Scores records on blocking tasks, at most `concurrency` at a time. Handles are awaited in
/// submission order, so the output keeps the input order. Records without text are left out.
pub async fn run_scoring_step(analyzers: Arc<Analyzers>, records: Vec<RawRecord>, concurrency: usize) -> Result<Vec<ScoredRecord>> {
    let concurrency = concurrency.max(1);
    let total = records.len();

    let mut progress = Progress::new("scoring records".to_owned());
    let mut results = Vec::with_capacity(total);
    let mut join_handles = VecDeque::new();

    for record in records {
        let analyzers = analyzers.clone();
        join_handles.push_back(tokio::task::spawn_blocking(move || score_record(&analyzers, &record)));

        while join_handles.len() >= concurrency {
            if let Some(handle) = join_handles.pop_front() {
                results.push(handle.await.context("scoring task failed")?);
                progress.update();
            }
        }
    }

    while let Some(handle) = join_handles.pop_front() {
        results.push(handle.await.context("scoring task failed")?);
        progress.update();
    }
    progress.finish();

    let scored: Vec<ScoredRecord> = results.into_iter().flatten().collect();
    info!("scored {} of {} records, {} had no text", scored.len(), total, total - scored.len());

    Ok(scored)
}
