use {
    std::{fs, path::Path},
    anyhow::{Context, Result},
    tracing::info,
    topic_sentiment_core::{
        aggregator::StatisticsBundle,
        record::ScoredRecord,
    },
};

pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// One csv row per scored record, header included.
pub fn write_scored_records(path: &Path, records: &[ScoredRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("saved {} scored records to {}", records.len(), path.display());
    Ok(())
}

pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).with_context(|| format!("failed to write report to {}", path.display()))?;
    info!("saved report to {}", path.display());
    Ok(())
}

pub fn write_statistics(path: &Path, stats: &StatisticsBundle) -> Result<()> {
    let payload = serde_json::to_vec_pretty(stats)?;
    fs::write(path, payload).with_context(|| format!("failed to write statistics to {}", path.display()))?;
    info!("saved statistics to {}", path.display());
    Ok(())
}
