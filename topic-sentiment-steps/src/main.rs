mod data_loading;
mod export;
mod progress;
mod scoring;
mod utils;

use {
    std::{env, process::ExitCode, sync::Arc},
    anyhow::{Context, Result},
    tracing::{info, warn, error},
    topic_sentiment_core::{
        aggregator::{aggregate, StatisticsBundle},
        config::Config,
        report::{render_report, report_file_name, results_file_name, statistics_file_name},
        terms::term_frequencies,
    },
    crate::{
        data_loading::load_records,
        export::{prepare_output_dir, write_report, write_scored_records, write_statistics},
        scoring::{build_analyzers, run_scoring_step},
        utils::init_logging,
    },
};

const FREQUENT_TERMS_LIMIT: usize = 25;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::try_load();
    let logging = config.as_ref().map(|v| v.logging().clone()).unwrap_or_default();
    init_logging(&logging);

    let config = config.unwrap_or_else(|err| {
        warn!("failed to load config, using defaults: {:#}", anyhow::Error::new(err));
        Config::default()
    });

    let topic = env::args().nth(1).unwrap_or_else(|| config.analysis().topic());
    info!("topic sentiment analysis for '{}'", topic);

    match run(&config, &topic).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("analysis of '{}' failed: {:#}", topic, err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, topic: &str) -> Result<()> {
    let records = load_records(&config.input().path())?;

    let analyzers = Arc::new(build_analyzers(config.scoring())?);
    let scored = run_scoring_step(analyzers, records, config.scoring().concurrency()).await?;

    let output_dir = config.output().dir();
    prepare_output_dir(&output_dir)?;
    write_scored_records(&output_dir.join(results_file_name(topic)), &scored)?;

    let stats = aggregate(&scored).context("no record with usable text to analyze")?;
    log_summary(&stats);

    let terms = term_frequencies(scored.iter().map(|v| v.text.as_str()), FREQUENT_TERMS_LIMIT);
    write_report(&output_dir.join(report_file_name(topic)), &render_report(topic, &stats, &terms))?;
    write_statistics(&output_dir.join(statistics_file_name(topic)), &stats)?;

    info!("analysis of '{}' complete, results are in {}", topic, output_dir.display());
    Ok(())
}

fn log_summary(stats: &StatisticsBundle) {
    for column in &stats.describe {
        let summary = &column.summary;
        info!(
            "{}: mean {:.3}, std {}, min {:.3}, median {:.3}, max {:.3}",
            column.metric.column_name(),
            summary.mean,
            summary.std.map(|v| format!("{:.3}", v)).unwrap_or_else(|| "n/a".to_owned()),
            summary.min,
            summary.median,
            summary.max,
        );
    }

    for record in &stats.most_positive {
        info!("most positive: {:.3} r/{} {}", record.combined_compound, record.subreddit, record.id);
    }
    for record in &stats.most_negative {
        info!("most negative: {:.3} r/{} {}", record.combined_compound, record.subreddit, record.id);
    }

    info!(
        "overall sentiment is {} (mean {:.3}), variance is {}",
        stats.sentiment_tenor,
        stats.overall_mean,
        stats.variance_tenor,
    );
}
