use {
    tracing::Level,
    tracing_subscriber::{
        prelude::*,
        filter::filter_fn,
    },
    topic_sentiment_core::config::LoggingConfig,
};

const SCORER_TARGET: &str = "topic_sentiment_core::scorer";

pub fn init_logging(config: &LoggingConfig) {
    let level = config.level();
    let builder = tracing_subscriber::FmtSubscriber::builder().with_max_level(level);

    // per-record scorer events are only wanted when tracing everything
    let filter = filter_fn(move |metadata| {
        if metadata.target().starts_with(SCORER_TARGET) {
            level == Level::TRACE || metadata.level() <= &Level::INFO
        } else {
            true
        }
    });

    if config.json() {
        builder.json().finish().with(filter).init();
    } else {
        builder.finish().with(filter).init();
    }
}
