pub mod aggregator;
pub mod category;
pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod scorer;
pub mod terms;
