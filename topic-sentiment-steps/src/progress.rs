// logs instead of drawing a bar, so progress still shows up when stdout is not a terminal
use {
    std::time::{Duration, Instant},
    tracing::info,
};

const REPORT_INTERVAL: Duration = Duration::from_secs(10);

pub struct Progress {
    message: String,
    started_at: Instant,
    reported_at: Instant,
    total_processed: u64,
}

impl Progress {
    pub fn new(message: String) -> Self {
        Self {
            message,
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    /// Counts one processed item. Returns true when a progress line was logged.
    pub fn update(&mut self) -> bool {
        self.total_processed += 1;

        let now = Instant::now();
        if now - self.reported_at >= REPORT_INTERVAL {
            self.reported_at = now;
            info!("{}: {} total ({:.2}/second)", self.message, self.total_processed, self.rate(now));
            true
        } else {
            false
        }
    }

    pub fn finish(&self) {
        let now = Instant::now();
        info!(
            "{}: done, {} total in {:.1}s ({:.2}/second)",
            self.message,
            self.total_processed,
            (now - self.started_at).as_secs_f32(),
            self.rate(now),
        );
    }

    fn rate(&self, now: Instant) -> f32 {
        let elapsed = (now - self.started_at).as_secs_f32();
        if elapsed > 0.0 {
            self.total_processed as f32 / elapsed
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_without_reporting_early() {
        let mut progress = Progress::new("testing".to_owned());

        assert!(!progress.update());
        assert!(!progress.update());
        assert_eq!(progress.total_processed, 2);
    }
}
