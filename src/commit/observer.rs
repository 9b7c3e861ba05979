/// Hooks invoked at fixed points of the commit pipeline.
///
/// Observers only narrate. Every method defaults to doing nothing so a test can
/// run the pipeline without any output side channel.
pub trait PipelineObserver {
    fn attempt_started(&self, _attempt: usize, _max_attempts: usize) {}

    fn candidate_received(&self, _attempt: usize, _candidate: &str) {}

    fn shortening_requested(&self, _length: usize, _limit: usize) {}

    fn candidate_rejected(&self, _attempt: usize, _candidate: &str) {}

    fn succeeded(&self, _header: &str) {}

    fn exhausted(&self, _last_candidate: &str) {}
}

/// Observer that narrates progress through the `log` facade (stderr).
pub struct LogObserver {
    pub model: String,
}

impl PipelineObserver for LogObserver {
    fn attempt_started(&self, attempt: usize, max_attempts: usize) {
        log::info!(
            "Asking {} for a Conventional Commit header (attempt {attempt}/{max_attempts})",
            self.model
        );
    }

    fn candidate_received(&self, attempt: usize, candidate: &str) {
        log::debug!("Attempt {attempt} candidate: {candidate}");
    }

    fn shortening_requested(&self, length: usize, limit: usize) {
        log::info!("Candidate summary too long ({length} > {limit} chars), requesting shortening");
    }

    fn candidate_rejected(&self, attempt: usize, candidate: &str) {
        log::warn!("Attempt {attempt} is not a Conventional Commit header: {candidate:?}");
    }

    fn succeeded(&self, header: &str) {
        log::info!("Commit header accepted ({} chars)", header.chars().count());
    }

    fn exhausted(&self, last_candidate: &str) {
        log::error!("No valid Conventional Commit header after all attempts: {last_candidate:?}");
    }
}
