use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool for score storage. None if DATABASE_URL is not set.
    pub db: Option<PgPool>,
    pub observability: Arc<ObservabilityCounters>,
}

#[derive(Debug, Default)]
pub struct ObservabilityCounters {
    score_submissions_accepted_total: AtomicU64,
    score_submissions_rejected_total: AtomicU64,
    score_wins_total: AtomicU64,
    persisted_scores_total: AtomicU64,
    persist_failures_total: AtomicU64,
}

#[derive(Debug, Clone, Copy)]
pub struct ObservabilitySnapshot {
    pub score_submissions_accepted_total: u64,
    pub score_submissions_rejected_total: u64,
    pub score_wins_total: u64,
    pub persisted_scores_total: u64,
    pub persist_failures_total: u64,
}

impl ObservabilityCounters {
    pub fn snapshot(&self) -> ObservabilitySnapshot {
        ObservabilitySnapshot {
            score_submissions_accepted_total: self
                .score_submissions_accepted_total
                .load(Ordering::Relaxed),
            score_submissions_rejected_total: self
                .score_submissions_rejected_total
                .load(Ordering::Relaxed),
            score_wins_total: self.score_wins_total.load(Ordering::Relaxed),
            persisted_scores_total: self.persisted_scores_total.load(Ordering::Relaxed),
            persist_failures_total: self.persist_failures_total.load(Ordering::Relaxed),
        }
    }

    pub fn record_accepted(&self, won: bool) {
        self.score_submissions_accepted_total
            .fetch_add(1, Ordering::Relaxed);
        if won {
            self.score_wins_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_rejected(&self) {
        self.score_submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persisted(&self) {
        self.persisted_scores_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persist_failure(&self) {
        self.persist_failures_total.fetch_add(1, Ordering::Relaxed);
    }
}

impl AppState {
    pub fn new(db: Option<PgPool>) -> Self {
        Self {
            db,
            observability: Arc::new(ObservabilityCounters::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_are_counted_only_for_accepted_wins() {
        let counters = ObservabilityCounters::default();
        counters.record_accepted(true);
        counters.record_accepted(false);
        counters.record_rejected();
        counters.record_persist_failure();

        let snapshot = counters.snapshot();
        assert_eq!(snapshot.score_submissions_accepted_total, 2);
        assert_eq!(snapshot.score_wins_total, 1);
        assert_eq!(snapshot.score_submissions_rejected_total, 1);
        assert_eq!(snapshot.persist_failures_total, 1);
        assert_eq!(snapshot.persisted_scores_total, 0);
    }
}
