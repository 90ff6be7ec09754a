use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub books_created: Arc<AtomicU64>,
    pub members_created: Arc<AtomicU64>,
    pub loans_issued: Arc<AtomicU64>,
    pub loans_returned: Arc<AtomicU64>,
    pub records_deleted: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            books_created: Arc::new(AtomicU64::new(0)),
            members_created: Arc::new(AtomicU64::new(0)),
            loans_issued: Arc::new(AtomicU64::new(0)),
            loans_returned: Arc::new(AtomicU64::new(0)),
            records_deleted: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_books_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_members_created(&self) {
        self.members_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_loans_issued(&self) {
        self.loans_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_loans_returned(&self) {
        self.loans_returned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_deleted(&self, count: u64) {
        self.records_deleted.fetch_add(count, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            books_created: self.books_created.load(Ordering::Relaxed),
            members_created: self.members_created.load(Ordering::Relaxed),
            loans_issued: self.loans_issued.load(Ordering::Relaxed),
            loans_returned: self.loans_returned.load(Ordering::Relaxed),
            records_deleted: self.records_deleted.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub books_created: u64,
    pub members_created: u64,
    pub loans_issued: u64,
    pub loans_returned: u64,
    pub records_deleted: u64,
    pub uptime_seconds: u64,
}
