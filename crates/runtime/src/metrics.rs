use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

/// Counters for generator activity. Cloning shares the same counters.
#[derive(Clone, Default)]
pub struct MetricsRegistry {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    machines_created: AtomicU64,
    unknown_kinds: AtomicU64,
    status_rejections: AtomicU64,
    readings_generated: AtomicU64,
}

impl MetricsRegistry {
    pub fn inc_machines_created(&self, delta: u64) {
        self.inner.machines_created.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_unknown_kinds(&self, delta: u64) {
        self.inner.unknown_kinds.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_status_rejections(&self, delta: u64) {
        self.inner.status_rejections.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_readings_generated(&self, delta: u64) {
        self.inner.readings_generated.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            machines_created: self.inner.machines_created.load(Ordering::Relaxed),
            unknown_kinds: self.inner.unknown_kinds.load(Ordering::Relaxed),
            status_rejections: self.inner.status_rejections.load(Ordering::Relaxed),
            readings_generated: self.inner.readings_generated.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub machines_created: u64,
    pub unknown_kinds: u64,
    pub status_rejections: u64,
    pub readings_generated: u64,
}

impl MetricsSnapshot {
    pub fn diagnostics(&self) -> u64 {
        self.unknown_kinds + self.status_rejections
    }

    pub fn to_json_line(&self, label: &str) -> String {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            label: &'a str,
            #[serde(flatten)]
            counters: &'a MetricsSnapshot,
        }

        let payload = Snapshot {
            label,
            counters: self,
        };
        serde_json::to_string(&payload).unwrap_or_else(|_| String::from("{}"))
    }
}
