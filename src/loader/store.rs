//! Holder of the current snapshot.
//!
//! Readers clone an `Arc` and never see a partially updated snapshot. Each
//! refresh takes a generation ticket; a refresh that finishes after a newer
//! one has already been committed is discarded.

use super::{LoadOutcome, Snapshot, SnapshotSources, SourceNotice, load_snapshot};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug)]
struct Current {
    snapshot: Arc<Snapshot>,
    generation: u64,
}

#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Current>,
    issued: AtomicU64,
}

/// Identifies one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl SnapshotStore {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: RwLock::new(Current {
                snapshot: Arc::new(initial),
                generation: 0,
            }),
            issued: AtomicU64::new(0),
        }
    }

    pub fn current(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard.snapshot)
    }

    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Swap in `snapshot` unless a newer refresh has already landed.
    pub fn commit(&self, ticket: RefreshTicket, snapshot: Snapshot) -> bool {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 <= guard.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = guard.generation,
                "discarding superseded refresh"
            );
            return false;
        }
        guard.snapshot = Arc::new(snapshot);
        guard.generation = ticket.0;
        true
    }

    /// Load from `sources` and commit. The report is returned even when the
    /// result was superseded.
    pub async fn refresh(&self, sources: &SnapshotSources) -> RefreshReport {
        let ticket = self.begin_refresh();
        let outcome = load_snapshot(sources).await;
        let degraded = outcome.is_degraded();
        let LoadOutcome { snapshot, notices } = outcome;
        RefreshReport {
            committed: self.commit(ticket, snapshot),
            degraded,
            notices,
        }
    }
}

/// What one refresh cycle produced.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub notices: Vec<SourceNotice>,
    /// At least one source was unavailable.
    pub degraded: bool,
    /// False when a newer refresh had already landed.
    pub committed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{StaticSource, ATTENDANCE, DEPARTMENTS, EMPLOYEES, LOGS};
    use crate::models::Employee;
    use serde_json::json;

    fn snapshot_with(did: &str) -> Snapshot {
        Snapshot {
            employees: vec![Employee {
                did: did.into(),
                name: None,
                department_id: None,
                position: None,
                status: None,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn superseded_refresh_cannot_overwrite_newer_one() {
        let store = SnapshotStore::default();
        let older = store.begin_refresh();
        let newer = store.begin_refresh();

        assert!(store.commit(newer, snapshot_with("new")));
        assert!(!store.commit(older, snapshot_with("old")));
        assert_eq!(store.current().employees[0].did, "new");
    }

    #[test]
    fn in_order_refreshes_both_land() {
        let store = SnapshotStore::default();
        let first = store.begin_refresh();
        assert!(store.commit(first, snapshot_with("a")));
        let second = store.begin_refresh();
        assert!(store.commit(second, snapshot_with("b")));
        assert_eq!(store.current().employees[0].did, "b");
    }

    #[test]
    fn readers_keep_their_snapshot_across_swaps() {
        let store = SnapshotStore::new(snapshot_with("before"));
        let held = store.current();

        let t = store.begin_refresh();
        store.commit(t, snapshot_with("after"));

        assert_eq!(held.employees[0].did, "before");
        assert_eq!(store.current().employees[0].did, "after");
    }

    #[tokio::test]
    async fn refresh_loads_and_swaps() {
        let store = SnapshotStore::default();
        let sources = SnapshotSources {
            attendance: Box::new(StaticSource::failing(ATTENDANCE)),
            employees: Box::new(StaticSource::new(EMPLOYEES, json!([{ "employee_did": "E1" }]))),
            departments: Box::new(StaticSource::new(DEPARTMENTS, json!([]))),
            logs: Box::new(StaticSource::new(LOGS, json!(null))),
        };

        let report = store.refresh(&sources).await;
        assert_eq!(report.notices.len(), 1);
        assert!(report.degraded);
        assert!(report.committed);
        assert_eq!(store.current().employees.len(), 1);
        assert!(store.current().loaded_at.is_some());
    }
}
