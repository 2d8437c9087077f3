//! In-memory registry of crawl job statuses.
//!
//! The registry is the single owner of job state. It is constructed once at
//! startup, shared through [`ServerDeps`](crate::kernel::ServerDeps), and
//! written both by request handlers (create/delete) and by detached crawl
//! tasks (status transitions).
//!
//! Policy:
//! - `create` overwrites an existing id.
//! - `set` is strict: it never re-creates a deleted job, and it only accepts
//!   the next forward step of the lifecycle (see [`JobStatus::can_transition_to`]).
//!
//! Nothing is persisted; contents are lost on restart.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use thiserror::Error;

use super::JobStatus;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobRegistryError {
    #[error("Job '{0}' not found")]
    NotFound(String),

    #[error("Job '{id}' cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: JobStatus,
        to: JobStatus,
    },
}

/// Point-in-time copy of the registry with a per-status summary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobSnapshot {
    pub jobs: BTreeMap<String, JobStatus>,
    pub total_jobs: usize,
    pub status_summary: BTreeMap<JobStatus, usize>,
}

/// Thread-safe job id -> status map.
///
/// The lock is never held across an await point, so it is safe to use from
/// any number of runtime worker threads.
#[derive(Debug, Default)]
pub struct JobRegistry {
    jobs: RwLock<BTreeMap<String, JobStatus>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a job, replacing any existing entry with the same id.
    pub fn create(&self, id: impl Into<String>, status: JobStatus) {
        self.jobs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.into(), status);
    }

    pub fn get(&self, id: &str) -> Result<JobStatus, JobRegistryError> {
        self.jobs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .copied()
            .ok_or_else(|| JobRegistryError::NotFound(id.to_string()))
    }

    /// Move an existing job to `next`.
    ///
    /// Read and write happen under one write lock so concurrent writers
    /// cannot interleave between the check and the update.
    pub fn set(&self, id: &str, next: JobStatus) -> Result<(), JobRegistryError> {
        let mut jobs = self.jobs.write().unwrap_or_else(|e| e.into_inner());
        let current = jobs
            .get_mut(id)
            .ok_or_else(|| JobRegistryError::NotFound(id.to_string()))?;

        if !current.can_transition_to(next) {
            return Err(JobRegistryError::InvalidTransition {
                id: id.to_string(),
                from: *current,
                to: next,
            });
        }

        *current = next;
        Ok(())
    }

    /// Remove a job entirely, returning its last status.
    pub fn delete(&self, id: &str) -> Result<JobStatus, JobRegistryError> {
        self.jobs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id)
            .ok_or_else(|| JobRegistryError::NotFound(id.to_string()))
    }

    /// Copy every job and count them by status.
    ///
    /// The summary is derived from the same copy, so its counts always add up
    /// to `total_jobs`.
    pub fn list(&self) -> JobSnapshot {
        let jobs = self.jobs.read().unwrap_or_else(|e| e.into_inner()).clone();

        let mut status_summary = BTreeMap::new();
        for status in jobs.values() {
            *status_summary.entry(*status).or_insert(0) += 1;
        }

        JobSnapshot {
            total_jobs: jobs.len(),
            jobs,
            status_summary,
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry shared between handlers and crawl tasks.
pub type SharedJobRegistry = Arc<JobRegistry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_unknown_job_is_not_found() {
        let registry = JobRegistry::new();
        assert_eq!(
            registry.get("missing"),
            Err(JobRegistryError::NotFound("missing".into()))
        );
    }

    #[test]
    fn create_overwrites_existing_entry() {
        let registry = JobRegistry::new();
        registry.create("job", JobStatus::Running);
        registry.create("job", JobStatus::Pending);

        assert_eq!(registry.get("job").unwrap(), JobStatus::Pending);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn set_walks_the_lifecycle_forward() {
        let registry = JobRegistry::new();
        registry.create("job", JobStatus::Pending);

        registry.set("job", JobStatus::Running).unwrap();
        registry.set("job", JobStatus::Failed).unwrap();

        assert_eq!(registry.get("job").unwrap(), JobStatus::Failed);
    }

    #[test]
    fn set_rejects_backwards_and_skipped_transitions() {
        let registry = JobRegistry::new();
        registry.create("job", JobStatus::Pending);

        let err = registry.set("job", JobStatus::Completed).unwrap_err();
        assert!(matches!(err, JobRegistryError::InvalidTransition { .. }));

        registry.set("job", JobStatus::Running).unwrap();
        let err = registry.set("job", JobStatus::Pending).unwrap_err();
        assert!(matches!(err, JobRegistryError::InvalidTransition { .. }));
        assert_eq!(registry.get("job").unwrap(), JobStatus::Running);
    }

    #[test]
    fn set_does_not_recreate_deleted_job() {
        let registry = JobRegistry::new();
        registry.create("job", JobStatus::Pending);
        registry.delete("job").unwrap();

        assert_eq!(
            registry.set("job", JobStatus::Running),
            Err(JobRegistryError::NotFound("job".into()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn delete_twice_is_not_found() {
        let registry = JobRegistry::new();
        registry.create("job", JobStatus::Pending);

        assert_eq!(registry.delete("job").unwrap(), JobStatus::Pending);
        assert!(registry.delete("job").is_err());
        assert!(registry.get("job").is_err());
    }

    #[test]
    fn summary_counts_add_up_to_total() {
        let registry = JobRegistry::new();
        registry.create("a", JobStatus::Pending);
        registry.create("b", JobStatus::Pending);
        registry.create("c", JobStatus::Running);
        registry.create("d", JobStatus::Completed);
        registry.create("e", JobStatus::Failed);

        let snapshot = registry.list();
        assert_eq!(snapshot.total_jobs, 5);
        assert_eq!(snapshot.status_summary.values().sum::<usize>(), 5);
        assert_eq!(snapshot.status_summary[&JobStatus::Pending], 2);
        assert_eq!(snapshot.status_summary[&JobStatus::Running], 1);
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let snapshot = JobRegistry::new().list();
        assert_eq!(snapshot.total_jobs, 0);
        assert!(snapshot.jobs.is_empty());
        assert!(snapshot.status_summary.is_empty());
    }

    #[test]
    fn snapshot_serializes_status_keys_lowercase() {
        let registry = JobRegistry::new();
        registry.create("a", JobStatus::Running);

        let json = serde_json::to_value(registry.list()).unwrap();

        assert_eq!(json["jobs"]["a"], "running");
        assert_eq!(json["total_jobs"], 1);
        assert_eq!(json["status_summary"]["running"], 1);
    }

    #[test]
    fn concurrent_writers_do_not_lose_jobs() {
        let registry = Arc::new(JobRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        let id = format!("job-{}-{}", t, i);
                        registry.create(id.clone(), JobStatus::Pending);
                        registry.set(&id, JobStatus::Running).unwrap();
                        registry.set(&id, JobStatus::Completed).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.list();
        assert_eq!(snapshot.total_jobs, 800);
        assert_eq!(snapshot.status_summary[&JobStatus::Completed], 800);
    }
}
