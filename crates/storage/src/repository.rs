use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use study_core::model::ProgressState;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Record queued for later write-back to the remote store.
///
/// `resource` names the remote collection the payload belongs to; the
/// payload itself is kept opaque so the queue survives schema drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    pub resource: String,
    pub payload: String,
    pub queued_at: DateTime<Utc>,
}

/// Repository contract for the single durable progress record.
///
/// The record is replaced wholesale on every save; readers treat corrupt
/// or missing data as absence, never as a fatal error.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load the persisted state, `None` when absent or unreadable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the medium itself cannot be read;
    /// a present-but-corrupt record maps to `Ok(None)`.
    async fn load(&self) -> Result<Option<ProgressState>, StorageError>;

    /// Replace the persisted state with `state`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    async fn save(&self, state: &ProgressState) -> Result<(), StorageError>;
}

/// Repository contract for the pending-sync queue.
///
/// Only queuing is in scope here; draining/retry belongs to a future sync
/// worker.
#[async_trait]
pub trait PendingSyncRepository: Send + Sync {
    /// Append a record to the queue.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be appended.
    async fn enqueue(&self, record: &PendingRecord) -> Result<(), StorageError>;

    /// All queued records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the queue cannot be read.
    async fn list(&self) -> Result<Vec<PendingRecord>, StorageError>;

    /// Number of queued records.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the queue cannot be read.
    async fn len(&self) -> Result<usize, StorageError>;
}

/// In-memory store implementing both repositories, for tests and
/// prototyping. The `fail_writes` toggle lets tests exercise the
/// best-effort persistence paths.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    progress: Arc<Mutex<Option<ProgressState>>>,
    pending: Arc<Mutex<Vec<PendingRecord>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with `StorageError::Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryStore {
    async fn load(&self) -> Result<Option<ProgressState>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, state: &ProgressState) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(state.clone());
        Ok(())
    }
}

#[async_trait]
impl PendingSyncRepository for InMemoryStore {
    async fn enqueue(&self, record: &PendingRecord) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut guard = self
            .pending
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<PendingRecord>, StorageError> {
        let guard = self
            .pending
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn len(&self) -> Result<usize, StorageError> {
        let guard = self
            .pending
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.len())
    }
}

/// Aggregates the repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub pending: Arc<dyn PendingSyncRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(store.clone());
        let pending: Arc<dyn PendingSyncRepository> = Arc::new(store);
        Self { progress, pending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{StatKey, SubjectKey};
    use study_core::time::fixed_now;

    #[tokio::test]
    async fn progress_round_trips_in_memory() {
        let store = InMemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let mut state = ProgressState::default();
        state.increment_stat(StatKey::QuestionsAnswered, 10);
        state.set_subject_progress(SubjectKey::Portugues, 40);
        store.save(&state).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn save_replaces_the_whole_record() {
        let store = InMemoryStore::new();
        let mut first = ProgressState::default();
        first.set_subject_progress(SubjectKey::Logica, 10);
        store.save(&first).await.unwrap();

        let second = ProgressState::default();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.subject_progress(SubjectKey::Logica), 0);
    }

    #[tokio::test]
    async fn failed_writes_surface_as_unavailable() {
        let store = InMemoryStore::new();
        store.set_fail_writes(true);
        let err = store.save(&ProgressState::default()).await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
    }

    #[tokio::test]
    async fn pending_queue_preserves_order() {
        let store = InMemoryStore::new();
        for i in 0..3 {
            store
                .enqueue(&PendingRecord {
                    resource: "tests".into(),
                    payload: format!("{{\"n\":{i}}}"),
                    queued_at: fixed_now(),
                })
                .await
                .unwrap();
        }

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(store.len().await.unwrap(), 3);
        assert_eq!(records[0].payload, "{\"n\":0}");
        assert_eq!(records[2].payload, "{\"n\":2}");
    }
}
