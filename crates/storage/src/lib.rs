#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    PendingRecord, PendingSyncRepository, ProgressRepository, Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteStore};
