use sqlx::Row;

use super::SqliteStore;
use crate::repository::{PendingRecord, PendingSyncRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn map_pending_row(row: &sqlx::sqlite::SqliteRow) -> Result<PendingRecord, StorageError> {
    Ok(PendingRecord {
        resource: row.try_get("resource").map_err(ser)?,
        payload: row.try_get("payload").map_err(ser)?,
        queued_at: row.try_get("queued_at").map_err(ser)?,
    })
}

#[async_trait::async_trait]
impl PendingSyncRepository for SqliteStore {
    async fn enqueue(&self, record: &PendingRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO pending_sync (resource, payload, queued_at)
                VALUES (?1, ?2, ?3)
            ",
        )
        .bind(&record.resource)
        .bind(&record.payload)
        .bind(record.queued_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<PendingRecord>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT resource, payload, queued_at
                FROM pending_sync
                ORDER BY queued_at ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_pending_row(&row)?);
        }
        Ok(out)
    }

    async fn len(&self) -> Result<usize, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM pending_sync")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let n: i64 = row.try_get("n").map_err(ser)?;
        usize::try_from(n).map_err(|_| StorageError::Serialization(format!("invalid count: {n}")))
    }
}
