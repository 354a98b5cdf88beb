use chrono::Utc;
use sqlx::Row;

use study_core::model::ProgressState;

use super::SqliteStore;
use crate::repository::{ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteStore {
    async fn load(&self) -> Result<Option<ProgressState>, StorageError> {
        let row = sqlx::query("SELECT data FROM progress_state WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let data: String = row
            .try_get("data")
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // A record that no longer parses is treated as absent, not fatal;
        // the caller falls back to a default state.
        match serde_json::from_str(&data) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                tracing::warn!(error = %e, "progress record unreadable, treating as absent");
                Ok(None)
            }
        }
    }

    async fn save(&self, state: &ProgressState) -> Result<(), StorageError> {
        let data = serde_json::to_string(state)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        sqlx::query(
            r"
                INSERT INTO progress_state (id, data, updated_at)
                VALUES (1, ?1, ?2)
                ON CONFLICT(id) DO UPDATE SET
                    data = excluded.data,
                    updated_at = excluded.updated_at
            ",
        )
        .bind(data)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }
}
