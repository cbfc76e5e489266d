use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tokio::sync::RwLock;
use tracing::debug;

/// A keyed set of durable slots, each holding one opaque serialized value.
///
/// Writes are last-write-wins; there is no versioning or locking across
/// processes sharing the same backing store.
#[async_trait]
pub trait SlotStore: Send + Sync {
    async fn get_slot(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn put_slot(&self, key: &str, value: &[u8]) -> Result<()>;
    /// Returns whether a value was present.
    async fn remove_slot(&self, key: &str) -> Result<bool>;
}

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await
            .with_context(|| format!("failed to open slot database '{database_url}'"))?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    pub async fn slot_updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let row = sqlx::query("SELECT updated_at FROM slots WHERE slot_key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to read timestamp of slot '{key}'"))?;
        row.map(|r| r.try_get::<DateTime<Utc>, _>(0))
            .transpose()
            .map_err(Into::into)
    }
}

#[async_trait]
impl SlotStore for Storage {
    async fn get_slot(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let row = sqlx::query("SELECT value FROM slots WHERE slot_key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to read slot '{key}'"))?;
        Ok(row.map(|r| r.get::<Vec<u8>, _>(0)))
    }

    async fn put_slot(&self, key: &str, value: &[u8]) -> Result<()> {
        sqlx::query(
            "INSERT INTO slots (slot_key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(slot_key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to write slot '{key}'"))?;
        debug!(slot = key, bytes = value.len(), "slot written");
        Ok(())
    }

    async fn remove_slot(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM slots WHERE slot_key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to remove slot '{key}'"))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Process-local slots, lost when dropped.
#[derive(Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn get_slot(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn put_slot(&self, key: &str, value: &[u8]) -> Result<()> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn remove_slot(&self, key: &str) -> Result<bool> {
        Ok(self.slots.write().await.remove(key).is_some())
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url == "sqlite::memory:" || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
