//! Opening persistence: the `OpeningStore` seam and its SQLite implementation.
//! Schema is created on open with `IF NOT EXISTS` DDL, so repeated boots against the same file are safe.

use crate::error::AppError;
use crate::model::{NewOpening, Opening};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

pub const OPENINGS_TABLE: &str = "openings";

const SELECT_COLUMNS: &str =
    "id, role, company, location, salary, link, remote, created_at, updated_at, deleted_at";

/// Record store for openings. Soft-deleted rows are invisible to every method.
#[async_trait]
pub trait OpeningStore: Send + Sync {
    async fn create(&self, new: &NewOpening) -> Result<Opening, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Opening>, AppError>;
    /// Write all mutable fields of `opening`. Returns false when no live row has its id.
    async fn save(&self, opening: &Opening) -> Result<bool, AppError>;
    /// Soft delete. Returns false when no live row has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
    async fn find_all(&self) -> Result<Vec<Opening>, AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SqliteOpeningStore {
    pool: SqlitePool,
}

impl SqliteOpeningStore {
    /// Open (or create) the database file at `path`, creating parent directories, then ensure the schema.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                tracing::info!(dir = %parent.display(), "creating database directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        ensure_schema(&store.pool).await?;
        tracing::info!(path = %path.display(), "opening store ready");
        Ok(store)
    }

    /// Single-connection in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Create the openings table and its index if absent. Idempotent.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            role TEXT NOT NULL,
            company TEXT NOT NULL,
            location TEXT NOT NULL,
            salary REAL NOT NULL CHECK (salary > 0),
            link TEXT NOT NULL,
            remote INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
        OPENINGS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_openings_deleted_at ON {} (deleted_at)",
        OPENINGS_TABLE
    ))
    .execute(pool)
    .await?;
    tracing::debug!(table = OPENINGS_TABLE, "schema ensured");
    Ok(())
}

#[async_trait]
impl OpeningStore for SqliteOpeningStore {
    async fn create(&self, new: &NewOpening) -> Result<Opening, AppError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO {} (role, company, location, salary, link, remote, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            OPENINGS_TABLE, SELECT_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row: Opening = sqlx::query_as(&sql)
            .bind(&new.role)
            .bind(&new.company)
            .bind(&new.location)
            .bind(new.salary)
            .bind(&new.link)
            .bind(new.remote)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Opening>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ? AND deleted_at IS NULL",
            SELECT_COLUMNS, OPENINGS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, opening: &Opening) -> Result<bool, AppError> {
        let sql = format!(
            "UPDATE {} SET role = ?, company = ?, location = ?, salary = ?, link = ?, remote = ?, updated_at = ? \
             WHERE id = ? AND deleted_at IS NULL",
            OPENINGS_TABLE
        );
        tracing::debug!(sql = %sql, id = opening.id, "query");
        let result = sqlx::query(&sql)
            .bind(&opening.role)
            .bind(&opening.company)
            .bind(&opening.location)
            .bind(opening.salary)
            .bind(&opening.link)
            .bind(opening.remote)
            .bind(opening.updated_at)
            .bind(opening.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
            OPENINGS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<Opening>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id",
            SELECT_COLUMNS, OPENINGS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
