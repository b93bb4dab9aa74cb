//! SQLite adapter: one file-backed connection for the life of the process, parameterized
//! `execute` / `query_one` / `query_all`, and bootstrap DDL for the `productos` table.

use crate::error::StoreError;
use crate::sql::BindValue;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::FromRow;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Metadata returned by a mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecOutcome {
    pub rows_affected: u64,
    pub inserted_id: i64,
}

/// Handle to the database. Cheap to clone; every clone shares the single connection.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the SQLite file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
        let pool = Self::single_connection()
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), "connected to SQLite");
        Ok(Store { pool })
    }

    /// Private in-memory database; lives as long as the store.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = Self::single_connection()
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Open {
                path: ":memory:".into(),
                source,
            })?;
        Ok(Store { pool })
    }

    fn single_connection() -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    }

    /// Create the `productos` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS productos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                descripcion TEXT,
                precio REAL NOT NULL,
                stock INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Run a mutation and report rows affected and the last inserted row id.
    pub async fn execute(&self, sql: &str, params: &[BindValue]) -> Result<ExecOutcome, StoreError> {
        tracing::debug!(sql = %sql, params = ?params, "execute");
        let mut query = sqlx::query(sql);
        for p in params {
            query = query.bind(p.clone());
        }
        let result = query.execute(&self.pool).await?;
        Ok(ExecOutcome {
            rows_affected: result.rows_affected(),
            inserted_id: result.last_insert_rowid(),
        })
    }

    pub async fn query_one<T>(&self, sql: &str, params: &[BindValue]) -> Result<Option<T>, StoreError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_as::<_, T>(sql);
        for p in params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }

    pub async fn query_all<T>(&self, sql: &str, params: &[BindValue]) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_as::<_, T>(sql);
        for p in params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Cheap liveness check for readiness probes.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, sqlx::FromRow, PartialEq)]
    struct NameRow {
        id: i64,
        nombre: String,
    }

    async fn store() -> Store {
        let store = Store::open_in_memory().await.unwrap();
        store.ensure_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn execute_reports_inserted_id_and_rows_affected() {
        let store = store().await;
        let first = store
            .execute(
                "INSERT INTO productos (nombre, precio) VALUES (?, ?)",
                &["Teclado".into(), 10.0_f64.into()],
            )
            .await
            .unwrap();
        let second = store
            .execute(
                "INSERT INTO productos (nombre, precio) VALUES (?, ?)",
                &["Monitor".into(), 99.0_f64.into()],
            )
            .await
            .unwrap();
        assert_eq!(first.rows_affected, 1);
        assert_eq!(second.inserted_id, first.inserted_id + 1);

        let none = store
            .execute("DELETE FROM productos WHERE id = ?", &[BindValue::I64(999)])
            .await
            .unwrap();
        assert_eq!(none.rows_affected, 0);
    }

    #[tokio::test]
    async fn query_one_returns_none_when_absent() {
        let store = store().await;
        let row: Option<NameRow> = store
            .query_one("SELECT id, nombre FROM productos WHERE id = ?", &[1_i64.into()])
            .await
            .unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn query_all_on_empty_table_is_empty() {
        let store = store().await;
        let rows: Vec<NameRow> = store.query_all("SELECT id, nombre FROM productos", &[]).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn values_are_bound_not_interpolated() {
        let store = store().await;
        let name = "x'); DROP TABLE productos; --";
        let out = store
            .execute(
                "INSERT INTO productos (nombre, precio) VALUES (?, ?)",
                &[name.into(), 1.0_f64.into()],
            )
            .await
            .unwrap();
        let row: Option<NameRow> = store
            .query_one("SELECT id, nombre FROM productos WHERE id = ?", &[out.inserted_id.into()])
            .await
            .unwrap();
        assert_eq!(
            row,
            Some(NameRow {
                id: out.inserted_id,
                nombre: name.to_string(),
            })
        );
    }

    #[tokio::test]
    async fn constraint_violation_is_a_query_error() {
        let store = store().await;
        let err = store
            .execute("INSERT INTO productos (nombre, precio) VALUES (?, ?)", &[BindValue::Null, 1.0_f64.into()])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
        assert!(err.to_string().contains("NOT NULL"));
    }

    #[tokio::test]
    async fn ping_fails_after_close() {
        let store = store().await;
        store.ping().await.unwrap();
        store.close().await;
        assert!(store.ping().await.is_err());
    }
}
