use anyhow::Context;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgRow},
    FromRow, PgPool,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::config::DatabaseConfig;

/// Failure surfaced by the gateway. The underlying cause is logged, never carried.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database operation failed")]
    OperationFailed,
    #[error("statement returned no rows")]
    NoRows,
}

/// Positional parameter bound to `$1`, `$2`, ... in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(Option<i32>),
    Text(Option<String>),
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Int(Some(v))
    }
}

impl From<Option<i32>> for Param {
    fn from(v: Option<i32>) -> Self {
        Param::Int(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(Some(v.to_owned()))
    }
}

impl From<Option<String>> for Param {
    fn from(v: Option<String>) -> Self {
        Param::Text(v)
    }
}

/// Handle over the shared connection pool. Cloning shares the pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .context("connect to database")?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a statement and decode every returned row as `T`.
    pub async fn query<T>(&self, sql: &str, params: Vec<Param>) -> Result<Vec<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<_, T>(sql);
        for param in params {
            query = match param {
                Param::Int(v) => query.bind(v),
                Param::Text(v) => query.bind(v),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| operation_failed(sql, e))?;
        debug!(rows = rows.len(), "query ok");
        Ok(rows)
    }

    /// Like [`Database::query`] but expects at least one row back, e.g. from `RETURNING`.
    pub async fn query_one<T>(&self, sql: &str, params: Vec<Param>) -> Result<T, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.query(sql, params)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                error!(sql, "statement returned no rows");
                DbError::NoRows
            })
    }

    /// Run a statement that returns nothing; yields the affected row count.
    pub async fn execute(&self, sql: &str, params: Vec<Param>) -> Result<u64, DbError> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = match param {
                Param::Int(v) => query.bind(v),
                Param::Text(v) => query.bind(v),
            };
        }

        let done = query
            .execute(&self.pool)
            .await
            .map_err(|e| operation_failed(sql, e))?;
        debug!(rows_affected = done.rows_affected(), "execute ok");
        Ok(done.rows_affected())
    }
}

fn operation_failed(sql: &str, e: sqlx::Error) -> DbError {
    error!(error = %e, cause = ?e, sql, "database error");
    DbError::OperationFailed
}
