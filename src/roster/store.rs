//! SQLite handle shared by every handler.
//!
//! The schema is embedded in the binary and applied on connect, so a fresh
//! database file is usable without a separate migration step.

use anyhow::{Context, Result};
use sqlx::{
    Connection, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if needed) the database at `dsn` and applies the schema.
    ///
    /// # Errors
    /// Returns an error if the DSN is invalid, the database cannot be opened, or
    /// the schema fails to apply.
    pub async fn connect(dsn: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(dsn)
            .with_context(|| format!("Invalid database DSN: {dsn}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(max_connections.max(1))
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        let store = Self { pool };
        store.apply_schema().await?;

        info!("Database ready");

        Ok(store)
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// The pool holds exactly one connection that never expires, since every
    /// SQLite in-memory connection is its own database.
    ///
    /// # Errors
    /// Returns an error if the connection or schema setup fails.
    pub async fn memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory DSN")?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory database")?;

        let store = Self { pool };
        store.apply_schema().await?;

        Ok(store)
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trips a ping on a pooled connection.
    ///
    /// # Errors
    /// Returns the underlying error if no connection can be acquired or the ping fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    async fn apply_schema(&self) -> Result<()> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire connection for schema setup")?;

        for (index, statement) in split_sql_statements(SCHEMA_SQL).iter().enumerate() {
            sqlx::query(statement)
                .execute(&mut *conn)
                .await
                .with_context(|| format!("Failed to execute schema statement {}", index + 1))?;
        }

        debug!("Schema applied");

        Ok(())
    }
}

/// Splits a schema file into individual statements.
///
/// Assumes statements end with `;` at the end of a line and that `--` only
/// starts whole-line comments.
fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();

    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") {
            continue;
        }
        current.push_str(line);
        current.push('\n');

        if trimmed.ends_with(';') {
            let statement = current.trim();
            if !statement.is_empty() {
                statements.push(statement.to_string());
            }
            current.clear();
        }
    }

    let leftover = current.trim();
    if !leftover.is_empty() {
        statements.push(leftover.to_string());
    }

    statements
}
