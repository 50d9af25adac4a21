/*!
 * Database connection management.
 *
 * This module handles SQLite database connection creation and schema
 * initialization, and provides scoped access to the underlying connection.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::schema;

/// Default database filename, created in the working directory
pub const DEFAULT_DB_FILENAME: &str = "cameroon_languages.db";

/// Database connection wrapper
#[derive(Clone)]
pub struct DatabaseConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// Connection shared behind a mutex so the wrapper stays cloneable
    connection: Arc<Mutex<Connection>>,
}

impl DatabaseConnection {
    /// Open (or create) the database at the default location
    pub fn new_default() -> Result<Self> {
        Self::new(DEFAULT_DB_FILENAME)
    }

    /// Open (or create) the database at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create database directory: {:?}", parent))?;
            }
        }

        info!("Opening database at: {:?}", db_path);

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        Self::configure(&conn)?;
        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        debug!("Creating in-memory database");

        let conn = Connection::open_in_memory().context("Failed to create in-memory database")?;

        Self::configure(&conn)?;
        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Apply per-connection settings.
    ///
    /// Foreign-key enforcement is off by default in SQLite and must be
    /// enabled on every connection, not once at schema-creation time.
    fn configure(conn: &Connection) -> Result<()> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .context("Failed to enable foreign key enforcement")?;
        Ok(())
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a database operation with the connection
    pub fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .connection
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to acquire database lock: {}", e))?;

        f(&conn)
    }

    /// Begin a transaction and execute operations within it.
    ///
    /// The transaction commits only if the closure returns Ok; on error it
    /// rolls back, so a failed batch leaves no partial rows committed.
    pub fn transaction<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&rusqlite::Transaction) -> Result<T>,
    {
        let mut conn = self
            .connection
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to acquire database lock: {}", e))?;

        let tx = conn.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;

        Ok(result)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DatabaseStats> {
        self.execute(|conn| {
            let language_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM languages", [], |row| row.get(0))
                .unwrap_or(0);

            let category_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
                .unwrap_or(0);

            let translation_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM translations", [], |row| row.get(0))
                .unwrap_or(0);

            // Get file size if not in-memory
            let file_size = if self.db_path.to_string_lossy() != ":memory:" {
                std::fs::metadata(&self.db_path)
                    .map(|m| m.len())
                    .unwrap_or(0)
            } else {
                0
            };

            Ok(DatabaseStats {
                language_count,
                category_count,
                translation_count,
                file_size_bytes: file_size,
            })
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    /// Number of language reference rows
    pub language_count: i64,
    /// Number of category reference rows
    pub category_count: i64,
    /// Number of translation rows
    pub translation_count: i64,
    /// Database file size in bytes
    pub file_size_bytes: u64,
}

impl std::fmt::Display for DatabaseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Languages: {}, Categories: {}, Translations: {}, Size: {} KB",
            self.language_count,
            self.category_count,
            self.translation_count,
            self.file_size_bytes / 1024
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newInMemory_shouldCreateValidConnection() {
        let db = DatabaseConnection::new_in_memory().expect("Failed to create in-memory DB");
        assert_eq!(db.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_execute_shouldRunOperation() {
        let db = DatabaseConnection::new_in_memory().expect("Failed to create DB");

        let result = db.execute(|conn| {
            let count: i64 = conn.query_row("SELECT 1 + 1", [], |row| row.get(0))?;
            Ok(count)
        });

        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    fn test_foreignKeys_onFreshConnection_shouldBeEnabled() {
        let db = DatabaseConnection::new_in_memory().expect("Failed to create DB");

        let enabled: i64 = db
            .execute(|conn| {
                Ok(conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?)
            })
            .unwrap();

        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_transaction_shouldCommitOnSuccess() {
        let db = DatabaseConnection::new_in_memory().expect("Failed to create DB");

        db.transaction(|tx| {
            tx.execute(
                "INSERT INTO languages (language_id, language_name) VALUES ('TST', 'Testish')",
                [],
            )?;
            Ok(())
        })
        .expect("Transaction failed");

        let count: i64 = db
            .execute(|conn| {
                Ok(conn.query_row(
                    "SELECT COUNT(*) FROM languages WHERE language_id = 'TST'",
                    [],
                    |row| row.get(0),
                )?)
            })
            .unwrap();

        assert_eq!(count, 1);
    }

    #[test]
    fn test_transaction_shouldRollBackOnError() {
        let db = DatabaseConnection::new_in_memory().expect("Failed to create DB");

        let result: Result<()> = db.transaction(|tx| {
            tx.execute(
                "INSERT INTO languages (language_id, language_name) VALUES ('TST', 'Testish')",
                [],
            )?;
            Err(anyhow::anyhow!("forced failure"))
        });
        assert!(result.is_err());

        let count: i64 = db
            .execute(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM languages", [], |row| row.get(0))?)
            })
            .unwrap();

        assert_eq!(count, 0);
    }

    #[test]
    fn test_stats_onEmptyDatabase_shouldReturnZeroCounts() {
        let db = DatabaseConnection::new_in_memory().expect("Failed to create DB");

        let stats = db.stats().expect("Failed to get stats");

        assert_eq!(stats.language_count, 0);
        assert_eq!(stats.category_count, 0);
        assert_eq!(stats.translation_count, 0);
    }
}
