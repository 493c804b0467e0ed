//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{DomainError, DomainResult};

pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: SharedConnection,
}

impl DbState {
    /// Shared handle to the connection
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }
}

/// Open (or create) the database at `db_path` and run migrations.
///
/// `:memory:` opens a private in-memory database.
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(DomainError::internal)?;

    run_migrations(&conn)?;
    info!(path = %db_path.display(), "Database ready");

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(names) = stmt.query_map([], |row| row.get::<_, String>(1)) else {
        return false;
    };
    let found = names.flatten().any(|name| name == column);
    found
}

fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS pets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            level INTEGER NOT NULL DEFAULT 1,
            fullness INTEGER NOT NULL DEFAULT 100,
            happiness INTEGER NOT NULL DEFAULT 100,
            energy INTEGER NOT NULL DEFAULT 100,
            last_tick_at INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_pets_user ON pets(user_id);",
    )
    .map_err(DomainError::internal)?;

    // Creation timestamps came later; older files lack them
    if !column_exists(conn, "users", "created_at") {
        conn.execute("ALTER TABLE users ADD COLUMN created_at INTEGER", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add users.created_at: {}", e)))?;
    }

    if !column_exists(conn, "pets", "created_at") {
        conn.execute("ALTER TABLE pets ADD COLUMN created_at INTEGER NOT NULL DEFAULT 0", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add pets.created_at: {}", e)))?;
    }

    Ok(())
}
