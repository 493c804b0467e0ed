//! User Repository
//!
//! SQLite storage for accounts. Usernames and emails are unique and stored
//! normalized; lookups normalize their input the same way.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{normalize_identifier, DomainError, DomainResult, User};

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

pub struct UserRepository {
    conn: SharedConnection,
}

impl UserRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    async fn find_one(&self, column: &str, value: &str) -> DomainResult<Option<User>> {
        let guard = self.conn.lock().await;
        let sql = format!("SELECT {} FROM users WHERE {} = ?1", USER_COLUMNS, column);
        guard
            .query_row(&sql, params![value], Self::row_to_user)
            .optional()
            .map_err(DomainError::internal)
    }

    /// Look up by username (normalized before the query)
    pub async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        match normalize_identifier(username) {
            Some(username) => self.find_one("username", &username).await,
            None => Ok(None),
        }
    }

    /// Look up by email (normalized before the query)
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        match normalize_identifier(email) {
            Some(email) => self.find_one("email", &email).await,
            None => Ok(None),
        }
    }
}

/// Turn a UNIQUE violation into the matching `Conflict`
fn map_write_error(err: rusqlite::Error) -> DomainError {
    if let rusqlite::Error::SqliteFailure(code, Some(msg)) = &err {
        if code.code == rusqlite::ErrorCode::ConstraintViolation {
            if msg.contains("users.username") {
                return DomainError::Conflict("Username already taken".into());
            }
            if msg.contains("users.email") {
                return DomainError::Conflict("Email already registered".into());
            }
        }
    }
    DomainError::Internal(err.to_string())
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn create(&self, user: &User) -> DomainResult<User> {
        let username = normalize_identifier(&user.username)
            .ok_or_else(|| DomainError::InvalidInput("Username is required".into()))?;
        let email = normalize_identifier(&user.email)
            .ok_or_else(|| DomainError::InvalidInput("Email is required".into()))?;
        let created_at = user
            .created_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        let guard = self.conn.lock().await;
        guard
            .execute(
                "INSERT INTO users (username, email, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![username, email, user.password_hash, created_at],
            )
            .map_err(map_write_error)?;

        let id = guard.last_insert_rowid();
        debug!(id, %username, "User created");

        Ok(User {
            id,
            username,
            email,
            password_hash: user.password_hash.clone(),
            created_at: Some(created_at),
        })
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let guard = self.conn.lock().await;
        let sql = format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS);
        guard
            .query_row(&sql, params![id], Self::row_to_user)
            .optional()
            .map_err(DomainError::internal)
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let guard = self.conn.lock().await;
        let sql = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);
        let mut stmt = guard
            .prepare(&sql)
            .map_err(DomainError::internal)?;
        let rows = stmt
            .query_map([], Self::row_to_user)
            .map_err(DomainError::internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(DomainError::internal)
    }

    async fn update(&self, user: &User) -> DomainResult<User> {
        let username = normalize_identifier(&user.username)
            .ok_or_else(|| DomainError::InvalidInput("Username is required".into()))?;
        let email = normalize_identifier(&user.email)
            .ok_or_else(|| DomainError::InvalidInput("Email is required".into()))?;

        let guard = self.conn.lock().await;
        let changed = guard
            .execute(
                "UPDATE users SET username = ?1, email = ?2, password_hash = ?3 WHERE id = ?4",
                params![username, email, user.password_hash, user.id],
            )
            .map_err(map_write_error)?;

        if changed == 0 {
            return Err(DomainError::missing::<User>(user.id));
        }

        Ok(User {
            username,
            email,
            ..user.clone()
        })
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let changed = guard
            .execute("DELETE FROM users WHERE id = ?1", params![id])
            .map_err(DomainError::internal)?;

        if changed == 0 {
            return Err(DomainError::missing::<User>(id));
        }
        debug!(id, "User deleted");
        Ok(())
    }
}
