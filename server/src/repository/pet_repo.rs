//! Pet Repository
//!
//! SQLite storage for pets. Rows are removed with their owner through
//! `ON DELETE CASCADE`.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Pet, User};

const PET_COLUMNS: &str =
    "id, user_id, name, type, level, fullness, happiness, energy, last_tick_at, created_at";

pub struct PetRepository {
    conn: SharedConnection,
}

impl PetRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_pet(row: &Row<'_>) -> rusqlite::Result<Pet> {
        Ok(Pet {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            pet_type: row.get(3)?,
            level: row.get(4)?,
            fullness: row.get(5)?,
            happiness: row.get(6)?,
            energy: row.get(7)?,
            last_tick_at: row.get(8)?,
            created_at: row.get(9)?,
        })
    }

    fn query_pets(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> DomainResult<Vec<Pet>> {
        let mut stmt = conn
            .prepare(sql)
            .map_err(DomainError::internal)?;
        let rows = stmt
            .query_map(args, Self::row_to_pet)
            .map_err(DomainError::internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(DomainError::internal)
    }

    fn write_pet(conn: &Connection, pet: &Pet) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE pets SET user_id = ?1, name = ?2, type = ?3, level = ?4, fullness = ?5,
                happiness = ?6, energy = ?7, last_tick_at = ?8 WHERE id = ?9",
            params![
                pet.user_id,
                pet.name,
                pet.pet_type,
                pet.level,
                pet.fullness,
                pet.happiness,
                pet.energy,
                pet.last_tick_at,
                pet.id
            ],
        )
    }

    /// All pets owned by `user_id`, oldest first
    pub async fn list_by_user(&self, user_id: i64) -> DomainResult<Vec<Pet>> {
        let guard = self.conn.lock().await;
        let sql = format!("SELECT {} FROM pets WHERE user_id = ?1 ORDER BY id", PET_COLUMNS);
        Self::query_pets(&guard, &sql, params![user_id])
    }

    /// Persist several pets in one transaction
    pub async fn save_all(&self, pets: &[Pet]) -> DomainResult<()> {
        if pets.is_empty() {
            return Ok(());
        }

        let mut guard = self.conn.lock().await;
        let tx = guard
            .transaction()
            .map_err(DomainError::internal)?;
        for pet in pets {
            Self::write_pet(&tx, pet).map_err(DomainError::internal)?;
        }
        tx.commit().map_err(DomainError::internal)?;

        debug!(count = pets.len(), "Pets saved");
        Ok(())
    }
}

#[async_trait]
impl Repository<Pet> for PetRepository {
    async fn create(&self, pet: &Pet) -> DomainResult<Pet> {
        let guard = self.conn.lock().await;
        guard
            .execute(
                "INSERT INTO pets (user_id, name, type, level, fullness, happiness, energy, last_tick_at, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    pet.user_id,
                    pet.name,
                    pet.pet_type,
                    pet.level,
                    pet.fullness,
                    pet.happiness,
                    pet.energy,
                    pet.last_tick_at,
                    pet.created_at
                ],
            )
            .map_err(|e| match &e {
                rusqlite::Error::SqliteFailure(code, _)
                    if code.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    DomainError::missing::<User>(pet.user_id)
                }
                _ => DomainError::internal(&e),
            })?;

        let id = guard.last_insert_rowid();
        debug!(id, user_id = pet.user_id, "Pet created");
        Ok(Pet { id, ..pet.clone() })
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Pet>> {
        let guard = self.conn.lock().await;
        let sql = format!("SELECT {} FROM pets WHERE id = ?1", PET_COLUMNS);
        guard
            .query_row(&sql, params![id], Self::row_to_pet)
            .optional()
            .map_err(DomainError::internal)
    }

    async fn list(&self) -> DomainResult<Vec<Pet>> {
        let guard = self.conn.lock().await;
        let sql = format!("SELECT {} FROM pets ORDER BY id", PET_COLUMNS);
        Self::query_pets(&guard, &sql, [])
    }

    async fn update(&self, pet: &Pet) -> DomainResult<Pet> {
        let guard = self.conn.lock().await;
        let changed =
            Self::write_pet(&guard, pet).map_err(DomainError::internal)?;
        if changed == 0 {
            return Err(DomainError::missing::<Pet>(pet.id));
        }
        Ok(pet.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let changed = guard
            .execute("DELETE FROM pets WHERE id = ?1", params![id])
            .map_err(DomainError::internal)?;
        if changed == 0 {
            return Err(DomainError::missing::<Pet>(id));
        }
        debug!(id, "Pet deleted");
        Ok(())
    }
}
