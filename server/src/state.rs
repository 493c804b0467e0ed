//! Application state for the web server.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult};
use crate::password::PasswordHasher;
use crate::repository::{DbState, PetRepository, UserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRepository>,
    pub pets: Arc<PetRepository>,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db: &DbState, hasher: PasswordHasher) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db.connection())),
            pets: Arc::new(PetRepository::new(db.connection())),
            hasher,
        }
    }

    /// Hash on the blocking pool
    pub async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let hasher = self.hasher;
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(DomainError::internal)
    }

    pub async fn verify_password(&self, password: &str, encoded: &str) -> DomainResult<bool> {
        let hasher = self.hasher;
        let password = password.to_string();
        let encoded = encoded.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &encoded))
            .await
            .map_err(DomainError::internal)
    }
}
