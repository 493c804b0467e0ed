//! SQLite persistence for users and pets.
//!
//! Both repositories share one connection; see [`DbState`].

mod traits;
mod db;
mod user_repo;
mod pet_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState};
pub use user_repo::UserRepository;
pub use pet_repo::PetRepository;
