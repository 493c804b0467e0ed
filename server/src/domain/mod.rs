//! Users, pets and the stat rules that govern them.
//!
//! Nothing here touches storage or HTTP.

mod entity;
mod user;
mod pet;
mod dto;

pub use entity::{Entity, DomainError, DomainResult};
pub use user::{normalize_identifier, User};
pub use pet::{clamp_stat, Pet, PetAction, STAT_MAX, STAT_MIN};
pub use dto::{
    AdoptPetRequest, LoginRequest, PetDto, PetInput, RegisterRequest, UserDto, UserUpdateRequest,
};
