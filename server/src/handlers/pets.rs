//! Pet CRUD and care actions.
//!
//! Every read or write first brings the pet's stats up to date with
//! [`Pet::tick`], persisting the drift when it changed anything.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::domain::{clamp_stat, AdoptPetRequest, Pet, PetAction, PetDto, PetInput};
use crate::error::{ApiError, ApiResult};
use crate::repository::Repository;
use crate::state::AppState;
use crate::validation::{FieldErrors, Validate};

const DEFAULT_LEVEL: i64 = 1;
const DEFAULT_STAT: i64 = 80;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn to_dtos(pets: &[Pet]) -> Vec<PetDto> {
    pets.iter().map(PetDto::from).collect()
}

/// Tick every pet and persist the ones that drifted
async fn tick_all(state: &AppState, mut pets: Vec<Pet>) -> ApiResult<Vec<Pet>> {
    let now = now_ms();
    let changed: Vec<Pet> = pets
        .iter_mut()
        .filter_map(|pet| pet.tick(now).then(|| pet.clone()))
        .collect();
    if !changed.is_empty() {
        debug!(count = changed.len(), "Persisting pet drift");
        state.pets.save_all(&changed).await?;
    }
    Ok(pets)
}

async fn require_pet(state: &AppState, id: i64) -> ApiResult<Pet> {
    Ok(state.pets.fetch(id).await?)
}

async fn require_owner(state: &AppState, user_id: i64) -> ApiResult<()> {
    state.users.fetch(user_id).await?;
    Ok(())
}

/// GET /api/pets
pub async fn list_pets(State(state): State<AppState>) -> ApiResult<Json<Vec<PetDto>>> {
    let pets = state.pets.list().await?;
    let pets = tick_all(&state, pets).await?;
    Ok(Json(to_dtos(&pets)))
}

/// GET /api/pets/user/{user_id}
pub async fn list_user_pets(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<PetDto>>> {
    let Path(user_id) = path?;
    let pets = state.pets.list_by_user(user_id).await?;
    let pets = tick_all(&state, pets).await?;
    Ok(Json(to_dtos(&pets)))
}

/// GET /api/pets/{id}
pub async fn get_pet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<PetDto>> {
    let Path(id) = path?;
    let mut pet = require_pet(&state, id).await?;
    if pet.tick(now_ms()) {
        pet = state.pets.update(&pet).await?;
    }
    Ok(Json(PetDto::from(&pet)))
}

/// POST /api/pets - Create from a partial pet; missing stats default to 80.
pub async fn create_pet(
    State(state): State<AppState>,
    payload: Result<Json<PetInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PetDto>)> {
    let Json(input) = payload?;

    let mut errors = FieldErrors::new();
    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    let pet_type = input.pet_type.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.insert("name".into(), "Name is required".into());
    }
    if pet_type.is_empty() {
        errors.insert("type".into(), "Type is required".into());
    }
    let Some(user_id) = input.user_id else {
        errors.insert("userId".into(), "User id is required".into());
        return Err(ApiError::Validation(errors));
    };
    ApiError::check(errors)?;
    require_owner(&state, user_id).await?;

    let now = now_ms();
    let pet = Pet {
        id: 0,
        user_id,
        name: name.to_string(),
        pet_type: pet_type.to_string(),
        level: input.level.unwrap_or(DEFAULT_LEVEL).max(1),
        fullness: clamp_stat(input.fullness.unwrap_or(DEFAULT_STAT)),
        happiness: clamp_stat(input.happiness.unwrap_or(DEFAULT_STAT)),
        energy: clamp_stat(input.energy.unwrap_or(DEFAULT_STAT)),
        last_tick_at: now,
        created_at: now,
    };
    let created = state.pets.create(&pet).await?;

    info!(pet_id = created.id, user_id, "Pet created");
    Ok((StatusCode::CREATED, Json(PetDto::from(&created))))
}

/// POST /api/pets/adopt
pub async fn adopt_pet(
    State(state): State<AppState>,
    payload: Result<Json<AdoptPetRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PetDto>)> {
    let Json(req) = payload?;
    ApiError::check(req.validate())?;
    let user_id = req.user_id.unwrap_or_default();
    require_owner(&state, user_id).await?;

    let pet = Pet::adopt(user_id, &req.name, &req.pet_type, now_ms());
    let adopted = state.pets.create(&pet).await?;

    info!(pet_id = adopted.id, user_id, pet_type = %adopted.pet_type, "Pet adopted");
    Ok((StatusCode::CREATED, Json(PetDto::from(&adopted))))
}

/// PUT /api/pets/{id} - Rename, retype, or set stats (clamped).
pub async fn update_pet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PetInput>, JsonRejection>,
) -> ApiResult<Json<PetDto>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let mut pet = require_pet(&state, id).await?;
    pet.tick(now_ms());

    if let Some(name) = input.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        pet.name = name.to_string();
    }
    if let Some(pet_type) = input.pet_type.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        pet.pet_type = pet_type.to_string();
    }
    if let Some(level) = input.level {
        pet.level = level.max(1);
    }
    if let Some(fullness) = input.fullness {
        pet.fullness = clamp_stat(fullness);
    }
    if let Some(happiness) = input.happiness {
        pet.happiness = clamp_stat(happiness);
    }
    if let Some(energy) = input.energy {
        pet.energy = clamp_stat(energy);
    }

    let updated = state.pets.update(&pet).await?;
    Ok(Json(PetDto::from(&updated)))
}

async fn act(state: &AppState, id: i64, action: PetAction) -> ApiResult<Json<PetDto>> {
    let mut pet = require_pet(state, id).await?;
    pet.perform(action, now_ms());
    let updated = state.pets.update(&pet).await?;
    debug!(pet_id = id, action = action.as_str(), "Pet action");
    Ok(Json(PetDto::from(&updated)))
}

/// POST /api/pets/{id}/feed
pub async fn feed_pet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<PetDto>> {
    let Path(id) = path?;
    act(&state, id, PetAction::Feed).await
}

/// POST /api/pets/{id}/play
pub async fn play_with_pet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<PetDto>> {
    let Path(id) = path?;
    act(&state, id, PetAction::Play).await
}

/// POST /api/pets/{id}/rest
pub async fn rest_pet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<PetDto>> {
    let Path(id) = path?;
    act(&state, id, PetAction::Rest).await
}

/// DELETE /api/pets/{id}
pub async fn delete_pet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state.pets.delete(id).await?;
    info!(pet_id = id, "Pet deleted");
    Ok(StatusCode::NO_CONTENT)
}
