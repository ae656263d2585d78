use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    breed::{
        dto::{BreedIn, BreedOut, BreedOutList},
        repo::Breed,
    },
    error::ApiError,
    state::AppState,
};

pub fn breed_routes() -> Router<AppState> {
    Router::new()
        .route("/breed/:id", get(get_breed))
        .route("/breed/all/", get(get_all_breeds))
        .route("/breed/create", post(create_breed))
}

#[instrument(skip(state))]
pub async fn get_breed(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<BreedOut>, ApiError> {
    let breed = Breed::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No breed with this id".into()))?;

    Ok(Json(BreedOut::from(breed)))
}

#[instrument(skip(state))]
pub async fn get_all_breeds(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<Json<BreedOutList>, ApiError> {
    let breeds = Breed::list_all(&state.db).await?;

    Ok(Json(BreedOutList {
        breed: breeds.into_iter().map(BreedOut::from).collect(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_breed(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<BreedIn>,
) -> Result<Json<BreedOut>, ApiError> {
    let breed = Breed::create(&state.db, &payload.name, payload.description.as_deref()).await?;

    info!(breed_id = breed.id, name = %breed.name, "breed created");
    Ok(Json(BreedOut::from(breed)))
}
