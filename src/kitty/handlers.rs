use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    breed::{dto::BreedOut, repo::Breed},
    error::{is_foreign_key_violation, ApiError},
    kitty::{
        dto::{KittyCreate, KittyListParams, KittyOut, KittyOutList, KittyOutWithBreed, KittyUpdate},
        repo::Kitty,
    },
    state::AppState,
};

pub fn kitty_routes() -> Router<AppState> {
    Router::new()
        .route("/kitty/create/", post(create_kitty))
        .route("/kitty/:id", get(get_kitty))
        .route("/kitty/all/", get(get_all_kittens))
        .route("/kitty/update/:id", put(update_kitty))
        .route("/kitty/soft_removal/:id", delete(soft_removal))
}

#[instrument(skip(state, payload))]
pub async fn create_kitty(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<KittyCreate>,
) -> Result<Json<KittyOut>, ApiError> {
    let kitty = match Kitty::create(
        &state.db,
        &payload.name,
        &payload.color,
        payload.age,
        payload.description.as_deref(),
        payload.breed_id,
    )
    .await
    {
        Ok(k) => k,
        Err(e) if is_foreign_key_violation(&e) => {
            warn!(breed_id = payload.breed_id, "invalid breed reference");
            return Err(ApiError::BadRequest("Invalid breed reference".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(kitty_id = kitty.id, name = %kitty.name, "kitten created");
    Ok(Json(KittyOut::from(kitty)))
}

#[instrument(skip(state))]
pub async fn get_kitty(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<KittyOutWithBreed>, ApiError> {
    let kitty = Kitty::find_active(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No kitten with this id".into()))?;

    // The foreign key guarantees the breed row exists.
    let breed = Breed::find_by_id(&state.db, kitty.breed_id)
        .await?
        .ok_or_else(|| {
            anyhow::anyhow!("kitten {} references missing breed {}", kitty.id, kitty.breed_id)
        })?;

    Ok(Json(KittyOutWithBreed {
        kitty: KittyOut::from(kitty),
        breed: BreedOut::from(breed),
    }))
}

#[instrument(skip(state))]
pub async fn get_all_kittens(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(params): Query<KittyListParams>,
) -> Result<Json<KittyOutList>, ApiError> {
    let kittens = Kitty::list_active(&state.db, params.breed_id).await?;

    Ok(Json(KittyOutList {
        kittens: kittens.into_iter().map(KittyOut::from).collect(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_kitty(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<KittyUpdate>,
) -> Result<Json<KittyOut>, ApiError> {
    let mut kitty = Kitty::find_active(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Kitten not found".into()))?;

    payload.apply(&mut kitty);

    let kitty = match Kitty::save(&state.db, &kitty, OffsetDateTime::now_utc()).await {
        Ok(k) => k,
        Err(e) if is_foreign_key_violation(&e) => {
            warn!(breed_id = kitty.breed_id, "invalid breed reference");
            return Err(ApiError::BadRequest("Invalid breed reference".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(kitty_id = kitty.id, "kitten updated");
    Ok(Json(KittyOut::from(kitty)))
}

#[instrument(skip(state))]
pub async fn soft_removal(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<i32>,
) -> Result<String, ApiError> {
    let mut tx = state.db.begin().await?;

    let kitty = Kitty::find_any(&mut tx, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Kitten not found".into()))?;

    if kitty.deleted_at.is_some() {
        warn!(kitty_id = kitty.id, "kitten already deleted");
        return Err(ApiError::Conflict("Kitten already deleted".into()));
    }

    Kitty::mark_deleted(&mut tx, id, OffsetDateTime::now_utc()).await?;
    tx.commit().await?;

    info!(kitty_id = kitty.id, name = %kitty.name, "kitten soft-deleted");
    Ok(format!("Kitten {} - {} deleted", kitty.id, kitty.name))
}
