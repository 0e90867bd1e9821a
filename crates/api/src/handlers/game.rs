//! Handlers for the `/jogo` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use jogos_core::error::CoreError;
use jogos_core::game::ENTITY;
use jogos_core::pagination::{clamp_skip, clamp_take};
use jogos_core::patch::PatchDocument;
use jogos_core::types::DbId;
use jogos_db::models::game::{CreateGame, ReadGame, UpdateGame, ValidGame};
use jogos_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::query::PageParams;
use crate::state::AppState;

/// Header carrying the total number of stored games on list responses.
pub static TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// POST /jogo
///
/// Responds 201 with the created game and a `Location` header pointing at
/// `GET /jogo/{id}`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateGame>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<ReadGame>)> {
    let valid = ValidGame::try_from(input)?;
    let game = GameRepo::create(&state.pool, &valid).await?;

    tracing::info!(id = game.id, title = %game.title, "Game created");

    let location = format!("/jogo/{}", game.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(ReadGame::from(game)),
    ))
}

/// GET /jogo?skip=&take=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<([(HeaderName, String); 1], Json<Vec<ReadGame>>)> {
    let skip = clamp_skip(params.skip);
    let take = clamp_take(params.take);

    let games = GameRepo::list(&state.pool, skip, take).await?;
    let total = GameRepo::count(&state.pool).await?;

    let body = games.into_iter().map(ReadGame::from).collect();
    Ok(([(TOTAL_COUNT_HEADER.clone(), total.to_string())], Json(body)))
}

/// GET /jogo/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReadGame>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ReadGame::from(game)))
}

/// PUT /jogo/{id}
///
/// Replaces every business field. The payload is validated before the
/// lookup, so an invalid body is a 400 even for an unknown ID.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateGame>,
) -> AppResult<StatusCode> {
    let valid = ValidGame::try_from(input)?;
    GameRepo::update(&state.pool, id, &valid)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Game updated");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /jogo/{id}
///
/// Body is a JSON Patch document. The stored game is projected to an
/// [`UpdateGame`], patched, validated again, then written back. The row stays
/// locked from read to write; any failure rolls the transaction back.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody<serde_json::Value>,
) -> AppResult<StatusCode> {
    let document = PatchDocument::from_value(body).map_err(CoreError::from)?;

    let mut tx = state.pool.begin().await?;
    let game = GameRepo::find_by_id_for_update(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut projection = serde_json::to_value(UpdateGame::from(&game))
        .map_err(|e| AppError::InternalError(format!("Failed to project game {id}: {e}")))?;
    document
        .apply_to(&mut projection)
        .map_err(CoreError::from)?;

    let patched: UpdateGame = serde_json::from_value(projection)
        .map_err(|e| CoreError::Validation(format!("Patched game is malformed: {e}")))?;
    let valid = ValidGame::try_from(patched)?;

    GameRepo::update(&mut *tx, id, &valid)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(id, operations = document.len(), "Game patched");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /jogo/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GameRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Game deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
