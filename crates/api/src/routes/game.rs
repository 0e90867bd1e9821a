//! Route definitions for the `/jogo` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/jogo`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// PATCH  /{id}      -> patch
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(game::list).post(game::create))
        .route(
            "/{id}",
            get(game::get_by_id)
                .put(game::update)
                .patch(game::patch)
                .delete(game::delete),
        )
}
