pub mod game;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /jogo                      list, create
/// /jogo/{id}                 get, full update, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/jogo", game::router())
}
