//! Repository for the `games` table.

use sqlx::{PgConnection, PgExecutor, PgPool};
use jogos_core::types::DbId;

use crate::models::game::{Game, ValidGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_date, description, created_at, updated_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row with its assigned ID.
    pub async fn create(pool: &PgPool, input: &ValidGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, genre, release_date, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List a page of games in creation (ID) order.
    ///
    /// `skip` and `take` must already be clamped to non-negative values.
    pub async fn list(pool: &PgPool, skip: i64, take: i64) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Game>(&query)
            .bind(take)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Find a game by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a game by ID and lock its row until the surrounding transaction ends.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Overwrite every business field of a game.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &ValidGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET
                title = $2,
                genre = $3,
                release_date = $4,
                description = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_date)
            .bind(&input.description)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a game by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all games.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(pool)
            .await
    }
}
