//! Game entity model and DTOs.
//!
//! JSON member names (`titulo`, `genero`, `dataLancamento`, `descricao`) are
//! the public contract of the `/jogo` resource; Rust fields and SQL columns
//! use English names.

use chrono::NaiveDateTime;
use jogos_core::error::CoreError;
use jogos_core::game::{json_field_name, not_blank, GENRE_MAX_LEN};
use jogos_core::types::{DbId, Timestamp};
use jogos_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A game row from the `games` table.
#[derive(Debug, Clone, FromRow)]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub release_date: NaiveDateTime,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new game.
///
/// Fields are optional at the serde level so that a missing field is
/// reported as a validation violation rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateGame {
    #[serde(rename = "titulo")]
    #[validate(
        required(message = "The game title is required"),
        custom(function = "not_blank", message = "The game title must not be blank")
    )]
    pub title: Option<String>,

    #[serde(rename = "genero")]
    #[validate(
        required(message = "The game genre is required"),
        custom(function = "not_blank", message = "The game genre must not be blank"),
        length(max = GENRE_MAX_LEN, message = "The genre must be at most 50 characters long")
    )]
    pub genre: Option<String>,

    #[serde(
        rename = "dataLancamento",
        default,
        deserialize_with = "release_date_format::deserialize"
    )]
    #[validate(required(message = "The release date is required"))]
    pub release_date: Option<NaiveDateTime>,

    #[serde(rename = "descricao")]
    #[validate(
        required(message = "The game description is required"),
        custom(function = "not_blank", message = "The game description must not be blank")
    )]
    pub description: Option<String>,
}

/// DTO for replacing every business field of an existing game.
///
/// Also serves as the JSON projection that patch documents are applied to,
/// hence `Serialize`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateGame {
    #[serde(rename = "titulo")]
    #[validate(
        required(message = "The game title is required"),
        custom(function = "not_blank", message = "The game title must not be blank")
    )]
    pub title: Option<String>,

    #[serde(rename = "genero")]
    #[validate(
        required(message = "The game genre is required"),
        custom(function = "not_blank", message = "The game genre must not be blank"),
        length(max = GENRE_MAX_LEN, message = "The genre must be at most 50 characters long")
    )]
    pub genre: Option<String>,

    #[serde(
        rename = "dataLancamento",
        default,
        deserialize_with = "release_date_format::deserialize"
    )]
    #[validate(required(message = "The release date is required"))]
    pub release_date: Option<NaiveDateTime>,

    #[serde(rename = "descricao")]
    #[validate(
        required(message = "The game description is required"),
        custom(function = "not_blank", message = "The game description must not be blank")
    )]
    pub description: Option<String>,
}

/// Response body for a single game.
#[derive(Debug, Clone, Serialize)]
pub struct ReadGame {
    pub id: DbId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "dataLancamento")]
    pub release_date: NaiveDateTime,
    #[serde(rename = "descricao")]
    pub description: String,
    /// When this representation was produced.
    #[serde(rename = "horaDaConsulta")]
    pub consulted_at: Timestamp,
}

/// The four business fields after validation has passed.
///
/// Repositories only accept this type for writes, so nothing unvalidated
/// reaches the `games` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGame {
    pub title: String,
    pub genre: String,
    pub release_date: NaiveDateTime,
    pub description: String,
}

impl ValidGame {
    fn from_parts(
        title: Option<String>,
        genre: Option<String>,
        release_date: Option<NaiveDateTime>,
        description: Option<String>,
    ) -> Result<Self, CoreError> {
        match (title, genre, release_date, description) {
            (Some(title), Some(genre), Some(release_date), Some(description)) => Ok(Self {
                title,
                genre,
                release_date,
                description,
            }),
            _ => Err(CoreError::Internal(
                "validated game is missing a required field".to_string(),
            )),
        }
    }
}

impl TryFrom<CreateGame> for ValidGame {
    type Error = CoreError;

    fn try_from(input: CreateGame) -> Result<Self, Self::Error> {
        validation::check(&input, json_field_name)?;
        Self::from_parts(
            input.title,
            input.genre,
            input.release_date,
            input.description,
        )
    }
}

impl TryFrom<UpdateGame> for ValidGame {
    type Error = CoreError;

    fn try_from(input: UpdateGame) -> Result<Self, Self::Error> {
        validation::check(&input, json_field_name)?;
        Self::from_parts(
            input.title,
            input.genre,
            input.release_date,
            input.description,
        )
    }
}

impl From<&Game> for UpdateGame {
    fn from(game: &Game) -> Self {
        Self {
            title: Some(game.title.clone()),
            genre: Some(game.genre.clone()),
            release_date: Some(game.release_date),
            description: Some(game.description.clone()),
        }
    }
}

impl From<Game> for ReadGame {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            title: game.title,
            genre: game.genre,
            release_date: game.release_date,
            description: game.description,
            consulted_at: chrono::Utc::now(),
        }
    }
}

/// Lenient parsing of `dataLancamento`; see [`jogos_core::game::parse_release_date`].
mod release_date_format {
    use chrono::NaiveDateTime;
    use jogos_core::game::parse_release_date;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            parse_release_date(&s).ok_or_else(|| D::Error::custom(format!("invalid date '{s}'")))
        })
        .transpose()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
