//! Field rules for the game entity.
//!
//! The JSON member names are the public contract of the `/jogo` resource and
//! differ from the Rust field names; [`json_field_name`] maps one to the other
//! so validation errors name the field the client actually sent.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use validator::ValidationError;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Game";

/// Maximum genre length, in characters.
pub const GENRE_MAX_LEN: u64 = 50;

pub const FIELD_TITLE: &str = "titulo";
pub const FIELD_GENRE: &str = "genero";
pub const FIELD_RELEASE_DATE: &str = "dataLancamento";
pub const FIELD_DESCRIPTION: &str = "descricao";

/// Map a Rust field name to its JSON member name.
///
/// Names that are already JSON names (or unknown) pass through unchanged.
pub fn json_field_name(field: &str) -> &str {
    match field {
        "title" => FIELD_TITLE,
        "genre" => FIELD_GENRE,
        "release_date" => FIELD_RELEASE_DATE,
        "description" => FIELD_DESCRIPTION,
        other => other,
    }
}

/// Reject empty and whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Parse a release date sent by a client.
///
/// Accepts RFC 3339 timestamps (normalized to UTC), naive ISO 8601
/// date-times with `T` or space separator, and bare dates (midnight).
pub fn parse_release_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
