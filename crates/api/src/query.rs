//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?skip=&take=`).
///
/// Values are clamped via `jogos_core::pagination` before reaching the
/// repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub take: Option<i64>,
}
