//! Domain logic for the Jogos API.
//!
//! Pure types and rules with no I/O: error kinds, field constraints for the
//! game entity, pagination clamping, and patch-document application.

pub mod error;
pub mod game;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;
