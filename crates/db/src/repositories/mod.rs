//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept a pool or executor as the first argument.

pub mod game_repo;

pub use game_repo::GameRepo;
