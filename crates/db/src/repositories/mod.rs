//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every mutating statement
//! is atomic: derived status is rewritten in the same statement that
//! changes quantity, and check-then-delete guards run as a single
//! conditional DELETE.

pub mod asset_repo;
pub mod catalog_repo;
pub mod user_repo;

pub use asset_repo::AssetRepo;
pub use catalog_repo::{CatalogRepo, RemoveOutcome};
pub use user_repo::UserRepo;
