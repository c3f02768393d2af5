//! Data access layer repositories.
//!
//! One repository per table. Repositories borrow any sea-orm connection, either the shared
//! `DatabaseConnection` or a `DatabaseTransaction` when several writes must commit together.

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;
