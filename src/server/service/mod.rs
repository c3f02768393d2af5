//! Service layer for resource logic.
//!
//! Services validate request bodies, check that referenced records exist, coordinate
//! repositories (inside a transaction for cascading deletes), and convert database models
//! into response DTOs.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod validation;
