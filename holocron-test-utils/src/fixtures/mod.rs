//! Database fixtures.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a
//! fixture helper that inserts records directly, bypassing the server's repositories.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
