//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
