//! Server application models.
//!
//! Contains the shared application state handed to every handler and type aliases for the
//! database models generated in the `entity` crate.

pub mod app;
pub mod db;
