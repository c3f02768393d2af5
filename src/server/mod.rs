//! Server application core modules.
//!
//! This module contains all server-side functionality for the holocron API: configuration,
//! HTTP routing and controllers, the service layer, database repositories, and error
//! rendering. Handlers receive the shared [`model::app::AppState`] and build services from it.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
