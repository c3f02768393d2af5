//! Holocron, a REST API for Star Wars characters, planets and the favorites of its users.

pub mod model;
pub mod server;
