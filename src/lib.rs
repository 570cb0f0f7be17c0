//! Deck Masters site backend — lead intake and content publishing.

pub mod adapters;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
