//! HTTP API handlers for ring-api

pub mod health;
pub mod ring;

pub use health::health_routes;
pub use ring::ring;
