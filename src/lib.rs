//! Egg Shop Library
//!
//! This library provides the core functionality for a small farm's egg
//! catalog: a concurrent in-memory registry, GraphQL and JSON-RPC
//! query/mutation layers, REST routes and SMS/Signal notifications.

// Domain modules
pub mod api;
pub mod catalog;
pub mod graphql;
pub mod notify;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
pub mod telemetry;
