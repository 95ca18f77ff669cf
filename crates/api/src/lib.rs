//! HTTP API: configuration, routing, and request/response mapping for the
//! book inventory.

pub mod app;
pub mod config;
pub mod middleware;
