//! HTTP API: configuration, routing, and request/response mapping for the
//! purchase endpoint.

pub mod app;
pub mod config;
