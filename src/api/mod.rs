//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - `/api` route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
