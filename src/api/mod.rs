//! JSON endpoints and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - Operational endpoints (health)
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
