//! HTTP middleware shared by all routes.

pub mod tracing;
