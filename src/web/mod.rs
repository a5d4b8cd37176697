//! HTML front end.
//!
//! Server-side rendered pages using Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`form`] - Form payload decoding
//! - [`handlers`] - Page handlers and their templates
//! - [`routes`] - Route configuration

pub mod form;
pub mod handlers;
pub mod routes;
