//! Infrastructure layer: concrete implementations of domain contracts.
//!
//! - [`persistence`] - PostgreSQL repositories built on `sqlx`

pub mod persistence;
