//! Core domain entities.
//!
//! Entities are plain data structures. Creation goes through a separate
//! insert payload so that storage-assigned fields never appear in input:
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Data for inserting a new link

pub mod link;

pub use link::{Link, NewLink};
