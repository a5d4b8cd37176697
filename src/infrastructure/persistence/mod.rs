//! PostgreSQL implementations of the domain repositories.

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
