//! # relief-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `relief-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers with enum validation
//! - Repository implementations
//!
//! Enum-like columns are stored as TEXT and validated when rows are
//! mapped back into entities, so a malformed row surfaces as a
//! `DomainError::MalformedRecord` instead of a panic.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgForumRepository, PgManualRepository, PgPortalRepository, PgResourceRepository,
    PgUpdateRepository, PgVolunteerRepository,
};

/// Embedded migrations for the relief schema
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
