//! Error handling utilities for repositories

use relief_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "portal not found" error
pub fn portal_not_found(id: Uuid) -> DomainError {
    DomainError::PortalNotFound(id)
}

/// Create a "resource need not found" error
pub fn resource_not_found(id: Uuid) -> DomainError {
    DomainError::ResourceNotFound(id)
}

/// Escape LIKE wildcards in a user-supplied search term
///
/// The resulting string is safe to embed in an ILIKE pattern with the
/// default backslash escape character.
pub fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
