//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::KindParseError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Portal not found: {0}")]
    PortalNotFound(Uuid),

    #[error("Resource need not found: {0}")]
    ResourceNotFound(Uuid),

    #[error("Forum post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Manual not found: {0}")]
    ManualNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Stored record is malformed: {0}")]
    MalformedRecord(#[from] KindParseError),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already registered as a volunteer for this portal")]
    AlreadyVolunteering,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::PortalNotFound(_) => "UNKNOWN_PORTAL",
            Self::ResourceNotFound(_) => "UNKNOWN_RESOURCE",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ManualNotFound(_) => "UNKNOWN_MANUAL",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MalformedRecord(_) => "MALFORMED_RECORD",
            Self::AlreadyVolunteering => "ALREADY_VOLUNTEERING",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PortalNotFound(_)
                | Self::ResourceNotFound(_)
                | Self::PostNotFound(_)
                | Self::ManualNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::MalformedRecord(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyVolunteering)
    }
}
