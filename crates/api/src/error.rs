// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roombook::CoreError;
use roombook_domain::DomainError;
use roombook_persistence::PersistenceError;
use thiserror::Error;
use tracing::error;

/// Authentication and authorization errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    ///
    /// The reason is shown to the caller, so it never says which part of a
    /// credential was wrong.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    /// The actor's role does not permit the action.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        action: String,
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and
/// represent the API contract. The server maps each variant to one HTTP
/// status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No valid session or credential.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    /// The actor's role does not permit the action.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        action: String,
        required_role: String,
    },

    /// The target is outside the actor's building scope.
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// A business rule refused the operation.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation { rule: String, message: String },

    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        resource_type: String,
        message: String,
    },

    /// The request collides with existing data.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// An internal error occurred. The message is safe to show.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        err @ DomainError::InvalidInterval { .. } => ApiError::InvalidInput {
            field: String::from("endTime"),
            message: err.to_string(),
        },
        err @ DomainError::PastDateRejected { .. } => ApiError::InvalidInput {
            field: String::from("startTime"),
            message: err.to_string(),
        },
        DomainError::InvalidPin(msg) => ApiError::InvalidInput {
            field: String::from("pin"),
            message: msg,
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Invalid role: {role}. Must be 'ADMIN' or 'USER'"),
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: format!("Invalid capacity: {capacity}. Must be greater than 0"),
        },
        DomainError::InvalidColor(color) => ApiError::InvalidInput {
            field: String::from("color"),
            message: format!("Invalid color '{color}'. Expected #RRGGBB"),
        },
        DomainError::InvalidScheduleWindow(msg) => ApiError::InvalidInput {
            field: String::from("schedule"),
            message: msg,
        },
        // Only reachable through a corrupt stored row.
        err @ (DomainError::TimestampOutOfRange(_) | DomainError::InvalidReservationState(_)) => {
            error!(error = %err, "Stored data failed domain validation");
            ApiError::Internal {
                message: String::from("Stored data is invalid"),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Unauthenticated { .. } => ApiError::AuthenticationFailed {
            reason: String::from("Session user no longer exists"),
        },
        err @ (CoreError::RoomAccessDenied { .. } | CoreError::ReservationAccessDenied { .. }) => {
            ApiError::Forbidden {
                message: err.to_string(),
            }
        }
        err @ CoreError::UserNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: err.to_string(),
        },
        err @ CoreError::ReservationNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message: err.to_string(),
        },
        err @ CoreError::SchedulingConflict { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Store failures are logged here and surface with a generic message.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Booking(core_err) => translate_core_error(core_err),
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        PersistenceError::UniqueViolation(detail) => {
            tracing::debug!(detail, "Unique constraint rejected write");
            ApiError::Conflict {
                message: String::from("A record with the same unique value already exists"),
            }
        }
        PersistenceError::ForeignKeyViolation(detail) => {
            tracing::debug!(detail, "Foreign key constraint rejected write");
            ApiError::InvalidInput {
                field: String::from("reference"),
                message: String::from("A referenced record does not exist"),
            }
        }
        PersistenceError::UserHasReservations { .. } => ApiError::DomainRuleViolation {
            rule: String::from("user_has_reservations"),
            message: String::from("Cannot delete a user who owns reservations"),
        },
        other => {
            error!(error = %other, "Persistence operation failed");
            ApiError::Internal {
                message: String::from("Database operation failed"),
            }
        }
    }
}
