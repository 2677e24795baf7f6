// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use bakery_orders_domain::{ActorRole, DomainError, OrderStatus};
use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

/// Reasons a requested status transition is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The order is in a terminal status.
    #[error("Order is {from} and can no longer change status")]
    TerminalState {
        /// The current status.
        from: OrderStatus,
    },
    /// The lifecycle has no such transition for anyone.
    #[error("Transition from {from} to {to} is not part of the order lifecycle")]
    StructurallyInvalid {
        /// The current status.
        from: OrderStatus,
        /// The requested status.
        to: OrderStatus,
    },
    /// The transition exists but this role may not perform it.
    #[error("Role {role} is not allowed to move an order from {from} to {to}")]
    NotPermittedForRole {
        /// The acting role.
        role: ActorRole,
        /// The current status.
        from: OrderStatus,
        /// The requested status.
        to: OrderStatus,
    },
}

impl TransitionError {
    /// Stable rule identifier for the rejection, for clients that branch on it.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::TerminalState { .. } => "terminal_state",
            Self::StructurallyInvalid { .. } => "lifecycle_transition",
            Self::NotPermittedForRole { .. } => "role_transition",
        }
    }
}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The requested status transition was rejected.
    InvalidTransition(TransitionError),
    /// The order changed since the caller last read it.
    Conflict {
        /// The version the caller expected.
        expected: u64,
        /// The version the order actually has.
        actual: u64,
    },
    /// A destructive transition was requested without explicit confirmation.
    ConfirmationRequired {
        /// The requested status.
        to: OrderStatus,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// HTTP status code a transport should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::AuthenticationFailed { .. } => 401,
            Self::InvalidInput { .. } => 400,
            Self::InvalidTransition(TransitionError::NotPermittedForRole { .. }) => 403,
            Self::InvalidTransition(_) => 422,
            Self::Conflict { .. } => 409,
            Self::ConfirmationRequired { .. } => 428,
            Self::Internal { .. } => 500,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidTransition(err) => {
                write!(f, "Invalid transition ({}): {err}", err.rule())
            }
            Self::Conflict { expected, actual } => {
                write!(
                    f,
                    "Order was modified concurrently: expected version {expected}, found {actual}"
                )
            }
            Self::ConfirmationRequired { to } => {
                write!(f, "Moving an order to {to} requires explicit confirmation")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTransition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

impl From<TransitionError> for ApiError {
    fn from(err: TransitionError) -> Self {
        Self::InvalidTransition(err)
    }
}

/// Translates a domain error into an API error.
///
/// Domain parsing errors only arise from caller-supplied tokens, so they all
/// surface as invalid input on the field that carried the token.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidOrderStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a known order status"),
        },
        DomainError::InvalidActorRole { role } => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("'{role}' is not a known actor role"),
        },
    }
}
