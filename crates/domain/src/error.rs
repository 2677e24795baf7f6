// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised when external tokens are converted into domain types.
///
/// The transition predicates never produce these; they only surface from the
/// `FromStr` implementations, for callers that need to tell an unrecognized
/// token apart from a rejected transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The token is not a known order status.
    InvalidOrderStatus {
        /// The rejected token.
        status: String,
    },
    /// The token is not a known actor role class.
    InvalidActorRole {
        /// The rejected token.
        role: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrderStatus { status } => {
                write!(f, "Invalid order status: '{status}'")
            }
            Self::InvalidActorRole { role } => {
                write!(
                    f,
                    "Invalid actor role: '{role}'. Must be 'CUSTOMER' or 'INTERNAL'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
