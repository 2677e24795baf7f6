// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::transition::{CUSTOMER_TRANSITIONS, INTERNAL_TRANSITIONS, TransitionTable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coarse actor classification used to scope status transitions.
///
/// The wider system has finer-grained roles; for transitions they all
/// collapse into one of these two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRole {
    /// External B2B customer.
    ///
    /// Customers may:
    /// - submit a draft order
    /// - abandon an order before staff confirm it
    Customer,
    /// Internal bakery staff.
    ///
    /// Staff drive the order from confirmation through delivery and may
    /// cancel it at any stage before it is ready.
    Internal,
}

impl ActorRole {
    /// Both role classes.
    pub const ALL: [Self; 2] = [Self::Customer, Self::Internal];

    /// Returns the canonical token for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Internal => "INTERNAL",
        }
    }

    /// Maps a canonical token to a role, or `None` if unrecognized.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == token)
    }

    /// The transitions this role may trigger.
    #[must_use]
    pub const fn transitions(&self) -> &'static TransitionTable {
        match self {
            Self::Customer => &CUSTOMER_TRANSITIONS,
            Self::Internal => &INTERNAL_TRANSITIONS,
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActorRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| DomainError::InvalidActorRole {
            role: s.to_string(),
        })
    }
}
