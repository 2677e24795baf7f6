// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status states.
//!
//! An order starts in `Draft` and moves forward one accepted transition at a
//! time. Which moves exist is decided by the tables in [`crate::transition`];
//! this module only names the states and answers per-state questions.

use crate::error::DomainError;
use crate::transition::GLOBAL_TRANSITIONS;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle stage of an order.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Being assembled by the customer, not yet submitted
    #[default]
    Draft,
    /// Submitted and awaiting confirmation by staff
    Pending,
    /// Accepted by staff
    Confirmed,
    /// Being baked
    InProduction,
    /// Produced and waiting for hand-over
    Ready,
    /// Handed over to the customer
    Delivered,
    /// Abandoned before production finished
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Draft,
        Self::Pending,
        Self::Confirmed,
        Self::InProduction,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// The status assigned when an order is created.
    pub const INITIAL: Self = Self::Draft;

    /// Returns the canonical token for this status.
    ///
    /// This is the form used on the wire and in persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::InProduction => "IN_PRODUCTION",
            Self::Ready => "READY",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable name for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending confirmation",
            Self::Confirmed => "Confirmed",
            Self::InProduction => "In production",
            Self::Ready => "Ready for delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Maps a canonical token to a status.
    ///
    /// Returns `None` for anything that is not exactly one of the canonical
    /// tokens. The token-level predicates treat `None` as a rejection.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == token)
    }

    /// States reachable from this one in a single step, for any role.
    #[must_use]
    pub const fn successors(&self) -> &'static [Self] {
        GLOBAL_TRANSITIONS.successors(*self)
    }

    /// Returns true if no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }

    /// Returns true if moving into this status destroys the order's progress.
    ///
    /// Callers must ask for an explicit confirmation before requesting such a
    /// transition.
    #[must_use]
    pub const fn is_destructive_target(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns true if the order's line items can no longer be edited.
    ///
    /// This is a separate policy from status transitions: a `Confirmed` order
    /// can still have its contents adjusted, while it is no longer the
    /// customer's to move.
    #[must_use]
    pub const fn is_content_locked(&self) -> bool {
        matches!(
            self,
            Self::InProduction | Self::Ready | Self::Delivered | Self::Cancelled
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| DomainError::InvalidOrderStatus {
            status: s.to_string(),
        })
    }
}
