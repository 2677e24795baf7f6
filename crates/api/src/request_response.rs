// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use bakery_orders_domain::{ActorRole, OrderStatus};
use serde::{Deserialize, Serialize};

/// The caller's current view of an order row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// The order identifier.
    pub order_id: i64,
    /// The persisted status.
    pub status: OrderStatus,
    /// Row version used for optimistic locking.
    pub version: u64,
}

/// API request to change an order's status.
///
/// The requested status arrives as a raw token and is parsed here, at the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    /// The requested status token (e.g. `CONFIRMED`).
    pub requested_status: String,
    /// The order version the caller last saw, if it tracks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<u64>,
    /// Whether the user explicitly confirmed a destructive transition.
    #[serde(default)]
    pub confirmed: bool,
}

/// API response for an accepted status change.
///
/// The caller persists it with a compare-and-set on `previous_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeResponse {
    /// The order identifier.
    pub order_id: i64,
    /// The status before the change.
    pub previous_status: OrderStatus,
    /// The status after the change.
    pub new_status: OrderStatus,
    /// The version the change was computed against.
    pub previous_version: u64,
    /// The version to write.
    pub new_version: u64,
    /// The actor who made the change.
    pub changed_by: String,
    /// The actor's role class.
    pub changed_by_role: ActorRole,
    /// When the change was accepted (RFC 3339).
    pub changed_at: String,
    /// A success message.
    pub message: String,
}

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// One transition button offered to the actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCapability {
    /// The status the button moves the order to.
    pub target: OrderStatus,
    /// Display label for the target status.
    pub label: String,
    /// Whether the UI must ask for a second confirmation first.
    pub requires_confirmation: bool,
}

/// Everything an actor may do with an order in its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCapabilities {
    /// The status these capabilities were computed for.
    pub status: OrderStatus,
    /// Transitions the actor may trigger, in lifecycle order.
    pub transitions: Vec<TransitionCapability>,
    /// Whether the order's line items may still be edited.
    pub can_edit_contents: Capability,
    /// Viewing and refreshing the order is always available.
    pub can_refresh: Capability,
}
