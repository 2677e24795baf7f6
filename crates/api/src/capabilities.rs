// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose which transition buttons to render without leaking
//! the tables themselves. They are advisory only and do not replace the
//! checks in [`crate::change_order_status`].

use bakery_orders_domain::{OrderStatus, available_transitions};

use crate::auth::AuthenticatedActor;
use crate::request_response::{Capability, OrderCapabilities, TransitionCapability};

/// Computes what an actor may do with an order in `status`.
///
/// The transition list is exactly the actor role's reachable set from
/// `status`; destructive targets are flagged for a confirmation step.
#[must_use]
pub fn compute_order_capabilities(
    actor: &AuthenticatedActor,
    status: OrderStatus,
) -> OrderCapabilities {
    let transitions: Vec<TransitionCapability> = available_transitions(actor.role, status)
        .iter()
        .map(|target| TransitionCapability {
            target: *target,
            label: target.label().to_string(),
            requires_confirmation: target.is_destructive_target(),
        })
        .collect();

    OrderCapabilities {
        status,
        transitions,
        can_edit_contents: Capability::from_bool(!status.is_content_locked()),
        can_refresh: Capability::Allowed,
    }
}
