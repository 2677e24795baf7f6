// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor identity and transition authorization.

use bakery_orders_domain::{
    ActorRole, OrderStatus, is_transition_allowed_for_role, is_transition_valid,
};

use crate::error::{AuthError, TransitionError};

/// An authenticated actor with its role class.
///
/// Whatever finer-grained role the account holds upstream has already been
/// collapsed into an [`ActorRole`] by the time it reaches this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role class assigned to this actor.
    pub role: ActorRole,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role class assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: ActorRole) -> Self {
        Self { id, role }
    }
}

/// Stub authentication function.
///
/// Real authentication happens upstream; this only checks that an identity
/// was supplied and binds it to a role class.
///
/// # Errors
///
/// Returns an error if `actor_id` is empty.
pub fn authenticate_stub(
    actor_id: String,
    role: ActorRole,
) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Authorization service for order status transitions.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may move an order from `current` to `requested`.
    ///
    /// The role gate is consulted first. When it refuses, the global lifecycle
    /// decides which rejection to report, so callers can tell "not yours to
    /// do" apart from "nobody can do that".
    ///
    /// # Errors
    ///
    /// - `TerminalState` if `current` has no outgoing transitions
    /// - `StructurallyInvalid` if the lifecycle has no `current -> requested` edge
    /// - `NotPermittedForRole` if the edge exists but not for this role
    pub fn authorize_transition(
        actor: &AuthenticatedActor,
        current: OrderStatus,
        requested: OrderStatus,
    ) -> Result<(), TransitionError> {
        if is_transition_allowed_for_role(actor.role, current, requested) {
            return Ok(());
        }

        if current.is_terminal() {
            return Err(TransitionError::TerminalState { from: current });
        }

        if !is_transition_valid(current, requested) {
            return Err(TransitionError::StructurallyInvalid {
                from: current,
                to: requested,
            });
        }

        Err(TransitionError::NotPermittedForRole {
            role: actor.role,
            from: current,
            to: requested,
        })
    }
}
