// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status change handling.

use bakery_orders_domain::OrderStatus;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{ChangeStatusRequest, OrderSnapshot, StatusChangeResponse};

/// Validates a requested status change and computes the row to write.
///
/// Nothing is persisted here. The caller writes the returned status and
/// version with a compare-and-set on `previous_version`, so two concurrent
/// requests against the same order cannot both land.
///
/// # Arguments
///
/// * `order` - The caller's current view of the order
/// * `request` - The requested change
/// * `actor` - The authenticated actor making the request
///
/// # Errors
///
/// Returns an error if:
/// - The requested status token is not recognized
/// - `expected_version` does not match the order's version
/// - The transition is not allowed for the actor's role
/// - The target is destructive and the request is not confirmed
pub fn change_order_status(
    order: &OrderSnapshot,
    request: &ChangeStatusRequest,
    actor: &AuthenticatedActor,
) -> Result<StatusChangeResponse, ApiError> {
    let requested: OrderStatus = request
        .requested_status
        .parse()
        .map_err(translate_domain_error)?;

    if let Some(expected) = request.expected_version
        && expected != order.version
    {
        warn!(
            order_id = order.order_id,
            actor_id = %actor.id,
            expected,
            actual = order.version,
            "Rejected status change on stale order version"
        );
        return Err(ApiError::Conflict {
            expected,
            actual: order.version,
        });
    }

    if let Err(err) = AuthorizationService::authorize_transition(actor, order.status, requested) {
        warn!(
            order_id = order.order_id,
            actor_id = %actor.id,
            role = %actor.role,
            from = %order.status,
            to = %requested,
            rule = err.rule(),
            "Rejected status change"
        );
        return Err(err.into());
    }

    if requested.is_destructive_target() && !request.confirmed {
        return Err(ApiError::ConfirmationRequired { to: requested });
    }

    let new_version: u64 = order
        .version
        .checked_add(1)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Order {} version overflow", order.order_id),
        })?;

    let changed_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })?;

    info!(
        order_id = order.order_id,
        actor_id = %actor.id,
        role = %actor.role,
        from = %order.status,
        to = %requested,
        version = new_version,
        "Accepted status change"
    );

    Ok(StatusChangeResponse {
        order_id: order.order_id,
        previous_status: order.status,
        new_status: requested,
        previous_version: order.version,
        new_version,
        changed_by: actor.id.clone(),
        changed_by_role: actor.role,
        changed_at,
        message: format!(
            "Order {} moved from {} to {}",
            order.order_id,
            order.status.label(),
            requested.label()
        ),
    })
}
