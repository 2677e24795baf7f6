// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use bakery_orders_domain::{ActorRole, OrderStatus};

use crate::{AuthenticatedActor, ChangeStatusRequest, OrderSnapshot};

pub fn create_test_customer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("client-42"), ActorRole::Customer)
}

pub fn create_test_staff() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("staff-7"), ActorRole::Internal)
}

pub const fn create_test_order(status: OrderStatus) -> OrderSnapshot {
    OrderSnapshot {
        order_id: 1001,
        status,
        version: 3,
    }
}

pub fn create_change_request(requested_status: &str) -> ChangeStatusRequest {
    ChangeStatusRequest {
        requested_status: requested_status.to_string(),
        expected_version: Some(3),
        confirmed: false,
    }
}
