// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, authenticate_stub};
pub use capabilities::compute_order_capabilities;
pub use error::{ApiError, AuthError, TransitionError, translate_domain_error};
pub use handlers::change_order_status;
pub use request_response::{
    Capability, ChangeStatusRequest, OrderCapabilities, OrderSnapshot, StatusChangeResponse,
    TransitionCapability,
};
