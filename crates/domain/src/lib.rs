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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod actor_role;
mod error;
mod order_status;
mod transition;

#[cfg(test)]
mod tests;

pub use actor_role::ActorRole;
pub use error::DomainError;
pub use order_status::OrderStatus;
pub use transition::{
    CUSTOMER_TRANSITIONS, GLOBAL_TRANSITIONS, INTERNAL_TRANSITIONS, TransitionTable,
    all_states, available_transitions, is_transition_allowed_for_role,
    is_transition_allowed_for_role_token, is_transition_valid, is_transition_valid_token,
    terminal_states,
};
