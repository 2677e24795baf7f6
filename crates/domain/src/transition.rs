// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status transition engine.
//!
//! The engine holds three immutable tables: the global table of structurally
//! possible moves, and one table per role class narrowing it. Every question
//! is answered with a plain `bool`. Unrecognized tokens are ordinary inputs
//! that yield `false`; the engine never errors, logs, or mutates anything.

use crate::{ActorRole, OrderStatus};
use crate::OrderStatus::{Cancelled, Confirmed, Delivered, Draft, InProduction, Pending, Ready};

type Entries = &'static [(OrderStatus, &'static [OrderStatus])];

/// A mapping from a source status to the statuses reachable from it in one step.
///
/// A status with no entry has no outgoing transitions in this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTable {
    entries: Entries,
}

impl TransitionTable {
    const fn new(entries: Entries) -> Self {
        Self { entries }
    }

    /// Looks up the entry for `from`, if the table defines one.
    #[must_use]
    pub const fn entry(&self, from: OrderStatus) -> Option<&'static [OrderStatus]> {
        let mut i = 0;
        while i < self.entries.len() {
            let (source, targets) = self.entries[i];
            if same_status(source, from) {
                return Some(targets);
            }
            i += 1;
        }
        None
    }

    /// Statuses reachable from `from`; empty when the table has no entry.
    #[must_use]
    pub const fn successors(&self, from: OrderStatus) -> &'static [OrderStatus] {
        match self.entry(from) {
            Some(targets) => targets,
            None => &[],
        }
    }

    /// Returns true if the table contains the edge `from -> to`.
    #[must_use]
    pub const fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        let targets = self.successors(from);
        let mut i = 0;
        while i < targets.len() {
            if same_status(targets[i], to) {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Source statuses that have an entry, in table order.
    pub fn sources(&self) -> impl Iterator<Item = OrderStatus> + '_ {
        self.entries.iter().map(|(source, _)| *source)
    }

    /// Every `(from, to)` edge in the table.
    pub fn edges(&self) -> impl Iterator<Item = (OrderStatus, OrderStatus)> + '_ {
        self.entries
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (*from, *to)))
    }

    /// Returns true if every edge of this table is also an edge of `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.edges().all(|(from, to)| other.allows(from, to))
    }
}

const fn same_status(a: OrderStatus, b: OrderStatus) -> bool {
    a as u8 == b as u8
}

/// Structurally possible transitions, regardless of who asks.
///
/// Every status has an entry. Terminal statuses map to an empty set.
pub const GLOBAL_TRANSITIONS: TransitionTable = TransitionTable::new(GLOBAL_ENTRIES);

const GLOBAL_ENTRIES: Entries = &[
    (Draft, &[Pending, Cancelled]),
    (Pending, &[Confirmed, Cancelled]),
    (Confirmed, &[InProduction, Cancelled]),
    (InProduction, &[Ready, Cancelled]),
    (Ready, &[Delivered]),
    (Delivered, &[]),
    (Cancelled, &[]),
];

/// Transitions a customer may trigger: submit a draft, or abandon the order
/// before staff confirm it.
pub const CUSTOMER_TRANSITIONS: TransitionTable = TransitionTable::new(CUSTOMER_ENTRIES);

const CUSTOMER_ENTRIES: Entries = &[(Draft, &[Pending, Cancelled]), (Pending, &[Cancelled])];

/// Transitions staff may trigger: everything from `Pending` onward.
pub const INTERNAL_TRANSITIONS: TransitionTable = TransitionTable::new(INTERNAL_ENTRIES);

const INTERNAL_ENTRIES: Entries = &[
    (Pending, &[Confirmed, Cancelled]),
    (Confirmed, &[InProduction, Cancelled]),
    (InProduction, &[Ready, Cancelled]),
    (Ready, &[Delivered]),
];

/// Returns true if `next` is reachable from `current` in one step.
#[must_use]
pub const fn is_transition_valid(current: OrderStatus, next: OrderStatus) -> bool {
    GLOBAL_TRANSITIONS.allows(current, next)
}

/// Returns true if `role` may move an order from `current` to `next`.
///
/// The role table is checked together with the global table, so a `true`
/// here always implies [`is_transition_valid`] for the same pair.
#[must_use]
pub const fn is_transition_allowed_for_role(
    role: ActorRole,
    current: OrderStatus,
    next: OrderStatus,
) -> bool {
    role.transitions().allows(current, next) && is_transition_valid(current, next)
}

/// [`is_transition_valid`] over raw tokens.
///
/// Unrecognized tokens yield `false`.
#[must_use]
pub fn is_transition_valid_token(current: &str, next: &str) -> bool {
    match (OrderStatus::from_token(current), OrderStatus::from_token(next)) {
        (Some(current), Some(next)) => is_transition_valid(current, next),
        _ => false,
    }
}

/// [`is_transition_allowed_for_role`] over raw tokens.
///
/// Unrecognized role or status tokens yield `false`.
#[must_use]
pub fn is_transition_allowed_for_role_token(role: &str, current: &str, next: &str) -> bool {
    match (
        ActorRole::from_token(role),
        OrderStatus::from_token(current),
        OrderStatus::from_token(next),
    ) {
        (Some(role), Some(current), Some(next)) => {
            is_transition_allowed_for_role(role, current, next)
        }
        _ => false,
    }
}

/// Statuses `role` may move an order to from `current`.
///
/// This is exactly the set of transition buttons a UI should offer.
#[must_use]
pub const fn available_transitions(
    role: ActorRole,
    current: OrderStatus,
) -> &'static [OrderStatus] {
    role.transitions().successors(current)
}

/// Every status, derived from the keys of the global table.
#[must_use]
pub fn all_states() -> Vec<OrderStatus> {
    GLOBAL_TRANSITIONS.sources().collect()
}

/// Statuses with no outgoing transition, derived from the global table.
#[must_use]
pub fn terminal_states() -> Vec<OrderStatus> {
    GLOBAL_TRANSITIONS
        .sources()
        .filter(|status| GLOBAL_TRANSITIONS.successors(*status).is_empty())
        .collect()
}
