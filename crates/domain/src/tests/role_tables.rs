// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-scoped transition tests.

use crate::{
    ActorRole, CUSTOMER_TRANSITIONS, GLOBAL_TRANSITIONS, INTERNAL_TRANSITIONS, OrderStatus,
    available_transitions, is_transition_allowed_for_role, is_transition_valid,
};

use crate::OrderStatus::{Cancelled, Confirmed, Delivered, Draft, InProduction, Pending, Ready};

fn expected_role_successors(role: ActorRole, from: OrderStatus) -> Vec<OrderStatus> {
    match (role, from) {
        (ActorRole::Customer, Draft) => vec![Pending, Cancelled],
        (ActorRole::Customer, Pending) => vec![Cancelled],
        (ActorRole::Internal, Pending) => vec![Confirmed, Cancelled],
        (ActorRole::Internal, Confirmed) => vec![InProduction, Cancelled],
        (ActorRole::Internal, InProduction) => vec![Ready, Cancelled],
        (ActorRole::Internal, Ready) => vec![Delivered],
        _ => vec![],
    }
}

#[test]
fn test_role_tables_are_subsets_of_global_table() {
    assert!(CUSTOMER_TRANSITIONS.is_subset_of(&GLOBAL_TRANSITIONS));
    assert!(INTERNAL_TRANSITIONS.is_subset_of(&GLOBAL_TRANSITIONS));
    assert!(!GLOBAL_TRANSITIONS.is_subset_of(&CUSTOMER_TRANSITIONS));
}

#[test]
fn test_role_transitions_match_lifecycle_exactly() {
    for role in ActorRole::ALL {
        for from in OrderStatus::ALL {
            assert_eq!(
                available_transitions(role, from).to_vec(),
                expected_role_successors(role, from),
                "{role} from {from}"
            );
        }
    }
}

#[test]
fn test_all_role_transition_triples_exhaustively() {
    for role in ActorRole::ALL {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = expected_role_successors(role, from).contains(&to);
                assert_eq!(
                    is_transition_allowed_for_role(role, from, to),
                    expected,
                    "{role}: {from} -> {to}"
                );
            }
        }
    }
}

#[test]
fn test_no_role_leaves_a_terminal_state() {
    for role in ActorRole::ALL {
        for terminal in [Delivered, Cancelled] {
            assert!(role.transitions().entry(terminal).is_none());
            for to in OrderStatus::ALL {
                assert!(!is_transition_allowed_for_role(role, terminal, to));
            }
        }
    }
}

#[test]
fn test_pending_to_cancelled_is_the_only_shared_edge() {
    let shared: Vec<(OrderStatus, OrderStatus)> = CUSTOMER_TRANSITIONS
        .edges()
        .filter(|(from, to)| INTERNAL_TRANSITIONS.allows(*from, *to))
        .collect();
    assert_eq!(shared, vec![(Pending, Cancelled)]);
}

#[test]
fn test_roles_together_cover_the_global_table() {
    for (from, to) in GLOBAL_TRANSITIONS.edges() {
        assert!(
            CUSTOMER_TRANSITIONS.allows(from, to) || INTERNAL_TRANSITIONS.allows(from, to),
            "{from} -> {to} is reachable by no role"
        );
    }
}

#[test]
fn test_customer_cannot_confirm() {
    assert!(!is_transition_allowed_for_role(
        ActorRole::Customer,
        Pending,
        Confirmed
    ));
}

#[test]
fn test_internal_can_confirm() {
    assert!(is_transition_allowed_for_role(
        ActorRole::Internal,
        Pending,
        Confirmed
    ));
}

#[test]
fn test_customer_can_abandon_draft() {
    assert!(is_transition_allowed_for_role(
        ActorRole::Customer,
        Draft,
        Cancelled
    ));
}

#[test]
fn test_internal_cannot_submit_a_draft() {
    assert!(is_transition_valid(Draft, Pending));
    assert!(!is_transition_allowed_for_role(
        ActorRole::Internal,
        Draft,
        Pending
    ));
    assert!(available_transitions(ActorRole::Internal, Draft).is_empty());
}

#[test]
fn test_customer_has_no_say_after_confirmation() {
    for from in [Confirmed, InProduction, Ready] {
        assert!(available_transitions(ActorRole::Customer, from).is_empty());
    }
}
