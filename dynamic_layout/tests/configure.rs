// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for the scope tree built by `DynamicLayout::configure`.
//!
//! This is an integration test so that it can use the infrastructure in [`common`].

use dynamic_layout::{ConstraintGroup, Predicate};

mod common;
use common::*;

const A: Token = Token(1);
const B: Token = Token(2);
const C: Token = Token(3);

#[test]
fn branch_contents_are_exclusive() {
    let mut layout = layout();
    let log = Log::default();
    let (yes, no) = (log.clone(), log.clone());
    layout.configure(move |cx| {
        cx.when_fn_else(
            |state| state % 2 == 0,
            move |cx| {
                cx.constraints((A, B));
                cx.action(move |state| yes.push(format!("even {state}")));
            },
            move |cx| {
                cx.constraint(C);
                cx.action(move |state| no.push(format!("odd {state}")));
            },
        );
    });

    for state in 0..6 {
        layout.update(state);
        if state % 2 == 0 {
            assert_eq!(active(&layout), [A, B]);
            assert_eq!(log.take(), [format!("even {state}")]);
        } else {
            assert_eq!(active(&layout), [C]);
            assert_eq!(log.take(), [format!("odd {state}")]);
        }
    }
}

#[test]
fn nested_scopes_need_every_enclosing_predicate() {
    let mut layout = layout();
    layout.configure(|cx| {
        cx.when(Predicate::greater_than_or_equal(0), |cx| {
            cx.constraint(A);
            cx.when_fn(|state| state % 2 == 0, |cx| cx.constraint(B));
        });
    });

    layout.update(4);
    assert_eq!(active(&layout), [A, B]);
    layout.update(3);
    assert_eq!(active(&layout), [A]);
    // Even, but the enclosing scope is inactive.
    layout.update(-2);
    assert!(active(&layout).is_empty());
}

#[test]
fn empty_branches_never_resolve() {
    let mut layout = layout();
    layout.configure(|cx| {
        cx.when(Predicate::always(), |cx| {
            cx.when(Predicate::always(), |_| {});
            cx.constraints(());
            cx.constraints(None::<Token>);
            cx.constraints(ConstraintGroup::new());
        });
        cx.when_eq_else(1, |_| {}, |_| {});
        cx.when_eq(2, |cx| cx.constraint(A));
    });

    assert_eq!(layout.scope_count(), 2, "only the root and the `2` scope are kept");
    assert_eq!(layout.active_scope_count(&0), 1);
    assert_eq!(layout.active_scope_count(&2), 2);
}

#[test]
fn otherwise_of_empty_primary_is_reachable() {
    let mut layout = layout();
    layout.configure(|cx| {
        cx.when_eq_else(1, |_| {}, |cx| cx.constraint(A));
    });

    layout.update(1);
    assert!(active(&layout).is_empty());
    layout.update(2);
    assert_eq!(active(&layout), [A]);
}

#[test]
fn combined_predicates() {
    let mut layout = layout();
    layout.configure(|cx| {
        cx.when(
            Predicate::greater_than_or_equal(10).and(Predicate::less_than(20)),
            |cx| cx.constraint(A),
        );
        cx.when(!Predicate::equals(5), |cx| cx.constraint(B));
        cx.when(Predicate::equals(5).or(Predicate::equals(15)), |cx| {
            cx.constraint(C);
        });
    });

    layout.update(5);
    assert_eq!(active(&layout), [C]);
    layout.update(15);
    assert_eq!(active(&layout), [A, B, C]);
    layout.update(25);
    assert_eq!(active(&layout), [B]);
}

#[test]
fn configure_records_state() {
    let mut layout = layout();
    assert!(!layout.is_configured());
    assert_eq!(layout.scope_count(), 1);
    layout.configure(|cx| cx.constraint(A));
    assert!(layout.is_configured());
    assert!(active(&layout).is_empty(), "configure doesn't activate anything");
}

#[test]
#[should_panic(expected = "`DynamicLayout::configure` should only be called once.")]
fn configure_twice() {
    let mut layout = layout();
    layout.configure(|cx| cx.constraint(A));
    layout.configure(|cx| cx.constraint(B));
}

#[test]
#[should_panic(expected = "should only be called once")]
fn configure_twice_after_empty_configuration() {
    let mut layout = layout();
    layout.configure(|_| {});
    layout.configure(|_| {});
}
