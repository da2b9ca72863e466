// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use core::fmt;
use core::ops::Not;

/// A pure test on the application state, gating entry into a scope.
///
/// Predicates should be total and free of side effects: they may be evaluated
/// any number of times per [`update`](crate::DynamicLayout::update), or not at
/// all if an enclosing scope is inactive.
pub struct Predicate<State> {
    kind: PredicateKind<State>,
}

enum PredicateKind<State> {
    Always,
    Test(Box<dyn Fn(&State) -> bool>),
}

impl<State> Predicate<State> {
    /// Create a predicate from a closure.
    pub fn new(test: impl Fn(&State) -> bool + 'static) -> Self {
        Self {
            kind: PredicateKind::Test(Box::new(test)),
        }
    }

    /// A predicate which holds for every state.
    pub fn always() -> Self {
        Self {
            kind: PredicateKind::Always,
        }
    }

    /// Evaluate this predicate against `state`.
    pub fn evaluate(&self, state: &State) -> bool {
        match &self.kind {
            PredicateKind::Always => true,
            PredicateKind::Test(test) => test(state),
        }
    }

    /// Whether this predicate was created with [`always`](Self::always).
    pub fn is_always(&self) -> bool {
        matches!(self.kind, PredicateKind::Always)
    }
}

impl<State: 'static> Predicate<State> {
    /// A predicate which holds when both `self` and `other` hold.
    ///
    /// `other` is only evaluated if `self` holds.
    pub fn and(self, other: Self) -> Self {
        match (self.kind, other.kind) {
            (PredicateKind::Always, kind) | (kind, PredicateKind::Always) => Self { kind },
            (PredicateKind::Test(lhs), PredicateKind::Test(rhs)) => {
                Self::new(move |state| lhs(state) && rhs(state))
            }
        }
    }

    /// A predicate which holds when either `self` or `other` holds.
    ///
    /// `other` is only evaluated if `self` does not hold.
    pub fn or(self, other: Self) -> Self {
        match (self.kind, other.kind) {
            (PredicateKind::Always, _) | (_, PredicateKind::Always) => Self::always(),
            (PredicateKind::Test(lhs), PredicateKind::Test(rhs)) => {
                Self::new(move |state| lhs(state) || rhs(state))
            }
        }
    }
}

impl<State: PartialEq + 'static> Predicate<State> {
    /// A predicate which holds when the state equals `value`.
    pub fn equals(value: State) -> Self {
        Self::new(move |state| *state == value)
    }
}

impl<State: PartialOrd + 'static> Predicate<State> {
    /// A predicate which holds when the state is at least `value`.
    pub fn greater_than_or_equal(value: State) -> Self {
        Self::new(move |state| *state >= value)
    }

    /// A predicate which holds when the state is strictly below `value`.
    pub fn less_than(value: State) -> Self {
        Self::new(move |state| *state < value)
    }
}

impl<State: 'static> Not for Predicate<State> {
    type Output = Self;

    fn not(self) -> Self {
        match self.kind {
            PredicateKind::Always => Self::new(|_| false),
            PredicateKind::Test(test) => Self::new(move |state| !test(state)),
        }
    }
}

impl<State> Default for Predicate<State> {
    fn default() -> Self {
        Self::always()
    }
}

impl<State> fmt::Debug for Predicate<State> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PredicateKind::Always => f.write_str("Predicate::always()"),
            PredicateKind::Test(_) => f.write_str("Predicate(..)"),
        }
    }
}
