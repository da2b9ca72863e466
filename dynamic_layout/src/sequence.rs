// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! Flattening of nested token collections.

use alloc::vec::Vec;

use crate::{Constraint, LayoutEngine};

/// Something which can be flattened into an ordered list of tokens.
///
/// This is implemented for:
/// - every [`Constraint`] (a single token),
/// - `Vec<C>` and `[C; N]`,
/// - `Option<T>` (contributes nothing when `None`),
/// - [`ConstraintGroup`](crate::ConstraintGroup),
/// - `()` and tuples of up to eight flattenable items, which may be mixed.
///
/// ```
/// # use dynamic_layout::{Constraint, IntoConstraints};
/// # #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// # struct Token(u8);
/// # impl Constraint for Token {}
/// let tokens: Vec<Token> = (Token(0), vec![Token(1), Token(2)], None::<Token>, [Token(3)]).into_constraints();
/// assert_eq!(tokens, [Token(0), Token(1), Token(2), Token(3)]);
/// ```
pub trait IntoConstraints<C: Constraint> {
    /// Append all tokens of `self` to `tokens`, in order.
    fn append_to(self, tokens: &mut Vec<C>);

    /// Collect all tokens of `self` into a new `Vec`, in order.
    fn into_constraints(self) -> Vec<C>
    where
        Self: Sized,
    {
        let mut tokens = Vec::new();
        self.append_to(&mut tokens);
        tokens
    }
}

/// Activate a batch of tokens right away, outside of any [`DynamicLayout`](crate::DynamicLayout).
///
/// Returns the flattened tokens so that they can be deactivated later.
pub fn activate<E: LayoutEngine>(
    engine: &mut E,
    tokens: impl IntoConstraints<E::Token>,
) -> Vec<E::Token> {
    let tokens = tokens.into_constraints();
    engine.activate(&tokens);
    tokens
}

impl<C: Constraint> IntoConstraints<C> for C {
    fn append_to(self, tokens: &mut Vec<C>) {
        tokens.push(self);
    }
}

impl<C: Constraint> IntoConstraints<C> for Vec<C> {
    fn append_to(mut self, tokens: &mut Vec<C>) {
        tokens.append(&mut self);
    }
}

impl<C: Constraint, const N: usize> IntoConstraints<C> for [C; N] {
    fn append_to(self, tokens: &mut Vec<C>) {
        tokens.extend(self);
    }
}

impl<C: Constraint, T: IntoConstraints<C>> IntoConstraints<C> for Option<T> {
    fn append_to(self, tokens: &mut Vec<C>) {
        if let Some(inner) = self {
            inner.append_to(tokens);
        }
    }
}

impl<C: Constraint> IntoConstraints<C> for () {
    fn append_to(self, _: &mut Vec<C>) {}
}

macro_rules! impl_constraints_tuple {
    ($($item: ident, $idx: tt);+) => {
        impl<C: Constraint, $($item: IntoConstraints<C>),+> IntoConstraints<C> for ($($item,)+) {
            fn append_to(self, tokens: &mut Vec<C>) {
                $(self.$idx.append_to(tokens);)+
            }
        }
    };
}

impl_constraints_tuple!(T0, 0);
impl_constraints_tuple!(T0, 0; T1, 1);
impl_constraints_tuple!(T0, 0; T1, 1; T2, 2);
impl_constraints_tuple!(T0, 0; T1, 1; T2, 2; T3, 3);
impl_constraints_tuple!(T0, 0; T1, 1; T2, 2; T3, 3; T4, 4);
impl_constraints_tuple!(T0, 0; T1, 1; T2, 2; T3, 3; T4, 4; T5, 5);
impl_constraints_tuple!(T0, 0; T1, 1; T2, 2; T3, 3; T4, 4; T5, 5; T6, 6);
impl_constraints_tuple!(T0, 0; T1, 1; T2, 2; T3, 3; T4, 4; T5, 5; T6, 6; T7, 7);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Token(u32);
    impl Constraint for Token {}

    #[test]
    fn nested_collections_flatten_in_order() {
        let tokens: Vec<Token> = (
            Token(0),
            (vec![Token(1), Token(2)], ()),
            Some([Token(3), Token(4)]),
            None::<Token>,
        )
            .into_constraints();
        assert_eq!(
            tokens,
            [Token(0), Token(1), Token(2), Token(3), Token(4)],
            "tokens should keep declaration order"
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let tokens: Vec<Token> = (Token(7), Token(7)).into_constraints();
        assert_eq!(tokens.len(), 2, "flattening must not deduplicate");
    }

    #[derive(Default)]
    struct Counter(usize);

    impl LayoutEngine for Counter {
        type Token = Token;
        fn activate(&mut self, tokens: &[Token]) {
            self.0 += tokens.len();
        }
        fn deactivate(&mut self, tokens: &[Token]) {
            self.0 -= tokens.len();
        }
    }

    #[test]
    fn activate_returns_flattened_tokens() {
        let mut engine = Counter::default();
        let tokens = activate(&mut engine, (Token(1), [Token(2), Token(3)]));
        assert_eq!(engine.0, 3, "all tokens should be activated");
        assert_eq!(tokens, [Token(1), Token(2), Token(3)], "tokens returned in order");
    }
}
