// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! The seam between this crate and the layout engine which owns constraints.

use core::hash::Hash;

/// A handle to one geometric relationship owned by an external layout engine.
///
/// Tokens are opaque to this crate: they are cloned, compared and hashed, but
/// never interpreted. Whether equality means identity (two handles to the same
/// engine object) or value (two descriptions of the same relationship) is up to
/// the engine.
///
/// This trait has no methods, and should be implemented alongside the engine's
/// token type:
/// ```ignore
/// impl Constraint for NativeConstraint {}
/// ```
///
/// ## Details
///
/// Because `Constraint` is not generic, the orphan rules prevent it from being
/// implemented for foreign types such as `Vec<_>`, `Option<_>` or tuples.
/// This is what allows [`IntoConstraints`](crate::IntoConstraints) to be
/// implemented both for every `Constraint` and for collections of them.
pub trait Constraint: Clone + Eq + Hash {}

/// The external mechanism which switches [`Constraint`]s on and off.
///
/// Activation is assumed to always succeed. Implementations must accept tokens
/// which are already in the requested state, although
/// [`DynamicLayout`](crate::DynamicLayout) never asks for that.
pub trait LayoutEngine {
    /// The constraint handle type of this engine.
    type Token: Constraint;

    /// Make every token in `tokens` participate in layout.
    fn activate(&mut self, tokens: &[Self::Token]);

    /// Remove every token in `tokens` from layout.
    fn deactivate(&mut self, tokens: &[Self::Token]);
}

impl<E: LayoutEngine + ?Sized> LayoutEngine for &mut E {
    type Token = E::Token;

    fn activate(&mut self, tokens: &[Self::Token]) {
        (**self).activate(tokens);
    }

    fn deactivate(&mut self, tokens: &[Self::Token]) {
        (**self).deactivate(tokens);
    }
}
