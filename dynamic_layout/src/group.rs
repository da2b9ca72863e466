// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;
use core::panic::Location;

use crate::{Constraint, IntoConstraints, LayoutEngine};

/// An ordered bundle of tokens which belong together, such as the four edge
/// constraints pinning a view inside its parent.
///
/// Groups remember where they were created, and may carry an identifier, which
/// is useful when the layout engine reports conflicting constraints.
/// A group can be passed anywhere [`IntoConstraints`] is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintGroup<C> {
    constraints: Vec<C>,
    identifier: Option<String>,
    location: &'static Location<'static>,
}

impl<C: Constraint> ConstraintGroup<C> {
    /// Create an empty group, recording the caller's location.
    #[track_caller]
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            identifier: None,
            location: Location::caller(),
        }
    }

    /// Builder-style method to set the identifier of this group.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Builder-style method to append tokens to this group.
    pub fn with(mut self, tokens: impl IntoConstraints<C>) -> Self {
        self.push(tokens);
        self
    }

    /// Append tokens to this group.
    pub fn push(&mut self, tokens: impl IntoConstraints<C>) {
        tokens.append_to(&mut self.constraints);
    }

    /// The tokens of this group, in the order they were added.
    pub fn constraints(&self) -> &[C] {
        &self.constraints
    }

    /// The identifier given with [`with_identifier`](Self::with_identifier), if any.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// The source location where this group was created.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The number of tokens in this group.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether this group contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Activate every token of this group in `engine`.
    ///
    /// This bypasses any [`DynamicLayout`](crate::DynamicLayout): tokens activated
    /// this way should not also be managed by one.
    pub fn activate<E>(&self, engine: &mut E) -> &[C]
    where
        E: LayoutEngine<Token = C>,
    {
        engine.activate(&self.constraints);
        &self.constraints
    }
}

impl<C: Constraint> Default for ConstraintGroup<C> {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Constraint> IntoConstraints<C> for ConstraintGroup<C> {
    fn append_to(mut self, tokens: &mut Vec<C>) {
        tokens.append(&mut self.constraints);
    }
}

impl<C: Constraint> IntoConstraints<C> for &ConstraintGroup<C> {
    fn append_to(self, tokens: &mut Vec<C>) {
        tokens.extend_from_slice(&self.constraints);
    }
}
