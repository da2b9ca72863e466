// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! The scope tree, stored as an arena.
//!
//! Scopes are only ever appended, and a scope's descendants are always
//! allocated after it. Discarding a scope together with everything built
//! inside it is therefore a truncation of the arena.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Predicate;

pub(crate) type Action<State> = Box<dyn FnMut(&State)>;

/// Index of a [`Scope`] within its [`ScopeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ScopeId(usize);

impl ScopeId {
    pub(crate) const ROOT: Self = Self(0);
}

/// A predicate-gated node of the tree.
pub(crate) struct Scope<State, C> {
    pub(crate) predicate: Predicate<State>,
    pub(crate) constraints: Vec<C>,
    pub(crate) actions: Vec<Action<State>>,
    pub(crate) children: Vec<ScopeId>,
    /// Reached instead of this scope when its predicate fails.
    pub(crate) otherwise: Option<ScopeId>,
}

impl<State, C> Scope<State, C> {
    fn new(predicate: Predicate<State>) -> Self {
        Self {
            predicate,
            constraints: Vec::new(),
            actions: Vec::new(),
            children: Vec::new(),
            otherwise: None,
        }
    }

    /// Whether this scope would contribute anything when reached.
    ///
    /// Empty children are never attached, so a non-empty `children` list
    /// implies some descendant has content.
    pub(crate) fn has_content(&self) -> bool {
        !self.constraints.is_empty()
            || !self.actions.is_empty()
            || !self.children.is_empty()
            || self.otherwise.is_some()
    }
}

impl<State, C: fmt::Debug> fmt::Debug for Scope<State, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("predicate", &self.predicate)
            .field("constraints", &self.constraints)
            .field("actions", &self.actions.len())
            .field("children", &self.children)
            .field("otherwise", &self.otherwise)
            .finish()
    }
}

/// Owner of every [`Scope`] of one layout. Index 0 is the always-true root.
pub(crate) struct ScopeArena<State, C> {
    scopes: Vec<Scope<State, C>>,
}

impl<State, C> ScopeArena<State, C> {
    pub(crate) fn new() -> Self {
        Self {
            scopes: alloc::vec![Scope::new(Predicate::always())],
        }
    }

    pub(crate) fn insert(&mut self, predicate: Predicate<State>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope::new(predicate));
        id
    }

    /// Remove `id` and every scope allocated after it.
    ///
    /// The caller must have been the one to allocate `id`, and must not have
    /// linked it (or anything after it) into a surviving scope.
    pub(crate) fn discard_from(&mut self, id: ScopeId) {
        debug_assert_ne!(id, ScopeId::ROOT, "the root scope cannot be discarded");
        self.scopes.truncate(id.0);
    }

    pub(crate) fn get(&self, id: ScopeId) -> &Scope<State, C> {
        &self.scopes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: ScopeId) -> &mut Scope<State, C> {
        &mut self.scopes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Append the scopes reached for `state`, starting at `id`, to `active`.
    ///
    /// The traversal is depth-first and pre-order: a scope comes before its
    /// children, and children come in declaration order. When a scope's
    /// predicate fails, its `otherwise` scope (if any) is resolved in its place.
    pub(crate) fn resolve(&self, id: ScopeId, state: &State, active: &mut Vec<ScopeId>) {
        let scope = self.get(id);
        if scope.predicate.evaluate(state) {
            active.push(id);
            for child in &scope.children {
                self.resolve(*child, state, active);
            }
        } else if let Some(otherwise) = scope.otherwise {
            self.resolve(otherwise, state, active);
        }
    }
}

impl<State, C: fmt::Debug> fmt::Debug for ScopeArena<State, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.scopes).finish()
    }
}
