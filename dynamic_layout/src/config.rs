// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use core::fmt;

use tracing::trace;

use crate::scope::{ScopeArena, ScopeId};
use crate::{Constraint, IntoConstraints, Predicate};

/// The handle used to declare scopes, given to [`DynamicLayout::configure`](crate::DynamicLayout::configure).
///
/// Each handle inserts into exactly one scope. Nested calls such as
/// [`when`](Self::when) hand their body a new handle for the nested scope,
/// so declarations made inside a body can never leak into a sibling or into
/// the enclosing scope.
///
/// Scopes which end up declaring nothing are pruned immediately, so they cost
/// nothing during [`update`](crate::DynamicLayout::update).
pub struct Configuration<'a, State, C> {
    arena: &'a mut ScopeArena<State, C>,
    scope: ScopeId,
}

impl<'a, State, C: Constraint> Configuration<'a, State, C> {
    pub(crate) fn new(arena: &'a mut ScopeArena<State, C>, scope: ScopeId) -> Self {
        Self { arena, scope }
    }

    /// Declare a nested scope which is active only while `predicate` holds.
    ///
    /// `body` receives the handle for the nested scope.
    pub fn when(
        &mut self,
        predicate: Predicate<State>,
        body: impl FnOnce(&mut Configuration<'_, State, C>),
    ) {
        let primary = self.build(predicate, body);
        self.attach(primary);
    }

    /// Declare a nested scope active while `predicate` holds, and an
    /// alternative scope active while it does not.
    ///
    /// The alternative is kept whenever it declares something, even if `body`
    /// declares nothing: the pair then behaves like `when(!predicate, otherwise)`.
    pub fn when_else(
        &mut self,
        predicate: Predicate<State>,
        body: impl FnOnce(&mut Configuration<'_, State, C>),
        otherwise: impl FnOnce(&mut Configuration<'_, State, C>),
    ) {
        let primary = self.build(predicate, body);
        let alternative = self.build(Predicate::always(), otherwise);
        if self.arena.get(alternative).has_content() {
            self.arena.get_mut(primary).otherwise = Some(alternative);
        } else {
            self.arena.discard_from(alternative);
        }
        self.attach(primary);
    }

    /// Like [`when`](Self::when), with the predicate given as a closure.
    pub fn when_fn(
        &mut self,
        test: impl Fn(&State) -> bool + 'static,
        body: impl FnOnce(&mut Configuration<'_, State, C>),
    ) {
        self.when(Predicate::new(test), body);
    }

    /// Like [`when_else`](Self::when_else), with the predicate given as a closure.
    pub fn when_fn_else(
        &mut self,
        test: impl Fn(&State) -> bool + 'static,
        body: impl FnOnce(&mut Configuration<'_, State, C>),
        otherwise: impl FnOnce(&mut Configuration<'_, State, C>),
    ) {
        self.when_else(Predicate::new(test), body, otherwise);
    }

    /// Append tokens to the current scope.
    ///
    /// Duplicates are allowed, both within a scope and across scopes; each
    /// distinct token is activated at most once.
    pub fn constraints(&mut self, tokens: impl IntoConstraints<C>) {
        tokens.append_to(&mut self.arena.get_mut(self.scope).constraints);
    }

    /// Append a single token to the current scope.
    pub fn constraint(&mut self, token: C) {
        self.arena.get_mut(self.scope).constraints.push(token);
    }

    /// Register a callback, run on every update during which the current scope is active.
    pub fn action(&mut self, action: impl FnMut(&State) + 'static) {
        self.arena.get_mut(self.scope).actions.push(Box::new(action));
    }

    /// Register a callback which doesn't need the state.
    ///
    /// See [`action`](Self::action).
    pub fn action_fn(&mut self, mut action: impl FnMut() + 'static) {
        self.action(move |_| action());
    }

    fn build(
        &mut self,
        predicate: Predicate<State>,
        body: impl FnOnce(&mut Configuration<'_, State, C>),
    ) -> ScopeId {
        let id = self.arena.insert(predicate);
        body(&mut Configuration::new(&mut *self.arena, id));
        id
    }

    fn attach(&mut self, id: ScopeId) {
        if self.arena.get(id).has_content() {
            self.arena.get_mut(self.scope).children.push(id);
        } else {
            trace!(parent = ?self.scope, "pruned empty scope");
            self.arena.discard_from(id);
        }
    }
}

impl<State: PartialEq + 'static, C: Constraint> Configuration<'_, State, C> {
    /// Like [`when`](Self::when), active while the state equals `value`.
    pub fn when_eq(&mut self, value: State, body: impl FnOnce(&mut Configuration<'_, State, C>)) {
        self.when(Predicate::equals(value), body);
    }

    /// Like [`when_else`](Self::when_else), choosing on whether the state equals `value`.
    pub fn when_eq_else(
        &mut self,
        value: State,
        body: impl FnOnce(&mut Configuration<'_, State, C>),
        otherwise: impl FnOnce(&mut Configuration<'_, State, C>),
    ) {
        self.when_else(Predicate::equals(value), body, otherwise);
    }
}

impl<State, C> fmt::Debug for Configuration<'_, State, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
