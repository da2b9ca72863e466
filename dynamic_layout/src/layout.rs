// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use tracing::{debug, trace, trace_span};

use crate::scope::{ScopeArena, ScopeId};
use crate::{Configuration, LayoutEngine};

/// A set of constraints and callbacks which follows application state.
///
/// A `DynamicLayout` is [configured](Self::configure) once with a tree of
/// predicate-gated scopes, then [updated](Self::update) with each new state.
/// Every update brings the layout engine in line with the scopes active for
/// that state, touching only the tokens whose activation actually changes.
///
/// `State` is the application state the predicates and actions observe, and
/// `E` is the layout engine which owns the tokens.
pub struct DynamicLayout<State, E: LayoutEngine> {
    engine: E,
    scopes: ScopeArena<State, E::Token>,
    /// Every token activated by the last update.
    active: HashSet<E::Token>,
    /// The tokens of `active`, in the order they were first declared.
    active_order: Vec<E::Token>,
    configured: bool,
}

impl<State, E: LayoutEngine> DynamicLayout<State, E> {
    /// Create an unconfigured layout driving `engine`.
    ///
    /// Until [`configure`](Self::configure) is called, updates do nothing.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            scopes: ScopeArena::new(),
            active: HashSet::new(),
            active_order: Vec::new(),
            configured: false,
        }
    }

    /// Declare the scopes of this layout.
    ///
    /// # Panics
    ///
    /// If this layout has already been configured. The panic message points at
    /// the offending call.
    #[track_caller]
    pub fn configure(&mut self, configure: impl FnOnce(&mut Configuration<'_, State, E::Token>)) {
        if self.configured {
            panic!("`DynamicLayout::configure` should only be called once.");
        }
        self.configured = true;
        configure(&mut Configuration::new(&mut self.scopes, ScopeId::ROOT));
        debug!(scopes = self.scopes.len(), "configured dynamic layout");
    }

    /// Bring the layout engine in line with `state`, then run the actions of
    /// every active scope.
    ///
    /// Tokens which leave the active set are deactivated before those which
    /// join it are activated; tokens in both sets are left alone. Actions run
    /// on every update, in declaration order (a scope's own actions before
    /// those of its nested scopes).
    pub fn update(&mut self, state: State) {
        let _span = trace_span!("DynamicLayout::update").entered();

        let mut active_scopes = Vec::new();
        self.scopes.resolve(ScopeId::ROOT, &state, &mut active_scopes);

        let mut next = HashSet::with_capacity(self.active.len());
        let mut next_order = Vec::with_capacity(self.active_order.len());
        let mut to_activate = Vec::new();
        for id in &active_scopes {
            for token in &self.scopes.get(*id).constraints {
                if next.insert(token.clone()) {
                    next_order.push(token.clone());
                    if !self.active.contains(token) {
                        to_activate.push(token.clone());
                    }
                }
            }
        }
        let to_deactivate: Vec<_> = self
            .active_order
            .iter()
            .filter(|token| !next.contains(*token))
            .cloned()
            .collect();

        if !to_deactivate.is_empty() {
            self.engine.deactivate(&to_deactivate);
        }
        if !to_activate.is_empty() {
            self.engine.activate(&to_activate);
        }
        self.active = next;
        self.active_order = next_order;

        let mut actions = 0;
        for id in active_scopes.iter().copied() {
            for action in &mut self.scopes.get_mut(id).actions {
                action(&state);
                actions += 1;
            }
        }

        trace!(
            scopes = active_scopes.len(),
            activated = to_activate.len(),
            deactivated = to_deactivate.len(),
            actions,
            "updated dynamic layout"
        );
    }

    /// The tokens activated by the last [`update`](Self::update).
    ///
    /// Empty before the first update.
    pub fn active_constraints(&self) -> &HashSet<E::Token> {
        &self.active
    }

    /// Whether `token` was activated by the last [`update`](Self::update).
    pub fn is_active(&self, token: &E::Token) -> bool {
        self.active.contains(token)
    }

    /// How many scopes, including the root, would be active for `state`.
    ///
    /// This does not touch the layout engine or run any actions.
    pub fn active_scope_count(&self, state: &State) -> usize {
        let mut active_scopes = Vec::new();
        self.scopes.resolve(ScopeId::ROOT, state, &mut active_scopes);
        active_scopes.len()
    }

    /// How many scopes were kept by [`configure`](Self::configure), including the root.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Whether [`configure`](Self::configure) has been called.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// The layout engine this layout drives.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the layout engine.
    ///
    /// Activating or deactivating tokens managed by this layout through this
    /// reference will not be noticed by the next update.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consume this layout, returning its engine.
    ///
    /// Tokens which are active stay active.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

impl<State, E: LayoutEngine + Default> Default for DynamicLayout<State, E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<State, E> fmt::Debug for DynamicLayout<State, E>
where
    E: LayoutEngine + fmt::Debug,
    E::Token: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicLayout")
            .field("engine", &self.engine)
            .field("scopes", &self.scopes)
            .field("active", &self.active_order)
            .field("configured", &self.configured)
            .finish_non_exhaustive()
    }
}
