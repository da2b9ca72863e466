// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, reason = "Not every test file uses every helper")]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use dynamic_layout::{Constraint, DynamicLayout, LayoutEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Token(pub u32);

impl Constraint for Token {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
    Activate(Vec<Token>),
    Deactivate(Vec<Token>),
}

/// A layout engine which records every call made to it.
#[derive(Debug, Default)]
pub(crate) struct RecordingEngine {
    pub operations: Vec<Operation>,
    pub live: BTreeSet<Token>,
}

impl RecordingEngine {
    /// Return the operations recorded since the last call.
    pub(crate) fn take_operations(&mut self) -> Vec<Operation> {
        std::mem::take(&mut self.operations)
    }
}

impl LayoutEngine for RecordingEngine {
    type Token = Token;

    fn activate(&mut self, tokens: &[Token]) {
        for token in tokens {
            assert!(self.live.insert(*token), "{token:?} activated twice");
        }
        self.operations.push(Operation::Activate(tokens.to_vec()));
    }

    fn deactivate(&mut self, tokens: &[Token]) {
        for token in tokens {
            assert!(self.live.remove(token), "{token:?} deactivated while inactive");
        }
        self.operations.push(Operation::Deactivate(tokens.to_vec()));
    }
}

pub(crate) type TestLayout = DynamicLayout<i32, RecordingEngine>;

pub(crate) fn layout() -> TestLayout {
    DynamicLayout::new(RecordingEngine::default())
}

/// The active set of `layout`, sorted.
pub(crate) fn active(layout: &TestLayout) -> Vec<Token> {
    let mut tokens: Vec<Token> = layout.active_constraints().iter().copied().collect();
    tokens.sort();
    tokens
}

/// Operations recorded since the last call, with each batch sorted.
pub(crate) fn take_sorted(layout: &mut TestLayout) -> Vec<Operation> {
    let mut operations = layout.engine_mut().take_operations();
    for operation in &mut operations {
        match operation {
            Operation::Activate(tokens) | Operation::Deactivate(tokens) => tokens.sort(),
        }
    }
    operations
}

/// A shared log which actions can write to.
#[derive(Clone, Debug, Default)]
pub(crate) struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    pub(crate) fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub(crate) fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}
