// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! State-driven activation of constraint sets.
//!
//! Constraint-based layout engines let you describe geometry as a set of
//! relationships ("this view's top edge sits 8 points below that one").
//! A [`DynamicLayout`] lets you declare, once, which of those relationships
//! should hold under which application state, and then brings the engine in
//! line with a new state by activating and deactivating only what changed.
//!
//! The layout engine itself is external: this crate only needs its constraint
//! handles to be comparable and hashable ([`Constraint`]) and a way to switch
//! them on and off in bulk ([`LayoutEngine`]).
//!
//! ## Example
//!
//! ```
//! use dynamic_layout::{Constraint, DynamicLayout, LayoutEngine, Predicate};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! struct Token(&'static str);
//! impl Constraint for Token {}
//!
//! #[derive(Default)]
//! struct Engine(Vec<Token>);
//! impl LayoutEngine for Engine {
//!     type Token = Token;
//!     fn activate(&mut self, tokens: &[Token]) {
//!         self.0.extend_from_slice(tokens);
//!     }
//!     fn deactivate(&mut self, tokens: &[Token]) {
//!         self.0.retain(|token| !tokens.contains(token));
//!     }
//! }
//!
//! let mut layout = DynamicLayout::<u32, _>::new(Engine::default());
//! layout.configure(|cx| {
//!     cx.when_else(
//!         Predicate::greater_than_or_equal(10),
//!         |cx| cx.constraint(Token("wide")),
//!         |cx| cx.constraint(Token("narrow")),
//!     );
//! });
//!
//! layout.update(1);
//! assert_eq!(layout.engine().0, [Token("narrow")]);
//! layout.update(10);
//! assert_eq!(layout.engine().0, [Token("wide")]);
//! ```
//!
//! ## Execution model
//!
//! Everything here is synchronous and single-threaded. A [`DynamicLayout`]
//! holds no locks; the owner is expected to call [`DynamicLayout::update`]
//! from the same thread the layout engine requires.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod constraint;
pub use constraint::{Constraint, LayoutEngine};

mod sequence;
pub use sequence::{IntoConstraints, activate};

mod group;
pub use group::ConstraintGroup;

mod predicate;
pub use predicate::Predicate;

mod scope;

mod config;
pub use config::Configuration;

mod layout;
pub use layout::DynamicLayout;
