// Copyright 2026 the Dynamic Layout Authors
// SPDX-License-Identifier: Apache-2.0

//! A toy layout engine driven by a window width.
//!
//! Run with `RUST_LOG=trace` to see what each update does.

use std::collections::BTreeSet;

use dynamic_layout::{Constraint, ConstraintGroup, DynamicLayout, LayoutEngine, Predicate};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Rule {
    SidebarBesideContent,
    SidebarAboveContent,
    SidebarWidth,
    ContentFillsWindow,
    WideMargins,
}

impl Constraint for Rule {}

#[derive(Debug, Default)]
struct PrintingEngine {
    live: BTreeSet<Rule>,
}

impl LayoutEngine for PrintingEngine {
    type Token = Rule;

    fn activate(&mut self, tokens: &[Rule]) {
        println!("  + {tokens:?}");
        self.live.extend(tokens);
    }

    fn deactivate(&mut self, tokens: &[Rule]) {
        println!("  - {tokens:?}");
        for token in tokens {
            self.live.remove(token);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Width(f64);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let sidebar = ConstraintGroup::<Rule>::new()
        .with_identifier("sidebar")
        .with((Rule::SidebarBesideContent, Rule::SidebarWidth));

    let mut layout = DynamicLayout::<Width, _>::new(PrintingEngine::default());
    layout.configure(|cx| {
        cx.constraint(Rule::ContentFillsWindow);
        cx.when_else(
            Predicate::greater_than_or_equal(Width(600.)),
            |cx| {
                cx.constraints(&sidebar);
                cx.when(Predicate::greater_than_or_equal(Width(1200.)), |cx| {
                    cx.constraint(Rule::WideMargins);
                });
            },
            |cx| {
                cx.constraint(Rule::SidebarAboveContent);
                cx.action(|width: &Width| println!("  compact layout at {}pt", width.0));
            },
        );
    });

    for width in [320., 800., 1440., 1024., 320.] {
        println!("width = {width}");
        layout.update(Width(width));
        println!("  live: {:?}", layout.engine().live);
    }
}
