//! # Equation Segmentation
//!
//! Splits a mixed plain-text/markup string into an ordered sequence of typed
//! spans: plain text plus three kinds of equation regions (`$...$`,
//! `$$...$$`, and `\begin{equation}...\end{equation}`), then groups adjacent
//! inline spans into renderable blocks.
//!
//! ## Architecture
//!
//! Segmentation has two layers, consumed leaf-first by the rendering side:
//!
//! - **Classifier** ([`kinds`], [`grammar`]): the recognized span kinds,
//!   their delimiter text, and the regex pair (opening/full pattern,
//!   terminator pattern) that recognizes each kind. Delimiter knowledge is
//!   owned here; the scanner never hardcodes `$` or `\end{equation}`.
//! - **Scanner** ([`scanner`], [`blocks`]): finds the earliest surviving
//!   match among all registered grammars, extends recursion-capable matches
//!   to the last terminator occurrence, emits components over a shrinking
//!   remainder, and groups the result into [`ComponentBlock`]s.
//!
//! ## The No-Failure Contract
//!
//! Scanning cannot fail. Unterminated or escaped delimiter syntax falls
//! through to plain text; the recursive grammar may greedily consume to a
//! later, unrelated terminator. Surprising output is possible, errors are
//! not. The only fallible surface in this crate is building a custom
//! [`GrammarSet`] from user-supplied patterns.
//!
//! ## Modules
//!
//! - **`kinds`**: [`SpanKind`] and the delimiter literals each kind owns
//! - **`grammar`**: [`EquationGrammar`], the ordered [`GrammarSet`] registry
//! - **`types`**: [`Component`] and [`RenderMode`]
//! - **`span`**: byte-range [`Span`] into the scanned input
//! - **`scanner`**: the recursive component scan
//! - **`blocks`**: [`ComponentBlock`] grouping of scan output
//! - **`invariants`**: runtime checks used by tests

pub mod blocks;
pub mod grammar;
pub mod invariants;
pub mod kinds;
pub mod scanner;
pub mod span;
pub mod types;

pub use blocks::{ComponentBlock, group};
pub use grammar::{EquationGrammar, GrammarError, GrammarSet};
pub use kinds::SpanKind;
pub use span::Span;
pub use types::{Component, RenderMode};

/// Scans `input` into a flat component sequence using the default grammars.
///
/// The result covers the input exactly: concatenating each component's
/// [`Component::delimited_text`] reproduces `input`.
pub fn scan(input: &str) -> Vec<Component> {
    GrammarSet::default_set().scan(input)
}

/// Segments `input` into renderable blocks using the default grammars.
///
/// See [`GrammarSet::segment`] for the grouping rules and the
/// [`RenderMode::InlineOnly`] override.
pub fn segment(input: &str, mode: RenderMode) -> Vec<ComponentBlock> {
    GrammarSet::default_set().segment(input, mode)
}
