//! Grouping of scanned components into renderable blocks.
//!
//! The rendering layer lays out a block of inline components as one text
//! flow and a non-inline component as a standalone unit. Grouping therefore
//! merges each maximal run of consecutive inline components (plain text and
//! `$...$` spans) into one block and gives every display equation a block of
//! its own. Blocks partition the component sequence: flattening them in
//! order reproduces the scan output exactly.

use serde::{Deserialize, Serialize};

use super::grammar::GrammarSet;
use super::kinds::SpanKind;
use super::span::Span;
use super::types::{Component, RenderMode};

/// A renderable group of adjacent components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBlock {
    /// Components in source order. Never empty.
    pub components: Vec<Component>,
}

impl ComponentBlock {
    /// True when this block is a run of inline components rather than a
    /// standalone display equation.
    pub fn is_inline_run(&self) -> bool {
        self.components.iter().all(|c| c.is_inline())
    }
}

/// Groups components into blocks.
///
/// Re-running this on the flattened components of its own output yields
/// the same grouping.
pub fn group(components: Vec<Component>) -> Vec<ComponentBlock> {
    let mut builder = BlockBuilder::new();
    for component in components {
        builder.push(component);
    }
    builder.finish()
}

impl GrammarSet {
    /// Segments `input` into renderable blocks.
    ///
    /// # Arguments
    /// - `input`: the document text
    /// - `mode`: [`RenderMode::Document`] scans and groups;
    ///   [`RenderMode::InlineOnly`] skips scanning and wraps the whole
    ///   input in a single inline-equation component inside one block.
    ///
    /// # Returns
    /// An order-preserving partition of the scan output. Never fails; an
    /// empty input yields an empty sequence in `Document` mode.
    pub fn segment(&self, input: &str, mode: RenderMode) -> Vec<ComponentBlock> {
        if mode == RenderMode::InlineOnly {
            let component = Component {
                text: input.to_string(),
                kind: SpanKind::InlineEquation,
                span: Span::new(0, input.len()),
            };
            return vec![ComponentBlock {
                components: vec![component],
            }];
        }
        group(self.scan(input))
    }
}

/// Accumulates components into blocks with flush semantics.
struct BlockBuilder {
    pending: Vec<Component>,
    out: Vec<ComponentBlock>,
}

impl BlockBuilder {
    fn new() -> Self {
        Self {
            pending: Vec::new(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, component: Component) {
        if component.is_inline() {
            self.pending.push(component);
        } else {
            self.flush_pending();
            self.out.push(ComponentBlock {
                components: vec![component],
            });
        }
    }

    fn finish(mut self) -> Vec<ComponentBlock> {
        self.flush_pending();
        self.out
    }

    /// Emits the pending inline run as one block. No-op when empty, so a
    /// non-inline component at the start never produces an empty block.
    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let components = std::mem::take(&mut self.pending);
        self.out.push(ComponentBlock { components });
    }
}
