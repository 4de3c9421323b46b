pub mod segmenting;

// Re-export key types for easier usage
pub use segmenting::{
    Component, ComponentBlock, EquationGrammar, GrammarError, GrammarSet, RenderMode, Span,
    SpanKind, group, scan, segment,
};
