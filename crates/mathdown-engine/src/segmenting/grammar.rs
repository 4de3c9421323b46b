//! Regex grammars for the recognized equation kinds.
//!
//! Each kind is described by two independently compiled patterns: an
//! opening/full pattern that recognizes a whole candidate span, and a
//! terminator pattern that recognizes the closing delimiter on its own.
//! The terminator pattern is what lets a recursion-capable kind extend a
//! match past nested occurrences of its own syntax.
//!
//! New span kinds are added by registering another [`EquationGrammar`] in a
//! [`GrammarSet`]; the scanner contains no per-kind logic.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::kinds::SpanKind;

/// Opening/full pattern for `$...$`. `(?s)` lets the body span lines.
///
/// The body may match empty: the degenerate first match in `$$a$$` is the
/// empty `$$`, which the scanner's content check rejects, so the block
/// grammar wins that input outright.
pub const INLINE_OPEN: &str = r"(?s)\$.*?\$";
/// Terminator for `$...$`.
pub const INLINE_TERMINATOR: &str = r"\$";

/// Opening/full pattern for `$$...$$`, non-greedy.
pub const TEX_BLOCK_OPEN: &str = r"(?s)\$\$.*?\$\$";
/// Terminator for `$$...$$`.
pub const TEX_BLOCK_TERMINATOR: &str = r"\$\$";

/// Opening/full pattern for `\begin{equation}...\end{equation}`.
///
/// Greedy: the matched range already runs to the last terminator in the
/// remainder, matching the recursion rule the scanner applies.
pub const NAMED_OPEN: &str = r"(?s)\\begin\{equation\}.*\\end\{equation\}";
/// Terminator for `\begin{equation}...\end{equation}`.
pub const NAMED_TERMINATOR: &str = r"\\end\{equation\}";

/// Error building a grammar from user-supplied pattern strings.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The opening/full pattern failed to compile.
    #[error("invalid open pattern for {kind:?}: {source}")]
    OpenPattern {
        kind: SpanKind,
        source: regex::Error,
    },

    /// The terminator pattern failed to compile.
    #[error("invalid terminator pattern for {kind:?}: {source}")]
    TerminatorPattern {
        kind: SpanKind,
        source: regex::Error,
    },
}

/// A single registered span grammar.
///
/// A grammar's open pattern must match text that begins with its kind's
/// left terminator and ends with its right terminator; the scanner trims
/// those literals off when constructing component text.
#[derive(Debug, Clone)]
pub struct EquationGrammar {
    pub(crate) open: Regex,
    pub(crate) terminator: Regex,
    pub(crate) kind: SpanKind,
    /// Whether the terminator is re-searched across the whole remainder and
    /// the span extended to its last occurrence.
    pub(crate) recursive: bool,
}

impl EquationGrammar {
    /// Compiles a grammar from pattern strings.
    pub fn new(
        kind: SpanKind,
        open: &str,
        terminator: &str,
        recursive: bool,
    ) -> Result<Self, GrammarError> {
        let open = Regex::new(open).map_err(|source| GrammarError::OpenPattern { kind, source })?;
        let terminator = Regex::new(terminator)
            .map_err(|source| GrammarError::TerminatorPattern { kind, source })?;
        Ok(Self {
            open,
            terminator,
            kind,
            recursive,
        })
    }

    /// Kind assigned to components this grammar produces.
    pub fn kind(&self) -> SpanKind {
        self.kind
    }
}

/// An ordered grammar registry.
///
/// Order encodes tie-break priority only: when two grammars' first matches
/// start at the same index, the earlier-registered grammar wins. True
/// precedence between grammars is earliest match start.
#[derive(Debug, Clone)]
pub struct GrammarSet {
    grammars: Vec<EquationGrammar>,
}

static DEFAULT_SET: Lazy<GrammarSet> = Lazy::new(|| {
    GrammarSet::new(vec![
        EquationGrammar::new(
            SpanKind::InlineEquation,
            INLINE_OPEN,
            INLINE_TERMINATOR,
            false,
        )
        .expect("inline grammar compiles"),
        EquationGrammar::new(
            SpanKind::TexBlockEquation,
            TEX_BLOCK_OPEN,
            TEX_BLOCK_TERMINATOR,
            false,
        )
        .expect("tex block grammar compiles"),
        EquationGrammar::new(SpanKind::NamedEquation, NAMED_OPEN, NAMED_TERMINATOR, true)
            .expect("named grammar compiles"),
    ])
});

impl GrammarSet {
    /// Builds a registry from already-compiled grammars, in priority order.
    pub fn new(grammars: Vec<EquationGrammar>) -> Self {
        Self { grammars }
    }

    /// The built-in registry: `$...$`, `$$...$$`,
    /// `\begin{equation}...\end{equation}`. Compiled once per process.
    pub fn default_set() -> &'static GrammarSet {
        &DEFAULT_SET
    }

    /// Registered grammars in priority order.
    pub fn grammars(&self) -> &[EquationGrammar] {
        &self.grammars
    }
}
