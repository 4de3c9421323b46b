//! Span kinds and the delimiter text each kind owns.
//!
//! Delimiter literals live here, not in the scanner. The scanner asks a
//! kind for its terminators; it never hardcodes `$` or `\end{equation}`.

use serde::{Deserialize, Serialize};

/// Literal delimiter text for the recognized equation kinds.
pub mod delim {
    /// Single dollar fence around inline equations.
    pub const DOLLAR: &str = "$";
    /// Double dollar fence around display blocks.
    pub const DOUBLE_DOLLAR: &str = "$$";
    /// Opening marker of a named equation environment.
    pub const BEGIN_EQUATION: &str = r"\begin{equation}";
    /// Closing marker of a named equation environment.
    pub const END_EQUATION: &str = r"\end{equation}";
    /// Byte that escapes a delimiter when it immediately precedes one.
    pub const ESCAPE: u8 = b'\\';
}

/// The kind of a scanned component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanKind {
    /// Text outside any equation region.
    PlainText,
    /// `$...$`, laid out within the surrounding text flow.
    InlineEquation,
    /// `$$...$$`, a standalone display block.
    TexBlockEquation,
    /// `\begin{equation}...\end{equation}`, standalone. Its terminator may
    /// itself appear nested, so the scanner extends to the last occurrence.
    NamedEquation,
}

impl SpanKind {
    /// True for kinds that group into an inline run when building blocks.
    ///
    /// Plain text counts as inline so that text and `$...$` spans merge
    /// into a single renderable run.
    pub fn is_inline(self) -> bool {
        matches!(self, SpanKind::PlainText | SpanKind::InlineEquation)
    }

    /// Literal text that opens a span of this kind. Empty for plain text.
    pub fn left_terminator(self) -> &'static str {
        match self {
            SpanKind::PlainText => "",
            SpanKind::InlineEquation => delim::DOLLAR,
            SpanKind::TexBlockEquation => delim::DOUBLE_DOLLAR,
            SpanKind::NamedEquation => delim::BEGIN_EQUATION,
        }
    }

    /// Literal text that closes a span of this kind. Empty for plain text.
    pub fn right_terminator(self) -> &'static str {
        match self {
            SpanKind::PlainText => "",
            SpanKind::InlineEquation => delim::DOLLAR,
            SpanKind::TexBlockEquation => delim::DOUBLE_DOLLAR,
            SpanKind::NamedEquation => delim::END_EQUATION,
        }
    }
}
