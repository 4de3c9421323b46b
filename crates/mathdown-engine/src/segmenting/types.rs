use serde::{Deserialize, Serialize};

use super::kinds::SpanKind;
use super::span::Span;

/// A contiguous labeled region of the scanned input.
///
/// Built once during a scan pass and immutable afterward. For equation
/// kinds, `text` excludes the opening and closing delimiters; `span` is the
/// full source range including them, so `input[span.start..span.end]`
/// reproduces the exact source form of the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Content with delimiters trimmed. Raw text for [`SpanKind::PlainText`].
    pub text: String,
    /// What this region is.
    pub kind: SpanKind,
    /// Full byte range in the scanned input, delimiters included.
    pub span: Span,
}

impl Component {
    pub(crate) fn new(kind: SpanKind, text: &str, span: Span) -> Self {
        Self {
            text: text.to_string(),
            kind,
            span,
        }
    }

    /// True when this component flows inline for block grouping.
    pub fn is_inline(&self) -> bool {
        self.kind.is_inline()
    }

    /// The source form: `text` with this kind's delimiters re-attached.
    ///
    /// Concatenating `delimited_text()` over a scan's components
    /// reproduces the scanned input.
    pub fn delimited_text(&self) -> String {
        format!(
            "{}{}{}",
            self.kind.left_terminator(),
            self.text,
            self.kind.right_terminator()
        )
    }
}

/// How the caller wants the input treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Scan for equation delimiters and group the results.
    Document,
    /// Treat the entire input as one inline equation; no scanning happens,
    /// delimiter-like substrings included.
    InlineOnly,
}
