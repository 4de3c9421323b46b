//! The component scan: the recursive core of segmentation.
//!
//! ## Matching Rules
//!
//! Each registered grammar contributes at most one candidate per step: its
//! *first* match in the remaining input. A candidate is discarded when its
//! content (delimiters trimmed) is empty, when the byte immediately before
//! the match start is the escape byte, or (for matches flush against the
//! input's end) when the byte immediately before the closing delimiter is
//! the escape byte. Among survivors the smallest start index wins; ties go
//! to the grammar registered first.
//!
//! A recursive winner is then extended: every terminator occurrence in the
//! whole remainder is collected, escaped occurrences are dropped, and the
//! span runs to the end of the *last* survivor. This is a
//! greedy-to-last-occurrence policy, not a balanced-nesting parse: a named
//! equation swallows nested `\begin{equation}...\end{equation}` pairs by
//! always reaching the outermost closing terminator.
//!
//! ## Shape
//!
//! The natural recursion ("emit the span, recurse on the suffix") is
//! expressed as a loop over a shrinking remainder, so documents with many
//! sequential equations cannot grow the call stack. Each emitted span has
//! length >= 1, which bounds the loop. Terminator extension re-scans the
//! full remainder, giving O(n*k) worst case over k matches, acceptable for
//! the short, human-authored documents this targets.

use super::grammar::{EquationGrammar, GrammarSet};
use super::kinds::{SpanKind, delim};
use super::span::Span;
use super::types::Component;

/// A grammar's surviving first match within one scan step.
struct Candidate<'g> {
    grammar: &'g EquationGrammar,
    start: usize,
    end: usize,
}

impl GrammarSet {
    /// Scans `input` into an ordered, fully covering component sequence.
    ///
    /// # Arguments
    /// - `input`: the document text to segment
    ///
    /// # Returns
    /// Components in source order. Text outside equation spans becomes
    /// [`SpanKind::PlainText`]; equation spans carry their content with
    /// delimiters trimmed. Scanning never fails: unterminated or escaped
    /// syntax is plain text, and an empty input yields no components.
    pub fn scan(&self, input: &str) -> Vec<Component> {
        let mut out = Vec::new();
        let mut base = 0;
        let mut rest = input;

        while !rest.is_empty() {
            let Some(found) = self.next_equation(rest) else {
                out.push(Component::new(
                    SpanKind::PlainText,
                    rest,
                    Span::new(base, base + rest.len()),
                ));
                break;
            };

            if found.start > 0 {
                out.push(Component::new(
                    SpanKind::PlainText,
                    &rest[..found.start],
                    Span::new(base, base + found.start),
                ));
            }

            let kind = found.grammar.kind();
            // Trim the kind's delimiters off the matched range. Clamped so a
            // custom grammar whose matches are shorter than the delimiter
            // pair cannot slice out of bounds.
            let content_start = (found.start + kind.left_terminator().len()).min(found.end);
            let content_end = found
                .end
                .saturating_sub(kind.right_terminator().len())
                .max(content_start);
            out.push(Component::new(
                kind,
                &rest[content_start..content_end],
                Span::new(base + found.start, base + found.end),
            ));

            base += found.end;
            rest = &rest[found.end..];
        }

        out
    }

    /// The winning equation span in `rest`, if any grammar survives.
    ///
    /// `min_by_key` keeps the first of equal starts, so registration order
    /// is the tie-break.
    fn next_equation<'g>(&'g self, rest: &str) -> Option<Candidate<'g>> {
        let mut winner = self
            .grammars()
            .iter()
            .filter_map(|g| first_valid_match(g, rest))
            .min_by_key(|c| c.start)?;

        if winner.grammar.recursive {
            winner.end = extend_to_last_terminator(&winner, rest);
        }
        Some(winner)
    }
}

/// First match of `grammar` in `rest`, unless empty or escaped.
fn first_valid_match<'g>(grammar: &'g EquationGrammar, rest: &str) -> Option<Candidate<'g>> {
    let m = grammar.open.find(rest)?;
    let kind = grammar.kind();

    let content_start = m.start() + kind.left_terminator().len();
    let content_end = m.end().saturating_sub(kind.right_terminator().len());
    if content_end <= content_start {
        return None;
    }
    if is_escaped(rest, m.start()) {
        return None;
    }
    // Only a match flush against the input's end checks the closing side.
    if m.end() == rest.len() && is_escaped(rest, content_end) {
        return None;
    }

    Some(Candidate {
        grammar,
        start: m.start(),
        end: m.end(),
    })
}

/// End of the last non-escaped terminator occurrence in `rest`.
///
/// Occurrences that close at or before the winner's opening delimiter
/// cannot form a span and are skipped. Falls back to the matched range when
/// nothing survives.
fn extend_to_last_terminator(winner: &Candidate<'_>, rest: &str) -> usize {
    let opening_end = winner.start + winner.grammar.kind().left_terminator().len();
    winner
        .grammar
        .terminator
        .find_iter(rest)
        .filter(|m| !is_escaped(rest, m.start()))
        .map(|m| m.end())
        .filter(|&end| end > opening_end)
        .last()
        .unwrap_or(winner.end)
}

/// True when the byte just before `pos` is the escape byte.
///
/// A position at the very start of the text is never escaped.
fn is_escaped(text: &str, pos: usize) -> bool {
    pos > 0 && text.as_bytes()[pos - 1] == delim::ESCAPE
}

#[cfg(test)]
mod tests {
    use crate::segmenting::grammar::{EquationGrammar, GrammarSet, INLINE_OPEN, INLINE_TERMINATOR};
    use crate::segmenting::invariants;
    use crate::segmenting::kinds::SpanKind::{self, *};
    use crate::segmenting::scan;
    use crate::segmenting::span::Span;
    use pretty_assertions::assert_eq;

    /// Collapses a scan to comparable (kind, text) pairs.
    fn parts(input: &str) -> Vec<(SpanKind, String)> {
        scan(input)
            .into_iter()
            .map(|c| (c.kind, c.text))
            .collect()
    }

    fn part(kind: SpanKind, text: &str) -> (SpanKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn empty_input_yields_no_components() {
        assert_eq!(scan(""), vec![]);
    }

    #[test]
    fn text_without_delimiters_is_one_plain_component() {
        assert_eq!(parts("just words"), vec![part(PlainText, "just words")]);
    }

    #[test]
    fn inline_equation_between_text() {
        assert_eq!(
            parts(r"Euler: $e^{i\pi}+1=0$ done."),
            vec![
                part(PlainText, "Euler: "),
                part(InlineEquation, r"e^{i\pi}+1=0"),
                part(PlainText, " done."),
            ]
        );
    }

    #[test]
    fn multiple_inline_equations() {
        assert_eq!(
            parts("$a$ and $b$"),
            vec![
                part(InlineEquation, "a"),
                part(PlainText, " and "),
                part(InlineEquation, "b"),
            ]
        );
    }

    #[test]
    fn inline_body_may_span_lines() {
        assert_eq!(
            parts("$a\n+b$"),
            vec![part(InlineEquation, "a\n+b")]
        );
    }

    #[test]
    fn unterminated_dollar_is_plain_text() {
        assert_eq!(parts("price: $100"), vec![part(PlainText, "price: $100")]);
    }

    #[test]
    fn escaped_open_delimiter_is_plain_text() {
        assert_eq!(parts(r"\$x$"), vec![part(PlainText, r"\$x$")]);
    }

    #[test]
    fn escaped_close_at_input_end_is_plain_text() {
        assert_eq!(parts("$x\\$"), vec![part(PlainText, "$x\\$")]);
    }

    #[test]
    fn escaped_close_mid_input_is_not_checked() {
        // The closing-side escape check only applies to matches flush
        // against the input's end.
        assert_eq!(
            parts(r"$x\$ more $y$"),
            vec![
                part(InlineEquation, "x\\"),
                part(PlainText, " more "),
                part(InlineEquation, "y"),
            ]
        );
    }

    #[test]
    fn empty_inline_body_is_plain_text() {
        assert_eq!(parts("$$"), vec![part(PlainText, "$$")]);
    }

    #[test]
    fn bare_delimiter_runs_are_plain_text() {
        assert_eq!(parts("$"), vec![part(PlainText, "$")]);
        assert_eq!(parts("$$$"), vec![part(PlainText, "$$$")]);
        assert_eq!(parts("$$$$"), vec![part(PlainText, "$$$$")]);
    }

    #[test]
    fn double_dollar_with_content_is_a_tex_block() {
        // Inline's first match here is the degenerate empty `$$`, which the
        // content check rejects; the block grammar takes the whole span.
        assert_eq!(parts("$$a$$"), vec![part(TexBlockEquation, "a")]);
    }

    #[test]
    fn tex_block_between_text() {
        assert_eq!(
            parts("before $$x+y$$ after"),
            vec![
                part(PlainText, "before "),
                part(TexBlockEquation, "x+y"),
                part(PlainText, " after"),
            ]
        );
    }

    #[test]
    fn rejected_first_match_suppresses_later_matches() {
        // Each grammar contributes only its first match per step. Inline's
        // first match `$$` is rejected as empty, and nothing else matches,
        // so the later `$x$` is never reconsidered.
        assert_eq!(
            parts("$$ then $x$"),
            vec![part(PlainText, "$$ then $x$")]
        );
    }

    #[test]
    fn named_equation_plain() {
        assert_eq!(
            parts(r"\begin{equation}E=mc^2\end{equation}"),
            vec![part(NamedEquation, "E=mc^2")]
        );
    }

    #[test]
    fn named_equation_extends_to_last_terminator() {
        assert_eq!(
            parts("\\begin{equation}A\\end{equation} filler \\end{equation}"),
            vec![part(NamedEquation, "A\\end{equation} filler ")]
        );
    }

    #[test]
    fn named_equation_swallows_nested_pair() {
        assert_eq!(
            parts(r"\begin{equation}\begin{equation}x\end{equation}\end{equation}"),
            vec![part(NamedEquation, r"\begin{equation}x\end{equation}")]
        );
    }

    #[test]
    fn escaped_terminator_occurrence_is_skipped() {
        // The escaped final terminator is dropped from the occurrence list,
        // so the span closes at the last surviving one.
        assert_eq!(
            parts("\\begin{equation}A\\end{equation} tail \\\\end{equation} x"),
            vec![
                part(NamedEquation, "A"),
                part(PlainText, " tail \\\\end{equation} x"),
            ]
        );
    }

    #[test]
    fn terminator_before_the_opening_is_ignored() {
        assert_eq!(
            parts(r"\end{equation} \begin{equation}x\end{equation} y"),
            vec![
                part(PlainText, r"\end{equation} "),
                part(NamedEquation, "x"),
                part(PlainText, " y"),
            ]
        );
    }

    #[test]
    fn earliest_match_start_beats_registration_order() {
        assert_eq!(
            parts(r"\begin{equation}a\end{equation} $x$"),
            vec![
                part(NamedEquation, "a"),
                part(PlainText, " "),
                part(InlineEquation, "x"),
            ]
        );
        assert_eq!(
            parts(r"$x$ \begin{equation}a\end{equation}"),
            vec![
                part(InlineEquation, "x"),
                part(PlainText, " "),
                part(NamedEquation, "a"),
            ]
        );
    }

    #[test]
    fn registration_order_breaks_same_start_ties() {
        let short = EquationGrammar::new(
            SpanKind::InlineEquation,
            INLINE_OPEN,
            INLINE_TERMINATOR,
            false,
        )
        .unwrap();
        let long = EquationGrammar::new(
            SpanKind::InlineEquation,
            r"(?s)\$.*?\$\$",
            INLINE_TERMINATOR,
            false,
        )
        .unwrap();

        // Both grammars' first match starts at index 0 of "$a$$"; the one
        // registered first wins.
        let short_first = GrammarSet::new(vec![short.clone(), long.clone()]);
        assert_eq!(
            short_first
                .scan("$a$$")
                .into_iter()
                .map(|c| c.text)
                .collect::<Vec<_>>(),
            vec!["a".to_string(), "$".to_string()]
        );

        let long_first = GrammarSet::new(vec![long, short]);
        assert_eq!(
            long_first
                .scan("$a$$")
                .into_iter()
                .map(|c| c.text)
                .collect::<Vec<_>>(),
            vec!["a$".to_string()]
        );
    }

    #[test]
    fn spans_are_absolute_and_contiguous() {
        let components = scan("a $x$ b");
        let spans: Vec<Span> = components.iter().map(|c| c.span).collect();
        assert_eq!(
            spans,
            vec![Span::new(0, 2), Span::new(2, 5), Span::new(5, 7)]
        );
    }

    #[test]
    fn every_scan_covers_its_input() {
        let inputs = [
            "",
            "plain",
            "$",
            "$$",
            "$$$",
            "$$$$",
            "$x$",
            "$$a$$",
            "$a$$b$",
            r"\$x$",
            "price: $100",
            "a $x$ b $$y$$ c",
            "$$ then $x$",
            "$x\\$",
            r"\begin{equation}E\end{equation}",
            "\\begin{equation}A\\end{equation} filler \\end{equation}",
            r"\begin{equation}\begin{equation}x\end{equation}\end{equation}",
            r"\end{equation} \begin{equation}x\end{equation} y",
            "mixed $i$ and $$d$$ and \\begin{equation}n\\end{equation} end",
        ];
        for input in inputs {
            let components = scan(input);
            invariants::check_coverage(input, &components);
            let rebuilt: String = components.iter().map(|c| c.delimited_text()).collect();
            assert_eq!(rebuilt, input, "coverage failed for {input:?}");
        }
    }
}
