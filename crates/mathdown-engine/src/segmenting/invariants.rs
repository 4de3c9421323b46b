//! Runtime checks for scanner correctness, used by tests.

use super::blocks::ComponentBlock;
use super::types::Component;

/// Asserts that `components` exactly covers `input`.
///
/// Spans must be contiguous from 0 to `input.len()`, and slicing the input
/// with each span must reproduce that component's delimited source form.
pub fn check_coverage(input: &str, components: &[Component]) {
    let mut cursor = 0;
    for c in components {
        assert_eq!(
            c.span.start, cursor,
            "component span starts at {} but previous ended at {cursor}",
            c.span.start
        );
        assert!(
            c.span.end <= input.len(),
            "component span {:?} out of bounds (input len: {})",
            c.span,
            input.len()
        );
        assert_eq!(
            &input[c.span.start..c.span.end],
            c.delimited_text(),
            "span text mismatch for {:?}",
            c.kind
        );
        cursor = c.span.end;
    }
    assert_eq!(cursor, input.len(), "components do not reach the input end");
}

/// Asserts that `blocks` respects the block invariant: every block is a
/// single non-inline component or a maximal run of inline components.
pub fn check_partition(blocks: &[ComponentBlock]) {
    for b in blocks {
        assert!(!b.components.is_empty(), "empty block emitted");
        if !b.is_inline_run() {
            assert_eq!(
                b.components.len(),
                1,
                "non-inline component grouped with others"
            );
        }
    }
    for pair in blocks.windows(2) {
        assert!(
            !(pair[0].is_inline_run() && pair[1].is_inline_run()),
            "adjacent inline runs were not merged"
        );
    }
}
