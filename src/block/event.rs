//! Block-level event types.

use super::math::MathBlockKind;
use crate::Span;

/// Events emitted by the document parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a paragraph.
    ParagraphStart,
    /// End of a paragraph.
    ParagraphEnd,

    /// Inline content range belonging to the current paragraph.
    Text(Span),
    /// Soft line break between paragraph lines.
    SoftBreak,

    /// Start of a math block.
    MathStart {
        /// Same-line or multi-line classification.
        kind: MathBlockKind,
    },
    /// One captured full payload line (padding carried on the span); a
    /// newline follows it in the output.
    MathLine(Span),
    /// Payload content cut short by a fence on the same line (the
    /// same-line form, or tail content before a closing fence); nothing
    /// follows it in the output.
    MathFragment(Span),
    /// End of a math block.
    MathEnd {
        /// Same-line or multi-line.
        kind: MathBlockKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_size() {
        // Events should stay small; Span is 12 bytes plus discriminant
        assert!(std::mem::size_of::<BlockEvent>() <= 16);
    }
}
