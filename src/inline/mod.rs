//! Inline parsing.
//!
//! Runs over accumulated paragraph content (lines joined with `\n`),
//! after block structure is settled. Only the `$...$` math construct is
//! recognized; everything else is plain text.

pub mod math;

pub use math::{find_inline_math, InlineMath};

/// Events produced by the inline pass. Offsets index the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEvent {
    /// Plain text range.
    Text {
        /// Start offset.
        start: usize,
        /// End offset (exclusive).
        end: usize,
    },
    /// Math content range (delimiters stripped).
    Math {
        /// Start offset of the content.
        start: usize,
        /// End offset of the content (exclusive).
        end: usize,
    },
}

/// Split paragraph text into text and math ranges.
///
/// With `math` disabled the whole buffer is a single text event and no
/// dollar scanning happens at all.
pub fn parse_inline(text: &[u8], math: bool, events: &mut Vec<InlineEvent>) {
    if !math {
        if !text.is_empty() {
            events.push(InlineEvent::Text {
                start: 0,
                end: text.len(),
            });
        }
        return;
    }

    let mut pos = 0;
    while let Some(m) = find_inline_math(text, pos) {
        if m.start > pos {
            events.push(InlineEvent::Text {
                start: pos,
                end: m.start,
            });
        }
        events.push(InlineEvent::Math {
            start: m.content_start,
            end: m.content_end,
        });
        pos = m.end;
    }
    if pos < text.len() {
        events.push(InlineEvent::Text {
            start: pos,
            end: text.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(text: &str, math: bool) -> Vec<InlineEvent> {
        let mut out = Vec::new();
        parse_inline(text.as_bytes(), math, &mut out);
        out
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            events("hello", true),
            vec![InlineEvent::Text { start: 0, end: 5 }]
        );
    }

    #[test]
    fn test_empty() {
        assert!(events("", true).is_empty());
    }

    #[test]
    fn test_text_math_text() {
        let text = "a $x$ b";
        assert_eq!(
            events(text, true),
            vec![
                InlineEvent::Text { start: 0, end: 2 },
                InlineEvent::Math { start: 3, end: 4 },
                InlineEvent::Text { start: 5, end: 7 },
            ]
        );
    }

    #[test]
    fn test_math_disabled() {
        let text = "a $x$ b";
        assert_eq!(
            events(text, false),
            vec![InlineEvent::Text { start: 0, end: 7 }]
        );
    }

    #[test]
    fn test_leading_math() {
        let text = "$x$!";
        assert_eq!(
            events(text, true),
            vec![
                InlineEvent::Math { start: 1, end: 2 },
                InlineEvent::Text { start: 3, end: 4 },
            ]
        );
    }
}
