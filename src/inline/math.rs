//! Inline math span resolution.
//!
//! The non-stateful peer of the block construct: finds single-`$` runs
//! inside already-identified paragraph text. `$$` runs mid-text and
//! backslash-escaped dollars are left for the surrounding text.

use memchr::memchr;

/// A resolved inline math span, offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMath {
    /// Start of the opening delimiter.
    pub start: usize,
    /// Start of the content (past the opener).
    pub content_start: usize,
    /// End of the content (at the closer).
    pub content_end: usize,
    /// End of the closing delimiter.
    pub end: usize,
}

/// Check if the byte at `pos` is backslash-escaped (odd run of `\` before it).
fn is_escaped(text: &[u8], pos: usize) -> bool {
    let mut n = 0;
    let mut i = pos;
    while i > 0 && text[i - 1] == b'\\' {
        n += 1;
        i -= 1;
    }
    n % 2 == 1
}

/// Find the next `$content$` span at or after `from`.
///
/// The opener and closer must both be runs of exactly one dollar and the
/// content must be non-empty. An unmatched opener is skipped and scanning
/// resumes to its right, so a lone `$` simply stays literal.
pub fn find_inline_math(text: &[u8], from: usize) -> Option<InlineMath> {
    let mut j = from;
    while j < text.len() {
        let start = j + memchr(b'$', &text[j..])?;
        let mut k = start;
        while k < text.len() && text[k] == b'$' {
            k += 1;
        }
        if is_escaped(text, start) || k - start != 1 {
            j = k;
            continue;
        }

        // look for a matching single-dollar closer
        let mut c = k;
        while c < text.len() {
            let Some(off) = memchr(b'$', &text[c..]) else {
                break;
            };
            let cpos = c + off;
            let mut k2 = cpos;
            while k2 < text.len() && text[k2] == b'$' {
                k2 += 1;
            }
            if !is_escaped(text, cpos) && k2 - cpos == 1 && cpos > k {
                return Some(InlineMath {
                    start,
                    content_start: k,
                    content_end: cpos,
                    end: k2,
                });
            }
            c = k2;
        }

        // unclosed opener stays literal
        j = k;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content<'a>(text: &'a str, m: &InlineMath) -> &'a str {
        &text[m.content_start..m.content_end]
    }

    #[test]
    fn test_simple_inline_math() {
        let text = "hello $x^2$ world";
        let m = find_inline_math(text.as_bytes(), 0).unwrap();
        assert_eq!(content(text, &m), "x^2");
        assert_eq!(&text[m.start..m.end], "$x^2$");
    }

    #[test]
    fn test_unmatched_dollar() {
        assert_eq!(find_inline_math(b"hello $ world", 0), None);
    }

    #[test]
    fn test_empty_content_not_math() {
        assert_eq!(find_inline_math(b"$$", 0), None);
    }

    #[test]
    fn test_double_dollar_run_skipped() {
        let text = "a $$ b $c$";
        let m = find_inline_math(text.as_bytes(), 0).unwrap();
        assert_eq!(content(text, &m), "c");
    }

    #[test]
    fn test_escaped_dollar() {
        assert_eq!(find_inline_math(br"\$x\$", 0), None);
    }

    #[test]
    fn test_double_backslash_is_not_an_escape() {
        let text = r"\\$x$";
        let m = find_inline_math(text.as_bytes(), 0).unwrap();
        assert_eq!(content(text, &m), "x");
    }

    #[test]
    fn test_multiple_spans() {
        let text = "$a$ and $b$";
        let first = find_inline_math(text.as_bytes(), 0).unwrap();
        assert_eq!(content(text, &first), "a");
        let second = find_inline_math(text.as_bytes(), first.end).unwrap();
        assert_eq!(content(text, &second), "b");
    }

    #[test]
    fn test_from_offset() {
        let text = "$a$ $b$";
        let m = find_inline_math(text.as_bytes(), 3).unwrap();
        assert_eq!(content(text, &m), "b");
    }
}
