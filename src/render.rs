//! HTML output writer with optimized buffer management.

use crate::Span;

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use dollarmath::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.write_str("<p>");
/// writer.write_escaped_text(b"a < b");
/// writer.write_str("</p>");
///
/// let html = writer.into_string();
/// assert_eq!(html, "<p>a &lt; b</p>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size; we reserve extra for safety.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        let capacity = input_len + input_len / 4;
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Write raw bytes without escaping.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write text with HTML escaping (`&`, `<`, `>`).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &[u8]) {
        match std::str::from_utf8(text) {
            Ok(s) => {
                html_escape::encode_text_to_vec(s, &mut self.out);
            }
            Err(_) => {
                let s = String::from_utf8_lossy(text);
                html_escape::encode_text_to_vec(s.as_ref(), &mut self.out);
            }
        }
    }

    /// Write text with HTML escaping from a span, re-inserting the span's
    /// stripped indentation first.
    #[inline]
    pub fn write_escaped_span(&mut self, input: &[u8], span: Span) {
        for _ in 0..span.padding {
            self.out.push(b' ');
        }
        self.write_escaped_text(span.slice(input));
    }

    /// Open a paragraph.
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Close a paragraph.
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>\n");
    }

    /// Open a display math block, paragraph wrapper included.
    #[inline]
    pub fn math_block_start(&mut self) {
        self.write_str("<p><span class=\"math display\">\\[");
    }

    /// Close a display math block.
    #[inline]
    pub fn math_block_end(&mut self) {
        self.write_str("\\]</span></p>\n");
    }

    /// Write one captured math block span; `newline` for full-line captures.
    #[inline]
    pub fn math_block_line(&mut self, input: &[u8], span: Span, newline: bool) {
        self.write_escaped_span(input, span);
        if newline {
            self.out.push(b'\n');
        }
    }

    /// Open an inline math span.
    #[inline]
    pub fn math_inline_start(&mut self) {
        self.write_str("<span class=\"math inline\">\\(");
    }

    /// Close an inline math span.
    #[inline]
    pub fn math_inline_end(&mut self) {
        self.write_str("\\)</span>");
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Whether nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Access the underlying buffer (for buffer reuse).
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    /// Consume the writer and return the HTML as a `String`.
    #[inline]
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        let mut w = HtmlWriter::new();
        w.write_escaped_text(b"a < b & c > d");
        assert_eq!(w.into_string(), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_math_block_wrappers() {
        let mut w = HtmlWriter::new();
        w.math_block_start();
        w.write_escaped_text(b"x+y");
        w.math_block_end();
        assert_eq!(
            w.into_string(),
            "<p><span class=\"math display\">\\[x+y\\]</span></p>\n"
        );
    }

    #[test]
    fn test_math_inline_wrappers() {
        let mut w = HtmlWriter::new();
        w.math_inline_start();
        w.write_escaped_text(b"1+2");
        w.math_inline_end();
        assert_eq!(w.into_string(), "<span class=\"math inline\">\\(1+2\\)</span>");
    }

    #[test]
    fn test_span_padding_reinserted() {
        let input = b"x+y";
        let mut w = HtmlWriter::new();
        let span = Span::with_padding(0, 3, 2);
        w.write_escaped_span(input, span);
        assert_eq!(w.into_string(), "  x+y");
    }
}
