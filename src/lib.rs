//! dollarmath: dollar-delimited math extension for line-oriented Markdown.
//!
//! Recognizes `$$` display math blocks (same-line and multi-line) and
//! `$...$` inline math in a minimal paragraph model, and renders them as
//! MathJax-compatible HTML spans.
//!
//! # Design Principles
//! - No AST: streaming events only
//! - No regex: pure byte-level scanning
//! - Minimal allocations: spans into the input buffer
//!
//! # Example
//! ```
//! let html = dollarmath::to_html("$$\n1+2\n$$");
//! assert_eq!(html, "<p><span class=\"math display\">\\[1+2\n\\]</span></p>\n");
//! ```

pub mod block;
pub mod context;
pub mod inline;
pub mod reader;
pub mod render;
pub mod span;

// Re-export primary types
pub use block::{BlockEvent, DocumentParser, MathBlock, MathBlockKind, MathBlockParser, MathSpan};
pub use context::{ContextKey, ParseContext};
pub use inline::{find_inline_math, InlineEvent, InlineMath};
pub use render::HtmlWriter;
pub use span::Span;

/// Parsing/rendering options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Recognize `$`-delimited math. When off, dollars are plain text.
    pub math: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { math: true }
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = dollarmath::to_html("hello $1+2$");
/// assert_eq!(
///     html,
///     "<p>hello <span class=\"math inline\">\\(1+2\\)</span></p>\n"
/// );
/// ```
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer, &Options::default());
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// This avoids allocation if the buffer has sufficient capacity.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut Vec<u8>, options: &Options) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    // Use the provided buffer directly
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input.as_bytes(), &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
}

/// State for collecting paragraph content before inline parsing.
struct ParagraphState {
    /// Collected text content (joined with newlines).
    content: Vec<u8>,
    /// Whether we're currently in a paragraph.
    in_paragraph: bool,
}

impl ParagraphState {
    fn new() -> Self {
        Self {
            content: Vec::with_capacity(256),
            in_paragraph: false,
        }
    }

    fn start(&mut self) {
        self.in_paragraph = true;
        self.content.clear();
    }

    fn add_text(&mut self, text: &[u8]) {
        self.content.extend_from_slice(text);
    }

    fn add_soft_break(&mut self) {
        self.content.push(b'\n');
    }

    fn finish(&mut self, writer: &mut HtmlWriter, options: &Options) {
        self.in_paragraph = false;
        writer.paragraph_start();

        let mut events = Vec::new();
        inline::parse_inline(&self.content, options.math, &mut events);
        for event in events {
            match event {
                InlineEvent::Text { start, end } => {
                    write_text(writer, &self.content[start..end], options.math);
                }
                InlineEvent::Math { start, end } => {
                    writer.math_inline_start();
                    writer.write_escaped_text(&self.content[start..end]);
                    writer.math_inline_end();
                }
            }
        }

        writer.paragraph_end();
    }
}

/// Write paragraph text, resolving `\$` to a literal dollar when math is on.
fn write_text(writer: &mut HtmlWriter, text: &[u8], math: bool) {
    if !math {
        writer.write_escaped_text(text);
        return;
    }
    let mut pos = 0;
    while pos < text.len() {
        match memchr::memmem::find(&text[pos..], b"\\$") {
            Some(off) => {
                writer.write_escaped_text(&text[pos..pos + off]);
                writer.write_byte(b'$');
                pos += off + 2;
            }
            None => {
                writer.write_escaped_text(&text[pos..]);
                break;
            }
        }
    }
}

/// Render Markdown into the given writer.
pub fn render_to_writer(input: &[u8], writer: &mut HtmlWriter, options: &Options) {
    let mut parser = DocumentParser::new_with_options(input, *options);
    let mut events = Vec::new();
    parser.parse(&mut events);

    let mut paragraph = ParagraphState::new();

    for event in events {
        match event {
            BlockEvent::ParagraphStart => paragraph.start(),
            BlockEvent::Text(span) => paragraph.add_text(span.slice(input)),
            BlockEvent::SoftBreak => paragraph.add_soft_break(),
            BlockEvent::ParagraphEnd => paragraph.finish(writer, options),

            BlockEvent::MathStart { .. } => writer.math_block_start(),
            BlockEvent::MathLine(span) => writer.math_block_line(input, span, true),
            BlockEvent::MathFragment(span) => writer.math_block_line(input, span, false),
            BlockEvent::MathEnd { .. } => writer.math_block_end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_math() {
        assert_eq!(
            to_html("$1+2$"),
            "<p><span class=\"math inline\">\\(1+2\\)</span></p>\n"
        );
    }

    #[test]
    fn test_same_line_block() {
        assert_eq!(
            to_html("$$x+y$$"),
            "<p><span class=\"math display\">\\[x+y\\]</span></p>\n"
        );
    }

    #[test]
    fn test_multi_line_block() {
        assert_eq!(
            to_html("$$\n1+2\n$$"),
            "<p><span class=\"math display\">\\[1+2\n\\]</span></p>\n"
        );
    }

    #[test]
    fn test_escaped_dollar_in_text() {
        assert_eq!(to_html(r"cost: \$5"), "<p>cost: $5</p>\n");
    }

    #[test]
    fn test_math_disabled() {
        let options = Options { math: false };
        assert_eq!(to_html_with_options("$1+2$", &options), "<p>$1+2$</p>\n");
        assert_eq!(
            to_html_with_options("$$\nx\n$$", &options),
            "<p>$$\nx\n$$</p>\n"
        );
    }

    #[test]
    fn test_to_html_into_reuses_buffer() {
        let mut buf = Vec::new();
        to_html_into("hello", &mut buf);
        assert_eq!(buf, b"<p>hello</p>\n");
        to_html_into("$x$", &mut buf);
        assert_eq!(
            std::str::from_utf8(&buf).unwrap(),
            "<p><span class=\"math inline\">\\(x\\)</span></p>\n"
        );
    }

    #[test]
    fn test_html_escaping_in_math() {
        assert_eq!(
            to_html("$a < b$"),
            "<p><span class=\"math inline\">\\(a &lt; b\\)</span></p>\n"
        );
    }
}
