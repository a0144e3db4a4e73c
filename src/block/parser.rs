//! Document parser: the host loop driving block constructs.
//!
//! Line-oriented: each iteration looks at exactly one line. An open math
//! block gets the line first; otherwise the line is classified as blank,
//! a math fence open, or paragraph content. Math fences may interrupt an
//! open paragraph; lines indented like code (≥4 columns) never open one.

use crate::context::ParseContext;
use crate::reader::{indent_width, is_blank, LineReader};
use crate::{Options, Span};

use super::event::BlockEvent;
use super::math::{ContinueResult, MathBlock, MathBlockParser, OpenResult};

/// Line-at-a-time parser producing a flat [`BlockEvent`] stream.
pub struct DocumentParser<'a> {
    reader: LineReader<'a>,
    cx: ParseContext,
    math: MathBlockParser,
    options: Options,
    /// Whether we're currently in a paragraph.
    in_paragraph: bool,
    /// Accumulated paragraph line spans.
    paragraph_lines: Vec<Span>,
    /// Currently open multi-line math block, if any.
    open_math: Option<MathBlock>,
}

impl<'a> DocumentParser<'a> {
    /// Create a parser with default options.
    pub fn new(input: &'a [u8]) -> Self {
        Self::new_with_options(input, Options::default())
    }

    /// Create a parser with explicit options.
    pub fn new_with_options(input: &'a [u8], options: Options) -> Self {
        Self {
            reader: LineReader::new(input),
            cx: ParseContext::new(),
            math: MathBlockParser::new(),
            options,
            in_paragraph: false,
            paragraph_lines: Vec::new(),
            open_math: None,
        }
    }

    /// Parse the whole input and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        while !self.reader.is_eof() {
            self.parse_line(events);
        }

        // Flush any open paragraph at end of input
        self.close_paragraph(events);

        // An unterminated math block is not an error: it closes with
        // whatever content was accumulated.
        if let Some(node) = self.open_math.take() {
            self.math.close(&mut self.cx);
            emit_math(node, events);
        }
    }

    /// Parse a single line.
    fn parse_line(&mut self, events: &mut Vec<BlockEvent>) {
        // An open math block consumes every line until its closing fence.
        if let Some(mut node) = self.open_math.take() {
            match self
                .math
                .continue_line(&mut node, &mut self.reader, &mut self.cx)
            {
                ContinueResult::Closed => {
                    self.math.close(&mut self.cx);
                    emit_math(node, events);
                }
                ContinueResult::Continue => self.open_math = Some(node),
            }
            self.reader.advance_line();
            return;
        }

        let Some(line) = self.reader.peek_line() else {
            return;
        };

        if is_blank(line.text) {
            self.reader.advance_line();
            self.close_paragraph(events);
            return;
        }

        let (w, pos) = indent_width(line.text, 0);

        // Block entry column; none at code indentation depth.
        let entry = if w < 4 || self.math.accepts_indented_line() {
            Some(pos)
        } else {
            None
        };

        if self.options.math && (!self.in_paragraph || self.math.can_interrupt_paragraph()) {
            match self.math.open(&self.reader, entry, &mut self.cx) {
                OpenResult::Closed(node) => {
                    self.close_paragraph(events);
                    emit_math(node, events);
                    self.reader.advance_line();
                    return;
                }
                OpenResult::Open(node) => {
                    self.close_paragraph(events);
                    self.open_math = Some(node);
                    self.reader.advance_line();
                    return;
                }
                OpenResult::NotApplicable => {}
            }
        }

        // Paragraph content, leading indentation dropped
        let start = line.span.start_usize() + pos;
        self.in_paragraph = true;
        self.paragraph_lines
            .push(Span::from_usize(start, line.span.end_usize()));
        self.reader.advance_line();
    }

    /// Close an open paragraph.
    fn close_paragraph(&mut self, events: &mut Vec<BlockEvent>) {
        if !self.in_paragraph {
            return;
        }
        self.in_paragraph = false;

        if self.paragraph_lines.is_empty() {
            return;
        }

        events.push(BlockEvent::ParagraphStart);
        for (i, span) in self.paragraph_lines.drain(..).enumerate() {
            if i > 0 {
                events.push(BlockEvent::SoftBreak);
            }
            events.push(BlockEvent::Text(span));
        }
        events.push(BlockEvent::ParagraphEnd);
    }
}

/// Drain a finished math block into the event stream.
fn emit_math(node: MathBlock, events: &mut Vec<BlockEvent>) {
    let kind = node.kind();
    events.push(BlockEvent::MathStart { kind });
    for ms in node.spans() {
        events.push(if ms.newline {
            BlockEvent::MathLine(ms.span)
        } else {
            BlockEvent::MathFragment(ms.span)
        });
    }
    events.push(BlockEvent::MathEnd { kind });
}
