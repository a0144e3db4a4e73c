//! Line-oriented reader over an in-memory input buffer.
//!
//! The block pass works one physical line at a time: `peek_line` exposes
//! the current line without consuming it, block parsers advance by the
//! width they consumed, and `advance_line` moves to the start of the next
//! line. Virtual padding set by `advance_and_set_padding` is reported on
//! subsequent peeks of the same line and cleared at the line boundary.

use crate::Span;

/// Tab stop used for indentation measurement.
pub const TAB_WIDTH: usize = 4;

/// A peeked line: its text (without the trailing newline) and the span it
/// occupies in the input buffer.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a [u8],
    pub span: Span,
}

/// Cursor over the input, advanced one line at a time by the host loop.
pub struct LineReader<'a> {
    input: &'a [u8],
    pos: usize,
    padding: u32,
}

impl<'a> LineReader<'a> {
    /// Create a reader at the start of the input.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            padding: 0,
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Check if the reader is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current line without consuming it, or `None` at end of input.
    ///
    /// The line text excludes the trailing newline; the span carries the
    /// reader's current virtual padding.
    pub fn peek_line(&self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let end = match memchr::memchr(b'\n', rest) {
            Some(nl) => self.pos + nl,
            None => self.input.len(),
        };
        Some(Line {
            text: &self.input[self.pos..end],
            span: Span::with_padding(self.pos as u32, end as u32, self.padding),
        })
    }

    /// Consume `n` bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.input.len());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Consume `n` bytes and record virtual padding for the remainder of
    /// the current line.
    #[inline]
    pub fn advance_and_set_padding(&mut self, n: usize, padding: u32) {
        self.advance(n);
        self.padding = padding;
    }

    /// Move past the next newline (or to end of input) and clear padding.
    pub fn advance_line(&mut self) {
        let rest = &self.input[self.pos.min(self.input.len())..];
        self.pos = match memchr::memchr(b'\n', rest) {
            Some(nl) => self.pos + nl + 1,
            None => self.input.len(),
        };
        self.padding = 0;
    }
}

/// Check whether a line contains only spaces and tabs.
#[inline]
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| b == b' ' || b == b'\t')
}

/// Measure leading indentation starting from column `current_pos`.
///
/// Returns `(width, index)`: the indentation width in columns (tabs advance
/// to the next multiple of [`TAB_WIDTH`]) and the byte index of the first
/// non-whitespace character.
pub fn indent_width(line: &[u8], current_pos: usize) -> (usize, usize) {
    let mut w = 0;
    let mut i = 0;
    while i < line.len() {
        match line[i] {
            b' ' => w += 1,
            b'\t' => w += TAB_WIDTH - ((current_pos + w) % TAB_WIDTH),
            _ => break,
        }
        i += 1;
    }
    (w, i)
}

/// Compute where a continuation line's content starts after stripping
/// `width` columns of baseline indentation.
///
/// Returns `(pos, padding)`: the byte index to slice from and the count of
/// synthetic spaces to reinsert. Consumption stops once the baseline is
/// reached, so whitespace beyond it stays in the slice as literal bytes;
/// padding is nonzero only when a tab straddles the baseline (the tab is
/// consumed whole and the overshoot comes back as spaces). Indentation
/// below the baseline yields zero padding with the span starting at the
/// first non-whitespace byte.
pub fn dedent_position(line: &[u8], current_pos: usize, width: usize) -> (usize, u32) {
    if width == 0 {
        return (0, 0);
    }
    let mut w = 0;
    let mut i = 0;
    while i < line.len() && w < width {
        match line[i] {
            b' ' => w += 1,
            b'\t' => w += TAB_WIDTH - ((current_pos + w) % TAB_WIDTH),
            _ => break,
        }
        i += 1;
    }
    if w >= width {
        (i, (w - width) as u32)
    } else {
        (i, 0)
    }
}
