//! `$$` math fence parsing.
//!
//! A math block opens at a run of two or more dollars at the block entry
//! column. If a second, blank-terminated run follows on the same line the
//! block is complete immediately (`$$x+y$$`); otherwise the block stays
//! open and consumes continuation lines until a closing run appears or
//! input ends. Captured content is kept as spans into the source buffer,
//! dedented against the column where the opening fence was found.
//!
//! Every outcome is a classification, never a fault: a lone `$`, an
//! unmatched run, or a missing closing fence all fall through as ordinary
//! text or an early close.

use smallvec::SmallVec;

use crate::context::{ContextKey, ParseContext};
use crate::reader::{dedent_position, indent_width, is_blank, LineReader};
use crate::Span;

/// The fence character.
pub const FENCE_CHAR: u8 = b'$';

/// Minimum run length for a fence.
const MIN_FENCE_LEN: usize = 2;

/// Indentation threshold at or above which a line reads as indented code
/// rather than a potential closing fence.
const CODE_INDENT: usize = 4;

/// A fence run located by [`scan_fence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    /// Byte offset of the first fence character.
    pub pos: usize,
    /// Length of the run.
    pub len: usize,
}

/// Find the first run of ≥2 fence characters followed only by blank
/// content (whitespace or end of line), scanning left to right from
/// `from`.
///
/// A rejected run (too short, or trailing non-blank content) is skipped
/// whole and never rescanned, so the scan position strictly advances and
/// the function terminates on any finite line.
pub fn scan_fence(line: &[u8], from: usize) -> Option<Fence> {
    let mut j = from;
    while j < line.len() {
        let start = j + memchr::memchr(FENCE_CHAR, &line[j..])?;
        let mut k = start;
        while k < line.len() && line[k] == FENCE_CHAR {
            k += 1;
        }
        let len = k - start;
        if len >= MIN_FENCE_LEN && is_blank(&line[k..]) {
            return Some(Fence { pos: start, len });
        }
        j = k;
    }
    None
}

/// Whether a block's fences share one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathBlockKind {
    SameLine,
    MultiLine,
}

/// One captured payload span plus whether it carries a trailing newline.
///
/// A span covers a full physical line only when the capture ran to the end
/// of that line; content cut short by a fence on the same line (the
/// same-line form, or tail content before a closing fence) does not, and
/// materializes with no newline before the closing wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathSpan {
    pub span: Span,
    /// Whether a newline follows this span in the materialized payload.
    pub newline: bool,
}

/// A captured math block: ordered spans of payload text plus the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathBlock {
    kind: MathBlockKind,
    spans: SmallVec<[MathSpan; 4]>,
}

impl MathBlock {
    fn new(kind: MathBlockKind) -> Self {
        Self {
            kind,
            spans: SmallVec::new(),
        }
    }

    /// Same-line or multi-line.
    #[inline]
    pub fn kind(&self) -> MathBlockKind {
        self.kind
    }

    /// Captured payload spans in document order.
    #[inline]
    pub fn spans(&self) -> &[MathSpan] {
        &self.spans
    }

    fn append(&mut self, span: Span, newline: bool) {
        self.spans.push(MathSpan { span, newline });
    }

    /// Materialize the payload: baseline indentation stripped, padding
    /// reinserted as spaces, a newline after each full-line span.
    pub fn payload(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for ms in &self.spans {
            ms.span.write_into(input, &mut out);
            if ms.newline {
                out.push(b'\n');
            }
        }
        out
    }
}

/// State of a math block between transitions.
///
/// `Closed` is a reachable, named state: the host may force-close a block
/// out of band, and a Continue that finds no `Open` state (absent entry or
/// explicit `Closed`) finishes immediately instead of faulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathBlockState {
    Closed,
    Open {
        /// Column of the opening fence; dedent baseline for continuation
        /// lines.
        indent: usize,
    },
}

/// Outcome of an open attempt.
#[derive(Debug)]
pub enum OpenResult {
    /// The line does not open a math block here.
    NotApplicable,
    /// Same-line block, complete; no further lines belong to it.
    Closed(MathBlock),
    /// Multi-line block; feed subsequent lines to
    /// [`MathBlockParser::continue_line`].
    Open(MathBlock),
}

/// Outcome of a continuation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueResult {
    /// The line was captured; the block stays open.
    Continue,
    /// The block is finished; call [`MathBlockParser::close`].
    Closed,
}

/// The `$$` block construct: open / continue / close transitions driven by
/// the host document engine, with per-block state kept in the parse
/// context.
pub struct MathBlockParser {
    key: ContextKey,
}

impl MathBlockParser {
    pub fn new() -> Self {
        Self {
            key: ContextKey::new(),
        }
    }

    /// Math fences may split an in-progress paragraph in two.
    #[inline]
    pub fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    /// A line indented like code (≥4 columns) never opens this construct.
    #[inline]
    pub fn accepts_indented_line(&self) -> bool {
        false
    }

    /// Attempt to open a math block on the current line.
    ///
    /// `entry` is the column at which a block construct may begin, or
    /// `None` when block-level parsing is not permitted here. The reader
    /// is not advanced; the host consumes the line afterwards.
    pub fn open(
        &self,
        reader: &LineReader<'_>,
        entry: Option<usize>,
        cx: &mut ParseContext,
    ) -> OpenResult {
        let Some(entry) = entry else {
            return OpenResult::NotApplicable;
        };
        let Some(line) = reader.peek_line() else {
            return OpenResult::NotApplicable;
        };
        let text = line.text;
        if entry >= text.len() || text[entry] != FENCE_CHAR {
            return OpenResult::NotApplicable;
        }

        let mut i = entry;
        while i < text.len() && text[i] == FENCE_CHAR {
            i += 1;
        }
        let run = i - entry;
        if run < MIN_FENCE_LEN {
            return OpenResult::NotApplicable;
        }

        let rest = &text[i..];

        // A maximal run of four or more dollars with nothing after it
        // (`$$$$`) opens and closes on the same line with an empty payload.
        if run >= 2 * MIN_FENCE_LEN && is_blank(rest) {
            return OpenResult::Closed(MathBlock::new(MathBlockKind::SameLine));
        }

        // Same-line form: a valid closing run later on this line. The
        // content stops at the fence, so no newline belongs to it.
        if let Some(fence) = scan_fence(rest, 0) {
            if fence.pos > 0 {
                let mut node = MathBlock::new(MathBlockKind::SameLine);
                let start = line.span.start_usize() + i;
                node.append(Span::from_usize(start, start + fence.pos), false);
                return OpenResult::Closed(node);
            }
        }

        // Multi-line form: record the dedent baseline; content after the
        // opening run, if any, becomes the first captured line.
        cx.set(self.key, MathBlockState::Open { indent: entry });
        let mut node = MathBlock::new(MathBlockKind::MultiLine);
        if !is_blank(rest) {
            let start = line.span.start_usize() + i;
            node.append(Span::from_usize(start, line.span.end_usize()), true);
        }
        OpenResult::Open(node)
    }

    /// Process one continuation line of an open multi-line block.
    ///
    /// On close, the reader is advanced past the line's content (the host
    /// consumes the newline). On continue, the captured line is appended
    /// and the computed padding is recorded on the reader.
    pub fn continue_line(
        &self,
        node: &mut MathBlock,
        reader: &mut LineReader<'_>,
        cx: &mut ParseContext,
    ) -> ContinueResult {
        let Some(line) = reader.peek_line() else {
            return ContinueResult::Closed;
        };
        let text = line.text;

        // State cleared by an external actor means the block was already
        // force-closed; finish without capturing anything.
        let indent = match cx.get::<MathBlockState>(self.key) {
            Some(MathBlockState::Open { indent }) => *indent,
            _ => return ContinueResult::Closed,
        };

        // Closing fence at the start of the line, below the code-indent
        // threshold.
        let (w, pos) = indent_width(text, 0);
        if w < CODE_INDENT {
            let mut i = pos;
            while i < text.len() && text[i] == FENCE_CHAR {
                i += 1;
            }
            if i - pos >= MIN_FENCE_LEN && is_blank(&text[i..]) {
                reader.advance(text.len());
                return ContinueResult::Closed;
            }
        }

        // Closing fence anywhere on the line, after trailing content
        // (`\end{vmatrix}$$`). The tail stops at the fence, so it carries
        // no newline. Note this rescan is unconditional: a blank-terminated
        // run deep inside indented content also closes the block.
        if let Some(fence) = scan_fence(text, 0) {
            let (dpos, padding) = dedent_position(text, 0, indent);
            if fence.pos > dpos {
                let start = line.span.start_usize();
                node.append(
                    Span::with_padding((start + dpos) as u32, (start + fence.pos) as u32, padding),
                    false,
                );
            }
            reader.advance(text.len());
            return ContinueResult::Closed;
        }

        // Ordinary content line: dedent against the baseline and capture.
        let (dpos, padding) = dedent_position(text, 0, indent);
        let start = line.span.start_usize();
        node.append(
            Span::with_padding((start + dpos) as u32, line.span.end, padding),
            true,
        );
        reader.advance_and_set_padding(text.len(), padding);
        ContinueResult::Continue
    }

    /// Release the per-block state so it cannot leak into a later block.
    /// Invoked on both normal and forced closure.
    pub fn close(&self, cx: &mut ParseContext) {
        cx.remove(self.key);
    }
}

impl Default for MathBlockParser {
    fn default() -> Self {
        Self::new()
    }
}
