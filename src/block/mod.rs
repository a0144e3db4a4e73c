//! Block-level parsing.
//!
//! The document parser is line-oriented and handles:
//! - `$$` math blocks (same-line and multi-line)
//! - Paragraphs
//! - Blank-line separation and the indented-code guard

mod event;
pub mod math;
mod parser;

pub use event::BlockEvent;
pub use math::{
    scan_fence, ContinueResult, Fence, MathBlock, MathBlockKind, MathBlockParser, MathBlockState,
    MathSpan, OpenResult, FENCE_CHAR,
};
pub use parser::DocumentParser;
