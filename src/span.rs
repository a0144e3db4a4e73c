//! Compact span representation for zero-copy text references.
//!
//! Uses `u32` offsets to save memory. A span may additionally carry
//! `padding`: a count of synthetic leading spaces to reinsert when the
//! span is materialized. Padding appears when a tab in a continuation
//! line's indentation straddles the dedent baseline: the tab cannot be
//! sliced mid-character, so the overshoot is reinserted as spaces.

/// Compact reference to a contiguous region of the input buffer.
///
/// Spans are immutable once created; a block node appends spans in
/// document order and never rewrites them.
///
/// # Example
/// ```
/// use dollarmath::Span;
///
/// let input = b"x + y = z";
/// let span = Span::new(0, 5);
/// assert_eq!(span.slice(input), b"x + y");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    /// Synthetic leading spaces to reinsert before `start..end`.
    pub padding: u32,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<Span>() == 12);

impl Span {
    /// Create a new span with no padding.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            padding: 0,
        }
    }

    /// Create a new span with padding.
    #[inline]
    pub const fn with_padding(start: u32, end: u32, padding: u32) -> Self {
        Self {
            start,
            end,
            padding,
        }
    }

    /// Create a span from usize offsets.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
            padding: 0,
        }
    }

    /// Get the slice this span refers to (padding not included).
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start as usize..self.end as usize]
    }

    /// Byte length of the referenced region, excluding padding.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the referenced region is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Write the materialized text (padding spaces, then the slice) into `out`.
    pub fn write_into(&self, input: &[u8], out: &mut Vec<u8>) {
        for _ in 0..self.padding {
            out.push(b' ');
        }
        out.extend_from_slice(self.slice(input));
    }
}

impl From<std::ops::Range<u32>> for Span {
    #[inline]
    fn from(r: std::ops::Range<u32>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::from_usize(r.start, r.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_size() {
        assert_eq!(std::mem::size_of::<Span>(), 12);
    }

    #[test]
    fn test_span_new() {
        let s = Span::new(10, 20);
        assert_eq!(s.start, 10);
        assert_eq!(s.end, 20);
        assert_eq!(s.padding, 0);
        assert_eq!(s.len(), 10);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_span_slice() {
        let input = b"hello world";
        assert_eq!(Span::new(0, 5).slice(input), b"hello");
        assert_eq!(Span::new(6, 11).slice(input), b"world");
    }

    #[test]
    fn test_span_empty() {
        let s = Span::new(5, 5);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_span_write_into_with_padding() {
        let input = b"abc";
        let mut out = Vec::new();
        Span::with_padding(1, 3, 2).write_into(input, &mut out);
        assert_eq!(out, b"  bc");
    }

    #[test]
    fn test_span_from_std_range() {
        let s: Span = (10u32..20u32).into();
        assert_eq!(s.start, 10);
        assert_eq!(s.end, 20);

        let s2: Span = (10usize..20usize).into();
        assert_eq!(s2.start, 10);
        assert_eq!(s2.end, 20);
    }
}
