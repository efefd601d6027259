/// A byte range `[start, end)` into the normalized input text.
///
/// Classified lines keep the span of the physical line they came from so
/// diagnostics can point back at the text the tree was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}
