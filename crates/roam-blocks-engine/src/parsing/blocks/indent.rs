use std::num::NonZeroUsize;

/// How many columns of leading whitespace make up one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentStyle {
    spaces_per_level: NonZeroUsize,
}

impl IndentStyle {
    pub const DEFAULT_WIDTH: usize = 2;

    pub fn new(spaces_per_level: NonZeroUsize) -> Self {
        Self { spaces_per_level }
    }

    /// Builds a style from a raw width; `None` for a width of zero.
    pub fn spaces(width: usize) -> Option<Self> {
        NonZeroUsize::new(width).map(Self::new)
    }

    pub fn width(&self) -> usize {
        self.spaces_per_level.get()
    }

    /// Convert an indentation string to depth level (floor division).
    ///
    /// A tab counts as one full level.
    pub fn calculate_depth(&self, indent_str: &str) -> usize {
        let columns: usize = indent_str
            .chars()
            .map(|c| if c == '\t' { self.width() } else { 1 })
            .sum();
        columns / self.width()
    }

    /// The whitespace prefix for an item nested `depth` levels deep.
    pub fn prefix(&self, depth: usize) -> String {
        " ".repeat(depth * self.width())
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self {
            spaces_per_level: NonZeroUsize::new(Self::DEFAULT_WIDTH).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
