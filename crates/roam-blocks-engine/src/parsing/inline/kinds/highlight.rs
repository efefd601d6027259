/// `==highlight==` spans.
pub struct Highlight;

impl Highlight {
    pub const EQ: u8 = b'=';
    /// Highlights are delimited by exactly this many `=`.
    pub const RUN: usize = 2;
    /// The remote graph's highlight delimiter.
    pub const TARGET: &'static str = "^^";
}
