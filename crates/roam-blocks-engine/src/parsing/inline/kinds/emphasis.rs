/// Single-delimiter emphasis (italic).
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// The remote graph's italic delimiter.
    pub const TARGET: &'static str = "__";

    pub fn is_delim(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// `_` never opens or closes inside a word (`snake_case`).
    pub fn is_intraword_sensitive(b: u8) -> bool {
        b == Self::UNDERSCORE
    }
}
