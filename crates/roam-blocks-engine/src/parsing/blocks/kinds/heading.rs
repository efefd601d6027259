/// ATX-style heading syntax (`# Title`).
pub struct Heading;

impl Heading {
    /// The heading marker byte.
    pub const HASH: u8 = b'#';
    /// Deepest heading the remote graph can render.
    pub const MAX_LEVEL: u8 = 3;

    /// Splits a heading line into `(hash_count, content)`.
    ///
    /// The hashes must be followed by whitespace, so `#tag` stays plain text.
    /// The count is returned unclamped; see [`Heading::clamp`].
    pub fn parse(s: &str) -> Option<(usize, &str)> {
        let hashes = s.bytes().take_while(|&b| b == Self::HASH).count();
        if hashes == 0 {
            return None;
        }
        let rest = &s[hashes..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((hashes, rest.trim()))
    }

    /// Clamps a raw hash count into the renderable `1..=3` range.
    pub fn clamp(count: usize) -> u8 {
        count.clamp(1, Self::MAX_LEVEL as usize) as u8
    }

    /// Returns true if `level` is a heading size the remote graph accepts.
    pub fn is_valid_level(level: u8) -> bool {
        (1..=Self::MAX_LEVEL).contains(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("### Deep", Some((3, "Deep")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("#\tTabbed", Some((1, "Tabbed")))]
    #[case("#tag", None)]
    #[case("#", None)]
    #[case("Title", None)]
    fn parse_heading(#[case] input: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Heading::parse(input), expected);
    }

    #[test]
    fn clamp_caps_at_three() {
        assert_eq!(Heading::clamp(1), 1);
        assert_eq!(Heading::clamp(3), 3);
        assert_eq!(Heading::clamp(6), 3);
    }

    #[test]
    fn valid_levels() {
        assert!(!Heading::is_valid_level(0));
        assert!(Heading::is_valid_level(2));
        assert!(!Heading::is_valid_level(4));
    }
}
