use std::sync::OnceLock;

use regex::Regex;

/// Marker types for list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dash,     // "-"
    Asterisk, // "*"
    Plus,     // "+"
    Numbered, // "1.", "2.", etc.
}

/// Bullet and numbered list syntax.
pub struct ListMarker;

impl ListMarker {
    /// Strips a leading list marker, returning the marker and the item text.
    ///
    /// The marker must be followed by whitespace or end the line, so
    /// `**bold**` and `-5` are not list items. A bare `-` yields empty text.
    pub fn strip(s: &str) -> Option<(Marker, &str)> {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = MARKER_REGEX.get_or_init(|| {
            Regex::new(r"^(?:([-*+])|\d+\.)(?:\s+|$)").expect("Invalid list marker regex")
        });

        let caps = re.captures(s)?;
        let marker = match caps.get(1).map(|m| m.as_str()) {
            Some("-") => Marker::Dash,
            Some("*") => Marker::Asterisk,
            Some("+") => Marker::Plus,
            _ => Marker::Numbered,
        };
        let end = caps.get(0).map_or(0, |m| m.end());
        Some((marker, s[end..].trim_end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some((Marker::Dash, "item")))]
    #[case("* item", Some((Marker::Asterisk, "item")))]
    #[case("+ item", Some((Marker::Plus, "item")))]
    #[case("12. item", Some((Marker::Numbered, "item")))]
    #[case("-   spaced", Some((Marker::Dash, "spaced")))]
    #[case("-", Some((Marker::Dash, "")))]
    #[case("**bold**", None)]
    #[case("-5 degrees", None)]
    #[case("1.5 litres", None)]
    #[case("plain", None)]
    fn strip_marker(#[case] input: &str, #[case] expected: Option<(Marker, &str)>) {
        assert_eq!(ListMarker::strip(input), expected);
    }
}
