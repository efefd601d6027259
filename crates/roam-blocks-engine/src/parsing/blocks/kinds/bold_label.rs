/// A line that is bold from end to end, e.g. `**Summary**`.
///
/// Such lines act as section labels: they become a root and collect the
/// lines after them, the same way a heading does.
pub struct BoldLabel;

impl BoldLabel {
    pub const DELIM: &'static str = "**";

    /// Returns true if `s` is a single bold span covering the whole line.
    ///
    /// `**a** and **b**` starts and ends with the delimiter but is two spans,
    /// so it does not count.
    pub fn matches(s: &str) -> bool {
        let Some(inner) = s
            .strip_prefix(Self::DELIM)
            .and_then(|rest| rest.strip_suffix(Self::DELIM))
        else {
            return false;
        };
        !inner.trim().is_empty() && !inner.contains(Self::DELIM)
    }
}
