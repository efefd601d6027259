/// The container token the remote graph renders as a table widget.
pub struct TableMarker;

impl TableMarker {
    pub const TOKEN: &'static str = "{{table}}";

    /// Returns true if the line carries the table token anywhere.
    pub fn contains(s: &str) -> bool {
        s.contains(Self::TOKEN)
    }
}
