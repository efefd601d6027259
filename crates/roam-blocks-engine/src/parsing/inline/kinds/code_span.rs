/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: nothing inside them is restyled. A span opened
/// by a run of N backticks closes at the next run of exactly N, which also
/// covers fenced code blocks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick byte that delimits code spans.
    pub const TICK: u8 = b'`';
}
