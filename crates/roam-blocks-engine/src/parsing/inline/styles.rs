use std::ops::Range;

use super::{
    cursor::{Cursor, run_len_at},
    kinds::{CodeSpan, Emphasis, Highlight},
};
use crate::parsing::table::is_table_row;

const ESCAPE: u8 = b'\\';
const NEWLINE: u8 = b'\n';
const PIPE: u8 = b'|';
const SPECIAL: &[u8] = &[
    CodeSpan::TICK,
    Emphasis::STAR,
    Emphasis::UNDERSCORE,
    Highlight::EQ,
    ESCAPE,
];

/// Rewrites inline markup into the remote graph's native spelling.
///
/// - `*x*` and `_x_` become `__x__`
/// - `==x==` becomes `^^x^^`
/// - `**x**`, longer delimiter runs, escapes and code spans are copied as-is
///
/// The content of a rewritten span is normalized too, so `*a ==b==*`
/// becomes `__a ^^b^^__`. On table rows a span never crosses a cell pipe.
pub fn normalize_inline_styles(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cur = Cursor::new(text);
    let mut line = LineScope::default();

    while !cur.eof() {
        let start = cur.pos();
        cur.skip_until(SPECIAL);
        out.push_str(&text[start..cur.pos()]);
        if cur.eof() {
            break;
        }
        line.enter(text, cur.pos());

        if let Some(raw) = try_code_span(&mut cur) {
            out.push_str(raw);
            continue;
        }
        if let Some(inner) = try_emphasis(&mut cur, &mut line) {
            push_wrapped(&mut out, Emphasis::TARGET, inner);
            continue;
        }
        if let Some(inner) = try_highlight(&mut cur, &mut line) {
            push_wrapped(&mut out, Highlight::TARGET, inner);
            continue;
        }
        copy_literal(&mut cur, &mut out);
    }

    out
}

fn push_wrapped(out: &mut String, delim: &str, inner: &str) {
    out.push_str(delim);
    out.push_str(&normalize_inline_styles(inner));
    out.push_str(delim);
}

/// What the closer search knows about the line under the cursor.
#[derive(Debug, Default)]
struct LineScope {
    /// Offset of the line's newline, or the text length on the last line.
    end: usize,
    /// Table rows stop every closer search at the next cell pipe.
    table_row: bool,
    /// Per delimiter, the stretch a failed search already covered. A later
    /// opener inside it cannot find a closer either.
    exhausted: Vec<(u8, Range<usize>)>,
}

impl LineScope {
    /// Moves to the line holding `pos` unless already there.
    fn enter(&mut self, text: &str, pos: usize) {
        if pos < self.end {
            return;
        }
        let start = text[self.end..pos]
            .rfind('\n')
            .map_or(self.end, |i| self.end + i + 1);
        self.end = text[pos..].find('\n').map_or(text.len(), |i| pos + i);
        self.table_row = is_table_row(&text[start..self.end]);
        self.exhausted.clear();
    }

    /// Finds the closer for an opener whose content starts at `from`.
    fn closer(
        &mut self,
        s: &str,
        from: usize,
        delim: u8,
        run: usize,
        accept: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        if self
            .exhausted
            .iter()
            .any(|(d, covered)| *d == delim && covered.contains(&from))
        {
            return None;
        }
        let stops: &[u8] = if self.table_row {
            &[NEWLINE, PIPE]
        } else {
            &[NEWLINE]
        };
        match find_closer(s, from, delim, run, stops, accept) {
            Ok(close) => Some(close),
            Err(stop) => {
                self.exhausted.retain(|(d, _)| *d != delim);
                self.exhausted.push((delim, from..stop));
                None
            }
        }
    }
}

/// Copies the delimiter run (or escape pair) at the cursor unchanged.
fn copy_literal(cur: &mut Cursor<'_>, out: &mut String) {
    let s = cur.s;
    let start = cur.pos();
    match cur.peek() {
        Some(ESCAPE) => {
            cur.bump();
            if let Some(c) = s[cur.pos()..].chars().next() {
                cur.bump_n(c.len_utf8());
            }
        }
        Some(b) => cur.bump_n(cur.run_len(b)),
        None => {}
    }
    out.push_str(&s[start..cur.pos()]);
}

/// Attempts to consume a code span at the cursor, returning it verbatim.
///
/// Returns `None` if not at a backtick run or if the run is never closed.
/// On failure, cursor position is restored.
fn try_code_span<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let s = cur.s;
    let start = cur.pos();
    let end = code_span_end(s, start, &[])?;
    cur.bump_n(end - start);
    Some(&s[start..end])
}

/// End offset of the code span opened by the backtick run at `start`.
///
/// Closes on the next run of the same length, giving up at any byte in
/// `stops`.
fn code_span_end(s: &str, start: usize, stops: &[u8]) -> Option<usize> {
    let bytes = s.as_bytes();
    let n = run_len_at(s, start, CodeSpan::TICK);
    let mut j = start + n;
    while j < bytes.len() {
        match bytes[j] {
            b if stops.contains(&b) => return None,
            CodeSpan::TICK => {
                let m = run_len_at(s, j, CodeSpan::TICK);
                if m == n {
                    return Some(j + m);
                }
                j += m;
            }
            _ => j += 1,
        }
    }
    None
}

/// Attempts to match `*x*` or `_x_` at the cursor, returning the inner text.
///
/// The opener must be a run of exactly one delimiter followed by a
/// non-whitespace char; `_` additionally may not follow a word character.
fn try_emphasis<'a>(cur: &mut Cursor<'a>, line: &mut LineScope) -> Option<&'a str> {
    let delim = cur.peek()?;
    if !Emphasis::is_delim(delim) || cur.run_len(delim) != 1 {
        return None;
    }
    let s = cur.s;
    let open = cur.pos();

    let next = s[open + 1..].chars().next()?;
    if next.is_whitespace() {
        return None;
    }
    if Emphasis::is_intraword_sensitive(delim) && cur.prev_char().is_some_and(char::is_alphanumeric)
    {
        return None;
    }

    let close = line.closer(s, open + 1, delim, 1, |j| {
        !Emphasis::is_intraword_sensitive(delim)
            || !s[j + 1..].chars().next().is_some_and(char::is_alphanumeric)
    })?;
    cur.bump_n(close + 1 - open);
    Some(&s[open + 1..close])
}

/// Attempts to match `==x==` at the cursor, returning the inner text.
fn try_highlight<'a>(cur: &mut Cursor<'a>, line: &mut LineScope) -> Option<&'a str> {
    if cur.peek() != Some(Highlight::EQ) || cur.run_len(Highlight::EQ) != Highlight::RUN {
        return None;
    }
    let s = cur.s;
    let open = cur.pos();
    let from = open + Highlight::RUN;

    if s[from..].chars().next().is_none_or(char::is_whitespace) {
        return None;
    }

    let close = line.closer(s, from, Highlight::EQ, Highlight::RUN, |_| true)?;
    cur.bump_n(close + Highlight::RUN - open);
    Some(&s[from..close])
}

/// Finds a closing run of exactly `run` copies of `delim` before the next
/// byte in `stops`.
///
/// The closer must not follow whitespace, must leave a non-empty inner span,
/// and must satisfy `accept`. Escapes and closed code spans are skipped. On
/// failure returns the offset where the search stopped.
fn find_closer(
    s: &str,
    from: usize,
    delim: u8,
    run: usize,
    stops: &[u8],
    accept: impl Fn(usize) -> bool,
) -> Result<usize, usize> {
    let bytes = s.as_bytes();
    let mut j = from;
    while j < bytes.len() {
        match bytes[j] {
            b if stops.contains(&b) => return Err(j),
            ESCAPE => match bytes.get(j + 1) {
                Some(b) if stops.contains(b) => return Err(j + 1),
                _ => j += 2,
            },
            CodeSpan::TICK => {
                j = code_span_end(s, j, stops)
                    .unwrap_or(j + run_len_at(s, j, CodeSpan::TICK));
            }
            b if b == delim => {
                let len = run_len_at(s, j, delim);
                let after_space = s[..j].chars().next_back().is_some_and(char::is_whitespace);
                if len == run && j > from && !after_space && accept(j) {
                    return Ok(j);
                }
                j += len;
            }
            _ => j += 1,
        }
    }
    Err(bytes.len())
}
