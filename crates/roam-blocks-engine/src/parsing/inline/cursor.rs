/// A cursor for byte-by-byte inline scanning.
///
/// All delimiters the inline normalizer cares about are ASCII, so stepping
/// over any other byte one at a time never splits a delimiter, and the
/// cursor only ever stops on a char boundary when it stops on a delimiter.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while the current byte is not one of `stops`.
    pub fn skip_until(&mut self, stops: &[u8]) {
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                break;
            }
            self.i += 1;
        }
    }

    /// Length of the run of `b` starting at the cursor (0 if not at `b`).
    pub fn run_len(&self, b: u8) -> usize {
        run_len_at(self.s, self.i, b)
    }

    /// The char just before the cursor, if any.
    pub fn prev_char(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }
}

/// Length of the run of `b` in `s` starting at byte `at`.
pub fn run_len_at(s: &str, at: usize, b: u8) -> usize {
    s.as_bytes()
        .get(at..)
        .map_or(0, |rest| rest.iter().take_while(|&&x| x == b).count())
}
