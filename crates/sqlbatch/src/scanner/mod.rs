//! Scanner: a backtrackable cursor over the script text.
//!
//! What it does
//! - Reads one scalar at a time from the borrowed script via
//!   `peek()`/`read()` while maintaining `offset/line/column`.
//! - Matches fixed literals (keywords, comment openers) with ASCII case
//!   folding, all-or-nothing.
//! - Keeps a stack of saved positions so speculative matches can back out of
//!   partially consumed input (`save()` / `accept()` / `rollback()`).
//!
//! Invariants
//! - `offset` always sits on a char boundary, `0 <= offset <= src.len()`.
//! - The cursor only moves backwards through `rollback()`, and only to a
//!   position previously recorded by `save()`.
//! - A failed `match_literal` leaves the cursor untouched.
//!
//! Example
//! ```rust
//! use sqlbatch::Scanner;
//!
//! let mut s = Scanner::new("GOTO label");
//! s.save();
//! assert!(s.match_literal("go"));
//! assert_eq!(s.peek(), Some('T'));
//! s.rollback();
//! assert_eq!(s.position().offset, 0);
//! ```

/// A location in the script.
///
/// `offset` is a byte offset into the source; `line` and `column` are
/// 1-based and count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset of the next unread character.
    pub offset: usize,
    /// 1-based line of the next unread character.
    pub line: usize,
    /// 1-based column of the next unread character.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

/// A character cursor with nested checkpoints.
///
/// The scanner owns no text; it borrows the script for `'src` and hands out
/// borrowed slices of it.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    src: &'src str,
    pos: Position,
    checkpoints: Vec<Position>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `src`.
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: Position::default(),
            checkpoints: Vec::new(),
        }
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[cfg(test)]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos.offset >= self.src.len()
    }

    /// Decodes but does not consume the next character. `None` is end of
    /// input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        Self::decode_from(self.src, self.pos.offset).map(|(ch, _)| ch)
    }

    /// Consumes one character and returns it, or `None` at end of input.
    pub fn read(&mut self) -> Option<char> {
        let (ch, len) = Self::decode_from(self.src, self.pos.offset)?;
        Self::advance(&mut self.pos, ch, len);
        Some(ch)
    }

    /// Consumes `lit` if the input continues with it, ignoring ASCII case.
    ///
    /// On failure nothing is consumed.
    pub fn match_literal(&mut self, lit: &str) -> bool {
        match self.scan_literal(lit) {
            Some(end) => {
                self.pos = end;
                true
            }
            None => false,
        }
    }

    /// Returns whether the input continues with `lit`, without consuming it.
    pub fn peek_literal(&self, lit: &str) -> bool {
        self.scan_literal(lit).is_some()
    }

    /// Pushes the current position onto the checkpoint stack.
    pub fn save(&mut self) {
        self.checkpoints.push(self.pos);
    }

    /// Drops the innermost checkpoint, keeping everything consumed since.
    pub fn accept(&mut self) {
        self.checkpoints
            .pop()
            .expect("scanner.accept(): no checkpoint saved");
    }

    /// Restores the position recorded by the innermost checkpoint and drops
    /// it.
    pub fn rollback(&mut self) {
        self.pos = self
            .checkpoints
            .pop()
            .expect("scanner.rollback(): no checkpoint saved");
    }

    /// Number of checkpoints currently held.
    #[inline]
    pub fn depth(&self) -> usize {
        self.checkpoints.len()
    }

    /// Skips spaces and tabs, never line breaks. Returns how many were
    /// skipped.
    pub fn skip_linear_whitespace(&mut self) -> usize {
        // both characters are a single byte wide
        self.consume_while(|c| c == ' ' || c == '\t').len()
    }

    /// Consumes the maximal run of characters satisfying `pred` and returns
    /// it as a slice of the source.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos.offset;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.read();
        }
        &self.src[start..self.pos.offset]
    }

    /// Source text from byte `start` up to the cursor.
    ///
    /// `start` must be an offset previously taken from [`Scanner::position`].
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.src[start..self.pos.offset]
    }

    /// Walks `lit` against the input from the cursor and returns the position
    /// just past it on a full match.
    fn scan_literal(&self, lit: &str) -> Option<Position> {
        let mut pos = self.pos;
        for expected in lit.chars() {
            let (ch, len) = Self::decode_from(self.src, pos.offset)?;
            if !ch.eq_ignore_ascii_case(&expected) {
                return None;
            }
            Self::advance(&mut pos, ch, len);
        }
        Some(pos)
    }

    #[inline]
    fn advance(pos: &mut Position, ch: char, len: usize) {
        pos.offset += len;
        if ch == '\n' {
            pos.line += 1;
            pos.column = 1;
        } else {
            pos.column += 1;
        }
    }

    // Decode the first scalar of `s` starting at `offset`
    #[inline]
    fn decode_from(s: &str, offset: usize) -> Option<(char, usize)> {
        let ch = s.get(offset..)?.chars().next()?;
        Some((ch, ch.len_utf8()))
    }
}

#[cfg(test)]
mod tests;
