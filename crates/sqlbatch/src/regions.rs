//! Matchers for the regions that hide the separator: comments and quoted
//! text. Each one either recognises its opener at the cursor and consumes the
//! whole region, or leaves the scanner untouched.

use crate::{
    error::{SplitError, SyntaxError},
    scanner::Scanner,
};

pub(crate) const LINE_COMMENT: &str = "--";
pub(crate) const BLOCK_OPEN: &str = "/*";
pub(crate) const BLOCK_CLOSE: &str = "*/";

/// Consumes a `--` comment up to, not including, the line break.
pub(crate) fn skip_line_comment(scanner: &mut Scanner<'_>) -> bool {
    if !scanner.match_literal(LINE_COMMENT) {
        return false;
    }
    scanner.consume_while(|c| c != '\n');
    true
}

/// Consumes a block comment, following nested openers until the outermost
/// one is closed.
pub(crate) fn skip_block_comment(scanner: &mut Scanner<'_>) -> Result<bool, SplitError> {
    let start = scanner.position();
    if !scanner.match_literal(BLOCK_OPEN) {
        return Ok(false);
    }
    let mut depth = 1usize;
    while depth > 0 {
        if scanner.match_literal(BLOCK_OPEN) {
            depth += 1;
        } else if scanner.match_literal(BLOCK_CLOSE) {
            depth -= 1;
        } else if scanner.read().is_none() {
            tracing::debug!(line = start.line, column = start.column, depth, "unterminated block comment");
            return Err(SplitError::new(SyntaxError::UnbalancedBlockComment, start));
        }
    }
    Ok(true)
}

/// Consumes text delimited by `open` and `close`, where a doubled `close`
/// stands for itself (`'it''s'`, `[a]]b]`).
///
/// The cursor must sit on `open`.
pub(crate) fn scan_quoted(
    scanner: &mut Scanner<'_>,
    open: char,
    close: char,
    unterminated: SyntaxError,
) -> Result<(), SplitError> {
    let start = scanner.position();
    debug_assert_eq!(scanner.peek(), Some(open), "scan_quoted off its opener");
    scanner.read();
    loop {
        match scanner.read() {
            Some(c) if c == close => {
                if scanner.peek() == Some(close) {
                    scanner.read();
                } else {
                    return Ok(());
                }
            }
            Some(_) => {}
            None => {
                tracing::debug!(line = start.line, column = start.column, %open, "unterminated quoted text");
                return Err(SplitError::new(unterminated, start));
            }
        }
    }
}
