//! Recognises a separator statement: `GO`, optionally followed by spaces,
//! block comments, a repeat count and a trailing line comment.
//!
//! This is not a grammar. Input is assumed to be otherwise well formed; the
//! matcher only has to tell the separator apart from look-alike keywords and
//! to back out without consuming anything when it is not one.

use core::num::NonZeroU32;

use crate::{error::SplitError, options::SplitOptions, regions, scanner::Scanner};

/// Tries to consume a separator statement at the cursor.
///
/// Returns the repeat count on success. On `Ok(None)` the scanner is back
/// where it started.
pub(crate) fn match_separator(
    scanner: &mut Scanner<'_>,
    options: &SplitOptions,
) -> Result<Option<NonZeroU32>, SplitError> {
    if options.separator.is_empty() {
        return Ok(None);
    }

    scanner.save();
    scanner.skip_linear_whitespace();

    // Longer keywords sharing the prefix go first, otherwise GOTO reads as GO.
    let lookalike = options
        .lookalikes
        .iter()
        .any(|kw| scanner.peek_literal(kw));
    if lookalike || !scanner.match_literal(&options.separator) {
        scanner.rollback();
        return Ok(None);
    }
    if options.word_boundaries && scanner.peek().is_some_and(continues_keyword) {
        scanner.rollback();
        return Ok(None);
    }

    if let Err(err) = skip_gap(scanner) {
        scanner.rollback();
        return Err(err);
    }

    // A line comment ends the statement and belongs to it.
    if regions::skip_line_comment(scanner) {
        scanner.accept();
        return Ok(Some(NonZeroU32::MIN));
    }

    let digits = scanner.consume_while(|c| c.is_ascii_digit());
    let count = if digits.is_empty() {
        NonZeroU32::MIN
    } else {
        match digits.parse::<u32>().ok().and_then(NonZeroU32::new) {
            Some(count) => count,
            None => {
                tracing::trace!(digits, "ignoring separator with unusable count");
                scanner.rollback();
                return Ok(None);
            }
        }
    };

    if let Err(err) = trailing_line_comment(scanner) {
        scanner.rollback();
        return Err(err);
    }
    scanner.accept();
    Ok(Some(count))
}

/// Skips any mix of spaces, tabs and block comments.
fn skip_gap(scanner: &mut Scanner<'_>) -> Result<(), SplitError> {
    loop {
        let spaces = scanner.skip_linear_whitespace();
        let comment = regions::skip_block_comment(scanner)?;
        if spaces == 0 && !comment {
            return Ok(());
        }
    }
}

// Consumes `<gap> -- ...` after the count; anything else stays unread.
fn trailing_line_comment(scanner: &mut Scanner<'_>) -> Result<(), SplitError> {
    scanner.save();
    if let Err(err) = skip_gap(scanner) {
        scanner.rollback();
        return Err(err);
    }
    if regions::skip_line_comment(scanner) {
        scanner.accept();
    } else {
        scanner.rollback();
    }
    Ok(())
}

/// Characters that may appear inside an identifier.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '@' | '#' | '$')
}

// Digits may follow the keyword directly and are read as the count.
fn continues_keyword(c: char) -> bool {
    is_word_char(c) && !c.is_ascii_digit()
}
