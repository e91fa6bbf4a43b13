use thiserror::Error;

use crate::scanner::Position;

/// Malformed input found while splitting a script.
///
/// The position is where the offending construct was opened, not where the
/// input ran out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct SplitError {
    pub(crate) source: SyntaxError,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl SplitError {
    pub(crate) fn new(source: SyntaxError, at: Position) -> Self {
        Self {
            source,
            line: at.line,
            column: at.column,
        }
    }

    /// What was malformed.
    pub fn kind(&self) -> SyntaxError {
        self.source
    }

    /// 1-based line of the unterminated construct.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the unterminated construct.
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The kinds of malformed input the splitter rejects.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A quoted string literal reached the end of input.
    #[error("unbalanced string literal")]
    UnbalancedStringLiteral,
    /// A block comment reached the end of input while still nested.
    #[error("unbalanced block comment")]
    UnbalancedBlockComment,
    /// A `[bracketed]` identifier reached the end of input.
    #[error("unbalanced bracketed identifier")]
    UnbalancedBracketedIdentifier,
}
