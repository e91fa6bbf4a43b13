//! Splits SQL scripts into independently executable batches.
//!
//! Tools such as `sqlcmd` and SSMS accept scripts in which batches are
//! separated by a `GO` line. `GO` is not part of the SQL grammar, so a server
//! never sees it: the client has to find every free-standing occurrence,
//! ignoring the ones inside comments, quoted literals and nested block
//! comments, and send the text between them one batch at a time.
//!
//! ```rust
//! use sqlbatch::split_batches;
//!
//! let batches = split_batches("select 1;\ngo\nselect 'it''s a go';\n").unwrap();
//! assert_eq!(batches.len(), 2);
//! assert_eq!(batches[0].text, "select 1;\n");
//! assert_eq!(batches[1].text, "\nselect 'it''s a go';\n");
//! ```
//!
//! `GO n` repeats the preceding batch `n` times. By default the repetition is
//! folded into the batch text as a counted `WHILE` loop, see [`RepeatMode`].

mod batch;
mod error;
mod options;
mod regions;
mod scanner;
mod separator;
mod splitter;

#[cfg(test)]
mod tests;

pub use batch::{Batch, wrap_repeat};
pub use error::{SplitError, SyntaxError};
pub use options::{RepeatMode, SplitOptions};
pub use scanner::{Position, Scanner};
pub use splitter::{BatchSplitter, Batches, split_batches};
