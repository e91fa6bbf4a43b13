//! The batch extractor.
//!
//! One left-to-right pass over the script classifies the input into four
//! kinds of region, in this order of precedence at every position:
//!
//! 1. comments (`--` to end of line, nested `/* */`): dropped, or copied when
//!    [`SplitOptions::keep_comments`] is set;
//! 2. quoted text (`'...'`, `"..."`, optionally `[...]`): copied verbatim;
//! 3. a separator statement: closes the current batch;
//! 4. anything else: one ordinary character, copied.
//!
//! Batches whose text is blank are never emitted.

use core::num::NonZeroU32;

use crate::{
    batch::Batch,
    error::{SplitError, SyntaxError},
    options::SplitOptions,
    regions,
    scanner::Scanner,
    separator,
};

/// Splits scripts according to a fixed set of [`SplitOptions`].
#[derive(Debug, Clone, Default)]
pub struct BatchSplitter {
    options: SplitOptions,
}

impl BatchSplitter {
    /// Creates a splitter with the given options.
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// The options this splitter was built with.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Splits `script` into batches, in source order.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError`] if a string literal, bracketed identifier or
    /// block comment is still open at the end of the script. No batches are
    /// returned in that case.
    #[tracing::instrument(level = "debug", skip_all, fields(len = script.len()))]
    pub fn split(&self, script: &str) -> Result<Vec<Batch>, SplitError> {
        let batches = self.batches(script).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = batches.len(), "split script");
        Ok(batches)
    }

    /// Lazily yields the batches of `script`.
    ///
    /// The iterator ends after the first error.
    pub fn batches<'a, 'src>(&'a self, script: &'src str) -> Batches<'a, 'src> {
        Batches {
            options: &self.options,
            scanner: Scanner::new(script),
            buffer: String::new(),
            buffer_line: None,
            after_word: false,
            done: false,
        }
    }
}

/// Splits `script` with the default options: `GO` separators, `GOTO`
/// disambiguation, repetition wrapped into the batch text.
///
/// # Errors
///
/// See [`BatchSplitter::split`].
pub fn split_batches(script: &str) -> Result<Vec<Batch>, SplitError> {
    BatchSplitter::default().split(script)
}

/// Iterator over the batches of one script, see [`BatchSplitter::batches`].
#[derive(Debug)]
pub struct Batches<'a, 'src> {
    options: &'a SplitOptions,
    scanner: Scanner<'src>,
    buffer: String,
    // Line of the first non-blank character pushed into `buffer`
    buffer_line: Option<usize>,
    // Whether the last copied character was part of an identifier
    after_word: bool,
    done: bool,
}

impl Iterator for Batches<'_, '_> {
    type Item = Result<Batch, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_batch() {
            Ok(Some(batch)) => {
                tracing::trace!(
                    line = batch.line,
                    repeat = batch.repeat_count.get(),
                    "emit batch"
                );
                Some(Ok(batch))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl core::iter::FusedIterator for Batches<'_, '_> {}

impl Batches<'_, '_> {
    /// Runs the main loop until a separator closes a non-blank batch or the
    /// input ends.
    fn next_batch(&mut self) -> Result<Option<Batch>, SplitError> {
        while let Some(ch) = self.scanner.peek() {
            if self.comment()? || self.quoted(ch)? {
                continue;
            }

            if !(self.options.word_boundaries && self.after_word) {
                if let Some(count) = separator::match_separator(&mut self.scanner, self.options)? {
                    tracing::trace!(
                        line = self.scanner.position().line,
                        count = count.get(),
                        "separator"
                    );
                    self.after_word = false;
                    match self.take_batch(count) {
                        Some(batch) => return Ok(Some(batch)),
                        None => continue,
                    }
                }
                // The matcher already skipped this whole run before failing,
                // so no position inside it can start a separator either.
                if matches!(ch, ' ' | '\t') {
                    let run = self.scanner.consume_while(|c| c == ' ' || c == '\t');
                    self.buffer.push_str(run);
                    self.after_word = false;
                    continue;
                }
            }

            let line = self.scanner.position().line;
            if let Some(ch) = self.scanner.read() {
                if !ch.is_whitespace() {
                    self.mark_line(line);
                }
                self.buffer.push(ch);
                self.after_word = separator::is_word_char(ch);
            }
        }

        Ok(self.take_batch(NonZeroU32::MIN))
    }

    /// Consumes a comment at the cursor, copying it if comments are kept.
    fn comment(&mut self) -> Result<bool, SplitError> {
        let start = self.scanner.position();
        let found = regions::skip_line_comment(&mut self.scanner)
            || regions::skip_block_comment(&mut self.scanner)?;
        if found {
            if self.options.keep_comments {
                self.mark_line(start.line);
                self.buffer.push_str(self.scanner.slice_from(start.offset));
            }
            self.after_word = false;
        }
        Ok(found)
    }

    /// Copies a quoted literal or identifier opening with `ch`.
    fn quoted(&mut self, ch: char) -> Result<bool, SplitError> {
        let (close, unterminated) = match ch {
            '\'' => ('\'', SyntaxError::UnbalancedStringLiteral),
            '"' if self.options.double_quoted_literals => {
                ('"', SyntaxError::UnbalancedStringLiteral)
            }
            '[' if self.options.bracketed_identifiers => {
                (']', SyntaxError::UnbalancedBracketedIdentifier)
            }
            _ => return Ok(false),
        };
        let start = self.scanner.position();
        regions::scan_quoted(&mut self.scanner, ch, close, unterminated)?;
        self.mark_line(start.line);
        self.buffer.push_str(self.scanner.slice_from(start.offset));
        self.after_word = false;
        Ok(true)
    }

    fn mark_line(&mut self, line: usize) {
        self.buffer_line.get_or_insert(line);
    }

    /// Closes the current batch. Blank batches are discarded, along with any
    /// count their separator carried.
    fn take_batch(&mut self, count: NonZeroU32) -> Option<Batch> {
        let body = core::mem::take(&mut self.buffer);
        let line = self.buffer_line.take();
        if body.trim().is_empty() {
            return None;
        }
        Some(Batch::finalize(
            body,
            count,
            line.unwrap_or(1),
            self.options.repeat,
            &self.options.counter_variable,
        ))
    }
}
