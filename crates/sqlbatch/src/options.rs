#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where `GO n` repetition is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RepeatMode {
    /// Fold the repetition into the batch text as a counted `WHILE` loop.
    /// Every emitted batch is then executed exactly once.
    #[default]
    Wrap,
    /// Leave the text untouched; the executor runs it `repeat_count` times.
    Delegate,
}

/// Configuration for [`BatchSplitter`](crate::BatchSplitter).
///
/// # Examples
///
/// ```rust
/// use sqlbatch::{BatchSplitter, RepeatMode, SplitOptions};
///
/// let splitter = BatchSplitter::new(SplitOptions {
///     repeat: RepeatMode::Delegate,
///     keep_comments: true,
///     ..Default::default()
/// });
/// let batches = splitter.split("select 1 -- first\ngo 2").unwrap();
/// assert_eq!(batches[0].text, "select 1 -- first\n");
/// assert_eq!(batches[0].repeat_count.get(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitOptions {
    /// The batch separator keyword, matched ignoring ASCII case.
    ///
    /// An empty separator never matches.
    ///
    /// # Default
    ///
    /// `"GO"`
    pub separator: String,

    /// Longer keywords that start with the separator and must never be taken
    /// for it. They are tried before the separator itself.
    ///
    /// # Default
    ///
    /// `["GOTO"]`
    pub lookalikes: Vec<String>,

    /// Whether `"double quoted"` text is a literal. When `false`, double
    /// quotes are ordinary characters.
    ///
    /// # Default
    ///
    /// `true`
    pub double_quoted_literals: bool,

    /// Whether `[bracketed]` identifiers are copied verbatim and never
    /// searched for the separator.
    ///
    /// # Default
    ///
    /// `false`
    pub bracketed_identifiers: bool,

    /// Whether comments are kept in the batch text instead of being dropped.
    /// Comments inside or right after a separator statement
    /// (`GO /* x */ 3 -- note`) are always consumed with it.
    ///
    /// # Default
    ///
    /// `false`
    pub keep_comments: bool,

    /// Whether the separator has to stand as a word of its own.
    ///
    /// When `true`, `GO` is only recognised if the preceding character is not
    /// part of an identifier and the keyword is not directly followed by a
    /// letter or `_` (digits may follow: `GO3` repeats three times). When
    /// `false`, any occurrence of the keyword outside comments and literals
    /// splits, so `select category` is cut after `cate`.
    ///
    /// # Default
    ///
    /// `true`
    pub word_boundaries: bool,

    /// Where `GO n` repetition is applied.
    ///
    /// # Default
    ///
    /// [`RepeatMode::Wrap`]
    pub repeat: RepeatMode,

    /// Variable declared by the repetition loop under [`RepeatMode::Wrap`].
    ///
    /// # Default
    ///
    /// `"@__batch_repeat"`
    pub counter_variable: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            separator: "GO".into(),
            lookalikes: vec!["GOTO".into()],
            double_quoted_literals: true,
            bracketed_identifiers: false,
            keep_comments: false,
            word_boundaries: true,
            repeat: RepeatMode::default(),
            counter_variable: "@__batch_repeat".into(),
        }
    }
}
