use core::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::options::RepeatMode;

/// One unit of SQL to submit to a server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Batch {
    /// The batch source. Literals are kept verbatim; comments are dropped
    /// unless [`SplitOptions::keep_comments`](crate::SplitOptions) is set,
    /// and the separator statement itself never appears.
    pub text: String,
    /// The count given to the separator that closed this batch, 1 if none.
    pub repeat_count: NonZeroU32,
    /// 1-based source line of the first non-blank character of the batch.
    pub line: usize,
    /// Whether `text` already contains the repetition loop.
    pub wrapped: bool,
}

impl Batch {
    /// Builds a batch from its body, applying `mode` when `repeat_count` is
    /// greater than one.
    pub(crate) fn finalize(
        body: String,
        repeat_count: NonZeroU32,
        line: usize,
        mode: RepeatMode,
        counter: &str,
    ) -> Self {
        if repeat_count.get() > 1 && mode == RepeatMode::Wrap {
            Self {
                text: wrap_repeat(&body, repeat_count, counter),
                repeat_count,
                line,
                wrapped: true,
            }
        } else {
            Self {
                text: body,
                repeat_count,
                line,
                wrapped: false,
            }
        }
    }

    /// How many times an executor has to run [`Batch::text`].
    pub fn executions(&self) -> u32 {
        if self.wrapped {
            1
        } else {
            self.repeat_count.get()
        }
    }
}

/// Wraps `body` in a T-SQL loop that runs it `count` times.
///
/// Line breaks around `body` are trimmed so it sits on its own lines between
/// `BEGIN` and the counter increment.
///
/// ```rust
/// use core::num::NonZeroU32;
/// use sqlbatch::wrap_repeat;
///
/// let text = wrap_repeat("\nselect 1;\n", NonZeroU32::new(3).unwrap(), "@i");
/// assert_eq!(
///     text,
///     "DECLARE @i INT = 0;\nWHILE @i < 3\nBEGIN\nselect 1;\nSET @i = @i + 1;\nEND"
/// );
/// ```
pub fn wrap_repeat(body: &str, count: NonZeroU32, counter: &str) -> String {
    let body = body.trim_matches(|c| c == '\n' || c == '\r');
    format!(
        "DECLARE {counter} INT = 0;\n\
         WHILE {counter} < {count}\n\
         BEGIN\n\
         {body}\n\
         SET {counter} = {counter} + 1;\n\
         END"
    )
}
