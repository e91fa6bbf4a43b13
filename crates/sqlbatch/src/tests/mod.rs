#[cfg(feature = "serde")]
mod serde_config;

use crate::{Batch, BatchSplitter, RepeatMode, SplitOptions};

/// Options that keep batch text unwrapped, so tests can compare bodies.
pub(crate) fn delegated() -> SplitOptions {
    SplitOptions {
        repeat: RepeatMode::Delegate,
        ..SplitOptions::default()
    }
}

/// Splits with `options` and returns `(text, repeat_count)` pairs.
pub(crate) fn texts(options: SplitOptions, script: &str) -> Vec<(String, u32)> {
    BatchSplitter::new(options)
        .split(script)
        .unwrap()
        .into_iter()
        .map(|Batch { text, repeat_count, .. }| (text, repeat_count.get()))
        .collect()
}

pub(crate) fn owned(expected: &[(&str, u32)]) -> Vec<(String, u32)> {
    expected.iter().map(|(t, n)| ((*t).to_string(), *n)).collect()
}
