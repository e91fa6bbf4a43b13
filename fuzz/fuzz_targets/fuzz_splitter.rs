#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sqlbatch::{BatchSplitter, RepeatMode, SplitOptions};

/// Building blocks biased towards the constructs that hide or mimic the
/// separator, so the fuzzer reaches the interesting states quickly.
#[derive(Debug, Arbitrary)]
enum Piece<'a> {
    Raw(&'a str),
    Separator { upper: bool, count: Option<u8>, comment: bool },
    Lookalike,
    Quote(char),
    CommentOpen,
    CommentClose,
    LineComment,
    Newline,
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    keep_comments: bool,
    word_boundaries: bool,
    bracketed_identifiers: bool,
    delegate: bool,
    pieces: Vec<Piece<'a>>,
}

fn render(pieces: &[Piece<'_>]) -> String {
    let mut s = String::new();
    for piece in pieces {
        match piece {
            Piece::Raw(text) => s.push_str(text),
            Piece::Separator { upper, count, comment } => {
                s.push_str(if *upper { "GO" } else { "go" });
                if *comment {
                    s.push_str("/**/");
                }
                if let Some(n) = count {
                    s.push_str(&format!(" {n}"));
                }
            }
            Piece::Lookalike => s.push_str("goto"),
            Piece::Quote(q) => s.push(match *q as u32 % 3 {
                0 => '\'',
                1 => '"',
                _ => '[',
            }),
            Piece::CommentOpen => s.push_str("/*"),
            Piece::CommentClose => s.push_str("*/"),
            Piece::LineComment => s.push_str("--"),
            Piece::Newline => s.push('\n'),
        }
    }
    s
}

fuzz_target!(|input: Input<'_>| {
    let script = render(&input.pieces);
    let options = SplitOptions {
        keep_comments: input.keep_comments,
        word_boundaries: input.word_boundaries,
        bracketed_identifiers: input.bracketed_identifiers,
        repeat: if input.delegate {
            RepeatMode::Delegate
        } else {
            RepeatMode::Wrap
        },
        ..SplitOptions::default()
    };
    let splitter = BatchSplitter::new(options);

    let Ok(batches) = splitter.split(&script) else {
        return;
    };
    let mut total = 0usize;
    for batch in &batches {
        assert!(!batch.text.trim().is_empty(), "blank batch emitted");
        assert!(batch.line >= 1);
        assert_eq!(batch.wrapped, !input.delegate && batch.repeat_count.get() > 1);
        if !batch.wrapped && !input.keep_comments {
            total += batch.text.len();
        }
    }
    // batches never contain more text than the script
    assert!(total <= script.len());
});
