use super::*;

#[test]
fn peek_does_not_advance() {
    let s = Scanner::new("ab");
    assert_eq!(s.peek(), Some('a'));
    assert_eq!(s.peek(), Some('a'));
    assert_eq!(s.position(), Position::default());
}

#[test]
fn read_walks_to_end() {
    let mut s = Scanner::new("ab");
    assert_eq!(s.read(), Some('a'));
    assert_eq!(s.read(), Some('b'));
    assert!(s.is_at_end());
    assert_eq!(s.peek(), None);
    assert_eq!(s.read(), None);
    assert_eq!(s.position().offset, 2);
}

#[test]
fn positions_follow_lines_and_multibyte_chars() {
    let mut s = Scanner::new("é\nxy");
    s.read();
    assert_eq!(
        s.position(),
        Position {
            offset: 2,
            line: 1,
            column: 2
        }
    );
    s.read();
    s.read();
    assert_eq!(
        s.position(),
        Position {
            offset: 4,
            line: 2,
            column: 2
        }
    );
}

#[test]
fn match_literal_ignores_ascii_case() {
    let mut s = Scanner::new("GoTo x");
    assert!(s.match_literal("goto"));
    assert_eq!(s.peek(), Some(' '));
}

#[test]
fn failed_match_consumes_nothing() {
    let mut s = Scanner::new("gox");
    assert!(!s.match_literal("goto"));
    assert_eq!(s.position().offset, 0);
    // literal longer than the remaining input
    let mut s = Scanner::new("g");
    assert!(!s.match_literal("go"));
    assert_eq!(s.peek(), Some('g'));
}

#[test]
fn non_ascii_must_match_exactly() {
    let mut s = Scanner::new("Äb");
    assert!(!s.match_literal("äb"));
    assert!(s.match_literal("Äb"));
}

#[test]
fn peek_literal_is_lookahead_only() {
    let s = Scanner::new("-- note");
    assert!(s.peek_literal("--"));
    assert!(!s.peek_literal("/*"));
    assert_eq!(s.position().offset, 0);
}

#[test]
fn checkpoints_nest() {
    let mut s = Scanner::new("abcdef");
    s.save();
    s.read();
    s.save();
    s.read();
    s.read();
    assert_eq!(s.depth(), 2);
    s.rollback();
    assert_eq!(s.peek(), Some('b'));
    s.read();
    s.accept();
    assert_eq!(s.depth(), 0);
    assert_eq!(s.peek(), Some('c'));
}

#[test]
fn rollback_restores_line_and_column() {
    let mut s = Scanner::new("a\nb");
    s.save();
    s.read();
    s.read();
    assert_eq!(s.position().line, 2);
    s.rollback();
    assert_eq!(s.position(), Position::default());
}

#[test]
fn linear_whitespace_stops_at_newline() {
    let mut s = Scanner::new(" \t \ngo");
    assert_eq!(s.skip_linear_whitespace(), 3);
    assert_eq!(s.peek(), Some('\n'));
    assert_eq!(s.skip_linear_whitespace(), 0);
}

#[test]
fn consume_while_returns_source_slice() {
    let mut s = Scanner::new("123abc");
    assert_eq!(s.consume_while(|c| c.is_ascii_digit()), "123");
    assert_eq!(s.consume_while(|c| c.is_ascii_digit()), "");
    s.read();
    assert_eq!(s.slice_from(0), "123a");
}

#[test]
#[should_panic(expected = "no checkpoint saved")]
fn rollback_without_save_panics() {
    let mut s = Scanner::new("x");
    s.rollback();
}

#[quickcheck_macros::quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn match_literal_is_all_or_nothing(input: String, lit: String) -> bool {
    let mut s = Scanner::new(&input);
    let before = s.position();
    if s.match_literal(&lit) {
        s.position().offset == lit.len() && input[..lit.len()].eq_ignore_ascii_case(&lit)
    } else {
        s.position() == before
    }
}
