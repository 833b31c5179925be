use super::{tokenize, Lexeme};
use crate::{SyntaxErrorKind, Trace};

fn texts(lexemes: &[Lexeme]) -> Vec<&str> {
    lexemes.iter().map(|l| l.text.as_str()).collect()
}

#[test]
fn splits_bindings_into_name_equals_value() {
    let lexemes = tokenize("a = 1\nb = hello\n", "t", Trace::None).unwrap();
    assert_eq!(texts(&lexemes), vec!["a", "=", "1", "b", "=", "hello"]);
    assert_eq!(lexemes[0].line, 1);
    assert_eq!(lexemes[3].line, 2);
}

#[test]
fn string_lexeme_keeps_its_quotes_verbatim() {
    let lexemes = tokenize(r#"name = "hello world""#, "t", Trace::None).unwrap();
    assert_eq!(lexemes[2].text, "\"hello world\"");
}

#[test]
fn escaped_quote_does_not_close_the_string() {
    let lexemes = tokenize(r#"name = "a\"b""#, "t", Trace::None).unwrap();
    assert_eq!(lexemes[2].text, r#""a\"b""#);
}

#[test]
fn unterminated_string_is_an_error_at_its_opening_line() {
    let err = tokenize("a = \"unterminated\nb = 2", "t", Trace::None).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedString);
    assert_eq!(err.line, 1);
}

#[test]
fn empty_comment_emits_hash_then_empty_body_on_same_line() {
    let lexemes = tokenize("#\na = 1", "t", Trace::None).unwrap();
    assert_eq!(lexemes[0].text, "#");
    assert_eq!(lexemes[0].line, 1);
    assert_eq!(lexemes[1].text, "");
    assert_eq!(lexemes[1].line, 1);
}

#[test]
fn comment_body_runs_to_end_of_line_not_including_newline() {
    let lexemes = tokenize("# hello there\na = 1", "t", Trace::None).unwrap();
    assert_eq!(lexemes[1].text, " hello there");
    assert_eq!(lexemes[2].text, "a");
    assert_eq!(lexemes[2].line, 2);
}

#[test]
fn comment_at_eof_ends_cleanly_without_newline() {
    let lexemes = tokenize("a = 1\n# trailing", "t", Trace::None).unwrap();
    assert_eq!(texts(&lexemes).last(), Some(&"trailing"));
}

#[test]
fn crlf_counts_as_a_single_newline() {
    let lexemes = tokenize("a = 1\r\nb = 2\r\n", "t", Trace::None).unwrap();
    assert_eq!(lexemes[3].line, 2);
}

#[test]
fn braces_are_single_char_lexemes() {
    let lexemes = tokenize("list = { a b c }", "t", Trace::None).unwrap();
    assert_eq!(
        texts(&lexemes),
        vec!["list", "=", "{", "a", "b", "c", "}"]
    );
}
