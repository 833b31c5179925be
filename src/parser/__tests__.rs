use crate::{parse_file, Construct, SyntaxErrorKind};

fn binding<'a>(members: &'a [Construct], name: &str) -> (&'a str, &'a str) {
    members
        .iter()
        .find_map(|m| match m {
            Construct::Binding(b) if b.name == name => Some((b.name.as_str(), b.value.as_str())),
            _ => None,
        })
        .expect("binding present")
}

#[test]
fn s1_simple_bindings_in_order() {
    let file = parse_file("a = 1\nb = hello\n", "t").unwrap();
    assert_eq!(file.members.len(), 2);
    match (&file.members[0], &file.members[1]) {
        (Construct::Binding(a), Construct::Binding(b)) => {
            assert_eq!((a.name.as_str(), a.value.as_str()), ("a", "1"));
            assert_eq!((b.name.as_str(), b.value.as_str()), ("b", "hello"));
        }
        other => panic!("expected two bindings, got {:?}", other),
    }
}

#[test]
fn s2_named_scope_with_attached_header_comment() {
    let file = parse_file("outer = { # header\n\tx = 1\n}\n", "t").unwrap();
    match &file.members[0] {
        Construct::Scope(s) => {
            assert_eq!(s.name.as_deref(), Some("outer"));
            assert_eq!(s.comments, vec!["header"]);
            assert_eq!(binding(&s.members, "x"), ("x", "1"));
        }
        other => panic!("expected a named scope, got {:?}", other),
    }
}

#[test]
fn s3_anonymous_list_scope_of_bare_tokens() {
    let file = parse_file("list = { a b c }", "t").unwrap();
    match &file.members[0] {
        Construct::Scope(s) => {
            assert_eq!(s.name.as_deref(), Some("list"));
            let values: Vec<&str> = s
                .members
                .iter()
                .map(|m| match m {
                    Construct::Token(t) => t.value.as_str(),
                    _ => panic!("expected only tokens"),
                })
                .collect();
            assert_eq!(values, vec!["a", "b", "c"]);
        }
        other => panic!("expected a named scope, got {:?}", other),
    }
}

#[test]
fn s4_file_preamble_splits_from_first_member_comment() {
    let source = "# copyright 2024\n# author: x\n\n# describes foo\nfoo = 1\n";
    let file = parse_file(source, "t").unwrap();
    assert_eq!(file.comments, vec!["copyright 2024", "author: x"]);
    match &file.members[0] {
        Construct::Binding(b) => {
            assert_eq!(b.name, "foo");
            assert_eq!(b.comments, vec!["describes foo"]);
        }
        other => panic!("expected a binding, got {:?}", other),
    }
}

#[test]
fn s5_end_comments_inside_scope() {
    let file = parse_file("s = {\n\tx = 1\n\t# trailing\n}", "t").unwrap();
    match &file.members[0] {
        Construct::Scope(s) => assert_eq!(s.end_comments, vec!["trailing"]),
        other => panic!("expected a scope, got {:?}", other),
    }
}

#[test]
fn s6_missing_binding_name_is_a_syntax_error_at_the_equals_sign() {
    let err = parse_file("= 5", "t").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidNameAtBinding);
    assert_eq!(err.line, 1);
    assert_eq!(err.token, "=");
}

#[test]
fn unmatched_closing_brace_is_reported_at_its_own_line() {
    let err = parse_file("a = 1\n}\n", "t").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnmatchedClosingBrace);
    assert_eq!(err.line, 2);
}

#[test]
fn missing_closing_brace_is_reported_at_eof() {
    let err = parse_file("outer = {\n\tx = 1\n", "t").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::MissingClosingBrace);
}

#[test]
fn invalid_name_at_scope_binding_is_rejected() {
    let err = parse_file("a! = {\n\tx = 1\n}\n", "t").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidNameAtScopeBinding);
}

#[test]
fn file_level_end_comments_collect_at_eof() {
    let file = parse_file("a = 1\n# final remark\n", "t").unwrap();
    assert_eq!(file.end_comments, vec!["final remark"]);
}

#[test]
fn inline_comment_after_a_binding_attaches_to_it_not_the_queue() {
    let file = parse_file("a = 1 # note\nb = 2\n", "t").unwrap();
    match &file.members[0] {
        Construct::Binding(b) => assert_eq!(b.comments, vec!["note"]),
        other => panic!("expected a binding, got {:?}", other),
    }
}

#[test]
fn nested_scopes_track_increasing_level() {
    let file = parse_file("a = {\n\tb = {\n\t\tc = 1\n\t}\n}\n", "t").unwrap();
    match &file.members[0] {
        Construct::Scope(a) => {
            assert_eq!(a.level, 1);
            match &a.members[0] {
                Construct::Scope(b) => assert_eq!(b.level, 2),
                other => panic!("expected nested scope, got {:?}", other),
            }
        }
        other => panic!("expected a scope, got {:?}", other),
    }
}
