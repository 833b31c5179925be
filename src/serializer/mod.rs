use crate::{Construct, FileScope, Scope};


/// Renders `scope` as canonical Clausewitz text: own `comments` as a
/// prelude, then its members at depth 0, then `end_comments` as a
/// postlude. Used directly for any [Scope] and, via [serialize_file], for
/// the root of a [FileScope].
pub fn serialize(scope: &Scope) -> String {
    let mut out = String::new();

    if !scope.comments.is_empty() {
        for comment in &scope.comments {
            out.push_str("# ");
            out.push_str(comment);
            out.push('\n');
        }
        out.push('\n');
    }

    render_members(scope, 0, &mut out);

    for comment in &scope.end_comments {
        out.push('\n');
        out.push_str("# ");
        out.push_str(comment);
    }

    out
}

/// Equivalent to `serialize(&file.root)` — a [FileScope] is a [Scope] with
/// an address attached, and the address plays no part in the text.
pub fn serialize_file(file: &FileScope) -> String {
    serialize(&file.root)
}

/// Serializes `file` and writes the result to `sink`.
pub fn write(file: &FileScope, sink: &mut impl std::io::Write) -> std::io::Result<()> {
    sink.write_all(serialize_file(file).as_bytes())
}

fn tabs(depth: usize) -> String {
    "\t".repeat(depth)
}

fn member_comments(member: &Construct) -> &[String] {
    match member {
        Construct::Scope(s) => &s.comments,
        Construct::Binding(b) => &b.comments,
        Construct::Token(t) => &t.comments,
    }
}

/// Renders the members of a scope whose own header/braces (if any) have
/// already been emitted by the caller, at `depth` tabs per line.
fn render_members(scope: &Scope, depth: usize, out: &mut String) {
    let indent = tabs(depth);
    let members = &scope.members;

    for (i, member) in members.iter().enumerate() {
        for comment in member_comments(member) {
            out.push_str(&indent);
            out.push_str("# ");
            out.push_str(comment);
            out.push('\n');
        }

        match member {
            Construct::Scope(s) => render_nested_scope(s, depth, out),
            Construct::Binding(b) => {
                out.push_str(&indent);
                out.push_str(&b.name);
                out.push_str(" = ");
                out.push_str(&b.value);
                out.push('\n');
            }
            Construct::Token(t) => {
                if scope.indented {
                    out.push_str(&indent);
                    out.push_str(&t.value);
                    out.push('\n');
                } else {
                    render_inline_token(members, i, &indent, out);
                }
            }
        }
    }
}

/// A bare token in a non-indented (inline) scope: preceding/following
/// whitespace depends on its neighbours.
fn render_inline_token(members: &[Construct], i: usize, indent: &str, out: &mut String) {
    let t = match &members[i] {
        Construct::Token(t) => t,
        _ => unreachable!("caller only invokes this for a Token member"),
    };
    let prev = i.checked_sub(1).and_then(|j| members.get(j));
    let next = members.get(i + 1);

    let prev_is_token = matches!(prev, Some(Construct::Token(_)));
    let preceding_tab = i == 0 || !t.comments.is_empty() || !prev_is_token;
    out.push_str(if preceding_tab { indent } else { " " });
    out.push_str(&t.value);

    let next_is_token = matches!(next, Some(Construct::Token(_)));
    let next_has_comments = next.is_some_and(|m| !member_comments(m).is_empty());
    let following_newline = next.is_none() || !next_is_token || next_has_comments;
    if following_newline {
        out.push('\n');
    }
}

/// A scope that appears as a member of another scope: header line, then
/// (if it has anything to show) a newline, its own members one level
/// deeper, its `end_comments`, and the closing brace — or, if it has
/// neither members nor end comments, the brace pair collapsed onto the
/// header line.
fn render_nested_scope(s: &Scope, depth: usize, out: &mut String) {
    let indent = tabs(depth);
    out.push_str(&indent);
    match &s.name {
        Some(name) => {
            out.push_str(name);
            out.push_str(" = {");
        }
        None => out.push('{'),
    }

    if s.members.is_empty() && s.end_comments.is_empty() {
        out.push_str("}\n");
        return;
    }

    out.push('\n');
    render_members(s, depth + 1, out);
    let inner_indent = tabs(depth + 1);
    for comment in &s.end_comments {
        out.push_str(&inner_indent);
        out.push_str("# ");
        out.push_str(comment);
        out.push('\n');
    }
    out.push_str(&indent);
    out.push_str("}\n");
}
