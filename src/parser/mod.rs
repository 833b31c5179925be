use crate::tokenizer::Lexeme;
use crate::value::is_valid_value;
use crate::{Binding, Construct, FileScope, Scope, SyntaxError, SyntaxErrorKind, Token, Trace};

mod comments;
#[cfg(test)]
mod __tests__;

use comments::PendingQueue;

/// Consumes a token sequence left-to-right and builds a [FileScope] tree,
/// maintaining a current-scope cursor and a pending-comment queue. The
/// cursor is an explicit stack of owned [Scope] values rather than a
/// persistent parent pointer: closing a scope pops it and folds it into
/// its parent's members.
pub struct Parser {
    lexemes: Vec<Lexeme>,
    address: String,
    stack: Vec<Scope>,
    pending: PendingQueue,
    trace: Trace,
}

impl Parser {
    pub fn new(lexemes: Vec<Lexeme>, address: &str) -> Self {
        Self {
            lexemes,
            address: address.to_string(),
            stack: vec![Scope::anonymous(0)],
            pending: PendingQueue::new(),
            trace: Trace::None,
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.trace = trace;
        self
    }

    /// Runs the parse to completion, consuming the parser.
    pub fn parse(mut self) -> Result<FileScope, SyntaxError> {
        let lexemes = std::mem::take(&mut self.lexemes);
        let len = lexemes.len();

        for i in 0..len {
            let cur = &lexemes[i];
            let prev = i.checked_sub(1).map(|j| &lexemes[j]);
            let prev2 = i.checked_sub(2).map(|j| &lexemes[j]);
            let next = lexemes.get(i + 1);
            let prev_is_hash = prev.is_some_and(|p| p.is("#"));

            self.trace
                .log_at(Trace::Dispatch, cur.line, format_args!("dispatch on {}", cur));

            if cur.is("{") && !prev_is_hash {
                self.handle_open_scope(prev2, prev, cur)?;
            } else if cur.is("}") && !prev_is_hash {
                self.handle_close_scope(cur)?;
            } else if cur.is("=") && !prev_is_hash {
                self.handle_binding(prev, cur, next)?;
            } else if cur.is("#") {
                self.handle_comment(prev, cur, next);
            } else {
                self.handle_default(prev, cur, next)?;
            }
        }

        if self.stack.len() > 1 {
            let (line, token) = lexemes
                .last()
                .map(|l| (l.line, l.text.clone()))
                .unwrap_or((1, String::new()));
            return Err(self.error(SyntaxErrorKind::MissingClosingBrace, line, &token));
        }

        let mut root = self.stack.pop().expect("root scope is always present");
        self.pending.flush_into(&mut root.end_comments);
        Ok(FileScope {
            root,
            address: self.address,
        })
    }

    fn error(&self, kind: SyntaxErrorKind, line: usize, token: &str) -> SyntaxError {
        SyntaxError::new(kind, &self.address, line, token)
    }

    fn error_at(&self, kind: SyntaxErrorKind, lexeme: &Lexeme) -> SyntaxError {
        self.error(kind, lexeme.line, &lexeme.text)
    }

    /// Whether the next construct appended to the current scope would be
    /// the first member of the root file scope — the trigger for the
    /// preamble comment split.
    fn is_next_root_member(&self) -> bool {
        self.stack.len() == 1 && self.stack[0].members.is_empty()
    }

    fn flush_leading(&mut self, comments: &mut Vec<String>) {
        if self.is_next_root_member() {
            let mut file_comments = std::mem::take(&mut self.stack[0].comments);
            self.pending.flush_with_preamble_split(&mut file_comments, comments);
            self.stack[0].comments = file_comments;
        } else {
            self.pending.flush_into(comments);
        }
    }

    /// Case `{`: `name = {` opens a named scope if `name` satisfies the
    /// value predicate; any other form opens an anonymous scope (possibly
    /// preceded by nothing, e.g. the very first lexeme).
    fn handle_open_scope(
        &mut self,
        prev2: Option<&Lexeme>,
        prev: Option<&Lexeme>,
        cur: &Lexeme,
    ) -> Result<(), SyntaxError> {
        let new_level = self.stack.last().expect("non-empty stack").level + 1;

        let mut scope = if prev.is_some_and(|p| p.is("=")) {
            let name = prev2.ok_or_else(|| self.error_at(SyntaxErrorKind::InvalidNameAtScopeBinding, cur))?;
            if !is_valid_value(&name.text) {
                return Err(self.error_at(SyntaxErrorKind::InvalidNameAtScopeBinding, cur));
            }
            Scope::named(name.text.clone(), new_level)
        } else {
            Scope::anonymous(new_level)
        };

        self.flush_leading(&mut scope.comments);
        self.stack.push(scope);
        Ok(())
    }

    /// Case `}`: flushes end comments onto the closing scope, then folds
    /// it into its parent's members, stably sorting it first if its
    /// `sorted` flag is set.
    fn handle_close_scope(&mut self, cur: &Lexeme) -> Result<(), SyntaxError> {
        let end_comments = &mut self.stack.last_mut().expect("non-empty stack").end_comments;
        self.pending.flush_into(end_comments);

        if self.stack.len() == 1 {
            return Err(self.error_at(SyntaxErrorKind::UnmatchedClosingBrace, cur));
        }

        let mut finished = self.stack.pop().expect("checked len > 1 above");
        if finished.sorted {
            finished.sort_members();
        }
        self.stack
            .last_mut()
            .expect("non-empty stack")
            .members
            .push(Construct::Scope(finished));
        Ok(())
    }

    /// Case `=`: `name = {` is left for the `{` case to consume;
    /// otherwise both `name` and `value` must satisfy the value
    /// predicate and a [Binding] is appended.
    fn handle_binding(
        &mut self,
        prev: Option<&Lexeme>,
        cur: &Lexeme,
        next: Option<&Lexeme>,
    ) -> Result<(), SyntaxError> {
        if next.is_some_and(|n| n.is("{")) {
            return Ok(());
        }

        let name = prev.ok_or_else(|| self.error_at(SyntaxErrorKind::InvalidNameAtBinding, cur))?;
        if !is_valid_value(&name.text) {
            return Err(self.error_at(SyntaxErrorKind::InvalidNameAtBinding, cur));
        }
        let value = next.ok_or_else(|| self.error_at(SyntaxErrorKind::InvalidValueAtBinding, cur))?;
        if !is_valid_value(&value.text) {
            return Err(self.error_at(SyntaxErrorKind::InvalidValueAtBinding, cur));
        }

        let mut binding = Binding::new(name.text.clone(), value.text.clone());
        self.flush_leading(&mut binding.comments);
        self.stack
            .last_mut()
            .expect("non-empty stack")
            .members
            .push(Construct::Binding(binding));
        Ok(())
    }

    /// Case `#`: the next lexeme is the comment body. Attached comments
    /// (same line as `prev`) go straight onto the construct they
    /// annotate; otherwise the comment is queued.
    fn handle_comment(&mut self, prev: Option<&Lexeme>, cur: &Lexeme, next: Option<&Lexeme>) {
        let body = next.map(|n| n.text.as_str()).unwrap_or("");
        let text = body.trim().to_string();
        let attached = prev.is_some_and(|p| p.line == cur.line);

        if attached {
            if prev.is_some_and(|p| p.is("{")) {
                self.stack.last_mut().expect("non-empty stack").comments.push(text);
            } else if let Some(comments) = last_member_comments(self.stack.last_mut().expect("non-empty stack")) {
                comments.push(text);
            }
        } else {
            self.pending.push(text, cur.line);
        }
    }

    /// Default case: a bare lexeme that is not part of a binding or
    /// comment becomes a [Token] if it satisfies the value predicate.
    fn handle_default(
        &mut self,
        prev: Option<&Lexeme>,
        cur: &Lexeme,
        next: Option<&Lexeme>,
    ) -> Result<(), SyntaxError> {
        let consumed_elsewhere = prev.is_some_and(|p| p.is("=") || p.is("#")) || next.is_some_and(|n| n.is("="));
        if consumed_elsewhere {
            return Ok(());
        }

        if !is_valid_value(&cur.text) {
            return Err(self.error_at(SyntaxErrorKind::UnexpectedToken, cur));
        }

        let mut token = Token::new(cur.text.clone());
        self.flush_leading(&mut token.comments);
        self.stack
            .last_mut()
            .expect("non-empty stack")
            .members
            .push(Construct::Token(token));
        Ok(())
    }
}

fn last_member_comments(scope: &mut Scope) -> Option<&mut Vec<String>> {
    scope.members.last_mut().map(|member| match member {
        Construct::Scope(s) => &mut s.comments,
        Construct::Binding(b) => &mut b.comments,
        Construct::Token(t) => &mut t.comments,
    })
}
