use std::fmt::{Display, Formatter};

/// The taxonomy of failures the tokenizer and parser can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The tokenizer reached end of file while inside an opened `"..."`.
    UnterminatedString,
    /// `name = { ... }` where `name` fails the value-validity predicate.
    InvalidNameAtScopeBinding,
    /// `name = value` where `name` fails the value-validity predicate.
    InvalidNameAtBinding,
    /// `name = value` where `value` fails the value-validity predicate.
    InvalidValueAtBinding,
    /// `}` seen with the current scope already at the file root.
    UnmatchedClosingBrace,
    /// End of token stream reached with one or more scopes still open.
    MissingClosingBrace,
    /// A bare lexeme that is neither a valid value nor part of a binding
    /// or comment.
    UnexpectedToken,
}

/// A single parse failure. A failure aborts the parse of the current file
/// — no partial tree is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub file_address: String,
    pub line: usize,
    pub token: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, file_address: &str, line: usize, token: &str) -> Self {
        Self {
            kind,
            file_address: file_address.to_string(),
            line,
            token: token.to_string(),
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Token: '{}'", self.token)?;
        writeln!(f, "Line: {}", self.line)?;
        write!(f, "File: {}", self.file_address)
    }
}

impl std::error::Error for SyntaxError {}
