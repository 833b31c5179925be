//! A round-tripping parser and serializer for the Clausewitz script format:
//! the hierarchical, curly-brace-delimited key/value text format used by
//! certain grand-strategy games to express game data (events,
//! localization, modifiers, definitions).
//!
//! A Clausewitz file is a tree of [scopes](Scope) containing
//! [bindings](Binding) (`name = value`), bare [tokens](Token) (positional
//! values inside a list-like scope), nested scopes, and comments that may
//! be attached to constructs or stand alone.
//!
//! # Overview
//!
//! Parsing a file goes through three stages, composed leaves-first:
//!
//! 1. [tokenizer] splits the raw text into a flat sequence of lexemes.
//! 2. [parser] consumes that sequence and builds a [FileScope] tree,
//!    associating comments with the constructs they document.
//! 3. [serializer] walks a tree back into canonical text.
//!
//! ```
//! use clausewitz::parse_file;
//!
//! let source = "outer = { # header\n\tx = 1\n}\n";
//! let file = parse_file(source, "test.txt").unwrap();
//! let outer = &file.members[0];
//! assert!(matches!(outer, clausewitz::Construct::Scope(s) if s.name.as_deref() == Some("outer")));
//! ```
//!
//! # License
//! [clausewitz](crate) is provided under the MIT OR Apache-2.0 license.

mod error;
mod parser;
mod scope;
mod serializer;
mod tokenizer;
mod trace;
mod value;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use parser::Parser;
pub use serializer::{serialize, serialize_file, write};
pub use tokenizer::{tokenize, Lexeme};
pub use trace::Trace;
pub use value::is_valid_value;

/// A single member of a [Scope]: a nested scope, a `name = value` binding,
/// or a bare positional token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    Scope(Scope),
    Binding(Binding),
    Token(Token),
}

/// A container of ordered members, optionally named, delimited by `{ … }`
/// in source text (except the root [FileScope], which has no delimiters
/// of its own).
///
/// A scope is either *list-like* (members are only [Token]s) or *map-like*
/// (members are [Binding]s or [Scope]s). `indented` and `sorted` are
/// advisory flags set by callers to influence serialization; they are not
/// inferred from the member kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// `None` for an anonymous scope (e.g. the unnamed braces inside a
    /// list-like binding value).
    pub name: Option<String>,
    pub members: Vec<Construct>,
    /// Full-line comments immediately preceding the closing `}`.
    pub end_comments: Vec<String>,
    /// Full-line or attached comments preceding this scope itself.
    pub comments: Vec<String>,
    /// Render bare tokens one per line instead of space-separated inline.
    pub indented: bool,
    /// Stably sort members at scope close (see [Scope::sort_members]).
    pub sorted: bool,
    /// Nesting depth; `0` for the file root.
    pub level: usize,
}

/// The root of a parsed file: a [Scope] plus the originating file
/// address. Always `level == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScope {
    pub root: Scope,
    pub address: String,
}

/// A `name = value` pair inside a scope. `name` and `value` are raw
/// lexemes — quoted strings retain their surrounding quotes verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: String,
    pub comments: Vec<String>,
}

/// A bare positional value inside a list-like scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub comments: Vec<String>,
}

/// Conceptual top-level entry point: tokenize then parse `text`, producing
/// the file's construct tree or the first [SyntaxError] encountered.
/// `address` is carried on the resulting [FileScope] and reported in any
/// error raised further downstream by a caller (it is not touched here).
pub fn parse_file(text: &str, address: &str) -> Result<FileScope, SyntaxError> {
    let lexemes = tokenizer::tokenize(text, address, Trace::None)?;
    Parser::new(lexemes, address).parse()
}
