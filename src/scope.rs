use crate::{Binding, Construct, FileScope, Scope, Token};
use ptree::{Style, TreeItem};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

impl Scope {
    pub fn anonymous(level: usize) -> Self {
        Self {
            name: None,
            members: Vec::new(),
            end_comments: Vec::new(),
            comments: Vec::new(),
            indented: false,
            sorted: false,
            level,
        }
    }

    pub fn named(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: Some(name.into()),
            ..Scope::anonymous(level)
        }
    }

    /// A scope is list-like when every member is a bare [Token]; an empty
    /// scope is vacuously list-like.
    pub fn is_list_like(&self) -> bool {
        self.members
            .iter()
            .all(|member| matches!(member, Construct::Token(_)))
    }

    pub fn push_scope(&mut self, scope: Scope) -> &mut Scope {
        self.members.push(Construct::Scope(scope));
        match self.members.last_mut() {
            Some(Construct::Scope(s)) => s,
            _ => unreachable!(),
        }
    }

    pub fn push_binding(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Binding {
        self.members.push(Construct::Binding(Binding::new(name, value)));
        match self.members.last_mut() {
            Some(Construct::Binding(b)) => b,
            _ => unreachable!(),
        }
    }

    pub fn push_token(&mut self, value: impl Into<String>) -> &mut Token {
        self.members.push(Construct::Token(Token::new(value)));
        match self.members.last_mut() {
            Some(Construct::Token(t)) => t,
            _ => unreachable!(),
        }
    }

    /// Stably sort `members`: bindings and named scopes sort by name,
    /// tokens by value; anonymous scopes carry no sort key and sort last,
    /// keeping their relative order.
    pub fn sort_members(&mut self) {
        self.members.sort_by(|a, b| match (sort_key(a), sort_key(b)) {
            (Some(ka), Some(kb)) => ka.cmp(kb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }

    pub fn print(&self) -> std::io::Result<()> {
        ptree::print_tree(self)
    }
}

fn sort_key(construct: &Construct) -> Option<&str> {
    match construct {
        Construct::Binding(b) => Some(b.name.as_str()),
        Construct::Token(t) => Some(t.value.as_str()),
        Construct::Scope(s) => s.name.as_deref(),
    }
}

impl Binding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comments: Vec::new(),
        }
    }
}

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comments: Vec::new(),
        }
    }
}

impl FileScope {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            root: Scope::anonymous(0),
            address: address.into(),
        }
    }

    pub fn print(&self) -> std::io::Result<()> {
        self.root.print()
    }
}

impl Deref for FileScope {
    type Target = Scope;
    fn deref(&self) -> &Scope {
        &self.root
    }
}

impl DerefMut for FileScope {
    fn deref_mut(&mut self) -> &mut Scope {
        &mut self.root
    }
}

impl TreeItem for Scope {
    type Child = Construct;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _style: &Style) -> std::io::Result<()> {
        write!(f, "{}", self.name.as_deref().unwrap_or("<anonymous>"))
    }

    fn children(&self) -> Cow<[Construct]> {
        Cow::from(&self.members)
    }
}

impl TreeItem for Construct {
    type Child = Construct;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _style: &Style) -> std::io::Result<()> {
        match self {
            Construct::Scope(s) => write!(f, "{}", s.name.as_deref().unwrap_or("<anonymous>")),
            Construct::Binding(b) => write!(f, "{} = {}", b.name, b.value),
            Construct::Token(t) => write!(f, "{}", t.value),
        }
    }

    fn children(&self) -> Cow<[Construct]> {
        match self {
            Construct::Scope(s) => Cow::from(&s.members),
            Construct::Binding(_) | Construct::Token(_) => Cow::from(&[][..]),
        }
    }
}
