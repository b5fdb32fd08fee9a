//! Public AST types for `.rlt` table files.
//!
//! The AST is deliberately untyped: keys are plain strings and values are
//! either strings or nested maps. Key validation happens when the engine
//! builds phrase tables, which lets it report unknown keys with suggestions.

/// A 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// A top-level definition: `flavour = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub value: Node,
    pub span: Span,
}

/// A value in a table file.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A quoted string. `span` points at the first character inside the quotes.
    Text { text: String, span: Span },
    /// A braced map of `key: value` entries, in source order.
    Map(Vec<Entry>),
}

/// A `key: value` entry inside a map.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: Node,
    pub span: Span,
}
