//! The CSS output tree.
//!
//! What the evaluator hands to the emitter: a tree of plain-CSS constructs
//! with all Sable-level syntax (nesting, interpolation, control flow)
//! already resolved. Style-rule selectors arrive as rendered text — the
//! evaluator resolves and renders them while it still knows the nesting
//! context.

use crate::value::Value;

/// A position in a Sable source file, tracked where the emitter needs it to
/// re-indent multi-line text (comments and custom-property values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A node in the CSS output tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssNode {
    Stylesheet(Stylesheet),
    Comment(Comment),
    AtRule(AtRule),
    MediaRule(MediaRule),
    StyleRule(StyleRule),
    Declaration(Declaration),
}

/// The root of a CSS output tree.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stylesheet {
    pub children: Vec<CssNode>,
}

impl Stylesheet {
    pub fn new(children: Vec<CssNode>) -> Self {
        Self { children }
    }
}

/// A loud (`/*! … */`) or ordinary (`/* … */`) comment preserved into the
/// output. `text` includes the delimiters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub text: String,
    /// Where the comment started in its source file, when known.
    pub span: Option<SourcePosition>,
}

/// A generic at-rule: `@name value;` or `@name value { … }`.
/// `children: None` means the statement form; `Some` means a block, even
/// when the block is empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtRule {
    pub name: String,
    pub value: Option<Value>,
    pub children: Option<Vec<CssNode>>,
}

/// An `@media` rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaRule {
    pub queries: Vec<MediaQuery>,
    pub children: Vec<CssNode>,
}

/// One query of an `@media` rule, e.g. `only screen and (min-width: 40em)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaQuery {
    /// `only` / `not`.
    pub modifier: Option<String>,
    /// `screen`, `print`, `all`, …
    pub media_type: Option<String>,
    /// Feature expressions, already rendered: `(min-width: 40em)`.
    pub features: Vec<String>,
}

/// A style rule. The selector list is carried as rendered text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRule {
    pub selector: String,
    pub children: Vec<CssNode>,
}

/// A property declaration. Custom properties (`--x: …`) carry their value
/// as opaque raw text in an unquoted [`Value::String`], preserved
/// byte-for-byte apart from re-indentation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub name: String,
    pub value: Value,
    pub is_custom_property: bool,
    /// Start of the declaration name in its source file, when known.
    pub span: Option<SourcePosition>,
}
