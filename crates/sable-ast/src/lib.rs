//! Sable evaluated trees
//!
//! The strongly-typed trees produced by the Sable evaluator and consumed by
//! the output stage: property values, selectors, and the CSS output tree
//! itself. Everything here is immutable plain data — rendering lives in
//! `sable-codegen`, and the node types carry no rendering state.
//!
//! Also home to the selector-unification primitive used by the extend
//! engine when it merges compound selectors.

pub mod css;
pub mod selector;
pub mod unify;
pub mod value;

pub use css::{
    AtRule, Comment, CssNode, Declaration, MediaQuery, MediaRule, SourcePosition, StyleRule,
    Stylesheet,
};
pub use selector::{
    AttributeOperator, Combinator, ComplexComponent, ComplexSelector, CompoundSelector,
    PseudoKind, QualifiedName, SelectorList, SimpleSelector,
};
pub use unify::unify;
pub use value::{Color, ListSeparator, Number, Value};
