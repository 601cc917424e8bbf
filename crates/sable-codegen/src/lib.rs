//! Sable CSS emitter
//!
//! Renders the evaluated trees from `sable-ast` into canonical plain-text
//! CSS. One entry point per root type; each builds a fresh serializer, so
//! calls are re-entrant and independent across threads.
//!
//! ```text
//! Stylesheet ─┐
//! Value      ─┼→ Serializer (buffer + indentation) → String
//! Selector   ─┘
//! ```
//!
//! Rendering fails only on representability: values and selectors that have
//! no plain-CSS form (maps, bare nulls, empty unbracketed lists, parent
//! placeholders) abort the whole render call.

mod selector;
mod serializer;
mod value;

use sable_ast::{SelectorList, SimpleSelector, Stylesheet, Value};
use serializer::Serializer;

/// A representability error: the input tree asked for output that has no
/// valid CSS form. Carries the offending node so the compiler can point at
/// its source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// A map, a bare null, or an empty list without brackets reached value
    /// rendering.
    #[error("value has no CSS representation: {value:?}")]
    UnrepresentableValue { value: Value },

    /// A parent-selector placeholder survived evaluation.
    #[error("selector has no CSS representation: {selector:?}")]
    UnrepresentableSelector { selector: SimpleSelector },
}

/// Render a full stylesheet.
///
/// Trims surrounding whitespace from the finished document and, when any
/// codepoint above the ASCII range appears anywhere in it, prepends a
/// `@charset "UTF-8";` line. The charset scan runs once over the fully
/// rendered text, never per statement.
pub fn render_stylesheet(stylesheet: &Stylesheet) -> Result<String, RenderError> {
    let mut serializer = Serializer::new();
    serializer.visit_stylesheet(stylesheet)?;
    Ok(serializer.finish_document())
}

/// Render a single value with no document-level post-processing.
pub fn render_value(value: &Value) -> Result<String, RenderError> {
    let mut serializer = Serializer::new();
    serializer.visit_value(value)?;
    Ok(serializer.finish())
}

/// Render a selector list with no document-level post-processing.
pub fn render_selector(list: &SelectorList) -> Result<String, RenderError> {
    let mut serializer = Serializer::new();
    serializer.visit_selector_list(list)?;
    Ok(serializer.finish())
}

/// Format a number, removing `.0` for integral values.
///
/// Relies on `f64`'s `Display`, which never produces exponential notation,
/// so very small magnitudes come out as plain decimals.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
