//! WASM bindings for the Sable CSS emitter.
//!
//! Exposes the three render entry points to JavaScript via wasm-bindgen.
//! Trees arrive as plain JS objects (the JSON encoding of the `sable-ast`
//! types), are deserialized with `serde-wasm-bindgen`, and render to a CSS
//! string; representability errors throw.

use wasm_bindgen::prelude::*;

use sable_ast::{SelectorList, Stylesheet, Value};

/// Render a stylesheet tree to CSS text.
///
/// Throws a JS error if the tree does not deserialize or contains a value
/// or selector with no CSS representation.
#[wasm_bindgen]
pub fn render_stylesheet(tree: JsValue) -> Result<String, JsError> {
    let stylesheet: Stylesheet =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    sable_codegen::render_stylesheet(&stylesheet).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a single value tree to CSS text.
#[wasm_bindgen]
pub fn render_value(tree: JsValue) -> Result<String, JsError> {
    let value: Value =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    sable_codegen::render_value(&value).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a selector-list tree to CSS text.
#[wasm_bindgen]
pub fn render_selector(tree: JsValue) -> Result<String, JsError> {
    let list: SelectorList =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    sable_codegen::render_selector(&list).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the emitter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
