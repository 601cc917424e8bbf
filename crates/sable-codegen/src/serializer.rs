//! The stateful render traversal.
//!
//! One `Serializer` per top-level render call. It owns the output buffer
//! and the indentation counter; the input tree is never touched. Statement
//! nodes write their own leading indentation, and every block-bearing
//! construct goes through [`Serializer::write_block`].

use sable_ast::{
    AtRule, Comment, CssNode, Declaration, MediaQuery, MediaRule, StyleRule, Stylesheet, Value,
};

use crate::RenderError;

pub(crate) struct Serializer {
    pub(crate) buffer: String,
    pub(crate) indentation: usize,
}

impl Serializer {
    pub(crate) fn new() -> Self {
        Self {
            buffer: String::new(),
            indentation: 0,
        }
    }

    /// Take the buffer as-is (value and selector entry points).
    pub(crate) fn finish(self) -> String {
        self.buffer
    }

    /// Finish a whole document: trim surrounding whitespace, then scan the
    /// trimmed text once and prepend the charset directive if any codepoint
    /// above the ASCII range survived into the output.
    pub(crate) fn finish_document(self) -> String {
        let trimmed = self.buffer.trim();
        if trimmed.is_ascii() {
            trimmed.to_string()
        } else {
            format!("@charset \"UTF-8\";\n{trimmed}")
        }
    }

    // -----------------------------------------------------------------------
    // Statement nodes
    // -----------------------------------------------------------------------

    pub(crate) fn visit_stylesheet(&mut self, stylesheet: &Stylesheet) -> Result<(), RenderError> {
        for child in &stylesheet.children {
            self.visit_node(child)?;
            self.buffer.push('\n');
        }
        Ok(())
    }

    fn visit_node(&mut self, node: &CssNode) -> Result<(), RenderError> {
        match node {
            CssNode::Stylesheet(stylesheet) => self.visit_stylesheet(stylesheet),
            CssNode::Comment(comment) => {
                self.visit_comment(comment);
                Ok(())
            }
            CssNode::AtRule(rule) => self.visit_at_rule(rule),
            CssNode::MediaRule(rule) => self.visit_media_rule(rule),
            CssNode::StyleRule(rule) => self.visit_style_rule(rule),
            CssNode::Declaration(declaration) => self.visit_declaration(declaration),
        }
    }

    fn visit_comment(&mut self, comment: &Comment) {
        self.write_indentation();
        self.write_reindented(&comment.text, comment.span.map(|span| span.column));
    }

    fn visit_at_rule(&mut self, rule: &AtRule) -> Result<(), RenderError> {
        self.write_indentation();
        self.buffer.push('@');
        self.buffer.push_str(&rule.name);
        if let Some(value) = &rule.value {
            self.buffer.push(' ');
            self.visit_value(value)?;
        }
        match &rule.children {
            Some(children) => self.write_block(children),
            None => {
                self.buffer.push(';');
                Ok(())
            }
        }
    }

    fn visit_media_rule(&mut self, rule: &MediaRule) -> Result<(), RenderError> {
        self.write_indentation();
        self.buffer.push_str("@media ");
        // FIXME: adjacent queries run together with no `", "` between them,
        // so multi-query rules emit as one run-on query. Flipping this
        // changes emitted text; re-baseline dependent output first.
        for query in &rule.queries {
            self.write_media_query(query);
        }
        self.write_block(&rule.children)
    }

    fn write_media_query(&mut self, query: &MediaQuery) {
        if let Some(modifier) = &query.modifier {
            self.buffer.push_str(modifier);
            self.buffer.push(' ');
        }
        if let Some(media_type) = &query.media_type {
            self.buffer.push_str(media_type);
            if !query.features.is_empty() {
                self.buffer.push_str(" and ");
            }
        }
        self.buffer.push_str(&query.features.join(" and "));
    }

    fn visit_style_rule(&mut self, rule: &StyleRule) -> Result<(), RenderError> {
        self.write_indentation();
        self.buffer.push_str(&rule.selector);
        self.write_block(&rule.children)?;
        // Fixed format: one blank line after every rule block.
        self.buffer.push('\n');
        Ok(())
    }

    fn visit_declaration(&mut self, declaration: &Declaration) -> Result<(), RenderError> {
        self.write_indentation();
        self.buffer.push_str(&declaration.name);
        self.buffer.push(':');
        if declaration.is_custom_property {
            if let Value::String { text, .. } = &declaration.value {
                // Opaque raw text; the only transformation it undergoes is
                // re-indentation of continuation lines. The text keeps its
                // own leading whitespace, so no space is written here.
                self.write_reindented(text, declaration.span.map(|span| span.column));
            } else {
                // Custom properties always carry raw text; fall back for
                // anything else.
                self.buffer.push(' ');
                self.visit_value(&declaration.value)?;
            }
        } else {
            self.buffer.push(' ');
            self.visit_value(&declaration.value)?;
        }
        self.buffer.push(';');
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Layout helpers
    // -----------------------------------------------------------------------

    fn write_block(&mut self, children: &[CssNode]) -> Result<(), RenderError> {
        self.buffer.push_str(" {\n");
        self.indentation += 1;
        for child in children {
            self.visit_node(child)?;
            self.buffer.push('\n');
        }
        self.indentation -= 1;
        self.write_indentation();
        self.buffer.push('}');
        Ok(())
    }

    fn write_indentation(&mut self) {
        self.buffer.push_str(&"  ".repeat(self.indentation));
    }

    // -----------------------------------------------------------------------
    // Reflow
    // -----------------------------------------------------------------------

    /// Re-emit multi-line text at the current depth, preserving its
    /// relative indentation. `start_column` is the column at which the
    /// construct itself started in its source, when known; the measured
    /// minimum is clamped to it so an unexpectedly dedented line cannot
    /// drag continuation lines with it.
    pub(crate) fn write_reindented(&mut self, text: &str, start_column: Option<usize>) {
        match measure(text) {
            Reflow::Verbatim => self.buffer.push_str(text),
            Reflow::TrailingBlank => {
                self.buffer.push_str(text.trim_end());
                self.buffer.push('\n');
            }
            Reflow::Strip(minimum) => {
                let minimum = match start_column {
                    Some(column) => minimum.min(column),
                    None => minimum,
                };
                self.write_reflowed(text, minimum);
            }
        }
    }

    /// Write `text` with `minimum_indentation` columns stripped from every
    /// continuation line and the current indentation written in their
    /// place. Blank lines contribute only their line breaks, so no line of
    /// the output ends in whitespace; a trailing break is preserved bare.
    fn write_reflowed(&mut self, text: &str, minimum_indentation: usize) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.buffer.push_str(first);
        }

        let mut pending_breaks = 0;
        for line in lines {
            pending_breaks += 1;
            let indent = leading_whitespace(line);
            if indent == line.len() {
                continue;
            }
            for _ in 0..pending_breaks {
                self.buffer.push('\n');
            }
            pending_breaks = 0;
            self.write_indentation();
            self.buffer.push_str(&line[minimum_indentation.min(indent)..]);
        }
        for _ in 0..pending_breaks {
            self.buffer.push('\n');
        }
    }
}

/// How a block of possibly multi-line text should be re-emitted.
enum Reflow {
    /// No line break at all: verbatim.
    Verbatim,
    /// Line breaks exist but every line after the first is blank:
    /// right-trim and append one break.
    TrailingBlank,
    /// Strip this many leading columns from each continuation line.
    Strip(usize),
}

/// Measure the minimum column at which content begins, across all non-blank
/// lines after the first.
fn measure(text: &str) -> Reflow {
    let Some(first_break) = text.find('\n') else {
        return Reflow::Verbatim;
    };

    let mut minimum: Option<usize> = None;
    for line in text[first_break + 1..].split('\n') {
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        minimum = Some(minimum.map_or(indent, |current| current.min(indent)));
    }

    match minimum {
        Some(columns) => Reflow::Strip(columns),
        None => Reflow::TrailingBlank,
    }
}

/// Number of leading space/tab columns on `line`.
fn leading_whitespace(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}
