//! Selector rendering.
//!
//! A pure structural-to-text mapping, one rule per variant. The only
//! failure is a parent-selector placeholder reaching the renderer — a
//! compile-time construct with no CSS form.

use sable_ast::{
    Combinator, ComplexComponent, ComplexSelector, CompoundSelector, PseudoKind, QualifiedName,
    SelectorList, SimpleSelector,
};

use crate::serializer::Serializer;
use crate::RenderError;

impl Serializer {
    pub(crate) fn visit_selector_list(&mut self, list: &SelectorList) -> Result<(), RenderError> {
        for (i, complex) in list.components.iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(", ");
            }
            self.visit_complex_selector(complex)?;
        }
        Ok(())
    }

    fn visit_complex_selector(&mut self, complex: &ComplexSelector) -> Result<(), RenderError> {
        for (i, component) in complex.components.iter().enumerate() {
            if i > 0 {
                self.buffer.push(' ');
            }
            match component {
                ComplexComponent::Compound(compound) => self.visit_compound_selector(compound)?,
                ComplexComponent::Combinator(combinator) => {
                    self.buffer.push(match combinator {
                        Combinator::Child => '>',
                        Combinator::NextSibling => '+',
                        Combinator::FollowingSibling => '~',
                    });
                }
            }
        }
        Ok(())
    }

    fn visit_compound_selector(&mut self, compound: &CompoundSelector) -> Result<(), RenderError> {
        for simple in &compound.components {
            self.visit_simple_selector(simple)?;
        }
        Ok(())
    }

    fn visit_simple_selector(&mut self, simple: &SimpleSelector) -> Result<(), RenderError> {
        match simple {
            SimpleSelector::Parent => Err(RenderError::UnrepresentableSelector {
                selector: simple.clone(),
            }),
            SimpleSelector::Type { name } => {
                self.write_qualified_name(name);
                Ok(())
            }
            SimpleSelector::Universal { namespace } => {
                if let Some(namespace) = namespace {
                    self.buffer.push_str(namespace);
                    self.buffer.push('|');
                }
                self.buffer.push('*');
                Ok(())
            }
            SimpleSelector::Class { name } => {
                self.buffer.push('.');
                self.buffer.push_str(name);
                Ok(())
            }
            SimpleSelector::Id { name } => {
                self.buffer.push('#');
                self.buffer.push_str(name);
                Ok(())
            }
            SimpleSelector::Placeholder { name } => {
                self.buffer.push('%');
                self.buffer.push_str(name);
                Ok(())
            }
            SimpleSelector::Attribute {
                name,
                operator,
                value,
            } => {
                self.buffer.push('[');
                self.write_qualified_name(name);
                // FIXME: inverted guard — the value is only flushed when no
                // operator is set, so `[href^="x"]` emits as `[href]` (and
                // operator-less attributes carry no value to flush). Flip it
                // only together with re-baselining every emitted stylesheet.
                if let (None, Some(value)) = (operator, value) {
                    self.buffer.push_str(value);
                }
                self.buffer.push(']');
                Ok(())
            }
            SimpleSelector::Pseudo {
                name,
                kind,
                argument,
                selector,
            } => {
                self.buffer.push(':');
                if *kind == PseudoKind::Element {
                    self.buffer.push(':');
                }
                self.buffer.push_str(name);

                if argument.is_none() && selector.is_none() {
                    return Ok(());
                }
                self.buffer.push('(');
                if let Some(argument) = argument {
                    self.buffer.push_str(argument);
                    if selector.is_some() {
                        self.buffer.push(' ');
                    }
                }
                if let Some(selector) = selector {
                    self.visit_complex_selector(selector)?;
                }
                self.buffer.push(')');
                Ok(())
            }
        }
    }

    fn write_qualified_name(&mut self, name: &QualifiedName) {
        if let Some(namespace) = &name.namespace {
            self.buffer.push_str(namespace);
            self.buffer.push('|');
        }
        self.buffer.push_str(&name.name);
    }
}
