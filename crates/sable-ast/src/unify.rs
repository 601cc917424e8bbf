//! Simple-selector unification.
//!
//! When the extend engine merges two compound selectors it must decide
//! whether their leading element matchers can be expressed as one selector.
//! Only type/universal combinations are decided here; everything else is
//! "no unification possible", which the caller treats as an ordinary
//! outcome, not an error.

use crate::selector::{QualifiedName, SimpleSelector};

/// Unify two simple selectors into a single equivalent element matcher.
///
/// Returns `None` when no single selector can express both constraints —
/// distinct type names, incompatible namespaces, or any variant other than
/// type/universal on either side.
pub fn unify(a: &SimpleSelector, b: &SimpleSelector) -> Option<SimpleSelector> {
    match (a, b) {
        (SimpleSelector::Type { name: left }, SimpleSelector::Type { name: right }) => {
            if left.name != right.name {
                return None;
            }
            let namespace = unify_namespaces(&left.namespace, &right.namespace)?;
            Some(SimpleSelector::Type {
                name: QualifiedName {
                    name: left.name.clone(),
                    namespace,
                },
            })
        }
        (SimpleSelector::Type { name }, SimpleSelector::Universal { namespace })
        | (SimpleSelector::Universal { namespace }, SimpleSelector::Type { name }) => {
            let namespace = unify_namespaces(&name.namespace, namespace)?;
            Some(SimpleSelector::Type {
                name: QualifiedName {
                    name: name.name.clone(),
                    namespace,
                },
            })
        }
        (
            SimpleSelector::Universal { namespace: left },
            SimpleSelector::Universal { namespace: right },
        ) => {
            let namespace = unify_namespaces(left, right)?;
            Some(SimpleSelector::Universal { namespace })
        }
        _ => None,
    }
}

/// Resolve two namespaces into one, or `None` if they are incompatible.
///
/// An unspecified namespace is neutral and defers to the other side,
/// including the wildcard; the wildcard defers to any concrete namespace.
/// Two distinct concrete namespaces never unify.
fn unify_namespaces(a: &Option<String>, b: &Option<String>) -> Option<Option<String>> {
    match (a, b) {
        (None, other) | (other, None) => Some(other.clone()),
        (Some(left), Some(right)) if left == right => Some(Some(left.clone())),
        (Some(left), Some(right)) if right == "*" => Some(Some(left.clone())),
        (Some(left), Some(right)) if left == "*" => Some(Some(right.clone())),
        _ => None,
    }
}
