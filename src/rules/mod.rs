//! The four rule families: quotes, ellipses, backticks, dashes.
//!
//! Each rule is a free function over the parent's child vector and the
//! index of the punctuation or symbol node under consideration, so a rule's
//! dependencies are visible in its signature. A rule that does not match
//! the node's current value performs no mutation and never errors; a dash
//! may legitimately be a hyphen, a dot a sentence terminator.

pub(crate) mod backticks;
pub(crate) mod dashes;
pub(crate) mod ellipses;
pub(crate) mod quotes;

use crate::tree::Node;

/// Overwrites the literal value of a leaf node. No-op on parents.
#[inline]
pub(crate) fn set_value(node: &mut Node, value: impl Into<String>) {
    if let Some(slot) = node.value_mut() {
        *slot = value.into();
    }
}
