//! Backtick-style quoting.
//!
//! The TeX-era convention: double backticks open and doubled straight
//! single quotes close a double quote. The `all` variant extends this to
//! single marks, which is why it cannot coexist with the quotes rule; the
//! conflict is rejected when the transformer is built.

use crate::options::QuoteCharacters;
use crate::rules::set_value;
use crate::tree::Node;

/// Default variant: double marks only.
pub(crate) fn double(open: &QuoteCharacters, close: &QuoteCharacters, node: &mut Node) {
    match node.value() {
        Some("``") => set_value(node, open.double.as_ref()),
        Some("''") => set_value(node, close.double.as_ref()),
        _ => {}
    }
}

/// `all` variant: the default substitutions, then single marks too.
pub(crate) fn all(open: &QuoteCharacters, close: &QuoteCharacters, node: &mut Node) {
    double(open, close, node);
    match node.value() {
        Some("`") => set_value(node, open.single.as_ref()),
        Some("'") => set_value(node, close.single.as_ref()),
        _ => {}
    }
}
