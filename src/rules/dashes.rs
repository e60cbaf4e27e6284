//! Dash replacement.
//!
//! Three conventions over the same two tokens. Matching is exact on the
//! whole value: a three-dash token never matches the two-dash pattern, so
//! the default convention leaves `---` as written.

use crate::rules::set_value;
use crate::tree::Node;

/// The em dash glyph.
pub(crate) const EM_DASH: &str = "\u{2014}";
/// The en dash glyph.
pub(crate) const EN_DASH: &str = "\u{2013}";

/// Default convention: two dashes become an em dash.
pub(crate) fn em(node: &mut Node) {
    if node.value() == Some("--") {
        set_value(node, EM_DASH);
    }
}

/// Oldschool convention: three dashes become an em dash, two an en dash.
pub(crate) fn oldschool(node: &mut Node) {
    match node.value() {
        Some("---") => set_value(node, EM_DASH),
        Some("--") => set_value(node, EN_DASH),
        _ => {}
    }
}

/// Inverted convention: three dashes become an en dash, two an em dash.
pub(crate) fn inverted(node: &mut Node) {
    match node.value() {
        Some("---") => set_value(node, EN_DASH),
        Some("--") => set_value(node, EM_DASH),
        _ => {}
    }
}
