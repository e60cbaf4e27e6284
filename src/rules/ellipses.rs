//! Full-stop run collapsing.
//!
//! Replaces three or more dots, whether held in one token or spread over
//! whitespace-separated single-dot tokens, with one ellipsis glyph. This is
//! the only rule that splices siblings: the absorbed dot and whitespace
//! nodes strictly before the current node are removed, and the current
//! (rightmost) node survives holding the glyph.

use crate::options::Ellipses;
use crate::rules::set_value;
use crate::tree::Node;

/// The horizontal ellipsis glyph.
pub(crate) const ELLIPSIS: &str = "\u{2026}";

/// Collapses a run of full stops ending at `index` into an ellipsis.
///
/// Runs of fewer than three dot groups are left untouched, so `..` and
/// `. .` survive as written.
pub(crate) fn collapse(style: Ellipses, siblings: &mut Vec<Node>, index: usize) {
    let value = match siblings[index].value() {
        Some(v) => v,
        None => return,
    };

    // Fast path: the tokenizer already merged the whole run into one node.
    if value.len() >= 3 && is_dot_run(value) {
        set_value(&mut siblings[index], ELLIPSIS);
        return;
    }

    if !is_dot_run(value) {
        return;
    }

    // Walk backward through alternating whitespace and dot-group siblings,
    // counting groups and measuring the stretch to remove. A dot merged
    // into a word by the tokenizer is out of reach here; that is a
    // tokenizer-dependent limit, not a rule defect.
    let mut position = index;
    let mut count = 1;
    let mut traversed = 0;

    while position >= 2 {
        if !siblings[position - 1].is_whitespace() {
            break;
        }
        let group = &siblings[position - 2];
        if group.is_punctuation_like() && group.value().is_some_and(is_dot_run) {
            traversed += 2;
            count += 1;
            position -= 2;
        } else {
            break;
        }
    }

    if count < 3 {
        return;
    }

    let start = index - traversed;
    siblings.drain(start..index);
    set_value(&mut siblings[start], ELLIPSIS);

    // The collapsed stretch was whitespace-separated by construction, so
    // the spaced style re-inserts a single separating space.
    if style == Ellipses::Spaced {
        siblings.insert(start, Node::whitespace(" "));
    }
}

/// Returns whether `value` is one-or-more full stops and nothing else.
fn is_dot_run(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(siblings: &[Node]) -> String {
        siblings.iter().map(Node::to_text).collect()
    }

    #[test]
    fn merged_triple_dot_token_collapses() {
        let mut siblings = vec![Node::word_text("Alfred"), Node::punctuation("...")];
        collapse(Ellipses::Unspaced, &mut siblings, 1);
        assert_eq!(values(&siblings), "Alfred\u{2026}");
    }

    #[test]
    fn merged_five_dot_token_collapses() {
        let mut siblings = vec![Node::word_text("Alfred"), Node::punctuation(".....")];
        collapse(Ellipses::Unspaced, &mut siblings, 1);
        assert_eq!(values(&siblings), "Alfred\u{2026}");
    }

    #[test]
    fn spaced_out_run_collapses_to_trailing_node() {
        // `Alfred. . .` - the two leading dot/space pairs are spliced out.
        let mut siblings = vec![
            Node::word_text("Alfred"),
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::punctuation("."),
        ];
        collapse(Ellipses::Unspaced, &mut siblings, 5);
        assert_eq!(siblings.len(), 2);
        assert_eq!(values(&siblings), "Alfred\u{2026}");
    }

    #[test]
    fn funky_spacing_counts_dot_groups_not_dots() {
        // `.. .. .` is three groups and collapses.
        let mut siblings = vec![
            Node::punctuation(".."),
            Node::whitespace(" "),
            Node::punctuation(".."),
            Node::whitespace(" "),
            Node::punctuation("."),
        ];
        collapse(Ellipses::Unspaced, &mut siblings, 4);
        assert_eq!(values(&siblings), "\u{2026}");
    }

    #[test]
    fn two_groups_are_below_threshold() {
        let mut siblings = vec![
            Node::word_text("bertrand"),
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::punctuation("."),
        ];
        collapse(Ellipses::Unspaced, &mut siblings, 3);
        assert_eq!(values(&siblings), "bertrand. .");
    }

    #[test]
    fn double_dot_token_is_untouched() {
        let mut siblings = vec![Node::word_text("Alfred"), Node::punctuation("..")];
        collapse(Ellipses::Unspaced, &mut siblings, 1);
        assert_eq!(values(&siblings), "Alfred..");
    }

    #[test]
    fn run_at_sequence_start_collapses() {
        // `. . . Alfred`
        let mut siblings = vec![
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::word_text("Alfred"),
        ];
        collapse(Ellipses::Unspaced, &mut siblings, 4);
        assert_eq!(values(&siblings), "\u{2026} Alfred");
    }

    #[test]
    fn word_bounds_the_backward_walk() {
        let mut siblings = vec![
            Node::word_text("Alfred"),
            Node::whitespace(" "),
            Node::punctuation("."),
        ];
        collapse(Ellipses::Unspaced, &mut siblings, 2);
        assert_eq!(values(&siblings), "Alfred .");
    }

    #[test]
    fn spaced_style_keeps_one_separator() {
        // `Alfred. . .` with the spaced style yields `Alfred …`.
        let mut siblings = vec![
            Node::word_text("Alfred"),
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::punctuation("."),
            Node::whitespace(" "),
            Node::punctuation("."),
        ];
        collapse(Ellipses::Spaced, &mut siblings, 5);
        assert_eq!(values(&siblings), "Alfred \u{2026}");
    }

    #[test]
    fn spaced_style_leaves_merged_token_alone() {
        // The fast path never saw whitespace, so no separator appears.
        let mut siblings = vec![Node::word_text("Alfred"), Node::punctuation("...")];
        collapse(Ellipses::Spaced, &mut siblings, 1);
        assert_eq!(values(&siblings), "Alfred\u{2026}");
    }

    #[test]
    fn non_dot_values_are_untouched() {
        let mut siblings = vec![Node::punctuation(",")];
        collapse(Ellipses::Unspaced, &mut siblings, 0);
        assert_eq!(values(&siblings), ",");
    }
}
