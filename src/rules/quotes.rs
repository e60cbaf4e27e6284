//! Straight-quote classification.
//!
//! Decides, per `"` or `'` node, whether it opens or closes a quotation,
//! from the types and flattened values of up to three neighboring siblings.
//! The branch order matters and the first matching branch wins; the
//! disambiguation heuristics (brute-force close, nested openings, decade
//! abbreviations, possessives) follow the SmartyPants lineage.
//!
//! # Citations
//! - Gruber, "SmartyPants" (2002), the original educated-quotes heuristics

use crate::options::QuoteCharacters;
use crate::rules::set_value;
use crate::tree::Node;

/// Classification outcome for one straight-quote node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Curl {
    /// The node gets its opening glyph.
    Open,
    /// The node gets its closing glyph.
    Close,
    /// Nested opening: the node and its next sibling both get opening
    /// glyphs, each for its own quote kind (`"'Quoted' words` ...).
    OpenNested { next_is_double: bool },
}

/// Rewrites a straight quote to the opening or closing glyph its context
/// calls for. Values other than `"` and `'` are left untouched.
pub(crate) fn curl(
    open: &QuoteCharacters,
    close: &QuoteCharacters,
    siblings: &mut [Node],
    index: usize,
) {
    let is_double = match siblings[index].value() {
        Some("\"") => true,
        Some("'") => false,
        _ => return,
    };

    let prev = index.checked_sub(1).map(|i| &siblings[i]);
    let next = siblings.get(index + 1);
    let next_next = siblings.get(index + 2);
    let next_value = next.map(Node::to_text).unwrap_or_default();

    let prev_is_boundary = prev.is_some_and(|p| p.is_whitespace() || p.is_punctuation_like());
    let next_is_punctuation = next.is_some_and(Node::is_punctuation_like);
    let next_next_is_word = next_next.is_some_and(Node::is_word);

    let decision = if next_is_punctuation && next_next.is_some() && !next_next_is_word {
        // Quote followed by punctuation at a non-word break: close by
        // brute force.
        Curl::Close
    } else if next_is_punctuation
        && (next_value == "\"" || next_value == "'")
        && next_next_is_word
    {
        // Double set of quotes opening together.
        Curl::OpenNested {
            next_is_double: next_value == "\"",
        }
    } else if next.is_some() && is_decade(&next_value) {
        // Decade abbreviation: `the '80s`.
        Curl::Close
    } else if prev_is_boundary && next.is_some_and(Node::is_word) {
        // Word-initial quote.
        Curl::Open
    } else if prev.is_some() && !prev_is_boundary {
        // Quote trailing a word.
        Curl::Close
    } else if next.is_none()
        || next.is_some_and(Node::is_whitespace)
        || (!is_double && next_value == "s")
    {
        // End of sentence, or the `'s` possessive/contraction case.
        Curl::Close
    } else {
        Curl::Open
    };

    fn glyph(pair: &QuoteCharacters, double: bool) -> &str {
        if double {
            &pair.double
        } else {
            &pair.single
        }
    }

    match decision {
        Curl::Open => set_value(&mut siblings[index], glyph(open, is_double)),
        Curl::Close => set_value(&mut siblings[index], glyph(close, is_double)),
        Curl::OpenNested { next_is_double } => {
            set_value(&mut siblings[index], glyph(open, is_double));
            set_value(&mut siblings[index + 1], glyph(open, next_is_double));
        }
    }
}

/// Returns whether a flattened sibling reads as a decade abbreviation
/// remainder: exactly two ASCII digits followed by a lowercase `s`.
///
/// The match on the flattened value alone is sufficient; no further
/// literal-`s` sibling is required. `'8s` deliberately fails the pattern.
fn is_decade(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b's'
}
