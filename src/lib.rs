//! smartpunct: smart punctuation for natural-language syntax trees.
//!
//! Replaces dumb/straight/typewriter punctuation marks in an already-parsed
//! sentence tree with smart/curly marks: straight quotes become curly
//! quotes, dash runs become em or en dashes, full-stop runs become an
//! ellipsis, and backtick quoting becomes real quotes.
//!
//! The crate is a rule engine over a borrowed tree, not a parser: the tree
//! comes from an external natural-language tokenizer, is mutated in place
//! by one synchronous pass, and is handed straight back. Configuration is
//! validated up front; a built [`Transformer`] is immutable and reusable
//! across any number of trees.
//!
//! # Example
//!
//! ```
//! use smartpunct::{Node, Options, Transformer};
//!
//! let transformer = Transformer::new(Options::default()).unwrap();
//! let mut tree = Node::sentence(vec![
//!     Node::word_text("Alfred"),
//!     Node::whitespace(" "),
//!     Node::punctuation("\""),
//!     Node::word_text("bertrand"),
//!     Node::punctuation("\""),
//!     Node::punctuation("."),
//! ]);
//! transformer.transform(&mut tree);
//! assert_eq!(tree.to_text(), "Alfred \u{201C}bertrand\u{201D}.");
//! ```
//!
//! # Citations
//! - Gruber, "SmartyPants" (2002) - the original dumb-to-smart heuristics
//! - Bringhurst, "The Elements of Typographic Style" (1992) - glyph usage

pub mod engine;
pub mod options;
mod rules;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_util;

pub use engine::Transformer;
pub use options::{
    Backticks, ConfigError, Dashes, Ellipses, Options, QuoteCharacters, DEFAULT_CLOSING_QUOTES,
    DEFAULT_OPENING_QUOTES,
};
pub use tree::Node;

/// Commonly used items.
pub mod prelude {
    pub use crate::engine::Transformer;
    pub use crate::options::{
        Backticks, ConfigError, Dashes, Ellipses, Options, QuoteCharacters,
    };
    pub use crate::tree::Node;
}
