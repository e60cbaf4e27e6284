//! Transform engine: rule selection and the tree walk.
//!
//! A [`Transformer`] is built once from validated [`Options`] and carries
//! the ordered list of active methods plus the quote glyph pairs. It is
//! immutable after construction, holds no per-document state, and can be
//! reused across any number of trees (including from several threads).
//!
//! The walk is pre-order, parent before children, left-to-right among
//! siblings. Only `Punctuation` and `Symbol` children are eligible; the
//! root is never eligible since it has no parent. Methods run per node in a
//! fixed order: quotes, ellipses, backticks, dashes. Quote and ellipsis
//! lookahead reads raw neighbor values, so those two run before any method
//! that could rewrite a neighbor in the same pass.

use crate::options::{Backticks, ConfigError, Dashes, Ellipses, Options, QuoteCharacters};
use crate::rules;
use crate::tree::Node;

/// One active transformation method.
///
/// A closed set selected from the configuration, dispatched by `match`
/// rather than by value-keyed lookup, so a missing arm is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Quotes,
    Ellipses,
    BackticksDouble,
    BackticksAll,
    DashesEm,
    DashesOldschool,
    DashesInverted,
}

/// The smart punctuation transform.
///
/// # Example
/// ```
/// use smartpunct::{Node, Options, Transformer};
///
/// let transformer = Transformer::new(Options::default()).unwrap();
/// let mut tree = Node::sentence(vec![
///     Node::word_text("Alfred"),
///     Node::punctuation("--"),
///     Node::word_text("bertrand"),
///     Node::punctuation("."),
/// ]);
/// transformer.transform(&mut tree);
/// assert_eq!(tree.to_text(), "Alfred\u{2014}bertrand.");
/// ```
#[derive(Debug, Clone)]
pub struct Transformer {
    /// Active methods in application order.
    methods: Vec<Method>,
    /// Opening quote glyphs.
    open: QuoteCharacters,
    /// Closing quote glyphs.
    close: QuoteCharacters,
    /// Collapsing style for the ellipsis method.
    ellipses: Ellipses,
}

impl Transformer {
    /// Builds a transformer from the given options.
    ///
    /// Fails with [`ConfigError::BackticksAllWithQuotes`] when the `all`
    /// backtick variant is combined with the quotes rule, both effective:
    /// the two would compete for the single straight-quote character. No
    /// tree is ever touched by a partially configured transform.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        if options.backticks == Backticks::All && options.quotes {
            return Err(ConfigError::BackticksAllWithQuotes);
        }

        let mut methods = Vec::with_capacity(4);

        if options.quotes {
            methods.push(Method::Quotes);
        }

        if options.ellipses != Ellipses::Off {
            methods.push(Method::Ellipses);
        }

        match options.backticks {
            Backticks::Off => {}
            Backticks::Double => methods.push(Method::BackticksDouble),
            Backticks::All => methods.push(Method::BackticksAll),
        }

        match options.dashes {
            Dashes::Off => {}
            Dashes::Em => methods.push(Method::DashesEm),
            Dashes::Oldschool => methods.push(Method::DashesOldschool),
            Dashes::Inverted => methods.push(Method::DashesInverted),
        }

        Ok(Self {
            methods,
            open: options.opening_quotes,
            close: options.closing_quotes,
            ellipses: options.ellipses,
        })
    }

    /// Transforms a borrowed tree in place.
    ///
    /// One synchronous pass; time is linear in the node count, plus a
    /// backward scan per ellipsis run bounded by the run length. With every
    /// axis disabled this is the identity.
    pub fn transform(&self, root: &mut Node) {
        if let Some(children) = root.children_mut() {
            self.walk(children);
        }
    }

    fn walk(&self, children: &mut Vec<Node>) {
        let mut index = 0;

        while index < children.len() {
            if children[index].is_punctuation_like() {
                for method in &self.methods {
                    let before = children.len();
                    self.apply(*method, children, index);
                    // The ellipsis method removes siblings strictly before
                    // the current node; re-derive the index from the length
                    // delta so later methods in this pass see the same node.
                    index -= before - children.len();
                }
            }

            if let Some(grandchildren) = children[index].children_mut() {
                self.walk(grandchildren);
            }

            index += 1;
        }
    }

    fn apply(&self, method: Method, siblings: &mut Vec<Node>, index: usize) {
        match method {
            Method::Quotes => rules::quotes::curl(&self.open, &self.close, siblings, index),
            Method::Ellipses => rules::ellipses::collapse(self.ellipses, siblings, index),
            Method::BackticksDouble => {
                rules::backticks::double(&self.open, &self.close, &mut siblings[index])
            }
            Method::BackticksAll => {
                rules::backticks::all(&self.open, &self.close, &mut siblings[index])
            }
            Method::DashesEm => rules::dashes::em(&mut siblings[index]),
            Method::DashesOldschool => rules::dashes::oldschool(&mut siblings[index]),
            Method::DashesInverted => rules::dashes::inverted(&mut siblings[index]),
        }
    }
}

impl Default for Transformer {
    /// A transformer with every axis at its default: quotes, unspaced
    /// ellipses, double backticks, em dashes, curly glyph pairs.
    fn default() -> Self {
        Self::new(Options::default()).expect("default options are valid")
    }
}
