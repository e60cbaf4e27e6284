//! Node model for natural-language syntax trees.
//!
//! Implements the sentence/word/punctuation tree shape produced by parsers
//! in the nlcst family: parent nodes own an ordered child sequence, leaf
//! nodes own a literal value. The transform borrows such a tree for one
//! synchronous pass, mutating selected leaf values and occasionally
//! splicing sibling leaves out of a parent's child vector.
//!
//! # Invariants
//! - Sibling order within a parent is meaningful; all neighbor lookups are
//!   by index into the parent's child vector.
//! - Nodes hold no cross-references to non-adjacent nodes.
//! - A `Word` is a parent: word-internal punctuation (as in `Alfred's`)
//!   appears as a `Punctuation` leaf between `Text` leaves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a natural-language syntax tree.
///
/// Parent variants (`Root`, `Paragraph`, `Sentence`, `Word`) carry an
/// ordered child vector; leaf variants (`Text`, `Punctuation`, `Symbol`,
/// `WhiteSpace`) carry a literal string value. The closed enum replaces the
/// string-keyed `type` discriminant of the source model, so rule dispatch
/// is checked for exhaustiveness at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Document root.
    #[serde(rename = "RootNode")]
    Root(Vec<Node>),
    /// A paragraph of sentences.
    #[serde(rename = "ParagraphNode")]
    Paragraph(Vec<Node>),
    /// A sentence of words, whitespace, and punctuation.
    #[serde(rename = "SentenceNode")]
    Sentence(Vec<Node>),
    /// A word token. Parents word-internal punctuation next to `Text` runs.
    #[serde(rename = "WordNode")]
    Word(Vec<Node>),
    /// A run of word characters inside a `Word`.
    #[serde(rename = "TextNode")]
    Text(String),
    /// A punctuation token.
    #[serde(rename = "PunctuationNode")]
    Punctuation(String),
    /// A symbol token. Treated identically to punctuation by the rule set.
    #[serde(rename = "SymbolNode")]
    Symbol(String),
    /// Inter-token whitespace.
    #[serde(rename = "WhiteSpaceNode")]
    WhiteSpace(String),
}

impl Node {
    /// Creates a `Root` parent from the given children.
    #[inline]
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(children)
    }

    /// Creates a `Paragraph` parent from the given children.
    #[inline]
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(children)
    }

    /// Creates a `Sentence` parent from the given children.
    #[inline]
    pub fn sentence(children: Vec<Node>) -> Self {
        Node::Sentence(children)
    }

    /// Creates a `Word` parent from the given children.
    #[inline]
    pub fn word(children: Vec<Node>) -> Self {
        Node::Word(children)
    }

    /// Creates a `Word` parent holding a single `Text` leaf.
    #[inline]
    pub fn word_text(value: impl Into<String>) -> Self {
        Node::Word(vec![Node::Text(value.into())])
    }

    /// Creates a `Text` leaf.
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Creates a `Punctuation` leaf.
    #[inline]
    pub fn punctuation(value: impl Into<String>) -> Self {
        Node::Punctuation(value.into())
    }

    /// Creates a `Symbol` leaf.
    #[inline]
    pub fn symbol(value: impl Into<String>) -> Self {
        Node::Symbol(value.into())
    }

    /// Creates a `WhiteSpace` leaf.
    #[inline]
    pub fn whitespace(value: impl Into<String>) -> Self {
        Node::WhiteSpace(value.into())
    }

    /// Returns whether this node is a `Word`.
    #[inline]
    pub fn is_word(&self) -> bool {
        matches!(self, Node::Word(_))
    }

    /// Returns whether this node is a `WhiteSpace` leaf.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::WhiteSpace(_))
    }

    /// Returns whether this node is a `Punctuation` or `Symbol` leaf.
    ///
    /// The rule set treats the two identically; these are the only nodes
    /// eligible for transformation.
    #[inline]
    pub fn is_punctuation_like(&self) -> bool {
        matches!(self, Node::Punctuation(_) | Node::Symbol(_))
    }

    /// Returns the literal value of a leaf node, or `None` for a parent.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text(v) | Node::Punctuation(v) | Node::Symbol(v) | Node::WhiteSpace(v) => {
                Some(v)
            }
            _ => None,
        }
    }

    /// Returns a mutable reference to the literal value of a leaf node.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut String> {
        match self {
            Node::Text(v) | Node::Punctuation(v) | Node::Symbol(v) | Node::WhiteSpace(v) => {
                Some(v)
            }
            _ => None,
        }
    }

    /// Returns the child vector of a parent node, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Root(c) | Node::Paragraph(c) | Node::Sentence(c) | Node::Word(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the mutable child vector of a parent node.
    #[inline]
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(c) | Node::Paragraph(c) | Node::Sentence(c) | Node::Word(c) => Some(c),
            _ => None,
        }
    }

    /// Flattens this node into its textual content.
    ///
    /// For a leaf this is the literal value; for a parent it is the
    /// concatenation of all descendant leaf values in document order. Rules
    /// use this for lookahead comparisons, so a single-leaf subtree and the
    /// equivalent bare leaf always flatten to the same string.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(v) | Node::Punctuation(v) | Node::Symbol(v) | Node::WhiteSpace(v) => {
                out.push_str(v)
            }
            Node::Root(c) | Node::Paragraph(c) | Node::Sentence(c) | Node::Word(c) => {
                for child in c {
                    child.write_text(out);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
