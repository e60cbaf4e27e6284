//! Test fixture lexer.
//!
//! Unit tests describe inputs as plain strings; this module turns a string
//! into the sentence tree shape the transform expects, the way a
//! Latin-script natural-language parser would: words group their text runs
//! with single word-internal marks (`Alfred's`), runs of one identical mark
//! form one token (`--`, `...`, `''`), and whitespace runs form one
//! whitespace node. This is test tooling only; real tokenization stays with
//! the external parser.

use crate::engine::Transformer;
use crate::options::Options;
use crate::tree::Node;

/// Marks lexed as `Symbol` rather than `Punctuation` (Unicode Sk/Sm/Sc).
const SYMBOLS: &str = "`$^+<=>|~";

/// Parses text into `Root[Paragraph[Sentence[...]]]`.
pub(crate) fn parse(text: &str) -> Node {
    Node::root(vec![Node::paragraph(vec![Node::sentence(lex(text))])])
}

/// Builds a transformer from `options`, runs it over the parsed text, and
/// flattens the result.
pub(crate) fn process(options: Options, text: &str) -> String {
    let transformer = Transformer::new(options).expect("test options must be valid");
    let mut tree = parse(text);
    transformer.transform(&mut tree);
    tree.to_text()
}

/// [`process`] with default options.
pub(crate) fn process_default(text: &str) -> String {
    process(Options::default(), text)
}

fn lex(text: &str) -> Vec<Node> {
    let chars: Vec<char> = text.chars().collect();
    let mut nodes = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_alphanumeric() {
            nodes.push(lex_word(&chars, &mut i));
        } else if c.is_whitespace() {
            let start = i;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            nodes.push(Node::whitespace(chars[start..i].iter().collect::<String>()));
        } else {
            // A run of one identical mark is one token.
            let start = i;
            while i < chars.len() && chars[i] == c {
                i += 1;
            }
            nodes.push(mark(chars[start..i].iter().collect::<String>(), c));
        }
    }

    nodes
}

/// Lexes a word: alternating text runs and single word-internal marks
/// flanked by word characters on both sides.
fn lex_word(chars: &[char], i: &mut usize) -> Node {
    let mut children = Vec::new();

    loop {
        let start = *i;
        while *i < chars.len() && chars[*i].is_alphanumeric() {
            *i += 1;
        }
        children.push(Node::text(chars[start..*i].iter().collect::<String>()));

        let internal = *i + 1 < chars.len()
            && !chars[*i].is_alphanumeric()
            && !chars[*i].is_whitespace()
            && chars[*i + 1].is_alphanumeric();
        if internal {
            children.push(mark(chars[*i].to_string(), chars[*i]));
            *i += 1;
        } else {
            break;
        }
    }

    Node::word(children)
}

fn mark(value: String, c: char) -> Node {
    if SYMBOLS.contains(c) {
        Node::symbol(value)
    } else {
        Node::punctuation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_identical_mark_runs() {
        let tree = parse("Alfred--bertrand... \"cees\".");
        let flat = tree.to_text();
        assert_eq!(flat, "Alfred--bertrand... \"cees\".");

        let sentence = tree.children().unwrap()[0].children().unwrap()[0].clone();
        let values: Vec<String> = sentence
            .children()
            .unwrap()
            .iter()
            .map(Node::to_text)
            .collect();
        assert_eq!(
            values,
            vec!["Alfred", "--", "bertrand", "...", " ", "\"", "cees", "\"", "."]
        );
    }

    #[test]
    fn keeps_word_internal_marks_inside_the_word() {
        let tree = parse("Alfred's");
        let sentence = &tree.children().unwrap()[0].children().unwrap()[0];
        let word = &sentence.children().unwrap()[0];
        assert!(word.is_word());
        assert_eq!(
            word.children().unwrap().as_slice(),
            &[
                Node::text("Alfred"),
                Node::punctuation("'"),
                Node::text("s"),
            ]
        );
    }

    #[test]
    fn leading_apostrophe_stays_outside_the_word() {
        let tree = parse("the '90s");
        let sentence = &tree.children().unwrap()[0].children().unwrap()[0];
        let children = sentence.children().unwrap();
        assert_eq!(children[2], Node::punctuation("'"));
        assert!(children[3].is_word());
    }

    #[test]
    fn backticks_lex_as_symbols() {
        let tree = parse("``x");
        let sentence = &tree.children().unwrap()[0].children().unwrap()[0];
        assert_eq!(sentence.children().unwrap()[0], Node::symbol("``"));
    }

    #[test]
    fn mixed_marks_split_at_character_changes() {
        let tree = parse("\"'x");
        let sentence = &tree.children().unwrap()[0].children().unwrap()[0];
        let children = sentence.children().unwrap();
        assert_eq!(children[0], Node::punctuation("\""));
        assert_eq!(children[1], Node::punctuation("'"));
    }
}
