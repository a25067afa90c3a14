//! Reader for Penn Treebank bracketed notation.

use super::{NodeId, ParseTree};
use crate::{CorefError, CorefResult};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

/// Splits bracketed text into `(`, `)` and atoms, with byte offsets.
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let trimmed = rest.trim_start();
        let start = self.pos + (rest.len() - trimmed.len());
        let token = match trimmed.chars().next()? {
            '(' => {
                self.pos = start + 1;
                Token::Open
            }
            ')' => {
                self.pos = start + 1;
                Token::Close
            }
            _ => {
                let len = trimmed
                    .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
                    .unwrap_or(trimmed.len());
                self.pos = start + len;
                Token::Atom(&trimmed[..len])
            }
        };
        Some((start, token))
    }
}

pub(super) fn read(text: &str) -> CorefResult<ParseTree> {
    let mut tree = ParseTree { nodes: Vec::new() };
    let mut open: Vec<NodeId> = Vec::new();
    let mut tokens = Tokens { text, pos: 0 }.peekable();

    while let Some((offset, token)) = tokens.next() {
        if open.is_empty() && !tree.is_empty() {
            return Err(CorefError::tree(offset, "trailing input after the tree"));
        }
        match token {
            Token::Open => {
                let label = match tokens.peek() {
                    Some(&(_, Token::Atom(label))) => {
                        tokens.next();
                        label
                    }
                    // unlabelled outer bracket
                    Some(&(_, Token::Open)) if open.is_empty() => "ROOT",
                    Some(&(at, _)) => {
                        return Err(CorefError::tree(at, "expected a label after '('"))
                    }
                    None => return Err(CorefError::tree(text.len(), "unclosed '('")),
                };
                let id = tree.push(label, open.last().copied());
                open.push(id);
            }
            Token::Atom(word) => match open.last() {
                Some(&parent) => {
                    tree.push(word, Some(parent));
                }
                None => return Err(CorefError::tree(offset, "expected '('")),
            },
            Token::Close => match open.pop() {
                Some(id) if tree.nodes[id.0].children.is_empty() => {
                    let message = format!("constituent {:?} has no children", tree.nodes[id.0].label);
                    return Err(CorefError::tree(offset, message));
                }
                Some(_) => {}
                None => return Err(CorefError::tree(offset, "unbalanced ')'")),
            },
        }
    }

    if tree.is_empty() {
        return Err(CorefError::tree(0, "empty tree"));
    }
    if !open.is_empty() {
        return Err(CorefError::tree(text.len(), "unclosed '('"));
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constituents;

    fn error_of(text: &str) -> String {
        read(text).unwrap_err().to_string()
    }

    #[test]
    fn unlabelled_outer_bracket() {
        let tree = read("( (S (NP (PRP It)) (VP (VBZ works))))").unwrap();
        assert_eq!(tree.label(tree.root()), "ROOT");
        assert_eq!(tree.yield_text(tree.root()), "It works");
    }

    #[test]
    fn tolerates_newlines_and_indentation() {
        let tree = read("(ROOT\n  (NP\n    (DT the)\n    (NN committee)))").unwrap();
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.yield_text(tree.root()), "the committee");
    }

    #[test]
    fn malformed_input() {
        insta::assert_snapshot!(error_of(""), @"tree error at byte 0: empty tree");
        insta::assert_snapshot!(error_of("(NP (PRP he)"), @"tree error at byte 12: unclosed '('");
        insta::assert_snapshot!(error_of("(NP (PRP he)))"), @"tree error at byte 13: trailing input after the tree");
        insta::assert_snapshot!(error_of("he"), @"tree error at byte 0: expected '('");
        insta::assert_snapshot!(error_of("(NP (PRP he) ())"), @"tree error at byte 14: expected a label after '('");
        insta::assert_snapshot!(error_of("(NP (PRP))"), @r###"tree error at byte 8: constituent "PRP" has no children"###);
    }
}
