//! Collins-style head percolation rules for Penn Treebank categories.

use crate::syntax::{basic_category, Constituents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Search children left to right, default to the first child.
    Left,
    /// Search children right to left, default to the last child.
    Right,
}

fn rule(category: &str) -> (Direction, &'static [&'static str]) {
    use Direction::*;
    match category {
        "ADJP" => (
            Left,
            &[
                "NNS", "QP", "NN", "$", "ADVP", "JJ", "VBN", "VBG", "ADJP", "JJR", "NP", "JJS",
                "DT", "FW", "RBR", "RBS", "SBAR", "RB",
            ],
        ),
        "ADVP" => (
            Right,
            &["RB", "RBR", "RBS", "FW", "ADVP", "TO", "CD", "JJR", "JJ", "IN", "NP", "JJS", "NN"],
        ),
        "CONJP" => (Right, &["CC", "RB", "IN"]),
        "FRAG" | "UCP" | "X" => (Right, &[]),
        "LST" => (Right, &["LS", ":"]),
        "NAC" => (
            Left,
            &[
                "NN", "NNS", "NNP", "NNPS", "NP", "NAC", "EX", "$", "CD", "QP", "PRP", "VBG",
                "JJ", "JJS", "JJR", "ADJP", "FW",
            ],
        ),
        "PP" => (Right, &["IN", "TO", "VBG", "VBN", "RP", "FW"]),
        "PRT" => (Right, &["RP"]),
        "QP" => (
            Left,
            &["$", "IN", "NNS", "NN", "JJ", "RB", "DT", "CD", "NCD", "QP", "JJR", "JJS"],
        ),
        "RRC" => (Right, &["VP", "NP", "ADVP", "ADJP", "PP"]),
        "S" => (Left, &["TO", "IN", "VP", "S", "SBAR", "ADJP", "UCP", "NP"]),
        "SBAR" => (
            Left,
            &["WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT", "S", "SQ", "SINV", "SBAR", "FRAG"],
        ),
        "SBARQ" => (Left, &["SQ", "S", "SINV", "SBARQ", "FRAG"]),
        "SINV" => (
            Left,
            &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "S", "SINV", "ADJP", "NP"],
        ),
        "SQ" => (Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "SQ"]),
        "VP" => (
            Left,
            &[
                "TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "ADJP", "NN", "NNS",
                "NP",
            ],
        ),
        "WHADJP" => (Left, &["CC", "WRB", "JJ", "ADJP"]),
        "WHADVP" => (Right, &["CC", "WRB"]),
        "WHNP" => (Left, &["WDT", "WP", "WP$", "WHADJP", "WHPP", "WHNP"]),
        "WHPP" => (Right, &["IN", "TO", "FW"]),
        "ROOT" | "TOP" => (Left, &["S", "SQ", "SINV", "SBARQ", "FRAG", "NP"]),
        _ => (Left, &[]),
    }
}

/// For each category in priority order, scan the children in `direction`.
fn by_priority(labels: &[&str], direction: Direction, priorities: &[&str]) -> Option<usize> {
    for wanted in priorities {
        let found = match direction {
            Direction::Left => labels.iter().position(|label| label == wanted),
            Direction::Right => labels.iter().rposition(|label| label == wanted),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// For each child scanned right to left, accept the first in `set`.
fn rightmost_of(labels: &[&str], set: &[&str]) -> Option<usize> {
    labels.iter().rposition(|label| set.contains(label))
}

/// Collins (1999) noun phrase rule.
fn noun_phrase_head(labels: &[&str]) -> usize {
    let last = labels.len() - 1;
    if labels[last] == "POS" {
        return last;
    }
    rightmost_of(labels, &["NN", "NNP", "NNPS", "NNS", "NX", "POS", "JJR"])
        .or_else(|| labels.iter().position(|label| *label == "NP"))
        .or_else(|| rightmost_of(labels, &["$", "ADJP", "PRN"]))
        .or_else(|| rightmost_of(labels, &["CD"]))
        .or_else(|| rightmost_of(labels, &["JJ", "JJS", "RB", "QP"]))
        .unwrap_or(last)
}

pub(super) fn head_child<T>(tree: &T, node: T::Node) -> Option<T::Node>
where
    T: Constituents + ?Sized,
{
    let children = tree.children(node);
    match children {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let labels: Vec<&str> = children
        .iter()
        .map(|&child| basic_category(tree.label(child)))
        .collect();
    let index = match basic_category(tree.label(node)) {
        "NP" => noun_phrase_head(&labels),
        category => {
            let (direction, priorities) = rule(category);
            by_priority(&labels, direction, priorities).unwrap_or(match direction {
                Direction::Left => 0,
                Direction::Right => labels.len() - 1,
            })
        }
    };
    Some(children[index])
}
