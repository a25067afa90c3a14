//! Mentions: constituents that may refer to an entity.

use crate::syntax::{basic_category, Constituents};
use crate::{EntityType, ParseTree};

/// A noun phrase or pronoun in a parsed sentence.
///
/// A mention borrows the tree it belongs to and never changes after it is
/// created, so every feature computed from it is stable.
#[derive(Debug)]
pub struct Mention<'t, T: Constituents + ?Sized = ParseTree> {
    tree: &'t T,
    node: T::Node,
    entity_type: EntityType,
}

impl<'t, T: Constituents + ?Sized> Clone for Mention<'t, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, T: Constituents + ?Sized> Copy for Mention<'t, T> {}

impl<'t, T: Constituents + ?Sized> Mention<'t, T> {
    pub fn new(tree: &'t T, node: T::Node, entity_type: EntityType) -> Self {
        Self {
            tree,
            node,
            entity_type,
        }
    }

    pub fn tree(&self) -> &'t T {
        self.tree
    }

    pub fn node(&self) -> T::Node {
        self.node
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// True if both mentions point into the same tree.
    pub fn same_tree(&self, other: &Mention<'_, T>) -> bool {
        std::ptr::eq(
            self.tree as *const T as *const u8,
            other.tree as *const T as *const u8,
        )
    }

    pub fn head_preterminal(&self) -> Option<T::Node> {
        self.tree.head_preterminal(self.node)
    }

    /// The head word, as written.
    pub fn head_word(&self) -> Option<&'t str> {
        let preterminal = self.head_preterminal()?;
        let word = *self.tree.children(preterminal).first()?;
        Some(self.tree.label(word))
    }

    pub fn leaves(&self) -> Vec<T::Node> {
        self.tree.leaves(self.node)
    }

    /// Each word with the label of its immediate parent, normally its
    /// part-of-speech tag.
    pub fn tagged_leaves(&self) -> Vec<(&'t str, &'t str)> {
        let tree = self.tree;
        self.leaves()
            .into_iter()
            .map(|leaf| {
                let tag = tree.parent(leaf).map_or("", |parent| tree.label(parent));
                (tree.label(leaf), tag)
            })
            .collect()
    }

    /// Words of the mention joined by spaces.
    pub fn text(&self) -> String {
        let tree = self.tree;
        self.leaves()
            .into_iter()
            .map(|leaf| tree.label(leaf))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True for a noun phrase headed by a personal or possessive pronoun
    /// that is not itself the child of another noun phrase.
    pub fn is_pronominal(&self) -> bool {
        self.pronoun_preterminal().is_some()
    }

    /// The head pronoun in lower case, or `None` if the mention is not
    /// pronominal.
    pub fn pronoun(&self) -> Option<String> {
        let preterminal = self.pronoun_preterminal()?;
        let word = *self.tree.children(preterminal).first()?;
        Some(self.tree.label(word).to_lowercase())
    }

    fn pronoun_preterminal(&self) -> Option<T::Node> {
        let tree = self.tree;
        if basic_category(tree.label(self.node)) != "NP" {
            return None;
        }
        if let Some(parent) = tree.parent(self.node) {
            if basic_category(tree.label(parent)) == "NP" {
                return None;
            }
        }
        let head = self.head_preterminal()?;
        if tree.label(head).starts_with("PRP") {
            Some(head)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(text: &str) -> ParseTree {
        ParseTree::from_bracketed(text).unwrap()
    }

    #[test]
    fn pronoun_phrase_is_pronominal() {
        let t = tree("(ROOT (S (NP (PRP She)) (VP (VBD left))))");
        let she = Mention::new(&t, t.find("NP", "She").unwrap(), EntityType::None);
        assert!(she.is_pronominal());
        assert_eq!(she.pronoun().as_deref(), Some("she"));
        assert_eq!(she.head_word(), Some("She"));
    }

    #[test]
    fn possessive_determiner_is_not_the_head() {
        let t = tree("(ROOT (S (NP (PRP$ his) (NN dog)) (VP (VBD barked))))");
        let dog = Mention::new(&t, t.find("NP", "his dog").unwrap(), EntityType::None);
        assert!(!dog.is_pronominal());
        assert_eq!(dog.pronoun(), None);
        assert_eq!(dog.head_word(), Some("dog"));
    }

    #[test]
    fn embedded_pronoun_phrase_is_not_maximal() {
        let t = tree("(ROOT (NP (NP (PRP it)) (PP (IN of) (NP (NNS ours)))))");
        let inner = t.nodes().filter(|&n| t.label(n) == "NP").nth(1).unwrap();
        assert_eq!(t.yield_text(inner), "it");
        assert!(!Mention::new(&t, inner, EntityType::None).is_pronominal());
    }

    #[test]
    fn function_tags_are_ignored() {
        let t = tree("(ROOT (S (NP-SBJ (PRP We)) (VP (VBD won))))");
        let we = Mention::new(&t, t.find("NP", "We").unwrap(), EntityType::None);
        assert_eq!(we.pronoun().as_deref(), Some("we"));
    }

    #[test]
    fn tagged_leaves_and_text() {
        let t = tree("(NP (DT the) (NNP Supreme) (NNP Court))");
        let court = Mention::new(&t, t.root(), EntityType::Organization);
        assert_eq!(
            court.tagged_leaves(),
            [("the", "DT"), ("Supreme", "NNP"), ("Court", "NNP")]
        );
        assert_eq!(court.text(), "the Supreme Court");
    }

    #[test]
    fn same_tree_compares_identity() {
        let a = tree("(NP (PRP he))");
        let b = tree("(NP (PRP he))");
        let in_a = Mention::new(&a, a.root(), EntityType::None);
        let also_a = Mention::new(&a, a.root(), EntityType::Person);
        let in_b = Mention::new(&b, b.root(), EntityType::None);
        assert!(in_a.same_tree(&also_a));
        assert!(!in_a.same_tree(&in_b));
    }
}
