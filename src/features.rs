//! Feature extraction for mentions.
//!
//! Pronouns are classified from their surface form alone. Other noun phrases
//! draw on the named-entity tag, the part-of-speech tags of their words, and
//! the two dictionary lookups held by the [`FeatureExtractor`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::{FirstNameGenders, NounTypes};
use crate::syntax::Constituents;
use crate::{EntityType, Gender, Mention, Number, Personhood, Perspective};

static PLURAL_NOUN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^NNP?S$").expect("Invalid plural noun tag regex"));
static SINGULAR_NOUN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^NNP?$").expect("Invalid singular noun tag regex"));

/// Tag of words whose first-name gender is looked up.
const PROPER_NOUN_TAG: &str = "NNP";

/// Computes agreement features using a pair of dictionary handles.
///
/// The handles are borrowed for the extractor's lifetime and only read.
#[derive(Clone, Copy)]
pub struct FeatureExtractor<'l> {
    names: &'l dyn FirstNameGenders,
    nouns: &'l dyn NounTypes,
}

impl<'l> FeatureExtractor<'l> {
    pub fn new(names: &'l dyn FirstNameGenders, nouns: &'l dyn NounTypes) -> Self {
        Self { names, nouns }
    }

    /// Uses one value for both lookups.
    pub fn with_lexicon<L>(lexicon: &'l L) -> Self
    where
        L: FirstNameGenders + NounTypes,
    {
        Self::new(lexicon, lexicon)
    }

    /// Gender of a mention, or `None` when there is no evidence.
    ///
    /// Named entities other than people never carry a gender. For people and
    /// untagged phrases, the first proper noun that the name dictionary
    /// marks as male or female decides.
    pub fn gender<T>(&self, mention: &Mention<'_, T>) -> Option<Gender>
    where
        T: Constituents + ?Sized,
    {
        if let Some(pronoun) = mention.pronoun() {
            return Gender::from_pronoun(&pronoun);
        }

        if !matches!(
            mention.entity_type(),
            EntityType::Person | EntityType::None
        ) {
            return None;
        }

        // April, May and June are both months and names; nothing here tells them apart.
        mention
            .tagged_leaves()
            .into_iter()
            .filter(|&(_, tag)| tag == PROPER_NOUN_TAG)
            .find_map(|(word, _)| match self.names.gender_of(word) {
                Some(gender @ (Gender::Male | Gender::Female)) => Some(gender),
                _ => None,
            })
    }

    /// Whether a mention refers to a person.
    ///
    /// Untagged common nouns are only recognized as people through the noun
    /// type dictionary; otherwise they stay undetermined.
    pub fn personhood<T>(&self, mention: &Mention<'_, T>) -> Option<Personhood>
    where
        T: Constituents + ?Sized,
    {
        if let Some(pronoun) = mention.pronoun() {
            return Personhood::from_pronoun(&pronoun);
        }

        let head_is_person = mention
            .head_word()
            .map_or(false, |word| self.nouns.is_person(word));
        match mention.entity_type() {
            EntityType::Person => Some(Personhood::Person),
            _ if head_is_person => Some(Personhood::Person),
            EntityType::None => None,
            _ => Some(Personhood::NotPerson),
        }
    }

    /// Grammatical number.
    ///
    /// Non-pronominal mentions are judged by the tag of their head word;
    /// heads that are not count nouns stay undetermined.
    pub fn number<T>(&self, mention: &Mention<'_, T>) -> Option<Number>
    where
        T: Constituents + ?Sized,
    {
        if let Some(pronoun) = mention.pronoun() {
            return Some(Number::from_pronoun(&pronoun));
        }

        let head = mention.head_preterminal()?;
        let tag = mention.tree().label(head);
        if PLURAL_NOUN_TAG.is_match(tag) {
            Some(Number::Plural)
        } else if SINGULAR_NOUN_TAG.is_match(tag) {
            Some(Number::Singular)
        } else {
            None
        }
    }

    /// Perspective of a pronominal mention; `None` for other mentions.
    pub fn perspective<T>(&self, mention: &Mention<'_, T>) -> Option<Perspective>
    where
        T: Constituents + ?Sized,
    {
        mention
            .pronoun()
            .map(|pronoun| Perspective::from_pronoun(&pronoun))
    }

    /// All features of a mention at once.
    pub fn features<T>(&self, mention: &Mention<'_, T>) -> MentionFeatures
    where
        T: Constituents + ?Sized,
    {
        MentionFeatures {
            pronoun: mention.pronoun(),
            gender: self.gender(mention),
            personhood: self.personhood(mention),
            number: self.number(mention),
            perspective: self.perspective(mention),
        }
    }
}

impl fmt::Debug for FeatureExtractor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureExtractor").finish_non_exhaustive()
    }
}

/// Snapshot of every feature of one mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionFeatures {
    /// Lower-cased head pronoun, for pronominal mentions.
    pub pronoun: Option<String>,
    pub gender: Option<Gender>,
    pub personhood: Option<Personhood>,
    pub number: Option<Number>,
    pub perspective: Option<Perspective>,
}

/// Short tags separated by spaces, undetermined features left out.
impl fmt::Display for MentionFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<String> = [
            self.gender.map(|g| g.to_string()),
            self.personhood.map(|p| p.to_string()),
            self.number.map(|n| n.to_string()),
            self.perspective.map(|p| p.to_string()),
        ]
        .into_iter()
        .flatten()
        .filter(|tag| !tag.is_empty())
        .collect();
        f.write_str(&tags.join(" "))
    }
}
