#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Feature agreement for pronoun coreference.
//!
//! Given a pronoun and a candidate antecedent, decide whether the two can
//! refer to the same entity. The decision rests on four features extracted
//! from each mention and one syntactic constraint:
//!
//! - **Gender**: from the pronoun, or from first names in proper nouns
//! - **Personhood**: from the pronoun, the entity tag, or the head noun's type
//! - **Number**: from the pronoun, or from the head word's tag
//! - **Perspective**: first, second or third person, for pronouns
//! - **Binding**: a pronoun cannot refer to a phrase that contains it
//!
//! ## Usage
//!
//! ```
//! use std::collections::HashMap;
//! use layered_coref::{
//!     AgreementMatcher, EntityType, FeatureExtractor, Gender, Mention, NoLexicon, ParseTree,
//! };
//!
//! let tree = ParseTree::from_bracketed(
//!     "(ROOT (S (NP (NNP Maria)) (VP (VBD said) (SBAR (S (NP (PRP she)) (VP (VBD won)))))))",
//! )?;
//! let maria = Mention::new(&tree, tree.find("NP", "Maria").unwrap(), EntityType::Person);
//! let she = Mention::new(&tree, tree.find("NP", "she").unwrap(), EntityType::None);
//!
//! let names: HashMap<String, Gender> = [("maria".to_string(), Gender::Female)].into();
//! let matcher = AgreementMatcher::new(FeatureExtractor::new(&names, &NoLexicon));
//! assert!(matcher.check_pronominal_match(&she, &maria));
//! # Ok::<(), layered_coref::CorefError>(())
//! ```
//!
//! ## Architecture
//!
//! Parsing, entity recognition and the search over candidate antecedents
//! happen elsewhere. This crate defines:
//! - [`Constituents`], the view of a parse it needs, and [`ParseTree`], a
//!   bundled implementation reading Penn Treebank brackets
//! - [`FirstNameGenders`] and [`NounTypes`], the dictionary lookups, with
//!   table-backed implementations in `layered-lexicon`
//! - [`FeatureExtractor`] and [`AgreementMatcher`]

mod agreement;
mod display;
mod error;
mod features;
mod lexicon;
mod mention;
mod syntax;
mod tree;
mod types;

pub use agreement::{
    personhood_equals, relaxed_equals, sexist_gender_equals, AgreementMatcher, MatchOutcome,
    Rejection,
};
pub use display::FeatureTable;
pub use error::{CorefError, CorefResult};
pub use features::{FeatureExtractor, MentionFeatures};
pub use lexicon::{FirstNameGenders, NoLexicon, NounTypes, PERSON_NOUN_TYPE};
pub use mention::Mention;
pub use syntax::{basic_category, Constituents};
pub use tree::{NodeId, ParseTree};
pub use types::{EntityType, Gender, Number, Personhood, Perspective};
