//! Pronoun to antecedent compatibility.
//!
//! The comparisons here are not equivalence relations. Missing evidence is
//! usually forgiven, gender treats missing evidence as compatible with male
//! but not with female, and number is compared strictly. The truth tables
//! are the resolution policy and are written out explicitly.

use std::fmt;

use crate::syntax::Constituents;
use crate::{FeatureExtractor, Gender, Mention, Personhood, Perspective};

/// Equality where a missing value on either side never contradicts.
pub fn relaxed_equals<T: PartialEq>(x: Option<T>, y: Option<T>) -> bool {
    match (x, y) {
        (None, _) | (_, None) => true,
        (Some(x), Some(y)) => x == y,
    }
}

/// Gender agreement with unknown gender defaulting to male.
///
/// | x \ y     | None  | Male  | Female |
/// |-----------|-------|-------|--------|
/// | None      | true  | true  | false  |
/// | Male      | true  | true  | false  |
/// | Female    | false | false | true   |
///
/// `Some(Gender::Unknown)` only matches itself.
pub fn sexist_gender_equals(x: Option<Gender>, y: Option<Gender>) -> bool {
    match (x, y) {
        (None, None) => true,
        (None, Some(Gender::Male)) | (Some(Gender::Male), None) => true,
        _ => x == y,
    }
}

/// Personhood agreement over two overlapping classes.
///
/// `{None, NotPerson, MaybePerson}` agree among themselves, as do
/// `{Person, MaybePerson}`. `MaybePerson` belongs to both, so it agrees with
/// everything. `Person` disagrees with `NotPerson` and with `None`.
pub fn personhood_equals(x: Option<Personhood>, y: Option<Personhood>) -> bool {
    fn maybe_not_person(p: Option<Personhood>) -> bool {
        matches!(
            p,
            None | Some(Personhood::NotPerson) | Some(Personhood::MaybePerson)
        )
    }
    fn maybe_person(p: Option<Personhood>) -> bool {
        matches!(p, Some(Personhood::Person) | Some(Personhood::MaybePerson))
    }

    if maybe_not_person(x) && maybe_not_person(y) {
        return true;
    }
    if maybe_person(x) && maybe_person(y) {
        return true;
    }
    x == y
}

/// Why a candidate was rejected as the antecedent of a pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// A first-person pronoun paired with a non-pronominal candidate.
    FirstPersonNominal,
    /// The pronoun sits inside the candidate phrase.
    Dominated,
    Personhood,
    Gender,
    Number,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstPersonNominal => "first-person pronoun with a non-pronominal candidate",
            Self::Dominated => "pronoun is contained in the candidate",
            Self::Personhood => "personhood disagrees",
            Self::Gender => "gender disagrees",
            Self::Number => "number disagrees",
        })
    }
}

/// Result of checking one pronoun against one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    Compatible,
    Rejected(Rejection),
}

impl MatchOutcome {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Compatible => None,
            Self::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// Decides whether a candidate can be the antecedent of a pronoun.
///
/// The matcher holds no mutable state; one instance can check any number of
/// pairs, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct AgreementMatcher<'l> {
    features: FeatureExtractor<'l>,
}

impl<'l> AgreementMatcher<'l> {
    pub fn new(features: FeatureExtractor<'l>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &FeatureExtractor<'l> {
        &self.features
    }

    /// True if `candidate` can corefer with the pronoun `mention`.
    ///
    /// # Panics
    ///
    /// Panics if `mention` is not pronominal.
    pub fn check_pronominal_match<T>(
        &self,
        mention: &Mention<'_, T>,
        candidate: &Mention<'_, T>,
    ) -> bool
    where
        T: Constituents + ?Sized,
    {
        self.explain(mention, candidate).is_compatible()
    }

    /// Runs the same checks as [`Self::check_pronominal_match`], in the same
    /// order, and reports the first one that fails.
    ///
    /// 1. A first-person pronoun only pairs with other pronouns.
    /// 2. A pronoun cannot corefer with a phrase that contains it.
    /// 3. Personhood, gender and number must agree.
    ///
    /// # Panics
    ///
    /// Panics if `mention` is not pronominal.
    pub fn explain<T>(&self, mention: &Mention<'_, T>, candidate: &Mention<'_, T>) -> MatchOutcome
    where
        T: Constituents + ?Sized,
    {
        let pronoun = match mention.pronoun() {
            Some(pronoun) => pronoun,
            None => panic!(
                "check_pronominal_match called with non-pronominal mention {:?}",
                mention.text()
            ),
        };

        let outcome = self.first_rejection(&pronoun, mention, candidate);
        if let MatchOutcome::Rejected(rejection) = outcome {
            log::debug!(
                "rejected {:?} -> {:?}: {}",
                pronoun,
                candidate.text(),
                rejection
            );
        }
        outcome
    }

    fn first_rejection<T>(
        &self,
        pronoun: &str,
        mention: &Mention<'_, T>,
        candidate: &Mention<'_, T>,
    ) -> MatchOutcome
    where
        T: Constituents + ?Sized,
    {
        use MatchOutcome::{Compatible, Rejected};

        if !candidate.is_pronominal() && Perspective::from_pronoun(pronoun) == Perspective::First {
            return Rejected(Rejection::FirstPersonNominal);
        }

        if mention.same_tree(candidate) && mention.tree().dominates(candidate.node(), mention.node())
        {
            return Rejected(Rejection::Dominated);
        }

        let features = &self.features;
        if !personhood_equals(
            Personhood::from_pronoun(pronoun),
            features.personhood(candidate),
        ) {
            return Rejected(Rejection::Personhood);
        }
        if !sexist_gender_equals(features.gender(mention), features.gender(candidate)) {
            return Rejected(Rejection::Gender);
        }
        match (features.number(mention), features.number(candidate)) {
            (Some(x), Some(y)) if x == y => Compatible,
            _ => Rejected(Rejection::Number),
        }
    }
}
