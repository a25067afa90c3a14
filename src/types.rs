//! Categorical agreement features.
//!
//! Each feature is a closed enum. A feature that cannot be determined for a
//! mention is represented by `None` at the call site, never by an extra
//! variant, so that the relaxed comparisons in [`crate::agreement`] can tell
//! "no evidence" apart from a definite value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CorefError;

/// Grammatical gender of a mention.
///
/// `Unknown` is a real dictionary answer (for example a first name used for
/// both genders). It is not a neuter gender: "it" yields no gender at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// Gender carried by a pronoun's surface form.
    ///
    /// "it" and "its" deliberately give `None`, the same as a word that is
    /// not a gendered pronoun.
    pub fn from_pronoun(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "he" | "him" | "his" => Some(Self::Male),
            "she" | "her" | "hers" => Some(Self::Female),
            "it" | "its" => None,
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Mal",
            Self::Female => "Fem",
            Self::Unknown => "",
        })
    }
}

impl FromStr for Gender {
    type Err = CorefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mal" | "male" | "m" => Ok(Self::Male),
            "fem" | "female" | "f" => Ok(Self::Female),
            "unk" | "unknown" => Ok(Self::Unknown),
            _ => Err(CorefError::UnknownGender(s.to_string())),
        }
    }
}

/// Whether a mention refers to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Personhood {
    Person,
    NotPerson,
    /// Plural and demonstrative pronouns that refer to people as often as
    /// to things ("they", "those").
    MaybePerson,
}

impl Personhood {
    /// Personhood implied by a pronoun's surface form.
    pub fn from_pronoun(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "he" | "him" | "his" | "she" | "her" | "hers" | "we" | "us" | "our" | "ours"
            | "i" | "my" | "mine" | "you" | "yours" => Some(Self::Person),
            "it" | "its" => Some(Self::NotPerson),
            "they" | "their" | "theirs" | "them" | "these" | "those" => Some(Self::MaybePerson),
            _ => None,
        }
    }
}

impl fmt::Display for Personhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Person => "Per",
            Self::NotPerson => "NPer",
            Self::MaybePerson => "MaybePer",
        })
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    /// Number of a pronoun. Anything outside the plural list counts as
    /// singular, so this never fails.
    pub fn from_pronoun(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "they" | "them" | "these" | "those" | "we" | "us" | "their" | "ours" | "our"
            | "theirs" => Self::Plural,
            _ => Self::Singular,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Singular => "Sg",
            Self::Plural => "Pl",
        })
    }
}

/// Grammatical person of a pronoun (first, second or third).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    First,
    Second,
    Third,
}

impl Perspective {
    /// Perspective of a pronoun's surface form. Unrecognized words,
    /// including non-pronouns, are third person.
    pub fn from_pronoun(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "i" | "me" | "my" | "mine" | "we" | "our" | "ours" => Self::First,
            "you" | "yours" | "y'all" | "y'alls" | "yinz" => Self::Second,
            _ => Self::Third,
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
        })
    }
}

/// Named-entity tag attached to a mention by the upstream recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Person,
    Organization,
    Location,
    Misc,
    Date,
    Time,
    Money,
    Percent,
    /// The "no entity" tag, written `O`.
    None,
}

impl EntityType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
            Self::Location => "LOCATION",
            Self::Misc => "MISC",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Money => "MONEY",
            Self::Percent => "PERCENT",
            Self::None => "O",
        }
    }
}

impl Default for EntityType {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for EntityType {
    type Err = CorefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "PERSON" => Self::Person,
            "ORGANIZATION" => Self::Organization,
            "LOCATION" => Self::Location,
            "MISC" => Self::Misc,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "MONEY" => Self::Money,
            "PERCENT" => Self::Percent,
            "O" => Self::None,
            other => return Err(CorefError::UnknownEntityType(other.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pronoun_gender() {
        assert_eq!(Gender::from_pronoun("he"), Some(Gender::Male));
        assert_eq!(Gender::from_pronoun("Her"), Some(Gender::Female));
        assert_eq!(Gender::from_pronoun("it"), None);
        assert_eq!(Gender::from_pronoun("they"), None);
    }

    #[test]
    fn pronoun_number() {
        assert_eq!(Number::from_pronoun("they"), Number::Plural);
        assert_eq!(Number::from_pronoun("he"), Number::Singular);
        assert_eq!(Number::from_pronoun("us"), Number::Plural);
        // "you" is not in the plural list
        assert_eq!(Number::from_pronoun("you"), Number::Singular);
    }

    #[test]
    fn pronoun_perspective() {
        assert_eq!(Perspective::from_pronoun("you"), Perspective::Second);
        assert_eq!(Perspective::from_pronoun("I"), Perspective::First);
        assert_eq!(Perspective::from_pronoun("yinz"), Perspective::Second);
        assert_eq!(Perspective::from_pronoun("xyz"), Perspective::Third);
        // "us" is missing from the first-person list
        assert_eq!(Perspective::from_pronoun("us"), Perspective::Third);
    }

    #[test]
    fn pronoun_personhood() {
        assert_eq!(Personhood::from_pronoun("she"), Some(Personhood::Person));
        assert_eq!(Personhood::from_pronoun("its"), Some(Personhood::NotPerson));
        assert_eq!(Personhood::from_pronoun("those"), Some(Personhood::MaybePerson));
        assert_eq!(Personhood::from_pronoun("me"), None);
    }

    #[test]
    fn short_tags() {
        let tags = format!(
            "{}|{}|{}|{}|{}|{}",
            Gender::Male,
            Gender::Unknown,
            Personhood::MaybePerson,
            Number::Plural,
            Perspective::Second,
            EntityType::None
        );
        insta::assert_snapshot!(tags, @"Mal||MaybePer|Pl|2|O");
    }

    #[test]
    fn parse_tags() {
        assert_eq!("Fem".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert!("neuter".parse::<Gender>().is_err());
        assert_eq!("PERSON".parse::<EntityType>().unwrap(), EntityType::Person);
        assert_eq!("O".parse::<EntityType>().unwrap(), EntityType::None);
        assert!("GPE".parse::<EntityType>().is_err());
    }
}
