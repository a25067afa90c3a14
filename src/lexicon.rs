//! Dictionary lookups consulted by the feature extractor.
//!
//! Both lookups are read-only after construction and must be shareable
//! across threads. Table-backed implementations that load from disk live in
//! the `layered-lexicon` crate; the impls here cover tests and callers that
//! already hold their data in a map.

use std::collections::HashMap;

use crate::Gender;

/// Noun type assigned to head words that denote people.
pub const PERSON_NOUN_TYPE: &str = "person";

/// First name to gender lookup.
pub trait FirstNameGenders: Send + Sync {
    /// Gender recorded for `name`, or `None` if the name is not listed.
    fn gender_of(&self, name: &str) -> Option<Gender>;
}

/// Head word to semantic noun type lookup ("person", "group", ...).
pub trait NounTypes: Send + Sync {
    fn noun_type(&self, word: &str) -> Option<&str>;

    fn is_person(&self, word: &str) -> bool {
        self.noun_type(word) == Some(PERSON_NOUN_TYPE)
    }
}

/// Keys are expected in lower case.
impl FirstNameGenders for HashMap<String, Gender> {
    fn gender_of(&self, name: &str) -> Option<Gender> {
        self.get(&name.to_lowercase()).copied()
    }
}

/// Keys are expected in lower case.
impl NounTypes for HashMap<String, String> {
    fn noun_type(&self, word: &str) -> Option<&str> {
        self.get(&word.to_lowercase()).map(String::as_str)
    }
}

/// A lexicon that knows nothing. Every feature that depends on it comes
/// back undetermined.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLexicon;

impl FirstNameGenders for NoLexicon {
    fn gender_of(&self, _name: &str) -> Option<Gender> {
        None
    }
}

impl NounTypes for NoLexicon {
    fn noun_type(&self, _word: &str) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookups_ignore_case() {
        let names: HashMap<String, Gender> = [("maria".to_string(), Gender::Female)].into();
        assert_eq!(names.gender_of("Maria"), Some(Gender::Female));
        assert_eq!(names.gender_of("Mario"), None);

        let nouns: HashMap<String, String> =
            [("president".to_string(), "person".to_string())].into();
        assert!(nouns.is_person("President"));
        assert!(!nouns.is_person("committee"));
    }
}
