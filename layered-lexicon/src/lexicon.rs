use once_cell::sync::Lazy;

use layered_coref::{AgreementMatcher, FeatureExtractor, FirstNameGenders, Gender, NounTypes};

use crate::{FirstNameTable, NounTypeTable};

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    let names = FirstNameTable::parse(
        "builtin first_names.tsv",
        include_str!("../data/first_names.tsv"),
    )
    .expect("Invalid builtin first name table");
    let nouns = NounTypeTable::parse(
        "builtin noun_types.tsv",
        include_str!("../data/noun_types.tsv"),
    )
    .expect("Invalid builtin noun type table");
    log::info!(
        "builtin lexicon: {} first names, {} noun types",
        names.len(),
        nouns.len()
    );
    Lexicon::new(names, nouns)
});

/// Both dictionaries the feature extractor consults.
///
/// Build one at startup, then share it by reference; nothing mutates it
/// while features are being computed.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    names: FirstNameTable,
    nouns: NounTypeTable,
}

impl Lexicon {
    pub fn new(names: FirstNameTable, nouns: NounTypeTable) -> Self {
        Self { names, nouns }
    }

    /// The dictionaries bundled with this crate, parsed on first use.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn names(&self) -> &FirstNameTable {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut FirstNameTable {
        &mut self.names
    }

    pub fn nouns(&self) -> &NounTypeTable {
        &self.nouns
    }

    pub fn nouns_mut(&mut self) -> &mut NounTypeTable {
        &mut self.nouns
    }

    pub fn feature_extractor(&self) -> FeatureExtractor<'_> {
        FeatureExtractor::with_lexicon(self)
    }

    pub fn matcher(&self) -> AgreementMatcher<'_> {
        AgreementMatcher::new(self.feature_extractor())
    }
}

impl FirstNameGenders for Lexicon {
    fn gender_of(&self, name: &str) -> Option<Gender> {
        self.names.gender_of(name)
    }
}

impl NounTypes for Lexicon {
    fn noun_type(&self, word: &str) -> Option<&str> {
        self.nouns.noun_type(word)
    }
}
