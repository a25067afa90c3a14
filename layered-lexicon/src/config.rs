//! Lexicon configuration via TOML.
//!
//! ```toml
//! builtin = true
//! first_names = "dictionaries/first_names.tsv"
//! noun_types = "dictionaries/noun_types.tsv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Lexicon, LexiconError, LexiconResult};

fn default_builtin() -> bool {
    true
}

/// Which dictionaries make up the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    /// Start from the bundled dictionaries.
    #[serde(default = "default_builtin")]
    pub builtin: bool,
    /// Extra first-name TSV, merged over the starting set.
    #[serde(default)]
    pub first_names: Option<PathBuf>,
    /// Extra noun-type TSV, merged over the starting set.
    #[serde(default)]
    pub noun_types: Option<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            first_names: None,
            noun_types: None,
        }
    }
}

impl LexiconConfig {
    /// Parses config text. Relative paths are kept as written.
    pub fn from_toml_str(text: &str) -> LexiconResult<Self> {
        toml::from_str(text).map_err(|source| LexiconError::Config {
            path: "<inline>".to_string(),
            source,
        })
    }

    /// Loads a config file. Relative dictionary paths resolve against the
    /// directory containing the file.
    pub fn load(path: &Path) -> LexiconResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| LexiconError::Config {
            path: path.display().to_string(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for dictionary in [&mut config.first_names, &mut config.noun_types] {
            if let Some(file) = dictionary {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }
        Ok(config)
    }

    /// Loads every configured dictionary.
    pub fn build(&self) -> LexiconResult<Lexicon> {
        let mut lexicon = if self.builtin {
            Lexicon::builtin().clone()
        } else {
            Lexicon::default()
        };
        if let Some(path) = &self.first_names {
            lexicon.names_mut().extend_from_file(path)?;
        }
        if let Some(path) = &self.noun_types {
            lexicon.nouns_mut().extend_from_file(path)?;
        }
        log::info!(
            "lexicon ready: {} first names, {} noun types",
            lexicon.names().len(),
            lexicon.nouns().len()
        );
        Ok(lexicon)
    }
}
