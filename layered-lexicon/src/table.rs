//! Hash-map dictionaries read from tab-separated files.
//!
//! ```text
//! # comment
//! maria	Fem
//! jordan	Unk
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Keys are stored in
//! lower case, so lookups ignore case.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use layered_coref::{FirstNameGenders, Gender, NounTypes};

use crate::{LexiconError, LexiconResult};

/// Yields `(line number, key, value)` for each entry of a TSV dictionary.
fn entries<'a>(
    source_name: &'a str,
    text: &'a str,
) -> impl Iterator<Item = LexiconResult<(usize, &'a str, &'a str)>> + 'a {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| {
            let line = line.trim_start();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(move |(line_no, line)| {
            let parse_error = |message: &str| LexiconError::Parse {
                source_name: source_name.to_string(),
                line: line_no,
                message: message.to_string(),
            };
            let (key, value) = line
                .split_once('\t')
                .ok_or_else(|| parse_error("expected <key><TAB><value>"))?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return Err(parse_error("empty key or value"));
            }
            Ok((line_no, key, value))
        })
}

fn read(path: &Path) -> LexiconResult<String> {
    fs::read_to_string(path).map_err(|source| LexiconError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// First names and their genders.
#[derive(Debug, Clone, Default)]
pub struct FirstNameTable {
    genders: HashMap<String, Gender>,
}

impl FirstNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses TSV text. `source_name` only appears in error messages.
    pub fn parse(source_name: &str, text: &str) -> LexiconResult<Self> {
        let mut table = Self::new();
        table.extend_from_tsv(source_name, text)?;
        Ok(table)
    }

    pub fn load(path: &Path) -> LexiconResult<Self> {
        let mut table = Self::new();
        table.extend_from_file(path)?;
        Ok(table)
    }

    pub fn extend_from_file(&mut self, path: &Path) -> LexiconResult<()> {
        let text = read(path)?;
        let before = self.len();
        self.extend_from_tsv(&path.display().to_string(), &text)?;
        log::info!(
            "loaded {} first names from {}",
            self.len() - before,
            path.display()
        );
        Ok(())
    }

    pub fn extend_from_tsv(&mut self, source_name: &str, text: &str) -> LexiconResult<()> {
        for entry in entries(source_name, text) {
            let (line, name, value) = entry?;
            let gender = value
                .parse::<Gender>()
                .map_err(|err| LexiconError::Parse {
                    source_name: source_name.to_string(),
                    line,
                    message: err.to_string(),
                })?;
            self.insert(name, gender);
        }
        Ok(())
    }

    /// Records `gender` for `name`. A name recorded with two different
    /// genders becomes [`Gender::Unknown`].
    pub fn insert(&mut self, name: &str, gender: Gender) {
        let key = name.to_lowercase();
        match self.genders.get(&key) {
            Some(&existing) if existing != gender => {
                log::warn!(
                    "first name {:?} listed as both {:?} and {:?}; treating as unknown",
                    name,
                    existing,
                    gender
                );
                self.genders.insert(key, Gender::Unknown);
            }
            _ => {
                self.genders.insert(key, gender);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.genders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genders.is_empty()
    }
}

impl FirstNameGenders for FirstNameTable {
    fn gender_of(&self, name: &str) -> Option<Gender> {
        self.genders.get(&name.to_lowercase()).copied()
    }
}

/// Head words and their semantic noun types.
#[derive(Debug, Clone, Default)]
pub struct NounTypeTable {
    types: HashMap<String, String>,
}

impl NounTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses TSV text. `source_name` only appears in error messages.
    pub fn parse(source_name: &str, text: &str) -> LexiconResult<Self> {
        let mut table = Self::new();
        table.extend_from_tsv(source_name, text)?;
        Ok(table)
    }

    pub fn load(path: &Path) -> LexiconResult<Self> {
        let mut table = Self::new();
        table.extend_from_file(path)?;
        Ok(table)
    }

    pub fn extend_from_file(&mut self, path: &Path) -> LexiconResult<()> {
        let text = read(path)?;
        let before = self.len();
        self.extend_from_tsv(&path.display().to_string(), &text)?;
        log::info!(
            "loaded {} noun types from {}",
            self.len() - before,
            path.display()
        );
        Ok(())
    }

    pub fn extend_from_tsv(&mut self, source_name: &str, text: &str) -> LexiconResult<()> {
        for entry in entries(source_name, text) {
            let (_, word, noun_type) = entry?;
            self.insert(word, noun_type);
        }
        Ok(())
    }

    /// Records a type for `word` unless it already has one.
    pub fn insert(&mut self, word: &str, noun_type: &str) {
        let key = word.to_lowercase();
        if let Some(existing) = self.types.get(&key) {
            log::debug!(
                "noun {:?} already typed {:?}; ignoring {:?}",
                word,
                existing,
                noun_type
            );
            return;
        }
        self.types.insert(key, noun_type.to_string());
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl NounTypes for NounTypeTable {
    fn noun_type(&self, word: &str) -> Option<&str> {
        self.types.get(&word.to_lowercase()).map(String::as_str)
    }
}
