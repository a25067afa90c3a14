#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Dictionaries for layered-coref.
//!
//! Gender and personhood of non-pronominal mentions come from two lookups:
//! first names to gender, and head words to a semantic noun type. This crate
//! provides hash-map tables for both, loaded from tab-separated files, and a
//! small bundled default.
//!
//! ## Usage
//!
//! ```
//! use layered_coref::{EntityType, Mention, ParseTree};
//! use layered_lexicon::Lexicon;
//!
//! let tree = ParseTree::from_bracketed(
//!     "(ROOT (S (NP (NNP Mary)) (VP (VBD thanked) (NP (PRP him)))))",
//! )?;
//! let mary = Mention::new(&tree, tree.find("NP", "Mary").unwrap(), EntityType::Person);
//! let him = Mention::new(&tree, tree.find("NP", "him").unwrap(), EntityType::None);
//!
//! let matcher = Lexicon::builtin().matcher();
//! assert!(!matcher.check_pronominal_match(&him, &mary));
//! # Ok::<(), layered_coref::CorefError>(())
//! ```
//!
//! Loading from configuration:
//!
//! ```ignore
//! let lexicon = LexiconConfig::load(Path::new("lexicon.toml"))?.build()?;
//! let matcher = lexicon.matcher();
//! ```

mod config;
mod error;
mod lexicon;
mod table;

pub use config::LexiconConfig;
pub use error::{LexiconError, LexiconResult};
pub use lexicon::Lexicon;
pub use table::{FirstNameTable, NounTypeTable};
