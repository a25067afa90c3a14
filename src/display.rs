use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::syntax::Constituents;
use crate::{FeatureExtractor, Mention, MentionFeatures};

/// Mentions and their features laid out in aligned columns.
///
/// ```text
/// Maria          Fem  Per  Sg
/// the committee            Sg
/// she            Fem  Per  Sg  3
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    rows: Vec<(String, MentionFeatures)>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mentions<'t, T>(
        extractor: &FeatureExtractor<'_>,
        mentions: impl IntoIterator<Item = Mention<'t, T>>,
    ) -> Self
    where
        T: Constituents + ?Sized + 't,
    {
        let mut table = Self::new();
        for mention in mentions {
            table.push(mention.text(), extractor.features(&mention));
        }
        table
    }

    pub fn push(&mut self, text: impl Into<String>, features: MentionFeatures) {
        self.rows.push((text.into(), features));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl fmt::Display for FeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;

        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|(text, features)| {
                [
                    text.clone(),
                    cell(features.gender),
                    cell(features.personhood),
                    cell(features.number),
                    cell(features.perspective),
                ]
            })
            .collect();

        let mut widths = [0usize; 5];
        for row in &cells {
            for (width, value) in widths.iter_mut().zip(row) {
                *width = (*width).max(value.width());
            }
        }

        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mut line = String::new();
            for (value, width) in row.iter().zip(widths) {
                line.push_str(value);
                let padding = width - value.width() + SPACE_PADDING;
                line.extend(std::iter::repeat(' ').take(padding));
            }
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}
