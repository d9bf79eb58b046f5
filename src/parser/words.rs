use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One positioned word from a page's text layer. Order within a page is the
/// producing order of the upstream extractor, not guaranteed strictly
/// left-to-right across line wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub x0: f64,
    pub x1: f64,
    pub text: String,
}

/// A word carrying its font attributes, used where visual emphasis matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledWord {
    pub x0: f64,
    pub x1: f64,
    pub text: String,
    #[serde(rename = "fontname")]
    pub font_name: String,
    #[serde(rename = "size")]
    pub font_size: f64,
}

impl StyledWord {
    /// Whether this word is rendered with visual emphasis. A pure predicate
    /// over the word's own font attributes; the rule lives here and nowhere
    /// else, so swapping the emphasis signal (italic, underline) touches no
    /// consumer.
    pub fn is_emphasized(&self) -> bool {
        self.font_name.contains("Bold")
    }
}

impl From<&StyledWord> for Word {
    fn from(w: &StyledWord) -> Self {
        Word {
            x0: w.x0,
            x1: w.x1,
            text: w.text.clone(),
        }
    }
}

/// Page index → ordered words for that page.
pub type PagesToWords = BTreeMap<usize, Vec<Word>>;
pub type PagesToStyledWords = BTreeMap<usize, Vec<StyledWord>>;

/// Flatten a page-indexed collection into one reading-order sequence
/// (page-index order, then word order within the page).
pub fn flatten_pages(pages: &PagesToStyledWords) -> Vec<StyledWord> {
    pages.values().flatten().cloned().collect()
}

#[cfg(test)]
pub(crate) fn styled(text: &str, font_name: &str) -> StyledWord {
    StyledWord {
        x0: 0.0,
        x1: 10.0,
        text: text.to_string(),
        font_name: font_name.to_string(),
        font_size: 11.0,
    }
}
