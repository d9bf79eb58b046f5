use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::parser::words::{PagesToStyledWords, PagesToWords, StyledWord, Word};

/// One page of an extraction dump: the raw text layer (if any) and the styled
/// words in producing order. Page index is the position in the `pages` array.
#[derive(Debug, Deserialize)]
pub struct PageDump {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub words: Vec<StyledWord>,
}

#[derive(Debug, Deserialize)]
pub struct ChartDump {
    pub pages: Vec<PageDump>,
}

/// A chart document materialized into the three core inputs: plain
/// page-indexed words, styled page-indexed words, and per-page raw text.
#[derive(Debug)]
pub struct ChartDocument {
    pub pages_to_words: PagesToWords,
    pub pages_to_styled: PagesToStyledWords,
    pub page_texts: Vec<Option<String>>,
}

impl From<ChartDump> for ChartDocument {
    fn from(dump: ChartDump) -> Self {
        let mut pages_to_words = PagesToWords::new();
        let mut pages_to_styled = PagesToStyledWords::new();
        let mut page_texts = Vec::with_capacity(dump.pages.len());

        for (index, page) in dump.pages.into_iter().enumerate() {
            pages_to_words.insert(index, page.words.iter().map(Word::from).collect());
            pages_to_styled.insert(index, page.words);
            page_texts.push(page.text);
        }

        ChartDocument {
            pages_to_words,
            pages_to_styled,
            page_texts,
        }
    }
}

pub fn load(path: &Path) -> Result<ChartDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading chart dump {}", path.display()))?;
    let dump: ChartDump = serde_json::from_str(&raw)
        .with_context(|| format!("parsing chart dump {}", path.display()))?;
    Ok(dump.into())
}
