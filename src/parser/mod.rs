pub mod chart;
pub mod classify;
pub mod sections;
pub mod sentences;
pub mod words;

use crate::input::ChartDocument;
use chart::ChartRecord;
use classify::TranscriptLine;
use sections::Section;

/// Everything recovered from one chart document.
pub struct ParsedChart {
    pub chart: ChartRecord,
    pub sections: Vec<Section>,
    pub transcript: Vec<TranscriptLine>,
}

/// Three-pass pipeline: fields → bold-boundary sections → classified sentences.
pub fn process_document(doc: &ChartDocument) -> ParsedChart {
    let chart = chart::populate_chart(&doc.pages_to_words);

    let flat_words = words::flatten_pages(&doc.pages_to_styled);
    let sections = sections::segment(&flat_words);

    let sentences: Vec<String> = doc
        .page_texts
        .iter()
        .flat_map(|text| sentences::split_sentences(text.as_deref().unwrap_or_default()))
        .collect();
    let transcript = classify::classify(&sentences, &flat_words);

    ParsedChart {
        chart,
        sections,
        transcript,
    }
}
