use std::collections::HashSet;

use super::words::StyledWord;

/// Recognized section titles, in match-priority order. The first title that
/// accepts a sentence wins; this ordering is a deliberate, fixed policy.
pub const SECTION_TITLES: [&str; 6] = [
    "Patient Name:",
    "DOB:",
    "Procedures",
    "Lab Results",
    "Radiology Results",
    "EKG Results",
];

/// One line of the annotated transcript. Classified sentences carry a number
/// counting from 1 in document order; the rest pass through unnumbered.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub section_number: Option<usize>,
    pub text: String,
}

/// Classify each sentence under a recognized title.
///
/// A sentence is classified when a title appears literally inside it AND every
/// word of that title occurs, exactly and case-sensitively, as the text of
/// some emphasized word anywhere in the document. The corroboration is
/// document-wide: the title words must be bolded somewhere, not necessarily
/// next to this sentence.
pub fn classify(sentences: &[String], words: &[StyledWord]) -> Vec<TranscriptLine> {
    let bold_texts: HashSet<&str> = words
        .iter()
        .filter(|w| w.is_emphasized())
        .map(|w| w.text.as_str())
        .collect();

    let mut numbered = 0;
    sentences
        .iter()
        .map(|sentence| {
            let matched = SECTION_TITLES.iter().any(|title| {
                sentence.contains(title)
                    && title.split_whitespace().all(|part| bold_texts.contains(part))
            });
            let section_number = matched.then(|| {
                numbered += 1;
                numbered
            });
            TranscriptLine {
                section_number,
                text: sentence.clone(),
            }
        })
        .collect()
}
