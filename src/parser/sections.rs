use super::words::StyledWord;

/// A contiguous run of words opening at an emphasis boundary. Never empty.
#[derive(Debug, Clone)]
pub struct Section {
    pub words: Vec<StyledWord>,
}

impl Section {
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Partition a reading-order word sequence into sections, starting a new
/// section at every emphasized word. Words before the first emphasized word
/// form a leading section. Single pass, no lookahead; concatenating the
/// result reproduces the input exactly.
pub fn segment(words: &[StyledWord]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Vec<StyledWord> = Vec::new();

    for word in words {
        if word.is_emphasized() && !current.is_empty() {
            sections.push(Section {
                words: std::mem::take(&mut current),
            });
        }
        current.push(word.clone());
    }

    if !current.is_empty() {
        sections.push(Section { words: current });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::words::styled;

    const BOLD: &str = "Helvetica-Bold";
    const PLAIN: &str = "Helvetica";

    fn words(spec: &[(&str, &str)]) -> Vec<StyledWord> {
        spec.iter().map(|(t, f)| styled(t, f)).collect()
    }

    #[test]
    fn splits_at_each_bold_word() {
        let input = words(&[
            ("Procedures", BOLD),
            ("appendectomy", PLAIN),
            ("Lab", BOLD),
            ("Results", BOLD),
            ("normal", PLAIN),
        ]);
        let sections = segment(&input);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].text(), "Procedures appendectomy");
        assert_eq!(sections[1].text(), "Lab");
        assert_eq!(sections[2].text(), "Results normal");
    }

    #[test]
    fn leading_plain_words_form_first_section() {
        let input = words(&[("intake", PLAIN), ("note", PLAIN), ("Procedures", BOLD)]);
        let sections = segment(&input);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text(), "intake note");
        assert!(sections[1].words[0].is_emphasized());
    }

    #[test]
    fn concatenation_reproduces_input() {
        let input = words(&[
            ("a", PLAIN),
            ("B", BOLD),
            ("c", PLAIN),
            ("D", BOLD),
            ("E", BOLD),
            ("f", PLAIN),
        ]);
        let rejoined: Vec<StyledWord> = segment(&input)
            .into_iter()
            .flat_map(|s| s.words)
            .collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    fn every_section_after_first_starts_bold_and_none_empty() {
        let input = words(&[("x", PLAIN), ("A", BOLD), ("y", PLAIN), ("B", BOLD)]);
        let sections = segment(&input);
        assert!(sections.iter().all(|s| !s.words.is_empty()));
        assert!(sections[1..].iter().all(|s| s.words[0].is_emphasized()));
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(segment(&[]).is_empty());
    }
}
