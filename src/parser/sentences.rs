use std::sync::LazyLock;

use regex::Regex;

// Candidate boundaries: '.' or '?' followed by one whitespace char, or a run of
// newlines. The abbreviation exclusions are lookbehinds in the source pattern;
// the regex crate has none, so they are applied as character checks below.
static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.?]\s|\n+").unwrap());

/// Split one page's raw text into trimmed, non-empty sentences.
///
/// Breaks at newlines unconditionally, and at '.'/'?' + whitespace unless the
/// punctuation closes an abbreviation ("U.S.", "Dr."). Empty input yields no
/// sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in BOUNDARY_RE.find_iter(text) {
        let matched = m.as_str();
        let end = if matched.starts_with(['.', '?']) {
            let head = &text[..m.start() + 1];
            // Newline breaks win even inside an abbreviation.
            if is_abbreviation(head) && !matched.ends_with('\n') {
                continue;
            }
            m.start() + 1
        } else {
            m.start()
        };

        push_trimmed(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Whether the text ending at a '.'/'?' looks like an abbreviation rather than
/// a sentence end: a word char, '.', word char, any char ("U.S."), or an
/// uppercase letter, lowercase letter, '.' ("Dr.").
fn is_abbreviation(head: &str) -> bool {
    let tail: Vec<char> = head.chars().rev().take(4).collect();
    // Last char of `head` is the punctuation itself; it is unconstrained in the
    // four-char initialism window ("U.S.").
    if let [_, c3, c2, c1] = tail[..] {
        if is_word_char(c1) && c2 == '.' && is_word_char(c3) {
            return true;
        }
    }
    if let [last, c2, c1, ..] = tail[..] {
        if last == '.' && c2.is_lowercase() && c1.is_uppercase() {
            return true;
        }
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn push_trimmed(out: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_sentence_passes_through() {
        assert_eq!(split_sentences("The patient is stable."), ["The patient is stable."]);
    }

    #[test]
    fn splits_on_period_and_question_mark() {
        assert_eq!(
            split_sentences("Is the EKG valid? Yes. Follow up in a week."),
            ["Is the EKG valid?", "Yes.", "Follow up in a week."]
        );
    }

    #[test]
    fn title_abbreviation_does_not_split() {
        assert_eq!(
            split_sentences("Dr. Smith saw the patient. He is well."),
            ["Dr. Smith saw the patient.", "He is well."]
        );
    }

    #[test]
    fn dotted_initialism_does_not_split() {
        assert_eq!(
            split_sentences("Born in the U.S. in 1980. Lives abroad."),
            ["Born in the U.S. in 1980.", "Lives abroad."]
        );
    }

    #[test]
    fn newlines_always_split() {
        assert_eq!(
            split_sentences("Patient Name: John Doe\nDOB: 01/02/1980\n\nProcedures"),
            ["Patient Name: John Doe", "DOB: 01/02/1980", "Procedures"]
        );
    }

    #[test]
    fn empty_and_blank_yield_nothing() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n \n ").is_empty());
    }

    #[test]
    fn trailing_text_without_terminator_is_kept() {
        assert_eq!(
            split_sentences("First visit. No further notes"),
            ["First visit.", "No further notes"]
        );
    }
}
