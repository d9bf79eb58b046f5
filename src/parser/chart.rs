use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use super::words::{PagesToWords, Word};

const DOB_FORMAT: &str = "%m/%d/%Y";

// A name runs from two past its trigger up to the first of these (or the end
// of the page). Compared case-insensitively; the stop word itself is excluded.
const NAME_STOP_WORDS: &[&str] = &["dob:", "procedures", "lab", "results", "ekg", "radiology"];

/// Structured fields recovered from one chart document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartRecord {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub has_valid_ekg: bool,
}

impl ChartRecord {
    /// Whole completed years between the date of birth and `today`, counting
    /// birthdays rather than calendar-year difference. Errors when no date of
    /// birth was extracted.
    pub fn age_on(&self, today: NaiveDate) -> Result<i32> {
        let Some(dob) = self.date_of_birth else {
            bail!("cannot compute age: no date of birth was extracted");
        };
        let birthday_pending = (today.month(), today.day()) < (dob.month(), dob.day());
        Ok(today.year() - dob.year() - i32::from(birthday_pending))
    }
}

/// Bounds-checked view of one page's words at a scan position. Matchers index
/// relative to the position via `get`/`tail`; running off the end is a
/// non-match, never a panic.
struct TokenWindow<'a> {
    words: &'a [Word],
    pos: usize,
}

impl<'a> TokenWindow<'a> {
    fn get(&self, offset: usize) -> Option<&'a Word> {
        self.words.get(self.pos + offset)
    }

    fn tail(&self, offset: usize) -> &'a [Word] {
        let start = (self.pos + offset).min(self.words.len());
        &self.words[start..]
    }
}

/// Scan every page for the chart fields.
///
/// Each page is an independent scan unit; a pattern split across a page break
/// does not match. All three matchers run at every index, and a later match
/// for the same field overwrites an earlier one (documents are assumed to
/// carry each field once, but that is not enforced). The EKG flag latches
/// true and is never reset.
pub fn populate_chart(pages: &PagesToWords) -> ChartRecord {
    let mut chart = ChartRecord::default();

    for (page, words) in pages {
        for pos in 0..words.len() {
            let window = TokenWindow { words, pos };

            if let Some((name, span)) = match_name(&window) {
                debug!("name matched on page {} at {} ({} words)", page, pos, span);
                chart.name = Some(name);
            }
            if let Some((dob, _)) = match_dob(&window) {
                debug!("DOB matched on page {} at {}", page, pos);
                chart.date_of_birth = Some(dob);
            }
            if match_ekg(&window).is_some() {
                chart.has_valid_ekg = true;
            }
        }
    }

    chart
}

/// "Patient Name" trigger: a single squashed "patientname" word, or "patient"
/// followed by a word starting with "name". Either way a following word must
/// exist, and collection starts two past the trigger.
fn match_name(w: &TokenWindow) -> Option<(String, usize)> {
    let current = &w.get(0)?.text;
    let next = &w.get(1)?.text;

    let squashed = current.to_lowercase().replace(' ', "");
    let triggered = squashed == "patientname"
        || (current.to_lowercase() == "patient" && next.to_lowercase().starts_with("name"));
    if !triggered {
        return None;
    }

    let mut parts: Vec<&str> = Vec::new();
    for word in w.tail(2) {
        if NAME_STOP_WORDS.contains(&word.text.to_lowercase().as_str()) {
            break;
        }
        parts.push(&word.text);
    }
    let span = 2 + parts.len();
    Some((parts.join(" "), span))
}

/// "DOB:" trigger: the next word parses as month/day/4-digit-year. A parse
/// failure is logged and treated as a non-match so an earlier value survives.
fn match_dob(w: &TokenWindow) -> Option<(NaiveDate, usize)> {
    if w.get(0)?.text.trim().to_lowercase() != "dob:" {
        return None;
    }
    let raw = &w.get(1)?.text;
    match NaiveDate::parse_from_str(raw, DOB_FORMAT) {
        Ok(dob) => Some((dob, 2)),
        Err(e) => {
            warn!("unparsable DOB {:?}: {}", raw, e);
            None
        }
    }
}

/// Three consecutive words "EKG Results Valid", case-insensitive.
fn match_ekg(w: &TokenWindow) -> Option<usize> {
    for (offset, expected) in ["ekg", "results", "valid"].iter().enumerate() {
        if !w.get(offset)?.text.eq_ignore_ascii_case(expected) {
            return None;
        }
    }
    Some(3)
}
