//! Deterministic extractive summarizer used whenever an AI summary is
//! unavailable or too short to display.

use lazy_static::lazy_static;
use regex::Regex;

/// Returned when there is not enough text to extract anything from.
pub const FALLBACK_PLACEHOLDER: &str = "A brief update was provided, but full text unavailable.";

/// Inputs shorter than this (in characters) are not summarized at all.
pub const MIN_INPUT_CHARS: usize = 20;

/// Summaries shorter than this (trimmed) are not worth displaying.
pub const MIN_SUMMARY_CHARS: usize = 20;

/// Sentence candidates shorter than this are dropped as headings or fragments.
pub const MIN_SENTENCE_CHARS: usize = 25;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref BOUNDARY_RE: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Strip markup and collapse whitespace runs into single spaces.
pub fn clean_text(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Split on terminal punctuation followed by whitespace, keeping the
/// punctuation on each sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY_RE.find_iter(text) {
        // terminal punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Whether a summary is long enough to show instead of the fallback.
pub fn is_displayable(summary: &str) -> bool {
    summary.trim().chars().count() >= MIN_SUMMARY_CHARS
}

/// Build a lead-and-tail digest: sentences one to three plus the last two,
/// substituting the first sentence for any slot the text is too short to fill.
pub fn fallback_summary(text: &str) -> String {
    if text.chars().count() < MIN_INPUT_CHARS {
        return FALLBACK_PLACEHOLDER.to_string();
    }

    let cleaned = clean_text(text);
    let sentences: Vec<&str> = split_sentences(&cleaned)
        .into_iter()
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .collect();

    let Some(&first) = sentences.first() else {
        return FALLBACK_PLACEHOLDER.to_string();
    };

    let n = sentences.len();
    let pick = |index: Option<usize>| {
        index
            .and_then(|i| sentences.get(i).copied())
            .unwrap_or(first)
    };

    [
        first,
        pick(Some(1)),
        pick(Some(2)),
        pick(n.checked_sub(2)),
        pick(n.checked_sub(1)),
    ]
    .join(" ")
}
