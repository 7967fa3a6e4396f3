use once_cell::sync::Lazy;
use regex::Regex;

// @module: Subtitle text cleaning

// @const: Ordered cleaning rules, unioned into a single alternation
//
// The rules run as ONE pass over the whole document with leftmost-match-wins
// semantics; earlier rules take precedence at equal start positions. They are
// never applied as sequential independent substitutions.
const CLEANING_RULES: [&str; 4] = [
    // Markup tags such as <i> or </b>, non-greedy to the nearest '>'
    r"<.*?>",
    // SRT cue header: a digits-only index line immediately followed by an
    // arrow line with two H:M:S,mmm time codes. Removed as one match.
    r"(?m:^[0-9]+\r?\n.+:.+:.+,.+-->.+:.+:.+,.+$)",
    // Bare timing line in the H:M:S.mmm shape used by WebVTT cues. Broad on
    // purpose: any line with two colons and a later period matches.
    r"(?m:^.+:.+:.+\..+$)",
    // WebVTT file header token, wherever it appears
    "WEBVTT",
];

// @const: Compiled alternation over all cleaning rules
static CLEANING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&CLEANING_RULES.join("|")).unwrap()
});

// @struct: Subtitle text cleaner
pub struct SubtitleCleaner;

impl SubtitleCleaner {
    /// Clean raw subtitle content into plain single-paragraph text.
    ///
    /// Strips markup tags, SRT cue headers, bare WebVTT timing lines and the
    /// WEBVTT header token, then collapses all remaining whitespace runs
    /// (including newlines) into single spaces. Empty input yields empty
    /// output; matchless input only goes through whitespace normalization.
    pub fn clean(raw_text: &str) -> String {
        let stripped = CLEANING_PATTERN.replace_all(raw_text, "");
        Self::normalize_whitespace(&stripped)
    }

    /// Collapse every whitespace run into a single space and trim both ends
    pub fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
