use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel returned when the document yields no usable abstract text at all.
pub const ABSTRACT_NOT_FOUND: &str = "Could not automatically find abstract.";

/// Maximum abstract length in characters (code points, not bytes).
const MAX_ABSTRACT_CHARS: usize = 3000;

/// Locate the abstract in the extracted document text.
///
/// Best-effort heuristic, case-insensitive:
/// 1. Find the first "abstract" marker; then the first "introduction" at or
///    after it.
/// 2. Both found → the trimmed text strictly between them.
/// 3. Only "abstract" found → up to 3000 characters after the marker, trimmed.
/// 4. No "abstract" marker → the first 3000 characters of the text, trimmed;
///    the fixed sentinel string if even that is empty.
///
/// Multi-column layouts, OCR artifacts, and non-English heading words all
/// degrade this; that is an accepted limitation rather than a bug.
pub fn find_abstract(text: &str) -> String {
    static ABSTRACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)abstract").unwrap());
    static INTRO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)introduction").unwrap());

    let Some(marker) = ABSTRACT_RE.find(text) else {
        let fallback = take_chars(text, MAX_ABSTRACT_CHARS).trim();
        if fallback.is_empty() {
            return ABSTRACT_NOT_FOUND.to_string();
        }
        return fallback.to_string();
    };

    // "introduction" cannot start inside the "abstract" match itself (no
    // shared letters line up), so intro.start() >= marker.end() always holds.
    let body = &text[marker.end()..];
    if let Some(intro) = INTRO_RE.find(body) {
        return trim_heading_residue(&body[..intro.start()]).to_string();
    }

    trim_heading_residue(take_chars(body, MAX_ABSTRACT_CHARS)).to_string()
}

/// Take at most `n` characters from the front of `s`, never splitting a
/// UTF-8 codepoint.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Trim whitespace plus any separator punctuation left over from the
/// "Abstract." / "Abstract:" heading itself.
fn trim_heading_residue(s: &str) -> &str {
    s.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '.' | ':' | ';' | ',' | '-' | '–' | '—')
    })
    .trim_end()
}
