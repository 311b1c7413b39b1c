//! Text normalization and word matching.

/// Pad input with one space on each side and lowercase ASCII `A`-`Z`.
///
/// Every other character, including non-ASCII letters, passes through
/// unchanged. The padding lets [`contains_keyword`] match the first and last
/// word of a line.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push(' ');
    out.extend(raw.chars().map(|c| c.to_ascii_lowercase()));
    out.push(' ');
    out
}

/// Whether `word` appears in normalized text surrounded by single spaces.
///
/// Command words only count when separated by spaces, so `north.` is not
/// `north`.
pub fn contains_keyword(normalized: &str, word: &str) -> bool {
    let (hay, needle) = (normalized.as_bytes(), word.as_bytes());
    if needle.is_empty() {
        return false;
    }
    hay.windows(needle.len() + 2).any(|window| {
        window[0] == b' ' && window[window.len() - 1] == b' ' && &window[1..=needle.len()] == needle
    })
}

/// Whether `word` appears in `text` as a whole word, ignoring ASCII case.
///
/// Boundaries are anything other than ASCII letters, digits and `_`, so
/// `sword!` names the sword but `battery` does not name the bat.
pub fn contains_word(text: &str, word: &str) -> bool {
    let (hay, needle) = (text.as_bytes(), word.as_bytes());
    if needle.is_empty() {
        return false;
    }
    let is_word_byte = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
    hay.windows(needle.len())
        .enumerate()
        .any(|(start, window)| {
            window.eq_ignore_ascii_case(needle)
                && (start == 0 || !is_word_byte(hay[start - 1]))
                && hay
                    .get(start + needle.len())
                    .is_none_or(|&b| !is_word_byte(b))
        })
}
