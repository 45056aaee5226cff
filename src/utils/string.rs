//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Trim a raw label and wrap it in a single pair of double quotes.
///
/// Embedded `"` characters are escaped unless the caller already escaped
/// them. See [`escape`] for the handling of trailing backslashes.
pub fn quote(raw: &str) -> String {
    escape(raw.trim())
}

/// Wrap a value in double quotes as is, escaping embedded `"` characters
/// that are not already escaped.
///
/// DOT reads `\"` as an escaped quote whatever precedes it, so a value
/// ending in backslashes can never be closed. Trailing backslashes are
/// dropped.
pub fn escape(raw: &str) -> String {
    let body = raw.trim_end_matches('\\');
    let mut quoted = String::with_capacity(body.len() + 2);
    quoted.push('"');
    let mut previous = None;
    for c in body.chars() {
        if c == '"' && previous != Some('\\') {
            quoted.push('\\');
        }
        quoted.push(c);
        previous = Some(c);
    }
    quoted.push('"');
    quoted
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether `name` can be written bare as a DOT attribute name
pub fn is_plain_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(is_word_char)
}

/// Strip every whitespace and non-word character.
///
/// Returns the cleaned string and whether anything was removed.
pub fn strip_non_word(raw: &str) -> (String, bool) {
    let cleaned: String = raw.chars().filter(|&c| is_word_char(c)).collect();
    let stripped = cleaned.len() != raw.len();
    (cleaned, stripped)
}
