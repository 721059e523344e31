/// Characters folded away by camel-case normalization.
pub const SEPARATORS: [char; 3] = [' ', '-', '_'];

/// Fold separator runs into camel case.
///
/// Each run of separators followed by a character becomes that character
/// upper-cased. A trailing run with nothing after it is dropped. The first
/// character keeps its case unless a separator run precedes it.
pub fn fold_separators(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());
    let mut pending_upper = false;

    for c in raw.chars() {
        if SEPARATORS.contains(&c) {
            pending_upper = true;
            continue;
        }
        if pending_upper {
            folded.extend(c.to_uppercase());
            pending_upper = false;
        } else {
            folded.push(c);
        }
    }

    folded
}

/// Validates a folded identifier.
///
/// Checks:
/// - Non-empty
/// - Starts with a letter, '_' or '$' (no leading digit)
/// - Remaining characters are alphanumeric, '_' or '$'
///
/// Path separators and dots are rejected, so an identifier is always a
/// single safe path component as well as a valid JavaScript binding.
pub fn validate_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
