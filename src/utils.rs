/// Shared utility functions

/// Truncate a string to at most `max_chars` characters (not bytes)
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Count whitespace-delimited words
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// True when the text has no non-whitespace content
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
