// Character classes and counting helpers shared by the truncator

/// The single-character horizontal ellipsis appended to cut text
pub const ELLIPSIS: char = '\u{2026}';

/// Default word separator
pub const DEFAULT_SEPARATOR: char = ' ';

/// Marks that look wrong directly before an ellipsis ("lorem ipsum,…")
pub const TRAILING_PUNCTUATION: [char; 4] = [',', ';', ':', '-'];

/// Marks that already end a sentence, so no ellipsis is needed
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Check whether a character should be dropped before an ellipsis
pub fn is_trailing_punctuation(c: char) -> bool {
    TRAILING_PUNCTUATION.contains(&c)
}

/// Check whether a character ends a sentence
pub fn is_sentence_end(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Count characters (Unicode scalar values), not bytes
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the last `separator` whose character index is at most `max_index`
///
/// Returns `None` when the separator does not occur in `[0, max_index]`.
pub fn last_separator_at_or_before(s: &str, separator: char, max_index: usize) -> Option<usize> {
    s.char_indices()
        .take(max_index.saturating_add(1))
        .filter(|&(_, c)| c == separator)
        .map(|(offset, _)| offset)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_classes() {
        for c in [',', ';', ':', '-'] {
            assert!(is_trailing_punctuation(c));
            assert!(!is_sentence_end(c));
        }
        for c in ['.', '?', '!'] {
            assert!(is_sentence_end(c));
            assert!(!is_trailing_punctuation(c));
        }
        assert!(!is_trailing_punctuation('a'));
        assert!(!is_sentence_end(ELLIPSIS));
    }

    #[test]
    fn test_char_count_is_not_byte_length() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("абвгд"), 5);
        assert_eq!("абвгд".len(), 10);
        assert_eq!(char_count("…"), 1);
    }

    #[test]
    fn test_last_separator_search() {
        let s = "Hello world, this is";
        assert_eq!(last_separator_at_or_before(s, ' ', 15), Some(12));
        // Index is inclusive
        assert_eq!(last_separator_at_or_before(s, ' ', 12), Some(12));
        assert_eq!(last_separator_at_or_before(s, ' ', 11), Some(5));
        assert_eq!(last_separator_at_or_before(s, ' ', 4), None);
        assert_eq!(last_separator_at_or_before(" x", ' ', 0), Some(0));
        assert_eq!(last_separator_at_or_before(s, '_', 100), None);
    }

    #[test]
    fn test_last_separator_returns_byte_offset() {
        // Each Cyrillic letter is two bytes
        assert_eq!(last_separator_at_or_before("аб вг", ' ', 3), Some(4));
        assert_eq!(last_separator_at_or_before("аб вг", ' ', 1), None);
    }
}
