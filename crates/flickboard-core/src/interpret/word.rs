// Flickboard Word Boundaries
// Word-granularity delete length from a bounded lookaround window

use crate::action::DeleteDirection;
use crate::host::SurroundingText;

/// Codepoints read on either side of the caret when looking for a word
/// boundary
pub const SEARCH_WINDOW: usize = 1000;

/// The only character treated as a word separator
const SEPARATOR: char = ' ';

/// Characters outward from the caret in `direction`.
///
/// Text before the caret is reversed so both directions scan away from the
/// caret. A host that returns nothing yields an empty buffer.
pub fn search_buffer<T>(text: &T, direction: DeleteDirection) -> Vec<char>
where
    T: SurroundingText + ?Sized,
{
    match direction {
        DeleteDirection::Backwards => text
            .text_before_cursor(SEARCH_WINDOW)
            .map(|before| before.chars().rev().collect())
            .unwrap_or_default(),
        DeleteDirection::Forwards => text
            .text_after_cursor(SEARCH_WINDOW)
            .map(|after| after.chars().collect())
            .unwrap_or_default(),
    }
}

/// Number of codepoints a word delete removes from `buffer`.
///
/// Spaces right next to the caret are skipped; the next space after them is
/// the boundary. Without one the whole buffer goes.
pub fn word_delete_length(buffer: &[char]) -> usize {
    let initial_spaces = buffer.iter().take_while(|&&ch| ch == SEPARATOR).count();
    buffer[initial_spaces..]
        .iter()
        .position(|&ch| ch == SEPARATOR)
        .map(|offset| initial_spaces + offset)
        .unwrap_or(buffer.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_plain_word() {
        assert_eq!(word_delete_length(&chars("rab oof")), 3);
    }

    #[test]
    fn test_leading_spaces_are_consumed() {
        assert_eq!(word_delete_length(&chars("  rab oof")), 5);
        assert_eq!(word_delete_length(&chars("  baz qux")), 5);
    }

    #[test]
    fn test_no_boundary_takes_everything() {
        assert_eq!(word_delete_length(&chars("word")), 4);
        assert_eq!(word_delete_length(&chars("   ")), 3);
        assert_eq!(word_delete_length(&[]), 0);
    }

    #[test]
    fn test_punctuation_is_word_content() {
        assert_eq!(word_delete_length(&chars("!olleh there")), 6);
    }
}
