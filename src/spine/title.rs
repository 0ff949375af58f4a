//! Title cleanup for merged spine text.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9 \-:&'.,]").unwrap());
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s*").unwrap());

/// Cleans raw OCR text into a presentable book title.
///
/// Whitespace runs collapse to one space, characters outside letters, digits,
/// space and `-:&'.,` are removed, a leading shelf or volume number is
/// stripped, and one-character tokens are dropped. The result is idempotent:
/// `clean_book_title(&clean_book_title(s)) == clean_book_title(s)`.
#[must_use]
pub fn clean_book_title(raw: &str) -> String {
    // Dropping a short token can expose a leading number and the reverse,
    // so repeat until stable.
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    let filtered = DISALLOWED_CHARS.replace_all(&collapsed, "");
    let unnumbered = LEADING_NUMBER.replace(&filtered, "");

    unnumbered
        .trim()
        .split(' ')
        .filter(|token| token.chars().count() > 1)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_number_punctuation_and_whitespace() {
        assert_eq!(
            clean_book_title("3   The Lord-of the Rings!!"),
            "The Lord-of the Rings"
        );
    }

    #[test]
    fn test_drops_single_character_tokens() {
        assert_eq!(clean_book_title("A Tale of Two Cities"), "Tale of Two Cities");
        assert_eq!(clean_book_title("x y z"), "");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        assert_eq!(
            clean_book_title("Dune: Messiah, Vol. II && Children's"),
            "Dune: Messiah, Vol. II && Children's"
        );
    }

    #[test]
    fn test_range_characters_are_not_allowed() {
        // `!`, `#`, `(` and `/` sit between space and colon in ASCII.
        assert_eq!(clean_book_title("Foo! #Bar (Baz)/Qux"), "Foo Bar BazQux");
    }

    #[test]
    fn test_exposed_number_is_stripped() {
        // The first pass drops "a", which leaves "12" in front.
        assert_eq!(clean_book_title("a 12 Angry Men"), "Angry Men");
    }

    #[test]
    fn test_only_number() {
        assert_eq!(clean_book_title("1984"), "");
    }

    #[test]
    fn test_tabs_and_newlines_collapse() {
        assert_eq!(clean_book_title("Moby\t\nDick"), "Moby Dick");
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_book_title(""), "");
        assert_eq!(clean_book_title("   "), "");
    }
}
