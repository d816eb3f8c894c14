//! Charset tag derivation.

use crate::types::CharsetTag;

/// Derive the charset tag of a hash string.
///
/// Rules are checked in order and the first one that applies wins:
/// `$` anywhere, then `/` anywhere, then a `0x0` prefix, then any
/// upper-case letter. Everything else is [`CharsetTag::Plain`].
#[must_use]
pub fn classify_charset(hash: &str) -> CharsetTag {
    if hash.contains('$') {
        CharsetTag::Delimited
    } else if hash.contains('/') {
        CharsetTag::Slashed
    } else if hash.starts_with("0x0") {
        CharsetTag::HexPrefixed
    } else if hash.chars().any(char::is_uppercase) {
        CharsetTag::UpperCase
    } else {
        CharsetTag::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hex() {
        assert_eq!(
            classify_charset("5f4dcc3b5aa765d61d8327deb882cf99"),
            CharsetTag::Plain
        );
    }

    #[test]
    fn test_empty_is_plain() {
        assert_eq!(classify_charset(""), CharsetTag::Plain);
    }

    #[test]
    fn test_delimiter_beats_everything() {
        // Also has '/', an upper-case letter and a 0x0 prefix.
        assert_eq!(classify_charset("0x0/ABC$"), CharsetTag::Delimited);
    }

    #[test]
    fn test_slash_beats_prefix_and_upper() {
        assert_eq!(classify_charset("0x0A/b"), CharsetTag::Slashed);
    }

    #[test]
    fn test_prefix_beats_upper() {
        assert_eq!(
            classify_charset("0x0100A1B2C3D4"),
            CharsetTag::HexPrefixed
        );
    }

    #[test]
    fn test_prefix_needs_all_three_chars() {
        assert_eq!(classify_charset("0x"), CharsetTag::Plain);
        assert_eq!(classify_charset("0x1f"), CharsetTag::Plain);
    }

    #[test]
    fn test_upper_case() {
        assert_eq!(
            classify_charset("5F4DCC3B5AA765D61D8327DEB882CF99"),
            CharsetTag::UpperCase
        );
        assert_eq!(classify_charset("abcÄ"), CharsetTag::UpperCase);
    }
}
