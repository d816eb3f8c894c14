//! Definite signature matching.
//!
//! A signature is a structural marker (prefix, terminal padding, separator at
//! a fixed offset) that identifies an algorithm family with certainty. Rules
//! live in an ordered table and the first rule that matches wins.

use std::fmt;

/// Structural test applied to the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureTest {
    /// Input starts with the literal marker.
    Prefix(&'static str),
    /// Input ends with the character.
    Suffix(char),
    /// Input is exactly `length` characters with `separator` at char `offset`.
    SeparatorAt {
        length: usize,
        offset: usize,
        separator: char,
    },
}

impl SignatureTest {
    /// Check the test against an input whose char length is `length`.
    #[must_use]
    pub fn matches(&self, hash: &str, length: usize) -> bool {
        match *self {
            Self::Prefix(marker) => hash.starts_with(marker),
            Self::Suffix(c) => hash.ends_with(c),
            Self::SeparatorAt {
                length: expected,
                offset,
                separator,
            } => length == expected && hash.chars().nth(offset) == Some(separator),
        }
    }
}

impl fmt::Display for SignatureTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(marker) => write!(f, "starts with {marker}"),
            Self::Suffix(c) => write!(f, "ends with {c}"),
            Self::SeparatorAt {
                length,
                offset,
                separator,
            } => write!(f, "{length} chars, '{separator}' at offset {offset}"),
        }
    }
}

/// One row of the signature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRule {
    pub test: SignatureTest,
    pub name: &'static str,
}

const fn prefix(marker: &'static str, name: &'static str) -> SignatureRule {
    SignatureRule {
        test: SignatureTest::Prefix(marker),
        name,
    }
}

/// Built-in signature rules, most specific first.
///
/// The terminal `=` rule must stay last: crypt formats such as APR1 can end
/// in Base64 padding too.
pub const SIGNATURES: &[SignatureRule] = &[
    prefix("$P", "Wordpress hash"),
    prefix("$1$", "MD5 crypt(3)"),
    prefix("$5$", "SHA256 crypt(3)"),
    prefix("$6$", "SHA512 crypt(3)"),
    prefix("$apr1$", "APR1"),
    prefix("$H$", "phpBB"),
    prefix("sha1$", "SHA1 Django"),
    SignatureRule {
        test: SignatureTest::SeparatorAt {
            length: 65,
            offset: 32,
            separator: ':',
        },
        name: "MD5 Joomla (pass:salt)",
    },
    prefix("$2y$", "PHP password_hash"),
    prefix("$2a$", "bcrypt"),
    prefix("$2b$", "bcrypt"),
    prefix("$argon2", "Argon2"),
    prefix("$pbkdf2", "PBKDF2"),
    prefix("$scrypt$", "scrypt"),
    prefix("$y$", "yescrypt"),
    SignatureRule {
        test: SignatureTest::Suffix('='),
        name: "Base64 or Base32",
    },
];

/// Return the name attached to the first rule that matches, if any.
#[must_use]
pub fn match_signature(
    rules: &[SignatureRule],
    hash: &str,
    length: usize,
) -> Option<&'static str> {
    if length == 0 {
        return None;
    }

    rules
        .iter()
        .find(|rule| rule.test.matches(hash, length))
        .map(|rule| rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(hash: &str) -> Option<&'static str> {
        match_signature(SIGNATURES, hash, hash.chars().count())
    }

    #[test]
    fn test_md5_crypt() {
        assert_eq!(detect("$1$abcdefgh$somehashvalue"), Some("MD5 crypt(3)"));
    }

    #[test]
    fn test_sha_crypt_variants() {
        assert_eq!(detect("$5$rounds=5000$salt$hash"), Some("SHA256 crypt(3)"));
        assert_eq!(detect("$6$salt$hash"), Some("SHA512 crypt(3)"));
    }

    #[test]
    fn test_wordpress_and_phpbb() {
        assert_eq!(
            detect("$P$984478476IagS59wHZvyQMArzfx58u."),
            Some("Wordpress hash")
        );
        assert_eq!(
            detect("$H$9y5boZ2wsUlgl2tI6b5PrRoADzYfXD1"),
            Some("phpBB")
        );
    }

    #[test]
    fn test_specific_marker_beats_padding() {
        assert_eq!(detect("$apr1$71850310$gh9m4xcAn3MGxogwX/ztb.=="), Some("APR1"));
        assert_eq!(detect("sha1$a1976$a36cc8cbf81742a8fb52e221aaeab48ed7f58ab4="), Some("SHA1 Django"));
    }

    #[test]
    fn test_generic_padding() {
        assert_eq!(detect("aGVsbG8gd29ybGQ="), Some("Base64 or Base32"));
        assert_eq!(detect("NBSWY3DP=="), Some("Base64 or Base32"));
    }

    #[test]
    fn test_joomla_salt_separator() {
        let hash = format!("{}:{}", "a".repeat(32), "b".repeat(32));
        assert_eq!(hash.chars().count(), 65);
        assert_eq!(detect(&hash), Some("MD5 Joomla (pass:salt)"));

        // Colon at the wrong offset.
        let shifted = format!("{}:{}", "a".repeat(31), "b".repeat(33));
        assert_eq!(detect(&shifted), None);
    }

    #[test]
    fn test_separator_offset_counts_chars() {
        // 31 single-byte chars + one two-byte char put ':' at char offset 32
        // but byte offset 33.
        let hash = format!("{}é:{}", "a".repeat(31), "b".repeat(32));
        assert_eq!(hash.chars().count(), 65);
        assert_eq!(detect(&hash), Some("MD5 Joomla (pass:salt)"));
    }

    #[test]
    fn test_password_hash_family() {
        assert_eq!(
            detect("$2y$10$abcdefghijklmnopqrstuuFbGf8UP7sk7GZQm1cDTTtcMRAq7ZoGu"),
            Some("PHP password_hash")
        );
        assert_eq!(
            detect("$2b$12$GhvMmNVjRW29ulnudl.LbuAnUtN/LRfe1JsBm1Xu6LE3059z5Tr8m"),
            Some("bcrypt")
        );
        assert_eq!(
            detect("$argon2id$v=19$m=65536,t=3,p=4$c2FsdA$aGFzaA"),
            Some("Argon2")
        );
    }

    #[test]
    fn test_no_definite_match() {
        assert_eq!(detect("5f4dcc3b5aa765d61d8327deb882cf99"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn test_padding_rule_is_last() {
        let last = SIGNATURES.last().unwrap();
        assert_eq!(last.test, SignatureTest::Suffix('='));
    }
}
