//! Static catalog of known hash algorithms.
//!
//! Each entry accepts an input by its length in characters and its
//! [`CharsetTag`]. Matching is a hard filter: an entry either fits the live
//! input or it is not reported.

use std::fmt;

use crate::types::{Candidate, CharsetTag, CANDIDATE_CONFIDENCE};

/// Accepted input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthSpec {
    Exact(usize),
    /// Variable-length formats, typically salted.
    Any,
}

impl LengthSpec {
    #[must_use]
    pub fn accepts(self, length: usize) -> bool {
        match self {
            Self::Exact(n) => n == length,
            Self::Any => length > 0,
        }
    }
}

impl fmt::Display for LengthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// A known algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub length: LengthSpec,
    pub charsets: &'static [CharsetTag],
}

impl CatalogEntry {
    /// Check both predicates against an input.
    #[must_use]
    pub fn accepts(&self, length: usize, charset: CharsetTag) -> bool {
        self.length.accepts(length) && self.charsets.contains(&charset)
    }
}

/// Hex digests may be written in either case.
const HEX: &[CharsetTag] = &[CharsetTag::Plain, CharsetTag::UpperCase];
/// Base64/crypt alphabets: lower, upper, digits, `+`, `/`, `.`.
const B64: &[CharsetTag] = &[CharsetTag::Plain, CharsetTag::Slashed, CharsetTag::UpperCase];
const CRYPT: &[CharsetTag] = &[CharsetTag::Delimited];
const MSSQL: &[CharsetTag] = &[CharsetTag::HexPrefixed];
const UPPER: &[CharsetTag] = &[CharsetTag::UpperCase];
const ADDRESS: &[CharsetTag] = &[
    CharsetTag::Plain,
    CharsetTag::HexPrefixed,
    CharsetTag::UpperCase,
];

const fn entry(name: &'static str, len: usize, charsets: &'static [CharsetTag]) -> CatalogEntry {
    CatalogEntry {
        name,
        length: LengthSpec::Exact(len),
        charsets,
    }
}

const fn salted(name: &'static str, charsets: &'static [CharsetTag]) -> CatalogEntry {
    CatalogEntry {
        name,
        length: LengthSpec::Any,
        charsets,
    }
}

/// Built-in catalog. Within a length, more common algorithms come first.
pub const CATALOG: &[CatalogEntry] = &[
    // Checksums
    entry("CRC-16", 4, HEX),
    entry("CRC-16-CCITT", 4, HEX),
    entry("FCS-16", 4, HEX),
    entry("CRC-24", 6, HEX),
    entry("CRC-32", 8, HEX),
    entry("CRC-32B", 8, HEX),
    entry("Adler-32", 8, HEX),
    entry("FCS-32", 8, HEX),
    entry("FNV-1-32", 8, HEX),
    entry("FNV-1a-32", 8, HEX),
    entry("Fletcher-32", 8, HEX),
    entry("Joaat", 8, HEX),
    entry("ELF-32", 8, HEX),
    entry("XOR-32", 8, HEX),
    entry("GHash-32-3", 8, HEX),
    entry("GHash-32-5", 8, HEX),
    // 64-bit
    entry("CRC-64", 16, HEX),
    entry("FNV-1-64", 16, HEX),
    entry("FNV-1a-64", 16, HEX),
    entry("MySQL 3.x (OLD_PASSWORD)", 16, HEX),
    entry("Oracle DES (7-10g)", 16, HEX),
    entry("Half MD5", 16, HEX),
    entry("SipHash-2-4", 16, HEX),
    entry("Cisco PIX MD5", 16, B64),
    // 128-bit
    entry("MD5", 32, HEX),
    entry("MD4", 32, HEX),
    entry("NTLM", 32, HEX),
    entry("LM", 32, HEX),
    entry("MD2", 32, HEX),
    entry("RIPEMD-128", 32, HEX),
    entry("Haval-128", 32, HEX),
    entry("Tiger-128", 32, HEX),
    entry("Snefru-128", 32, HEX),
    entry("Double MD5", 32, HEX),
    entry("MD5 (HMAC)", 32, HEX),
    // 160-bit
    entry("SHA-1", 40, HEX),
    entry("RIPEMD-160", 40, HEX),
    entry("Double SHA-1", 40, HEX),
    entry("Haval-160", 40, HEX),
    entry("Tiger-160", 40, HEX),
    entry("HAS-160", 40, HEX),
    entry("SHA-1 (HMAC)", 40, HEX),
    entry("MySQL 4.1+/5.x", 41, UPPER),
    entry("Ethereum address (Keccak-256)", 42, ADDRESS),
    // 192-bit
    entry("Tiger-192", 48, HEX),
    entry("Haval-192", 48, HEX),
    // 224-bit
    entry("SHA-224", 56, HEX),
    entry("SHA3-224", 56, HEX),
    entry("SHA-512/224", 56, HEX),
    entry("Keccak-224", 56, HEX),
    entry("Haval-224", 56, HEX),
    // 256-bit
    entry("SHA-256", 64, HEX),
    entry("SHA3-256", 64, HEX),
    entry("SHA-512/256", 64, HEX),
    entry("Keccak-256", 64, HEX),
    entry("BLAKE2s-256", 64, HEX),
    entry("BLAKE3", 64, HEX),
    entry("RIPEMD-256", 64, HEX),
    entry("Haval-256", 64, HEX),
    entry("GOST R 34.11-94", 64, HEX),
    entry("Streebog-256", 64, HEX),
    entry("Snefru-256", 64, HEX),
    entry("SM3", 64, HEX),
    entry("SHA-256 (HMAC)", 64, HEX),
    entry("RIPEMD-320", 80, HEX),
    entry("SHA-384", 96, HEX),
    entry("SHA3-384", 96, HEX),
    entry("Keccak-384", 96, HEX),
    entry("SHA-512", 128, HEX),
    entry("SHA3-512", 128, HEX),
    entry("Keccak-512", 128, HEX),
    entry("BLAKE2b-512", 128, HEX),
    entry("Whirlpool", 128, HEX),
    entry("Streebog-512", 128, HEX),
    entry("SHA-512 (HMAC)", 128, HEX),
    // Base64-encoded digests and crypt alphabets
    entry("DES crypt(3)", 13, B64),
    entry("MD5 (Base64)", 24, B64),
    entry("SHA-1 (Base64)", 28, B64),
    entry("Cisco IOS SHA-256 (type 4)", 43, B64),
    entry("SHA-256 (Base64)", 44, B64),
    entry("SHA-512 (Base64)", 88, B64),
    // Salted hex with separator
    entry("MD5 (pass:salt)", 49, B64),
    entry("MD5 Joomla (pass:salt)", 65, B64),
    // Database formats
    entry("Oracle 11g (S:)", 62, UPPER),
    entry("MSSQL 2005", 54, MSSQL),
    entry("MSSQL 2000", 94, MSSQL),
    entry("MSSQL 2012/2014", 142, MSSQL),
    // crypt(3) and friends
    entry("MD5 crypt(3)", 34, CRYPT),
    entry("phpass (Wordpress/phpBB)", 34, CRYPT),
    entry("APR1", 37, CRYPT),
    entry("bcrypt", 60, CRYPT),
    entry("SHA256 crypt(3)", 63, CRYPT),
    entry("SHA512 crypt(3)", 106, CRYPT),
    salted("SHA1 Django", CRYPT),
    salted("Argon2", CRYPT),
    salted("PBKDF2", CRYPT),
    salted("scrypt", CRYPT),
    salted("yescrypt", CRYPT),
];

/// Collect every entry that accepts the input, in rank order.
///
/// Exact-length entries rank before variable-length ones; ties keep catalog
/// declaration order. Empty input never matches.
#[must_use]
pub fn match_catalog(entries: &[CatalogEntry], length: usize, charset: CharsetTag) -> Vec<Candidate> {
    if length == 0 {
        return vec![];
    }

    let mut matched: Vec<(usize, &CatalogEntry)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.accepts(length, charset))
        .collect();

    matched.sort_by_key(|(idx, e)| (e.length == LengthSpec::Any, *idx));

    matched
        .into_iter()
        .map(|(_, e)| Candidate {
            name: e.name,
            confidence: CANDIDATE_CONFIDENCE,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(length: usize, charset: CharsetTag) -> Vec<&'static str> {
        match_catalog(CATALOG, length, charset)
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn test_md5_length() {
        let found = names(32, CharsetTag::Plain);
        assert_eq!(found[0], "MD5");
        assert!(found.contains(&"NTLM"));
        assert!(!found.contains(&"SHA-1"));
    }

    #[test]
    fn test_sha224_is_unique_family() {
        assert_eq!(
            names(56, CharsetTag::UpperCase),
            vec!["SHA-224", "SHA3-224", "SHA-512/224", "Keccak-224", "Haval-224"]
        );
    }

    #[test]
    fn test_exact_before_any() {
        let found = names(60, CharsetTag::Delimited);
        assert_eq!(
            found,
            vec!["bcrypt", "SHA1 Django", "Argon2", "PBKDF2", "scrypt", "yescrypt"]
        );
    }

    #[test]
    fn test_salted_rows_only_follow_dollar_tag() {
        let salted = ["SHA1 Django", "Argon2", "PBKDF2", "scrypt", "yescrypt"];

        assert_eq!(names(25, CharsetTag::Delimited), salted.to_vec());
        assert_eq!(names(1, CharsetTag::Delimited), salted.to_vec());
        let others = CharsetTag::ALL.into_iter().filter(|t| *t != CharsetTag::Delimited);
        for tag in others {
            for len in 1..160 {
                let found = names(len, tag);
                assert!(salted.iter().all(|s| !found.contains(s)), "({len}, {tag})");
            }
        }
    }

    #[test]
    fn test_mssql_needs_prefix_tag() {
        assert_eq!(names(54, CharsetTag::HexPrefixed), vec!["MSSQL 2005"]);
        assert!(names(54, CharsetTag::UpperCase).is_empty());
    }

    #[test]
    fn test_zero_length_is_empty() {
        for tag in CharsetTag::ALL {
            assert!(match_catalog(CATALOG, 0, tag).is_empty());
        }
    }

    #[test]
    fn test_unknown_length_is_empty() {
        assert!(names(7, CharsetTag::Plain).is_empty());
        assert!(names(usize::MAX, CharsetTag::Plain).is_empty());
    }

    #[test]
    fn test_deterministic() {
        for tag in CharsetTag::ALL {
            for len in 0..160 {
                assert_eq!(
                    match_catalog(CATALOG, len, tag),
                    match_catalog(CATALOG, len, tag)
                );
            }
        }
    }

    #[test]
    fn test_every_candidate_fits_input() {
        for tag in CharsetTag::ALL {
            for len in 0..160 {
                for c in match_catalog(CATALOG, len, tag) {
                    let e = CATALOG.iter().find(|e| e.name == c.name).unwrap();
                    assert!(e.accepts(len, tag), "{} reported for ({len}, {tag})", c.name);
                    assert_eq!(c.confidence, CANDIDATE_CONFIDENCE);
                }
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for e in CATALOG {
            assert!(seen.insert(e.name), "duplicate catalog name: {}", e.name);
        }
    }
}
