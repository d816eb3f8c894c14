//! Core types for Hashhound.
//!
//! These are the values that flow between the charset classifier, the
//! signature and catalog matchers, and the reporter.

use std::fmt;

use serde::Serialize;

/// Confidence attached to every catalog candidate, in percent.
///
/// The catalog is a hard length/charset filter rather than a statistical
/// estimate, so every surviving candidate gets the same value.
pub const CANDIDATE_CONFIDENCE: f32 = 100.0;

/// Coarse categorical feature summarizing which symbol classes appear in a
/// hash string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetTag {
    /// `a` - nothing special: lowercase letters, digits, other symbols.
    Plain,
    /// `b` - contains the `$` field delimiter used by crypt-style formats.
    Delimited,
    /// `c` - contains `/`, as Base64 and crypt alphabets do.
    Slashed,
    /// `d` - starts with `0x0`, the hex prefix of MSSQL-style hashes.
    HexPrefixed,
    /// `e` - contains at least one upper-case letter.
    UpperCase,
}

impl CharsetTag {
    /// All tags in letter order.
    pub const ALL: [CharsetTag; 5] = [
        Self::Plain,
        Self::Delimited,
        Self::Slashed,
        Self::HexPrefixed,
        Self::UpperCase,
    ];

    /// Single-letter label shown in reports.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Plain => 'a',
            Self::Delimited => 'b',
            Self::Slashed => 'c',
            Self::HexPrefixed => 'd',
            Self::UpperCase => 'e',
        }
    }

    /// Short human-readable description.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Plain => "lowercase/numeric",
            Self::Delimited => "contains '$' delimiter",
            Self::Slashed => "contains '/' (Base64-like)",
            Self::HexPrefixed => "0x0 hex prefix",
            Self::UpperCase => "contains upper-case",
        }
    }
}

impl fmt::Display for CharsetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A catalog entry that survived the length/charset filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub name: &'static str,
    pub confidence: f32,
}

/// Everything known about one input after classification.
///
/// Lives for a single `classify` call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub input: String,
    /// Length in characters, not bytes.
    pub length: usize,
    pub charset: CharsetTag,
    /// Algorithm named by a definite signature rule, if one fired.
    pub definite: Option<&'static str>,
    /// Catalog candidates in rank order.
    pub candidates: Vec<Candidate>,
}

impl ClassificationResult {
    /// True when neither a signature nor the catalog produced anything.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.definite.is_none() && self.candidates.is_empty()
    }
}
