//! Hashhound Core
//!
//! Offline, heuristic identification of hash algorithm families. Input an
//! opaque hash string (e.g. `5f4dcc3b5aa765d61d8327deb882cf99`) and get every
//! algorithm whose length and character set fit, plus a definite answer when
//! the string carries a structural marker such as `$1$`.
//!
//! # Quick Start
//!
//! ```
//! use hashhound_core::{CharsetTag, Hashhound};
//!
//! let hound = Hashhound::new();
//!
//! let result = hound.classify("5f4dcc3b5aa765d61d8327deb882cf99");
//! assert_eq!(result.length, 32);
//! assert_eq!(result.charset, CharsetTag::Plain);
//! assert_eq!(result.definite, None);
//! assert_eq!(result.candidates[0].name, "MD5");
//!
//! let result = hound.classify("$1$abcdefgh$somehashvalue");
//! assert_eq!(result.definite, Some("MD5 crypt(3)"));
//! ```
//!
//! # Rendering
//!
//! ```
//! use hashhound_core::{Hashhound, RenderConfig, RenderMode};
//!
//! let hound = Hashhound::new();
//! let result = hound.classify("$6$salt$hash");
//! let text = hound.render(&result, &RenderConfig::plain(RenderMode::Compact));
//! assert!(text.contains("SHA512_crypt_3 100.00"));
//! ```

pub mod batch;
pub mod catalog;
pub mod charset;
pub mod error;
pub mod report;
pub mod signature;
pub mod types;

pub use batch::{BatchConfig, BatchRunner, DEFAULT_WORKERS};
pub use catalog::{CatalogEntry, LengthSpec, CATALOG};
pub use error::BatchError;
pub use report::{normalize_token, RenderConfig, RenderMode, COMPACT_NAME_WIDTH};
pub use signature::{SignatureRule, SignatureTest, SIGNATURES};
pub use types::*;

/// Main entry point - a classifier over a catalog and a signature table.
///
/// Both tables are static and read-only, so one instance can be shared by
/// any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Hashhound {
    catalog: &'static [CatalogEntry],
    signatures: &'static [SignatureRule],
}

impl Default for Hashhound {
    fn default() -> Self {
        Self::new()
    }
}

impl Hashhound {
    /// Create a classifier over the built-in tables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tables(CATALOG, SIGNATURES)
    }

    /// Create a classifier over custom tables.
    #[must_use]
    pub fn with_tables(
        catalog: &'static [CatalogEntry],
        signatures: &'static [SignatureRule],
    ) -> Self {
        Self {
            catalog,
            signatures,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'static [CatalogEntry] {
        self.catalog
    }

    #[must_use]
    pub fn signatures(&self) -> &'static [SignatureRule] {
        self.signatures
    }

    /// Classify a hash string.
    ///
    /// Pure and infallible: empty input yields an unknown result.
    #[must_use]
    pub fn classify(&self, hash: &str) -> ClassificationResult {
        let length = hash.chars().count();
        let charset = charset::classify_charset(hash);
        let definite = signature::match_signature(self.signatures, hash, length);
        let candidates = catalog::match_catalog(self.catalog, length, charset);

        tracing::trace!(
            length,
            %charset,
            definite = definite.unwrap_or("-"),
            candidates = candidates.len(),
            "classified input"
        );

        ClassificationResult {
            input: hash.to_string(),
            length,
            charset,
            definite,
            candidates,
        }
    }

    /// Render a result as a text block.
    #[must_use]
    pub fn render(&self, result: &ClassificationResult, config: &RenderConfig) -> String {
        report::render(result, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_unknown() {
        let result = Hashhound::new().classify("");
        assert_eq!(result.length, 0);
        assert!(result.is_unknown());
    }

    #[test]
    fn test_length_counts_chars() {
        let result = Hashhound::new().classify("héllo");
        assert_eq!(result.length, 5);
    }

    #[test]
    fn test_custom_tables() {
        static ONLY: &[CatalogEntry] = &[CatalogEntry {
            name: "Toy-8",
            length: LengthSpec::Exact(8),
            charsets: &[CharsetTag::Plain],
        }];
        let hound = Hashhound::with_tables(ONLY, &[]);

        let result = hound.classify("deadbeef");
        assert_eq!(result.definite, None);
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].name, "Toy-8");

        assert!(hound.classify("aGVsbG8=").definite.is_none());
    }

    #[test]
    fn test_definite_and_candidates_together() {
        // SHA-1 in Base64: padding rule fires and the catalog also matches.
        let result = Hashhound::new().classify("L9ThxnotKPzthJ7hu3bnORuT6xI=");
        assert_eq!(result.length, 28);
        assert_eq!(result.definite, Some("Base64 or Base32"));
        assert!(result.candidates.iter().any(|c| c.name == "SHA-1 (Base64)"));
    }
}
