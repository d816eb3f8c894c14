//! Report rendering.
//!
//! Verbose output is for people, compact output is for scripts: one
//! `TOKEN CONFIDENCE` line per identified algorithm.

use std::fmt::Write as _;

use colored::{Color, Colorize};

use crate::types::{ClassificationResult, CANDIDATE_CONFIDENCE};

/// Longest algorithm token emitted in compact mode.
pub const COMPACT_NAME_WIDTH: usize = 127;

/// Output style for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Multi-line human-readable report.
    #[default]
    Verbose,
    /// One normalized token plus confidence per line.
    Compact,
    /// One JSON object per report.
    Json,
}

/// Configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Enable colored output (verbose mode only).
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Verbose,
            color: true,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn plain(mode: RenderMode) -> Self {
        Self { mode, color: false }
    }
}

/// Render a result as a self-contained text block.
///
/// Every block ends with a newline so blocks can be concatenated directly.
#[must_use]
pub fn render(result: &ClassificationResult, config: &RenderConfig) -> String {
    match config.mode {
        RenderMode::Verbose => render_verbose(result, config.color),
        RenderMode::Compact => render_compact(result),
        RenderMode::Json => render_json(result),
    }
}

fn render_verbose(result: &ClassificationResult, color: bool) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Hash: {}", colorize(&result.input, Color::Red, color));
    let _ = writeln!(
        out,
        "Length: {}",
        colorize(&result.length.to_string(), Color::Red, color)
    );
    let _ = writeln!(
        out,
        "Charset: {} ({})",
        colorize(&result.charset.to_string(), Color::Red, color),
        result.charset.describe()
    );
    out.push('\n');

    for candidate in &result.candidates {
        let _ = writeln!(out, "[{}] {}", colorize("+", Color::Red, color), candidate.name);
    }

    if let Some(name) = result.definite {
        let _ = writeln!(
            out,
            "[{}] Definite identification: {}",
            colorize("+", Color::Red, color),
            colorize(name, Color::Red, color)
        );
    }

    if result.is_unknown() {
        let _ = writeln!(out, "[{}] No identification found", colorize("-", Color::Yellow, color));
    }

    out.push('\n');
    out
}

fn render_compact(result: &ClassificationResult) -> String {
    let mut out = String::new();

    let names = result
        .candidates
        .iter()
        .map(|c| (c.name, c.confidence))
        .chain(result.definite.map(|name| (name, CANDIDATE_CONFIDENCE)));

    for (name, confidence) in names {
        let _ = writeln!(
            out,
            "{} {:.2}",
            normalize_token(name, COMPACT_NAME_WIDTH),
            confidence
        );
    }

    out.push('\n');
    out
}

fn render_json(result: &ClassificationResult) -> String {
    match serde_json::to_string(result) {
        Ok(json) => json + "\n",
        Err(e) => {
            tracing::warn!(input = %result.input, "failed to serialize result: {}", e);
            "{}\n".to_string()
        }
    }
}

/// Normalize an algorithm name into a script-friendly token.
///
/// ASCII alphanumerics are kept, every run of other characters becomes a
/// single `_`, and the token is cut to at most `max_width` characters
/// without a trailing `_`.
#[must_use]
pub fn normalize_token(name: &str, max_width: usize) -> String {
    let mut token = String::with_capacity(name.len());
    let mut gap = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !token.is_empty() {
                token.push('_');
            }
            token.push(c);
            gap = false;
        } else {
            gap = true;
        }
    }

    // Only ASCII was pushed, so byte length is char length.
    token.truncate(max_width);
    while token.ends_with('_') {
        token.pop();
    }
    token
}

fn colorize(s: &str, color: Color, enabled: bool) -> String {
    if enabled {
        s.color(color).to_string()
    } else {
        s.to_string()
    }
}
