//! Error types.
//!
//! Classification itself never fails; only batch configuration and output
//! can.

use std::io;

/// Errors from configuring or running a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Worker count must be at least one.
    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(i64),

    /// Reading input or writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
