//! Errors surfaced by the crate.
//!
//! Extraction has exactly one fatal condition, [`ParseStallError`]. Everything else the
//! tokenizer or the selector compiler runs into is absorbed as a non-match.

use thiserror::Error;

const REMAINDER_PREVIEW_LEN: usize = 64;

fn preview(remainder: &str) -> &str {
    match remainder.char_indices().nth(REMAINDER_PREVIEW_LEN) {
        Some((end, _)) => &remainder[..end],
        None => remainder,
    }
}

/// The tokenizer was unable to recognize any construct at the current position
/// and could not make forward progress.
///
/// The whole extraction is aborted, no partial results are returned.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("Parse stall at byte {offset}: no markup construct recognized in {:?}.", preview(.remainder))]
pub struct ParseStallError {
    /// Byte offset of the stall in the input.
    pub offset: usize,
    /// Unconsumed input starting at `offset`.
    pub remainder: String,
}

/// An error that occurs when an invalid encoding is provided in [`Settings`].
///
/// [`Settings`]: crate::Settings
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum EncodingError {
    /// The provided label doesn't name a known character encoding.
    #[error("Unknown character encoding has been provided.")]
    UnknownEncoding,

    /// The tokenizer scans for ASCII delimiters, so the encoding must be ASCII-compatible.
    #[error("Expected ASCII-compatible encoding.")]
    NonAsciiCompatibleEncoding,
}
