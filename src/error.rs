// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported compression scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Unknown scheme tag in archive header: {0}")]
    UnknownSchemeTag(u8),

    #[error("Unknown dictionary code {code:#06x} at position {position}")]
    UnknownCode { code: u16, position: usize },

    #[error("Escape unit at position {position} has no literal after it")]
    TruncatedEscape { position: usize },

    #[error("Decoded text is not valid UTF-16")]
    InvalidUtf16,

    #[error("Input of {0} code units does not fit the archive header")]
    TooLong(usize),

    #[error("Archive truncated: {0} bytes, header needs {1}")]
    Truncated(usize, usize),

    #[error("Archive payload has odd length {0}")]
    OddPayload(usize),

    #[error("Decoded length mismatch: header says {expected} units, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
