// src/lib.rs
//! lzwtext — LZW compression for 16-bit code-unit text.
//!
//! Text is handled as UTF-16 code units, so the compressed form is itself a
//! code-unit sequence: units below 256 are literal symbols, units from 256
//! are dictionary codes, 0xFFFF escapes a literal symbol >= 256.
//!
//! The `*_units` functions round-trip any `u16` sequence, lone surrogates
//! included. The `&str` functions are conveniences over them.
pub mod code;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod reader;
pub mod writer;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

pub use container::Archive;
pub use error::{CodecError, Result};

/// Supported compression schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    #[default]
    Lzw,
}

impl Scheme {
    pub const ALL: [Scheme; 1] = [Scheme::Lzw];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Lzw => "lzw",
        }
    }

    /// Archive header tag.
    pub fn tag(self) -> u8 {
        match self {
            Scheme::Lzw => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Scheme> {
        Scheme::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Exact-match lookup for the string selector API: `"LZW"` or `" lzw"`
    /// are unknown here, unlike `FromStr`.
    pub fn from_legacy_name(name: &str) -> Option<Scheme> {
        Scheme::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodecError::UnsupportedScheme(s.to_string()))
    }
}

// ── Code-unit API ─────────────────────────────────────────────────────────────

pub fn compress_units(data: &[u16], scheme: Scheme) -> Vec<u16> {
    match scheme {
        Scheme::Lzw => writer::write_tokens(&encoder::scan(data)),
    }
}

/// Fails only on streams this crate did not produce.
pub fn decompress_units(data: &[u16], scheme: Scheme) -> Result<Vec<u16>> {
    match scheme {
        Scheme::Lzw => decoder::reconstruct(&reader::read_tokens(data)?),
    }
}

// ── Text API ──────────────────────────────────────────────────────────────────

/// Compress text with the default scheme.
///
/// ```
/// let input = "TOBEORNOTTOBEORTOBEORNOT#";
/// let encoded = lzwtext::compress(input);
/// assert!(encoded.len() < input.len());
/// assert_eq!(lzwtext::decompress(&encoded).unwrap(), input);
/// ```
pub fn compress(data: &str) -> Vec<u16> {
    let units: Vec<u16> = data.encode_utf16().collect();
    compress_units(&units, Scheme::default())
}

pub fn decompress(data: &[u16]) -> Result<String> {
    let units = decompress_units(data, Scheme::default())?;
    String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
}

/// Compress with a scheme named by string.
/// An unrecognised name yields an empty stream, not an error.
pub fn compress_with(data: &str, scheme: &str) -> Vec<u16> {
    match Scheme::from_legacy_name(scheme) {
        Some(scheme) => {
            let units: Vec<u16> = data.encode_utf16().collect();
            compress_units(&units, scheme)
        }
        None => {
            warn!("Unknown compression scheme {:?}, returning empty output", scheme);
            Vec::new()
        }
    }
}

/// Decompress with a scheme named by string.
/// An unrecognised name yields an empty string, not an error.
pub fn decompress_with(data: &[u16], scheme: &str) -> Result<String> {
    match Scheme::from_legacy_name(scheme) {
        Some(scheme) => {
            let units = decompress_units(data, scheme)?;
            String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
        }
        None => {
            warn!("Unknown compression scheme {:?}, returning empty output", scheme);
            Ok(String::new())
        }
    }
}

// ── Archives ──────────────────────────────────────────────────────────────────

/// Compress text and pack it with a header, ready to write to disk.
pub fn pack_archive(data: &str, scheme: Scheme) -> Result<Vec<u8>> {
    let units: Vec<u16> = data.encode_utf16().collect();
    let decoded_units = header_length(units.len())?;

    let stream = compress_units(&units, scheme);
    let bytes  = container::pack(scheme, decoded_units, &stream)?;

    debug!(
        "Packed {} archive: {} units -> {} units ({} bytes)",
        scheme, units.len(), stream.len(), bytes.len()
    );
    Ok(bytes)
}

fn header_length(units: usize) -> Result<u32> {
    u32::try_from(units).map_err(|_| CodecError::TooLong(units))
}

pub fn unpack_archive(bytes: &[u8]) -> Result<String> {
    let archive = container::unpack(bytes)?;
    let units   = decompress_units(&archive.stream, archive.scheme)?;

    if units.len() != archive.decoded_units as usize {
        return Err(CodecError::LengthMismatch {
            expected: archive.decoded_units as usize,
            actual:   units.len(),
        });
    }

    debug!(
        "Unpacked {} archive: {} units -> {} units",
        archive.scheme, archive.stream.len(), units.len()
    );
    String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
}
