// src/container.rs
//! Byte container for a code stream.
//!
//! Header layout:
//!   Byte 0:       scheme tag (1 = LZW)
//!   Bytes 1..5:   decoded length in code units, u32 big-endian
//!   Byte 5 onward: code stream, one u16 big-endian per code unit

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::{CodecError, Result};
use crate::Scheme;

pub const HEADER_BYTES: usize = 5;

const TAG_BITS:    u32 = 8;
const LENGTH_BITS: u32 = 32;
const UNIT_BITS:   u32 = 16;

/// Unpacked archive, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub scheme:        Scheme,
    pub decoded_units: u32,
    pub stream:        Vec<u16>,
}

pub fn pack(scheme: Scheme, decoded_units: u32, stream: &[u16]) -> std::io::Result<Vec<u8>> {
    let mut output = Vec::with_capacity(HEADER_BYTES + stream.len() * 2);
    {
        let mut writer = BitWriter::endian(&mut output, BigEndian);

        writer.write(TAG_BITS, scheme.tag())?;
        writer.write(LENGTH_BITS, decoded_units)?;
        for &unit in stream {
            writer.write(UNIT_BITS, unit)?;
        }

        writer.byte_align()?;
    }
    Ok(output)
}

pub fn unpack(input: &[u8]) -> Result<Archive> {
    if input.len() < HEADER_BYTES {
        return Err(CodecError::Truncated(input.len(), HEADER_BYTES));
    }

    let payload = input.len() - HEADER_BYTES;
    if payload % 2 != 0 {
        return Err(CodecError::OddPayload(payload));
    }

    let mut reader = BitReader::endian(std::io::Cursor::new(input), BigEndian);

    let tag = reader.read::<u8>(TAG_BITS)?;
    let scheme = Scheme::from_tag(tag).ok_or(CodecError::UnknownSchemeTag(tag))?;
    let decoded_units = reader.read::<u32>(LENGTH_BITS)?;

    let mut stream = Vec::with_capacity(payload / 2);
    for _ in 0..payload / 2 {
        stream.push(reader.read::<u16>(UNIT_BITS)?);
    }

    Ok(Archive { scheme, decoded_units, stream })
}
