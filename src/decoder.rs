// src/decoder.rs
//! Reconstructs code units from a Token stream, rebuilding the encoder's
//! dictionary as it goes. The dictionary is never transmitted.

use tracing::debug;

use crate::code::{CodeCounter, Token, FIRST_CODE};
use crate::error::{CodecError, Result};

/// Decode-side dictionary: code -> phrase.
/// Codes are dense from FIRST_CODE, so a Vec indexed by `code - FIRST_CODE`
/// is the whole map.
#[derive(Debug, Default)]
pub struct CodeTable {
    phrases: Vec<Vec<u16>>,
    codes:   CodeCounter,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: u16) -> Option<&[u16]> {
        let index = code.checked_sub(FIRST_CODE)? as usize;
        self.phrases.get(index).map(Vec::as_slice)
    }

    /// The code the encoder would have assigned next, if any.
    pub fn next_code(&self) -> Option<u16> {
        self.codes.peek()
    }

    /// No-op once frozen, mirroring the encoder.
    fn insert(&mut self, phrase: Vec<u16>) {
        if self.codes.take().is_some() {
            self.phrases.push(phrase);
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

pub fn reconstruct(tokens: &[Token]) -> Result<Vec<u16>> {
    let mut output: Vec<u16> = Vec::new();
    let mut table = CodeTable::new();

    let Some((first, rest)) = tokens.split_first() else {
        return Ok(output);
    };

    // `prev` is the previous phrase; its first unit is the `chr` of the
    // self-referential case.
    let mut prev = match *first {
        Token::Lit { unit } | Token::Wide { unit } => vec![unit],
        Token::Entry { code } => {
            return Err(CodecError::UnknownCode { code, position: 0 });
        }
    };
    output.extend_from_slice(&prev);

    for (i, token) in rest.iter().enumerate() {
        let phrase = match *token {
            Token::Lit { unit } | Token::Wide { unit } => vec![unit],
            Token::Entry { code } => match table.get(code) {
                Some(known) => known.to_vec(),
                // Code being defined by this very step: prev + prev[0].
                None if table.next_code() == Some(code) => {
                    let mut phrase = prev.clone();
                    phrase.push(prev[0]);
                    phrase
                }
                None => {
                    return Err(CodecError::UnknownCode { code, position: i + 1 });
                }
            },
        };

        output.extend_from_slice(&phrase);

        let mut entry = prev;
        entry.push(phrase[0]);
        table.insert(entry);

        prev = phrase;
    }

    debug!(
        "LZW reconstruct: {} tokens -> {} units, {} dictionary entries",
        tokens.len(), output.len(), table.len()
    );

    Ok(output)
}
