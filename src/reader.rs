// src/reader.rs
//! Reads 16-bit code units back into a Token stream.

use crate::code::{Token, ESCAPE, LITERAL_LIMIT};
use crate::error::{CodecError, Result};

pub fn read_tokens(input: &[u16]) -> Result<Vec<Token>> {
    let mut tokens = Vec::with_capacity(input.len());
    let mut units  = input.iter().copied().enumerate();

    while let Some((position, unit)) = units.next() {
        let token = if unit == ESCAPE {
            match units.next() {
                Some((_, wide)) => Token::Wide { unit: wide },
                None => return Err(CodecError::TruncatedEscape { position }),
            }
        } else if unit < LITERAL_LIMIT {
            Token::Lit { unit }
        } else {
            Token::Entry { code: unit }
        };
        tokens.push(token);
    }

    Ok(tokens)
}
