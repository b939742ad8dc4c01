// src/writer.rs
//! Writes a Token stream as 16-bit code units using the fixed code alphabet.

use crate::code::{token_unit_cost, Token, ESCAPE};

pub fn write_tokens(tokens: &[Token]) -> Vec<u16> {
    let mut output = Vec::with_capacity(tokens.iter().map(token_unit_cost).sum());

    for token in tokens {
        match token {
            Token::Lit { unit } => output.push(*unit),
            Token::Wide { unit } => {
                output.push(ESCAPE);
                output.push(*unit);
            }
            Token::Entry { code } => output.push(*code),
        }
    }

    output
}
