// src/encoder.rs
//! Greedy LZW scanner.
//! Single pass, no backtracking. Produces a Vec<Token> instruction stream
//! that `writer` turns into code units.
//!
//! A phrase is held as its prefix id plus the pending symbol rather than as
//! a string, so each lookup costs one hash of a fixed-size key:
//!   (Phrase::Unit(u), next)   phrase is a single symbol u
//!   (Phrase::Entry(c), next)  phrase is dictionary entry c
//! Codes are assigned in first-extension order, which is what the decoder
//! replays to rebuild the same table.

use std::collections::HashMap;

use tracing::debug;

use crate::code::{literal, CodeCounter, Token};

/// The running phrase during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Phrase {
    Unit(u16),
    Entry(u16),
}

impl Phrase {
    fn token(self) -> Token {
        match self {
            Phrase::Unit(unit)  => literal(unit),
            Phrase::Entry(code) => Token::Entry { code },
        }
    }
}

/// Encode-side dictionary: phrase -> code.
#[derive(Debug, Default)]
pub struct PhraseTable {
    entries: HashMap<(Phrase, u16), u16>,
    codes:   CodeCounter,
}

impl PhraseTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup(&self, phrase: Phrase, next: u16) -> Option<u16> {
        self.entries.get(&(phrase, next)).copied()
    }

    /// Inserts `phrase + next` under the next free code. No-op once frozen.
    fn insert(&mut self, phrase: Phrase, next: u16) {
        if let Some(code) = self.codes.take() {
            self.entries.insert((phrase, next), code);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.codes.peek().is_none()
    }
}

/// Scan `input` and return the LZW token stream.
pub fn scan(input: &[u16]) -> Vec<Token> {
    let (tokens, _table) = scan_with_table(input);
    tokens
}

/// Same as `scan`, also handing back the dictionary it built.
pub fn scan_with_table(input: &[u16]) -> (Vec<Token>, PhraseTable) {
    let mut table  = PhraseTable::new();
    let mut tokens = Vec::new();

    let Some((&first, rest)) = input.split_first() else {
        return (tokens, table);
    };

    let mut phrase = Phrase::Unit(first);

    for &next in rest {
        match table.lookup(phrase, next) {
            Some(code) => phrase = Phrase::Entry(code),
            None => {
                tokens.push(phrase.token());
                table.insert(phrase, next);
                phrase = Phrase::Unit(next);
            }
        }
    }
    tokens.push(phrase.token());

    debug!(
        "LZW scan: {} units -> {} tokens, {} dictionary entries{}",
        input.len(), tokens.len(), table.len(),
        if table.is_frozen() { " (frozen)" } else { "" }
    );

    (tokens, table)
}
