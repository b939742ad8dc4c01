// src/code.rs
//! Fixed code alphabet, known to both encoder and decoder.
//! Never transmitted. Single source of truth for code ranges.
//!
//!   0x0000..=0x00FF  literal symbol
//!   0x0100..=0xFFFE  dictionary code
//!   0xFFFF           escape, next unit is a literal symbol >= 256

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Symbol below 256, written as itself.
    Lit { unit: u16 },
    /// Symbol >= 256, written as ESCAPE followed by the symbol.
    Wide { unit: u16 },
    /// Dictionary code >= FIRST_CODE.
    Entry { code: u16 },
}

// ── Code ranges ───────────────────────────────────────────────────────────────
pub const LITERAL_LIMIT: u16 = 256;
pub const FIRST_CODE:    u16 = 256;
pub const MAX_CODE:      u16 = 0xFFFE;
pub const ESCAPE:        u16 = 0xFFFF;

/// Number of codes the dictionary can hold before it freezes.
pub const DICT_CAPACITY: usize = (MAX_CODE - FIRST_CODE) as usize + 1;

/// Token for a single-symbol phrase.
#[inline]
pub fn literal(unit: u16) -> Token {
    if unit < LITERAL_LIMIT {
        Token::Lit { unit }
    } else {
        Token::Wide { unit }
    }
}

/// Code units a token occupies in the stream.
pub fn token_unit_cost(token: &Token) -> usize {
    match token {
        Token::Lit { .. }   => 1,
        Token::Wide { .. }  => 2,
        Token::Entry { .. } => 1,
    }
}

/// Hands out dictionary codes in order and stops at MAX_CODE.
/// Encoder and decoder each own one; they advance in lockstep.
#[derive(Debug, Clone)]
pub struct CodeCounter {
    next: u32,
}

impl CodeCounter {
    pub fn new() -> Self {
        Self { next: FIRST_CODE as u32 }
    }

    /// The code the next insertion will receive, or None once full.
    pub fn peek(&self) -> Option<u16> {
        if self.next <= MAX_CODE as u32 {
            Some(self.next as u16)
        } else {
            None
        }
    }

    /// Post-increment. Returns None once the dictionary is frozen.
    pub fn take(&mut self) -> Option<u16> {
        let code = self.peek()?;
        self.next += 1;
        Some(code)
    }

    pub fn assigned(&self) -> usize {
        (self.next - FIRST_CODE as u32) as usize
    }
}

impl Default for CodeCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_splits_at_256() {
        assert_eq!(literal(0x41), Token::Lit { unit: 0x41 });
        assert_eq!(literal(0xFF), Token::Lit { unit: 0xFF });
        assert_eq!(literal(0x100), Token::Wide { unit: 0x100 });
        assert_eq!(token_unit_cost(&literal(0x3042)), 2);
    }

    #[test]
    fn counter_freezes_after_max_code() {
        let mut counter = CodeCounter::new();
        assert_eq!(counter.take(), Some(FIRST_CODE));
        for _ in 1..DICT_CAPACITY {
            assert!(counter.take().is_some());
        }
        assert_eq!(counter.assigned(), DICT_CAPACITY);
        assert_eq!(counter.peek(), None);
        assert_eq!(counter.take(), None);
    }
}
