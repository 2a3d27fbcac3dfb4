//! The fixed input alphabet Σ.

/// An ordered, fixed set of input symbols.
///
/// `.` (wildcard) resolves against the whole alphabet, so its iteration
/// order only matters for the order in which a `CharGroup`'s transitions are
/// built. Acceptance is unaffected either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: impl Into<Vec<char>>) -> Alphabet {
        Alphabet {
            symbols: symbols.into(),
        }
    }

    /// The 62 alphanumeric symbols `0-9a-zA-Z`, the reference alphabet.
    pub fn alphanumeric() -> Alphabet {
        Alphabet::new(
            ('0'..='9')
                .chain('a'..='z')
                .chain('A'..='Z')
                .collect::<Vec<_>>(),
        )
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Alphabet {
        Alphabet::alphanumeric()
    }
}
