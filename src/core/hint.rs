//! Per-letter feedback classification

use std::fmt;

/// Classification of a single guess letter against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hint {
    /// Letter does not occur in the answer, or every occurrence is already claimed
    Absent,
    /// Letter occurs elsewhere in the answer with an unclaimed occurrence left
    Present,
    /// Letter is correct and in the correct position
    Exact,
}

impl Hint {
    /// Single-character code: `G` exact, `Y` present, `-` absent
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji tile used when sharing results
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_ranks_exact_highest() {
        assert!(Hint::Exact > Hint::Present);
        assert!(Hint::Present > Hint::Absent);
        assert_eq!(
            [Hint::Absent, Hint::Exact, Hint::Present].iter().max(),
            Some(&Hint::Exact)
        );
    }

    #[test]
    fn symbols_and_emoji() {
        assert_eq!(Hint::Exact.symbol(), 'G');
        assert_eq!(Hint::Present.symbol(), 'Y');
        assert_eq!(Hint::Absent.symbol(), '-');
        assert_eq!(Hint::Exact.emoji(), '🟩');
        assert_eq!(Hint::Present.emoji(), '🟨');
        assert_eq!(Hint::Absent.emoji(), '⬜');
        assert_eq!(format!("{}", Hint::Present), "Y");
    }
}
