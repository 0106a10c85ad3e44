//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback the game host returns for a probe: one
//! symbol per position of the *candidate* word. A position is revealed
//! (carrying its character) when the probe has the same character at the
//! same position, and hidden otherwise.
//!
//! Patterns are the branching keys of the strategy tree: two candidates
//! land in the same subtree exactly when they produce identical patterns
//! against the same probe.

use std::fmt;

/// Feedback for a single position of the candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The probe matched this position; carries the revealed character
    Hit(char),
    /// No match at this position, rendered as `_`
    Miss,
}

/// Feedback pattern for one (candidate, probe) comparison
///
/// The pattern length always equals the candidate's character count, so
/// candidates of different lengths can never collide on the same key even
/// against an empty probe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Box<[Symbol]>);

impl Pattern {
    /// Compare `candidate` against `probe` position by position
    ///
    /// Positions beyond the probe's length are always [`Symbol::Miss`].
    /// Pure and total: any pair of strings, including empty ones, produces
    /// a pattern of exactly `candidate.chars().count()` symbols.
    ///
    /// # Examples
    /// ```
    /// use probetree::core::Pattern;
    ///
    /// let pattern = Pattern::reveal("apple", "apply");
    /// assert_eq!(pattern.to_string(), "a p p l _");
    /// ```
    #[must_use]
    pub fn reveal(candidate: &str, probe: &str) -> Self {
        let mut probe_chars = probe.chars();

        let symbols = candidate
            .chars()
            .map(|c| match probe_chars.next() {
                Some(p) if p == c => Symbol::Hit(c),
                _ => Symbol::Miss,
            })
            .collect();

        Self(symbols)
    }

    /// Number of positions in the pattern (== candidate length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the pattern of an empty candidate
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position was revealed
    ///
    /// A fully revealed pattern identifies the candidate outright among
    /// candidates of the same length.
    #[must_use]
    pub fn is_full_reveal(&self) -> bool {
        self.0.iter().all(|s| matches!(s, Symbol::Hit(_)))
    }

    /// Count of revealed positions
    #[must_use]
    pub fn hits(&self) -> usize {
        self.0.iter().filter(|s| matches!(s, Symbol::Hit(_))).count()
    }

    /// The per-position symbols
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }
}

impl fmt::Display for Pattern {
    /// Renders symbols joined by single spaces, `_` for hidden positions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match symbol {
                Symbol::Hit(c) => write!(f, "{c}")?,
                Symbol::Miss => f.write_str("_")?,
            }
        }
        Ok(())
    }
}
