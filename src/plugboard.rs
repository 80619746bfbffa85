//! Plugboard: pairwise letter swaps applied before and after the rotors.
//!
//! The board is validated once when it is built, so [`Plugboard::swap`] is an
//! involution for every letter and never fails.

use crate::error::{ConfigurationError, PairFault};
use crate::utils::alphabet::{index_of, ALPHABET_LEN};

/// A validated set of unordered letter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Plugboard {
    pairs: Vec<(char, char)>,
    table: [u8; ALPHABET_LEN],
}

impl Plugboard {
    /// Builds a plugboard from letter pairs.
    ///
    /// Every entry is checked for shape first; only then are the pairs
    /// checked against each other.
    ///
    /// # Errors
    /// - [`ConfigurationError::MalformedPlugboard`] if an entry holds a
    ///   character outside `A..=Z`.
    /// - [`ConfigurationError::InvalidPlugboardPair`] if a pair is reflexive
    ///   or a letter is used by more than one pair.
    pub(crate) fn new(pairs: &[(char, char)]) -> Result<Self, ConfigurationError> {
        let mut indices = Vec::with_capacity(pairs.len());
        for (index, &pair) in pairs.iter().enumerate() {
            match (index_of(pair.0), index_of(pair.1)) {
                (Some(a), Some(b)) => indices.push((a, b)),
                _ => return Err(ConfigurationError::MalformedPlugboard { index, pair }),
            }
        }

        let mut table: [u8; ALPHABET_LEN] = std::array::from_fn(|i| i as u8);
        let mut used = [false; ALPHABET_LEN];
        for (&pair, &(a, b)) in pairs.iter().zip(indices.iter()) {
            if a == b {
                return Err(ConfigurationError::InvalidPlugboardPair {
                    pair,
                    fault: PairFault::SelfPaired,
                });
            }
            for (letter, idx) in [(pair.0, a), (pair.1, b)] {
                if used[idx as usize] {
                    return Err(ConfigurationError::InvalidPlugboardPair {
                        pair,
                        fault: PairFault::LetterReused(letter),
                    });
                }
                used[idx as usize] = true;
            }
            table[a as usize] = b;
            table[b as usize] = a;
        }

        Ok(Plugboard {
            pairs: pairs.to_vec(),
            table,
        })
    }

    /// Returns the partner of letter index `index`, or `index` if unplugged.
    pub(crate) fn swap(&self, index: u8) -> u8 {
        self.table[index as usize]
    }

    /// Number of cables plugged in.
    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    pub(crate) fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }
}
