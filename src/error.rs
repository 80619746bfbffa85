//! Error types for the Enigma library.

use std::fmt;

use thiserror::Error;

/// Which construction input a [`ConfigurationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    /// Rotor catalog indices.
    RotorIds,
    /// Initial rotor positions.
    Positions,
    /// Ring settings.
    RingSettings,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigField::RotorIds => write!(f, "rotor ids"),
            ConfigField::Positions => write!(f, "rotor positions"),
            ConfigField::RingSettings => write!(f, "ring settings"),
        }
    }
}

/// Why a well-formed plugboard pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairFault {
    /// The pair connects a letter to itself.
    SelfPaired,
    /// The letter already appears in an earlier pair.
    LetterReused(char),
}

impl fmt::Display for PairFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairFault::SelfPaired => write!(f, "a letter cannot be connected to itself"),
            PairFault::LetterReused(c) => write!(f, "letter {c} is already plugged"),
        }
    }
}

/// Errors raised while building an [`EnigmaMachine`](crate::EnigmaMachine).
///
/// Validation stops at the first violation; no machine is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// An input array does not hold exactly one entry per rotor slot.
    #[error("{field} must have exactly {expected} elements, got {actual}")]
    ShapeMismatch {
        field: ConfigField,
        expected: usize,
        actual: usize,
    },
    /// A position or ring setting is outside `0..=25`.
    #[error("{field} must be integers between 0 and 25 (slot {slot} is {value})")]
    OutOfRange {
        field: ConfigField,
        slot: usize,
        value: i64,
    },
    /// A rotor id does not name an entry in the rotor catalog.
    #[error("rotor ids must be integers between 0 and {} (slot {slot} is {id})", .catalog_size - 1)]
    UnknownRotor {
        slot: usize,
        id: i64,
        catalog_size: usize,
    },
    /// A plugboard entry contains something other than `A..=Z`.
    #[error("plugboard pair {index} ({}{}) must contain two letters A-Z", .pair.0, .pair.1)]
    MalformedPlugboard { index: usize, pair: (char, char) },
    /// A plugboard pair is reflexive or reuses a letter.
    #[error("invalid plugboard pair {}{}: {fault}", .pair.0, .pair.1)]
    InvalidPlugboardPair { pair: (char, char), fault: PairFault },
}

/// Errors raised while reading key-sheet settings from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySheetError {
    /// A setting token is not an integer.
    #[error("'{token}' is not a whole number")]
    InvalidNumber { token: String },
}
