//! Reading machine settings written the way an operator types them.
//!
//! Rotor positions and ring settings are whitespace-separated numbers
//! (`"0 4 21"`); plugboard cables are letter pairs (`"AB CD"`). The results
//! feed a [`MachineConfig`](crate::MachineConfig), which does the range and
//! consistency checks.

use crate::error::KeySheetError;

/// Parses whitespace-separated integers.
///
/// The count is not checked here; a wrong count surfaces as
/// [`ConfigurationError::ShapeMismatch`](crate::ConfigurationError::ShapeMismatch)
/// when the machine is built.
///
/// # Errors
/// Returns [`KeySheetError::InvalidNumber`] for the first token that is not
/// a whole number.
///
/// # Examples
///
/// ```
/// use enigma::keysheet::parse_settings;
///
/// assert_eq!(parse_settings(" 0 4  21 ").unwrap(), vec![0, 4, 21]);
/// assert!(parse_settings("0 x 1").is_err());
/// ```
pub fn parse_settings(input: &str) -> Result<Vec<i64>, KeySheetError> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| KeySheetError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Extracts plugboard pairs from free text.
///
/// The input is uppercased and every run of consecutive letters `A..=Z` is
/// cut into pairs; a leftover single letter at the end of a run is dropped,
/// as is anything that is not a letter. Whether the pairs are consistent is
/// checked when the machine is built.
///
/// # Examples
///
/// ```
/// use enigma::keysheet::parse_plugboard;
///
/// assert_eq!(parse_plugboard("ab cd"), vec![('A', 'B'), ('C', 'D')]);
/// assert_eq!(parse_plugboard("ABCDE F"), vec![('A', 'B'), ('C', 'D')]);
/// assert!(parse_plugboard("   ").is_empty());
/// ```
pub fn parse_plugboard(input: &str) -> Vec<(char, char)> {
    let mut pairs = Vec::new();
    let mut pending: Option<char> = None;
    for c in input.to_uppercase().chars() {
        if !c.is_ascii_uppercase() {
            pending = None;
            continue;
        }
        match pending.take() {
            Some(first) => pairs.push((first, c)),
            None => pending = Some(c),
        }
    }
    pairs
}
