//! Fixed wiring tables: the three-wheel rotor catalog and the reflector.
//!
//! All tables are parsed from their historical wiring strings at compile
//! time and never change afterwards, so every machine borrows them.

use crate::utils::alphabet::ALPHABET_LEN;

/// Wiring and turnover notch of one catalog rotor.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    /// Historical wheel name.
    pub name: &'static str,
    /// `wiring[i]` is the index of the letter contact `i` is wired to.
    pub(crate) wiring: [u8; ALPHABET_LEN],
    /// Inverse of `wiring`.
    pub(crate) inverse: [u8; ALPHABET_LEN],
    /// Alphabet index of the notch letter.
    pub(crate) notch: u8,
}

impl RotorSpec {
    const fn new(name: &'static str, wiring: &[u8; ALPHABET_LEN], notch: u8) -> Self {
        let wiring = parse_wiring(wiring);
        RotorSpec {
            name,
            wiring,
            inverse: invert(&wiring),
            notch: notch - b'A',
        }
    }

    /// Returns the notch letter.
    pub fn notch(&self) -> char {
        (b'A' + self.notch) as char
    }

    /// Returns the wiring as a 26-letter string.
    pub fn wiring(&self) -> String {
        self.wiring.iter().map(|&i| (b'A' + i) as char).collect()
    }
}

/// Number of wheels in the catalog.
pub const CATALOG_SIZE: usize = 3;

/// Rotors I, II and III.
pub static ROTORS: [RotorSpec; CATALOG_SIZE] = [
    RotorSpec::new("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q'),
    RotorSpec::new("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E'),
    RotorSpec::new("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V'),
];

/// Reflector B. Involutive: `REFLECTOR[REFLECTOR[i]] == i` and no fixed points.
pub(crate) static REFLECTOR: [u8; ALPHABET_LEN] = parse_wiring(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");

const fn parse_wiring(letters: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut out = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        out[i] = letters[i] - b'A';
        i += 1;
    }
    out
}

const fn invert(wiring: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut out = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        out[wiring[i] as usize] = i as u8;
        i += 1;
    }
    out
}
