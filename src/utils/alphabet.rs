//! The 26-letter Latin alphabet and wrap-around index arithmetic.
//!
//! Every stage of the machine works on letter indices in `0..26`; these
//! helpers convert between `char` and index and keep offsets in range.

/// Number of symbols on every wheel, the plugboard and the reflector.
pub const ALPHABET_LEN: usize = 26;

/// The ordered alphabet. Index `i` is the letter shown at position `i`.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the alphabet index of `c`, or `None` if `c` is not `A..=Z`.
///
/// Lowercase letters are not part of the alphabet.
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Returns the letter at alphabet index `index`.
///
/// `index` is reduced modulo 26.
pub fn letter(index: u8) -> char {
    ALPHABET[index as usize % ALPHABET_LEN] as char
}

/// Euclidean modulo: the result is always in `0..m` for positive `m`.
///
/// # Examples
///
/// ```
/// use enigma::utils::alphabet::modulo;
///
/// assert_eq!(modulo(-1, 26), 25);
/// assert_eq!(modulo(27, 26), 1);
/// ```
pub fn modulo(n: i32, m: i32) -> i32 {
    n.rem_euclid(m)
}

/// Shifts alphabet index `index` by `offset` places, wrapping around.
pub(crate) fn shift(index: u8, offset: i32) -> u8 {
    modulo(index as i32 + offset, ALPHABET_LEN as i32) as u8
}
