//! Reflector: sends the signal back through the rotor stack.

use crate::catalog::REFLECTOR;

/// Reflects alphabet index `index` through the fixed reflector wiring.
pub(crate) fn reflect(index: u8) -> u8 {
    REFLECTOR[index as usize]
}
