//! Machine configuration and its validation.
//!
//! [`MachineConfig`] is plain caller-supplied data. It is validated when a
//! machine is built and is not kept afterwards.

use crate::catalog::{RotorSpec, CATALOG_SIZE, ROTORS};
use crate::error::{ConfigField, ConfigurationError};
use crate::plugboard::Plugboard;
use crate::utils::alphabet::ALPHABET_LEN;

/// Number of rotor slots in the machine.
pub const ROTOR_SLOTS: usize = 3;

/// Initial settings for one encryption or decryption session.
///
/// Slot 0 is the leftmost (slow) rotor and slot 2 the rightmost (fast)
/// rotor. Values are signed so that out-of-range input from callers can be
/// reported instead of silently wrapping.
///
/// # Examples
///
/// ```
/// use enigma::MachineConfig;
///
/// let config = MachineConfig {
///     positions: vec![0, 4, 21],
///     plugboard: vec![('A', 'B')],
///     ..MachineConfig::default()
/// };
/// assert_eq!(config.rotor_ids, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Catalog index of the rotor in each slot.
    pub rotor_ids: Vec<i64>,
    /// Starting position of each rotor (`0` = A).
    pub positions: Vec<i64>,
    /// Ring setting of each rotor (`0` = A).
    pub ring_settings: Vec<i64>,
    /// Plugboard cables as unordered letter pairs.
    pub plugboard: Vec<(char, char)>,
}

impl Default for MachineConfig {
    /// Rotors I, II, III at AAA with rings AAA and an empty plugboard.
    fn default() -> Self {
        MachineConfig {
            rotor_ids: vec![0, 1, 2],
            positions: vec![0; ROTOR_SLOTS],
            ring_settings: vec![0; ROTOR_SLOTS],
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Creates a configuration from its four parts.
    pub fn new(
        rotor_ids: &[i64],
        positions: &[i64],
        ring_settings: &[i64],
        plugboard: &[(char, char)],
    ) -> Self {
        MachineConfig {
            rotor_ids: rotor_ids.to_vec(),
            positions: positions.to_vec(),
            ring_settings: ring_settings.to_vec(),
            plugboard: plugboard.to_vec(),
        }
    }

    /// Checks every constraint, stopping at the first violation.
    ///
    /// Order: array shapes, position and ring ranges, rotor ids, plugboard
    /// entry shape, plugboard pair consistency.
    pub(crate) fn validate(&self) -> Result<ValidatedConfig, ConfigurationError> {
        check_shape(ConfigField::RotorIds, &self.rotor_ids)?;
        check_shape(ConfigField::Positions, &self.positions)?;
        check_shape(ConfigField::RingSettings, &self.ring_settings)?;

        let positions = check_letter_range(ConfigField::Positions, &self.positions)?;
        let ring_settings = check_letter_range(ConfigField::RingSettings, &self.ring_settings)?;

        let mut rotors = [&ROTORS[0]; ROTOR_SLOTS];
        for (slot, &id) in self.rotor_ids.iter().enumerate() {
            rotors[slot] = usize::try_from(id)
                .ok()
                .and_then(|i| ROTORS.get(i))
                .ok_or(ConfigurationError::UnknownRotor {
                    slot,
                    id,
                    catalog_size: CATALOG_SIZE,
                })?;
        }

        let plugboard = Plugboard::new(&self.plugboard)?;

        Ok(ValidatedConfig {
            rotors,
            positions,
            ring_settings,
            plugboard,
        })
    }
}

/// A configuration that passed every check, in machine-ready form.
#[derive(Debug)]
pub(crate) struct ValidatedConfig {
    pub(crate) rotors: [&'static RotorSpec; ROTOR_SLOTS],
    pub(crate) positions: [u8; ROTOR_SLOTS],
    pub(crate) ring_settings: [u8; ROTOR_SLOTS],
    pub(crate) plugboard: Plugboard,
}

fn check_shape(field: ConfigField, values: &[i64]) -> Result<(), ConfigurationError> {
    if values.len() != ROTOR_SLOTS {
        return Err(ConfigurationError::ShapeMismatch {
            field,
            expected: ROTOR_SLOTS,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_letter_range(
    field: ConfigField,
    values: &[i64],
) -> Result<[u8; ROTOR_SLOTS], ConfigurationError> {
    let mut out = [0u8; ROTOR_SLOTS];
    for (slot, &value) in values.iter().enumerate() {
        if !(0..ALPHABET_LEN as i64).contains(&value) {
            return Err(ConfigurationError::OutOfRange { field, slot, value });
        }
        out[slot] = value as u8;
    }
    Ok(out)
}
