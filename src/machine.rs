//! EnigmaMachine: three rotors, a reflector and a plugboard.
//!
//! Orchestrates the per-keystroke stepping and the full substitution path:
//! plugboard, rotors right to left, reflector, rotors left to right,
//! plugboard. The path is its own inverse, so the same settings encrypt and
//! decrypt.

use tracing::{debug, trace, warn};

use crate::config::{MachineConfig, ROTOR_SLOTS};
use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::reflect;
use crate::rotor::Rotor;
use crate::utils::alphabet::{index_of, letter};

/// Slot of the slow (leftmost) rotor.
const LEFT: usize = 0;
/// Slot of the middle rotor.
const MIDDLE: usize = 1;
/// Slot of the fast (rightmost) rotor.
const RIGHT: usize = 2;

/// A three-rotor Enigma machine.
///
/// Rotor positions advance with every letter processed and there is no way
/// to rewind them. To decrypt, build a fresh machine from the same
/// [`MachineConfig`] that produced the ciphertext.
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    rotors: [Rotor; ROTOR_SLOTS],
    plugboard: Plugboard,
}

impl EnigmaMachine {
    /// Builds a machine from `config`.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found; see
    /// [`ConfigurationError`] for the order in which inputs are checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaMachine, MachineConfig};
    ///
    /// let machine = EnigmaMachine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.windows(), ['A', 'A', 'A']);
    /// ```
    ///
    /// ```
    /// use enigma::{ConfigurationError, EnigmaMachine, MachineConfig};
    ///
    /// let config = MachineConfig::new(&[0, 1, 2], &[0, 0, 26], &[0, 0, 0], &[]);
    /// assert!(matches!(
    ///     EnigmaMachine::new(&config),
    ///     Err(ConfigurationError::OutOfRange { .. })
    /// ));
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, ConfigurationError> {
        let validated = config.validate()?;

        let [a, b, c] = validated.rotors;
        if std::ptr::eq(a, b) || std::ptr::eq(a, c) || std::ptr::eq(b, c) {
            warn!(
                rotor_ids = ?config.rotor_ids,
                "same rotor selected for more than one slot"
            );
        }

        let rotors: [Rotor; ROTOR_SLOTS] = std::array::from_fn(|slot| {
            Rotor::new(
                validated.rotors[slot],
                validated.ring_settings[slot],
                validated.positions[slot],
            )
        });

        debug!(
            rotor_ids = ?config.rotor_ids,
            positions = ?validated.positions,
            ring_settings = ?validated.ring_settings,
            plugboard_pairs = validated.plugboard.len(),
            "machine configured"
        );

        Ok(EnigmaMachine {
            rotors,
            plugboard: validated.plugboard,
        })
    }

    /// Advances the rotors for one keystroke.
    ///
    /// Both notch flags are read before anything moves. A middle rotor
    /// sitting on its notch carries the left rotor and steps itself; a right
    /// rotor on its notch steps the middle rotor; the right rotor always
    /// steps. When both flags are set the middle rotor moves twice.
    pub(crate) fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].at_notch();
        let right_at_notch = self.rotors[RIGHT].at_notch();

        if middle_at_notch {
            self.rotors[LEFT].step();
            self.rotors[MIDDLE].step();
            trace!(windows = ?self.windows(), "double step");
        }
        if right_at_notch {
            self.rotors[MIDDLE].step();
            trace!(windows = ?self.windows(), "middle rotor turnover");
        }
        self.rotors[RIGHT].step();
    }

    /// Encrypts (or decrypts) a single character.
    ///
    /// Characters outside `A..=Z`, including lowercase letters, are returned
    /// unchanged and do not move the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaMachine, MachineConfig};
    ///
    /// let mut machine = EnigmaMachine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.encrypt_char('!'), '!');
    /// assert_eq!(machine.positions(), [0, 0, 0]);
    /// assert_eq!(machine.encrypt_char('A'), 'D');
    /// assert_eq!(machine.positions(), [0, 0, 1]);
    /// ```
    pub fn encrypt_char(&mut self, c: char) -> char {
        let Some(mut index) = index_of(c) else {
            return c;
        };

        self.step_rotors();

        index = self.plugboard.swap(index);
        for rotor in self.rotors.iter().rev() {
            index = rotor.forward(index);
        }
        index = reflect(index);
        for rotor in self.rotors.iter() {
            index = rotor.backward(index);
        }
        index = self.plugboard.swap(index);

        letter(index)
    }

    /// Uppercases `text` and runs every character through the machine in order.
    ///
    /// Non-alphabetic characters keep their place in the output.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaMachine, MachineConfig};
    ///
    /// let config = MachineConfig::default();
    ///
    /// let mut encoder = EnigmaMachine::new(&config).unwrap();
    /// let ciphertext = encoder.process("Hello, world");
    ///
    /// let mut decoder = EnigmaMachine::new(&config).unwrap();
    /// assert_eq!(decoder.process(&ciphertext), "HELLO, WORLD");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        text.to_uppercase()
            .chars()
            .map(|c| self.encrypt_char(c))
            .collect()
    }

    /// Current rotor positions, left to right (`0` = A).
    pub fn positions(&self) -> [u8; ROTOR_SLOTS] {
        std::array::from_fn(|slot| self.rotors[slot].position())
    }

    /// Ring settings, left to right.
    pub fn ring_settings(&self) -> [u8; ROTOR_SLOTS] {
        std::array::from_fn(|slot| self.rotors[slot].ring_setting())
    }

    /// Letters visible in the rotor windows, left to right.
    pub fn windows(&self) -> [char; ROTOR_SLOTS] {
        std::array::from_fn(|slot| self.rotors[slot].window())
    }

    /// Catalog names of the mounted rotors, left to right.
    pub fn rotor_names(&self) -> [&'static str; ROTOR_SLOTS] {
        std::array::from_fn(|slot| self.rotors[slot].spec().name)
    }

    /// Plugboard cables in the order they were configured.
    pub fn plugboard_pairs(&self) -> &[(char, char)] {
        self.plugboard.pairs()
    }
}
