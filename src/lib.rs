//! Three-rotor Enigma cipher engine.
//!
//! Reproduces the wartime electromechanical rotor machine: three
//! interchangeable rotors from a fixed catalog (I, II, III), reflector B and
//! a plugboard. The machine is reciprocal, so the settings that encrypt a
//! message also decrypt it, and its stepping includes the historical
//! double-step of the middle rotor.
//!
//! # Architecture
//!
//! ```text
//! alphabet   (A..Z indices, wrap-around arithmetic)
//!     ↓
//! catalog    (static rotor wirings, notches, reflector table)
//!     ↓
//! Rotor      (wiring + ring setting + position; forward / backward / step)
//! Plugboard  (validated letter pairs; involutive swap)
//! reflector  (fixed involutive lookup)
//!     ↓
//! EnigmaMachine (validation, stepping, plugboard → rotors → reflector → rotors → plugboard)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two machines built from the same settings:
//!
//! ```
//! use enigma::{EnigmaMachine, MachineConfig};
//!
//! let config = MachineConfig::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]);
//!
//! let mut encoder = EnigmaMachine::new(&config).unwrap();
//! let ciphertext = encoder.process("HELLO");
//! assert_eq!(ciphertext, "VNACA");
//!
//! let mut decoder = EnigmaMachine::new(&config).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "HELLO");
//! ```
//!
//! Settings typed by an operator can be read with [`keysheet`]:
//!
//! ```
//! use enigma::keysheet::{parse_plugboard, parse_settings};
//! use enigma::{EnigmaMachine, MachineConfig};
//!
//! let config = MachineConfig {
//!     positions: parse_settings("0 4 21").unwrap(),
//!     ring_settings: parse_settings("1 1 1").unwrap(),
//!     plugboard: parse_plugboard("AB CD"),
//!     ..MachineConfig::default()
//! };
//! let mut machine = EnigmaMachine::new(&config).unwrap();
//! machine.process("A");
//! assert_eq!(machine.positions(), [1, 6, 22]);
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod error;
pub mod keysheet;
pub mod utils;

mod config;
mod machine;
pub(crate) mod plugboard;
pub(crate) mod reflector;
pub(crate) mod rotor;

pub use config::{MachineConfig, ROTOR_SLOTS};
pub use error::{ConfigField, ConfigurationError, KeySheetError, PairFault};
pub use machine::EnigmaMachine;
