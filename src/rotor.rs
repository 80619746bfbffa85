//! Rotor: one substitution wheel mounted in a machine slot.
//!
//! A rotor borrows its wiring from the static catalog and owns only its
//! ring setting and current position. Both are alphabet indices in `0..26`.

use crate::catalog::RotorSpec;
use crate::utils::alphabet::{letter, shift};

/// A catalog wheel with its ring setting and rotational position.
#[derive(Debug, Clone)]
pub(crate) struct Rotor {
    spec: &'static RotorSpec,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Mounts `spec` at `position` with ring setting `ring_setting`.
    ///
    /// Both values must already be in `0..26`.
    pub(crate) fn new(spec: &'static RotorSpec, ring_setting: u8, position: u8) -> Self {
        Rotor {
            spec,
            ring_setting,
            position,
        }
    }

    /// Maps a letter index entering from the right-hand side.
    ///
    /// The contact is offset by the rotation and corrected by the ring
    /// setting before it goes through the wiring.
    pub(crate) fn forward(&self, index: u8) -> u8 {
        let offset = self.position as i32 - self.ring_setting as i32;
        self.spec.wiring[shift(index, offset) as usize]
    }

    /// Maps a letter index returning from the reflector.
    ///
    /// Exact inverse of [`forward`](Self::forward) for the same position and
    /// ring setting.
    pub(crate) fn backward(&self, index: u8) -> u8 {
        let contact = self.spec.inverse[index as usize];
        let offset = self.ring_setting as i32 - self.position as i32;
        shift(contact, offset)
    }

    /// Advances the rotor by one position, wrapping Z back to A.
    pub(crate) fn step(&mut self) {
        self.position = shift(self.position, 1);
    }

    /// True when the letter at the current position is the notch letter.
    pub(crate) fn at_notch(&self) -> bool {
        self.position == self.spec.notch
    }

    pub(crate) fn position(&self) -> u8 {
        self.position
    }

    pub(crate) fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Letter shown in the machine window.
    pub(crate) fn window(&self) -> char {
        letter(self.position)
    }

    pub(crate) fn spec(&self) -> &'static RotorSpec {
        self.spec
    }
}
