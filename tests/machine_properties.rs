//! Behavioral properties of the machine: reciprocity, passthrough,
//! plugboard effect, stepping and construction validation.

use enigma::{
    ConfigField, ConfigurationError, EnigmaMachine, MachineConfig, PairFault,
};

fn default_machine() -> EnigmaMachine {
    EnigmaMachine::new(&MachineConfig::default()).unwrap()
}

fn machine_at(positions: &[i64]) -> EnigmaMachine {
    let config = MachineConfig {
        positions: positions.to_vec(),
        ..MachineConfig::default()
    };
    EnigmaMachine::new(&config).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Reciprocity
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn hello_roundtrip() {
    let encrypted = default_machine().process("HELLO");
    let decrypted = default_machine().process(&encrypted);
    assert_eq!(decrypted, "HELLO");
}

#[test]
fn roundtrip_uppercases_and_keeps_punctuation() {
    let config = MachineConfig::new(&[1, 2, 0], &[12, 0, 25], &[3, 14, 15], &[('P', 'O'), ('M', 'L')]);
    let plaintext = "Meet me at 10:30, by the old mill!";

    let ciphertext = EnigmaMachine::new(&config).unwrap().process(plaintext);
    let decrypted = EnigmaMachine::new(&config).unwrap().process(&ciphertext);

    assert_eq!(decrypted, plaintext.to_uppercase());
}

#[test]
fn plugboard_keeps_reciprocity() {
    let config = MachineConfig {
        plugboard: vec![('A', 'B'), ('C', 'D')],
        ..MachineConfig::default()
    };
    let encrypted = EnigmaMachine::new(&config).unwrap().process("ABCD");
    let decrypted = EnigmaMachine::new(&config).unwrap().process(&encrypted);
    assert_eq!(decrypted, "ABCD");
}

#[test]
fn long_message_roundtrip_crosses_every_turnover() {
    // 26 * 26 * 3 keystrokes turns the middle and left rotors several times.
    let plaintext: String = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"
        .chars()
        .cycle()
        .take(26 * 26 * 3)
        .collect();
    let config = MachineConfig::new(&[0, 1, 2], &[0, 3, 20], &[2, 7, 11], &[]);

    let mut encoder = EnigmaMachine::new(&config).unwrap();
    let ciphertext = encoder.process(&plaintext);
    assert_ne!(encoder.positions()[0], 0, "left rotor should have moved");

    let mut decoder = EnigmaMachine::new(&config).unwrap();
    assert_eq!(decoder.process(&ciphertext), plaintext);
    assert_eq!(decoder.positions(), encoder.positions());
}

// ═══════════════════════════════════════════════════════════════════════
// Passthrough
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn non_letters_keep_their_index() {
    let input = "HELLO 123 WORLD!";
    let output = default_machine().process(input);

    assert_eq!(output.chars().count(), input.chars().count());
    for (i, (inp, out)) in input.chars().zip(output.chars()).enumerate() {
        if inp.is_ascii_uppercase() {
            assert!(out.is_ascii_uppercase(), "index {} should be a letter", i);
            assert_ne!(inp, out, "index {} should be substituted", i);
        } else {
            assert_eq!(inp, out, "index {} should pass through", i);
        }
    }
}

#[test]
fn non_letters_do_not_step() {
    let mut machine = default_machine();
    assert_eq!(machine.process(" 0123456789.,!?-"), " 0123456789.,!?-");
    assert_eq!(machine.positions(), [0, 0, 0]);
}

#[test]
fn empty_message() {
    let mut machine = default_machine();
    assert_eq!(machine.process(""), "");
    assert_eq!(machine.positions(), [0, 0, 0]);
}

// ═══════════════════════════════════════════════════════════════════════
// Plugboard
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn plugboard_changes_output() {
    let plain = default_machine().process("A");
    let plugged = EnigmaMachine::new(&MachineConfig {
        plugboard: vec![('A', 'B')],
        ..MachineConfig::default()
    })
    .unwrap()
    .process("A");
    assert_ne!(plain, plugged);
}

#[test]
fn plugboard_pairs_are_reported() {
    let machine = EnigmaMachine::new(&MachineConfig {
        plugboard: vec![('Z', 'Y'), ('E', 'N')],
        ..MachineConfig::default()
    })
    .unwrap();
    assert_eq!(machine.plugboard_pairs(), &[('Z', 'Y'), ('E', 'N')]);
}

// ═══════════════════════════════════════════════════════════════════════
// Stepping
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn single_keystroke_moves_only_right_rotor() {
    let mut machine = default_machine();
    machine.encrypt_char('A');
    assert_eq!(machine.positions(), [0, 0, 1]);
}

#[test]
fn double_step_in_one_keystroke() {
    // Middle rotor (II) on E, right rotor (III) on V.
    let mut machine = machine_at(&[0, 4, 21]);
    let before = machine.positions();
    machine.encrypt_char('A');
    let after = machine.positions();

    assert_eq!(after[0], before[0] + 1, "left rotor +1");
    assert_eq!(after[1], before[1] + 2, "middle rotor +2");
    assert_eq!(after[2], before[2] + 1, "right rotor +1");
}

#[test]
fn historical_double_step_sequence() {
    // ADU -> ADV -> AEW -> BFX -> BFY
    let mut machine = machine_at(&[0, 3, 20]);
    let mut windows = vec![machine.windows()];
    for _ in 0..4 {
        machine.encrypt_char('X');
        windows.push(machine.windows());
    }
    assert_eq!(
        windows,
        vec![
            ['A', 'D', 'U'],
            ['A', 'D', 'V'],
            ['A', 'E', 'W'],
            ['B', 'F', 'X'],
            ['B', 'F', 'Y'],
        ]
    );
}

#[test]
fn ring_settings_do_not_affect_stepping() {
    let config = MachineConfig::new(&[0, 1, 2], &[0, 4, 21], &[13, 13, 13], &[]);
    let mut machine = EnigmaMachine::new(&config).unwrap();
    machine.encrypt_char('A');
    assert_eq!(machine.positions(), [1, 6, 22]);
    assert_eq!(machine.ring_settings(), [13, 13, 13]);
}

#[test]
fn ring_settings_change_output() {
    let plain = default_machine().process("AAAAAAAAAA");
    let config = MachineConfig::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 1], &[]);
    let ringed = EnigmaMachine::new(&config).unwrap().process("AAAAAAAAAA");
    assert_ne!(plain, ringed);
}

// ═══════════════════════════════════════════════════════════════════════
// Construction validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rejects_wrong_array_length() {
    let config = MachineConfig::new(&[0, 1], &[0, 0, 0], &[0, 0, 0], &[]);
    assert_eq!(
        EnigmaMachine::new(&config).unwrap_err(),
        ConfigurationError::ShapeMismatch {
            field: ConfigField::RotorIds,
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn rejects_out_of_range_position() {
    let config = MachineConfig::new(&[0, 1, 2], &[0, 0, 26], &[0, 0, 0], &[]);
    assert!(matches!(
        EnigmaMachine::new(&config),
        Err(ConfigurationError::OutOfRange {
            field: ConfigField::Positions,
            slot: 2,
            value: 26,
        })
    ));
}

#[test]
fn rejects_out_of_range_ring() {
    let config = MachineConfig::new(&[0, 1, 2], &[0, 0, 0], &[-3, 0, 0], &[]);
    assert!(matches!(
        EnigmaMachine::new(&config),
        Err(ConfigurationError::OutOfRange {
            field: ConfigField::RingSettings,
            slot: 0,
            value: -3,
        })
    ));
}

#[test]
fn rejects_unknown_rotor() {
    let config = MachineConfig::new(&[0, 1, 3], &[0, 0, 0], &[0, 0, 0], &[]);
    assert!(matches!(
        EnigmaMachine::new(&config),
        Err(ConfigurationError::UnknownRotor { slot: 2, id: 3, .. })
    ));
}

#[test]
fn rejects_malformed_plugboard() {
    let config = MachineConfig {
        plugboard: vec![('A', 'b')],
        ..MachineConfig::default()
    };
    assert!(matches!(
        EnigmaMachine::new(&config),
        Err(ConfigurationError::MalformedPlugboard { index: 0, .. })
    ));
}

#[test]
fn rejects_reused_plugboard_letter() {
    let config = MachineConfig {
        plugboard: vec![('A', 'B'), ('A', 'C')],
        ..MachineConfig::default()
    };
    assert_eq!(
        EnigmaMachine::new(&config).unwrap_err(),
        ConfigurationError::InvalidPlugboardPair {
            pair: ('A', 'C'),
            fault: PairFault::LetterReused('A'),
        }
    );
}

#[test]
fn rejects_self_paired_letter() {
    let config = MachineConfig {
        plugboard: vec![('M', 'M')],
        ..MachineConfig::default()
    };
    assert_eq!(
        EnigmaMachine::new(&config).unwrap_err(),
        ConfigurationError::InvalidPlugboardPair {
            pair: ('M', 'M'),
            fault: PairFault::SelfPaired,
        }
    );
}

#[test]
fn accepts_repeated_rotor_ids() {
    let config = MachineConfig::new(&[1, 1, 1], &[0, 0, 0], &[0, 0, 0], &[]);
    let machine = EnigmaMachine::new(&config).unwrap();
    assert_eq!(machine.rotor_names(), ["II", "II", "II"]);
}

#[test]
fn error_messages_are_readable() {
    let config = MachineConfig::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0, 0], &[]);
    let err = EnigmaMachine::new(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ring settings must have exactly 3 elements, got 4"
    );
}

#[test]
fn thousand_letters_in_one_pass() {
    let message = "A".repeat(1000);
    let started = std::time::Instant::now();
    let output = default_machine().process(&message);
    assert_eq!(output.len(), message.len());
    assert!(started.elapsed() < std::time::Duration::from_secs(1));
}
