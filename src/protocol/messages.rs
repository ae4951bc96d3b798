// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command bytes understood by a split-flap module.

/// 7-bit two-wire bus address of the module.
pub const SLAVE_ADDRESS: u8 = 0x04;

/// Highest byte that is a flap position. Anything above requests homing.
pub const HOMING_THRESHOLD: u8 = 50;

/// Decoded bus byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the drum forward to absolute flap index `0..=HOMING_THRESHOLD`.
    MoveTo(u8),
    /// Run the homing routine.
    Home,
}

impl Command {
    /// Decode one received byte. Every byte is valid.
    pub const fn from_byte(byte: u8) -> Self {
        if byte > HOMING_THRESHOLD {
            Command::Home
        } else {
            Command::MoveTo(byte)
        }
    }

    /// Canonical wire encoding.
    pub const fn to_byte(self) -> u8 {
        match self {
            Command::MoveTo(pos) => pos,
            Command::Home => 0xFF,
        }
    }
}

impl From<u8> for Command {
    fn from(byte: u8) -> Self {
        Command::from_byte(byte)
    }
}
