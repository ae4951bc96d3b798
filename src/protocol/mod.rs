// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Bus Protocol
//!
//! The module is written to with single bytes at [`SLAVE_ADDRESS`]. Each byte is either a flap
//! index or a homing request, see [`Command`]. Bytes are handed from the bus interrupt to the
//! control loop through a [`CommandSlot`].

pub mod messages;
pub mod slot;

pub use messages::{Command, HOMING_THRESHOLD, SLAVE_ADDRESS};
pub use slot::CommandSlot;
