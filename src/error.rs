// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the control loop and the bus slot.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The home sensor never asserted within the configured step budget.
    #[error("home sensor not reached after {steps} steps")]
    SensorTimeout { steps: u32 },

    /// A bus byte arrived before the previous one was consumed. The newer byte was kept.
    #[error("bus overrun, dropped unconsumed byte {dropped}")]
    BusOverrun { dropped: u8 },
}
