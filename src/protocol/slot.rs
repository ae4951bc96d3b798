// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single-slot latest-command buffer.
//!
//! The bus interrupt [`publish`](CommandSlot::publish)es every received byte, the control loop
//! [`take`](CommandSlot::take)s it once per iteration. Only the newest byte matters, so an unread
//! byte is overwritten rather than queued. The slot is one atomic word, so it is safe to share
//! between an interrupt handler and thread mode without a critical section.

use portable_atomic::{AtomicU16, AtomicU32, Ordering};

use crate::error::Error;

/// Out-of-band value marking the slot as empty.
const EMPTY: u16 = 0x0100;

pub struct CommandSlot {
    latest: AtomicU16,
    overruns: AtomicU32,
}

impl CommandSlot {
    pub const fn new() -> Self {
        Self {
            latest: AtomicU16::new(EMPTY),
            overruns: AtomicU32::new(0),
        }
    }

    /// Store a received byte, replacing any byte not yet taken.
    ///
    /// Returns [`Error::BusOverrun`] with the replaced byte if one was pending. The new byte is
    /// stored either way.
    pub fn publish(&self, byte: u8) -> Result<(), Error> {
        let prev = self.latest.swap(u16::from(byte), Ordering::AcqRel);
        if prev == EMPTY {
            Ok(())
        } else {
            self.overruns.fetch_add(1, Ordering::Relaxed);
            Err(Error::BusOverrun {
                dropped: prev as u8,
            })
        }
    }

    /// Consume the pending byte, if any.
    pub fn take(&self) -> Option<u8> {
        let value = self.latest.swap(EMPTY, Ordering::AcqRel);
        if value == EMPTY {
            None
        } else {
            Some(value as u8)
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.latest.load(Ordering::Acquire) == EMPTY
    }

    /// Number of overwritten bytes since the last call.
    pub fn take_overruns(&self) -> u32 {
        self.overruns.swap(0, Ordering::Relaxed)
    }
}

impl Default for CommandSlot {
    fn default() -> Self {
        Self::new()
    }
}
