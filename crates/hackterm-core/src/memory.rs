//! Simulated RAM budget consumed by `run`.

use serde::{Deserialize, Serialize};

use crate::error::MemoryError;

/// Default capacity in MB.
pub const MEM_MAX_SIZE: u32 = 512;

/// Memory budget in MB.
///
/// `used` never exceeds `total`. A failed [`allocate`](Self::allocate)
/// leaves the state untouched. Deserializing rejects a stored state that
/// breaks this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMemoryState")]
pub struct MemoryState {
    total: u32,
    used: u32,
}

impl MemoryState {
    pub fn new(total: u32) -> Self {
        Self { total, used: 0 }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn available(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }

    /// Reserve `amount` MB. Returns false, without change, when it does not fit.
    pub fn allocate(&mut self, amount: u32) -> bool {
        match self.used.checked_add(amount) {
            Some(next) if next <= self.total => {
                self.used = next;
                true
            }
            _ => false,
        }
    }

    /// Release `amount` MB, saturating at zero.
    pub fn free(&mut self, amount: u32) {
        self.used = self.used.saturating_sub(amount);
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }
}

#[derive(Deserialize)]
struct RawMemoryState {
    total: u32,
    used: u32,
}

impl TryFrom<RawMemoryState> for MemoryState {
    type Error = MemoryError;

    fn try_from(raw: RawMemoryState) -> Result<Self, Self::Error> {
        if raw.used > raw.total {
            return Err(MemoryError {
                total: raw.total,
                used: raw.used,
            });
        }
        Ok(Self {
            total: raw.total,
            used: raw.used,
        })
    }
}

impl Default for MemoryState {
    fn default() -> Self {
        Self::new(MEM_MAX_SIZE)
    }
}
