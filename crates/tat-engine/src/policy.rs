//! SLA windows.

use tat_core::ensure;
use tat_core::errors::Result;

/// Working-day turnaround windows.
///
/// A reinitiated case restarts the clock with the shorter window; a case
/// never reinitiated runs from receipt with the longer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlaPolicy {
    reinitiated_days: u32,
    received_days: u32,
}

impl SlaPolicy {
    /// Working days allowed after reinitiation by default.
    pub const DEFAULT_REINITIATED_DAYS: u32 = 8;

    /// Working days allowed after receipt by default.
    pub const DEFAULT_RECEIVED_DAYS: u32 = 15;

    /// Create a policy.  Both windows must be at least one working day.
    pub fn new(reinitiated_days: u32, received_days: u32) -> Result<Self> {
        ensure!(
            reinitiated_days > 0,
            "reinitiated SLA must be at least one working day, got {reinitiated_days}"
        );
        ensure!(
            received_days > 0,
            "received SLA must be at least one working day, got {received_days}"
        );
        Ok(Self {
            reinitiated_days,
            received_days,
        })
    }

    /// Working days allowed after reinitiation.
    pub fn reinitiated_days(&self) -> u32 {
        self.reinitiated_days
    }

    /// Working days allowed after receipt.
    pub fn received_days(&self) -> u32 {
        self.received_days
    }
}

impl Default for SlaPolicy {
    fn default() -> Self {
        Self {
            reinitiated_days: Self::DEFAULT_REINITIATED_DAYS,
            received_days: Self::DEFAULT_RECEIVED_DAYS,
        }
    }
}
