//! Transport policy configuration
//!
//! The LED subsystem is best-effort: a dropped register write costs one
//! stale LED until the next flush, while a scan loop stalled on the bus
//! costs keystrokes. These knobs bound how long a driver is allowed to
//! spend on a single transaction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-driver transport policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransportConfig {
    /// Upper bound on a single bus transaction, in milliseconds
    pub timeout_ms: u32,
    /// Re-attempts after a failed transaction before the write is dropped
    pub retries: u8,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 100,
            retries: 0,
        }
    }
}

impl TransportConfig {
    /// Create a transport policy with the given retry bound
    pub const fn with_retries(retries: u8) -> Self {
        Self {
            timeout_ms: 100,
            retries,
        }
    }
}
